pub mod assistant;
pub mod journal;
pub mod mood;
pub mod user;

pub use assistant::*;
pub use journal::*;
pub use mood::*;
pub use user::UserForm;
