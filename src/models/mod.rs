mod journal;
mod mode;
mod mood;
pub mod user;

pub use journal::*;
pub use mode::*;
pub use mood::*;
pub use user::*;
