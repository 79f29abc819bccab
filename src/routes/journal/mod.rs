mod add;
mod analytics;
mod get;

pub use add::*;
pub use analytics::*;
pub use get::*;
