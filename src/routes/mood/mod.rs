mod analytics;
mod upsert;

pub use analytics::*;
pub use upsert::*;
