pub(crate) mod assistant;
pub(crate) mod dashboard;
pub mod health_checks;
pub(crate) mod journal;
pub(crate) mod mood;
pub(crate) mod profile;
pub(crate) mod quote;

pub use health_checks::*;
