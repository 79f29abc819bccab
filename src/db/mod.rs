pub mod journal;
pub mod mood;
pub mod user;
