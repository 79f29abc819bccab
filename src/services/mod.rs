pub mod ai;
pub mod analytics;
pub mod quote;

pub use ai::{AiOutcome, AiService};
pub use analytics::{mood_counts, DateRange, JournalStats, MoodCount};
pub use quote::{quote_of_the_day, Quote};
