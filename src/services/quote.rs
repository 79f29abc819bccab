use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Quote {
    pub text: &'static str,
    pub author: &'static str,
}

const QUOTES: [Quote; 10] = [
    Quote {
        text: "The only way to do great work is to love what you do.",
        author: "Steve Jobs",
    },
    Quote {
        text: "The journey of a thousand miles begins with one step.",
        author: "Lao Tzu",
    },
    Quote {
        text: "What you get by achieving your goals is not as important as what you become by achieving your goals.",
        author: "Zig Ziglar",
    },
    Quote {
        text: "The mind is everything. What you think you become.",
        author: "Buddha",
    },
    Quote {
        text: "Success is not final, failure is not fatal: it is the courage to continue that counts.",
        author: "Winston Churchill",
    },
    Quote {
        text: "The best way to predict the future is to create it.",
        author: "Peter Drucker",
    },
    Quote {
        text: "Life is what happens when you're busy making other plans.",
        author: "John Lennon",
    },
    Quote {
        text: "The only limit to our realization of tomorrow is our doubts of today.",
        author: "Franklin D. Roosevelt",
    },
    Quote {
        text: "Believe you can and you're halfway there.",
        author: "Theodore Roosevelt",
    },
    Quote {
        text: "It does not matter how slowly you go as long as you do not stop.",
        author: "Confucius",
    },
];

/// Rotates daily: indexed by the 1-based day of the year.
pub fn quote_of_the_day(date: NaiveDate) -> Quote {
    QUOTES[date.ordinal() as usize % QUOTES.len()]
}
