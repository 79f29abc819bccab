use serde::{Deserialize, Serialize};
use std::fmt;

/// Length and cardinality of generated text.
#[derive(
    sqlx::Type, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default,
)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase", type_name = "varchar")]
pub enum Mode {
    #[default]
    Quick,
    Detailed,
}

impl Mode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quick => "quick",
            Self::Detailed => "detailed",
        }
    }

    pub fn is_detailed(&self) -> bool {
        matches!(self, Self::Detailed)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
