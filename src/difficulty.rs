use crate::util::EnumExt;
use enum_map::Enum;
use serde::Deserialize;
use std::fmt;
use std::time::Duration;

/// Game difficulty, which determines how often the snake moves
#[derive(Clone, Copy, Debug, Default, Deserialize, Enum, Eq, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(crate) enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// Time between automatic snake movements
    pub(crate) fn tick_period(self) -> Duration {
        match self {
            Difficulty::Easy => Duration::from_millis(200),
            Difficulty::Medium => Duration::from_millis(100),
            Difficulty::Hard => Duration::from_millis(50),
        }
    }

    pub(crate) fn cycled(self) -> Difficulty {
        self.next().unwrap_or_else(Difficulty::min)
    }

    fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}
