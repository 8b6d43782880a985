use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How many wrong guesses a game tolerates before it is lost.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Hard,
}

impl Difficulty {
    /// Wrong-guess budget. Independent of the word length.
    pub const fn budget(self) -> usize {
        match self {
            Difficulty::Easy => 10,
            Difficulty::Hard => 6,
        }
    }
}

/// Which figure is drawn as wrong guesses accumulate.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
    strum_macros::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum FigureStyle {
    #[default]
    Person,
    Spider,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn budget_table() {
        assert_eq!(Difficulty::Easy.budget(), 10);
        assert_eq!(Difficulty::Hard.budget(), 6);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        assert_eq!(serde_json::to_string(&Difficulty::Hard).unwrap(), "\"hard\"");
        assert_eq!(
            serde_json::from_str::<FigureStyle>("\"spider\"").unwrap(),
            FigureStyle::Spider
        );
        assert!(serde_json::from_str::<Difficulty>("\"medium\"").is_err());
    }

    #[test]
    fn display_names() {
        assert_eq!(Difficulty::Easy.to_string(), "Easy");
        assert_eq!(FigureStyle::Spider.to_string(), "Spider");
    }
}
