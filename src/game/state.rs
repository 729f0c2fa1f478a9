use std::fmt::{Display, Formatter};

use super::Mark;

/// Classification of a game. Exactly one variant holds at any time;
/// [`Outcome::Winner`] and [`Outcome::Draw`] are terminal.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Outcome {
    #[default]
    Ongoing,
    Winner(Mark),
    Draw,
}

impl Outcome {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }

    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Winner(mark) => Some(*mark),
            _ => None,
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Ongoing => f.write_str("ongoing"),
            Outcome::Winner(mark) => write!(f, "winner {}", mark),
            Outcome::Draw => f.write_str("draw"),
        }
    }
}
