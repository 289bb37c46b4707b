//! Cohort bucketing
//!
//! Maps a family-group count to one of five fixed display labels. The
//! buckets partition the non-negative integers in order.

use serde::{Serialize, Serializer};
use std::fmt;

/// Display bucket for a family-group count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Cohort {
    Zero,
    OneToTwo,
    ThreeToFour,
    FiveToSix,
    SevenPlus,
}

impl Cohort {
    /// Every cohort, in display order.
    pub const ALL: [Cohort; 5] = [
        Cohort::Zero,
        Cohort::OneToTwo,
        Cohort::ThreeToFour,
        Cohort::FiveToSix,
        Cohort::SevenPlus,
    ];

    pub fn from_count(count: usize) -> Self {
        match count {
            0 => Self::Zero,
            1..=2 => Self::OneToTwo,
            3..=4 => Self::ThreeToFour,
            5..=6 => Self::FiveToSix,
            _ => Self::SevenPlus,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Zero => "0 families",
            Self::OneToTwo => "1-2 families",
            Self::ThreeToFour => "3-4 families",
            Self::FiveToSix => "5-6 families",
            Self::SevenPlus => "7+ families",
        }
    }
}

impl fmt::Display for Cohort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Cohort {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

/// Label for a group count.
pub fn cohort_label(count: usize) -> &'static str {
    Cohort::from_count(count).label()
}
