use serde::{Deserialize, Serialize};
use crate::types::MemberId;

/// An unordered family link between two members.
///
/// Stored normalized with the smaller id first, so `Edge::new(a, b)` and
/// `Edge::new(b, a)` compare equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    low: MemberId,
    high: MemberId,
}

impl Edge {
    pub fn new(a: MemberId, b: MemberId) -> Self {
        if a <= b {
            Self { low: a, high: b }
        } else {
            Self { low: b, high: a }
        }
    }

    /// Both endpoints, smaller id first.
    pub fn endpoints(&self) -> (MemberId, MemberId) {
        (self.low, self.high)
    }

    pub fn is_self_loop(&self) -> bool {
        self.low == self.high
    }

    /// Rewrites both endpoints through `f`, re-normalizing the pair.
    pub fn map(self, mut f: impl FnMut(MemberId) -> MemberId) -> Self {
        Self::new(f(self.low), f(self.high))
    }
}
