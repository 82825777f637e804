use serde::{Deserialize, Serialize};

/// Direction of keyboard navigation through a tab group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabDirection {
    Forward,
    Backward,
}

impl TabDirection {
    /// Tab moves forward, Shift+Tab moves backward.
    pub fn from_shift(shift: bool) -> Self {
        if shift {
            TabDirection::Backward
        } else {
            TabDirection::Forward
        }
    }

    /// Next index in a group of `len` tabs, wrapping around in both directions.
    ///
    /// Returns `None` for an empty group.
    pub fn step(self, from: usize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        let from = from % len;
        Some(match self {
            TabDirection::Forward => (from + 1) % len,
            TabDirection::Backward => (from + len - 1) % len,
        })
    }
}
