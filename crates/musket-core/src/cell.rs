//! Board cell codes.

use std::fmt;

/// What occupies a board position.
///
/// The discriminants are the integer codes used by board files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Cell {
    /// A soldier, or the "empty location" marker. Never entered.
    Blocked = 0,
    /// A musketeer: the start position of one agent.
    Agent = 1,
    /// A free square.
    Open = 2,
    /// The soldier holding the diamond.
    Goal = 3,
}

impl Cell {
    /// The integer code of this cell.
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Decode an integer cell code.
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::Blocked),
            1 => Some(Self::Agent),
            2 => Some(Self::Open),
            3 => Some(Self::Goal),
            _ => None,
        }
    }

    /// Whether a search may step onto this cell. Only open squares and the
    /// goal qualify; other musketeers' starts block just like soldiers.
    pub const fn is_traversable(self) -> bool {
        matches!(self, Self::Open | Self::Goal)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Blocked => "blocked",
            Self::Agent => "agent",
            Self::Open => "open",
            Self::Goal => "goal",
        };
        f.write_str(name)
    }
}
