use serde_repr::{Deserialize_repr, Serialize_repr};
use std::convert::TryFrom;

/// Which side of a map record won. The raw data encodes this as
/// `0` (draw), `1` (first side) or `2` (second side).
#[derive(Deserialize_repr, Serialize_repr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum WinnerMark {
    Draw = 0,
    SideOne = 1,
    SideTwo = 2
}

impl WinnerMark {
    /// The mark as seen from the opposite orientation of the pairing.
    pub fn flipped(self) -> WinnerMark {
        match self {
            WinnerMark::Draw => WinnerMark::Draw,
            WinnerMark::SideOne => WinnerMark::SideTwo,
            WinnerMark::SideTwo => WinnerMark::SideOne
        }
    }
}

impl TryFrom<i32> for WinnerMark {
    type Error = ();

    fn try_from(v: i32) -> Result<Self, Self::Error> {
        match v {
            0 => Ok(WinnerMark::Draw),
            1 => Ok(WinnerMark::SideOne),
            2 => Ok(WinnerMark::SideTwo),
            _ => Err(())
        }
    }
}
