use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::AllianceError;

/// Field side being targeted. Selects which face of the symmetric boiler is
/// used and the sign of the depth term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alliance {
    Blue,
    Red,
}

impl Alliance {
    pub const BLUE_TAG: u8 = 0;
    pub const RED_TAG: u8 = 1;

    pub fn tag(self) -> u8 {
        match self {
            Alliance::Blue => Self::BLUE_TAG,
            Alliance::Red => Self::RED_TAG,
        }
    }

    /// `+1` for blue, `-1` for red: the two alliances see mirror-image depth.
    #[inline]
    pub fn depth_sign(self) -> f64 {
        match self {
            Alliance::Blue => 1.0,
            Alliance::Red => -1.0,
        }
    }
}

impl TryFrom<u8> for Alliance {
    type Error = AllianceError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            Self::BLUE_TAG => Ok(Alliance::Blue),
            Self::RED_TAG => Ok(Alliance::Red),
            other => Err(AllianceError::UnknownTag(other)),
        }
    }
}

impl FromStr for Alliance {
    type Err = AllianceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "blue" => Ok(Alliance::Blue),
            "red" => Ok(Alliance::Red),
            _ => Err(AllianceError::UnknownName(s.to_string())),
        }
    }
}

impl fmt::Display for Alliance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Alliance::Blue => "blue",
            Alliance::Red => "red",
        })
    }
}
