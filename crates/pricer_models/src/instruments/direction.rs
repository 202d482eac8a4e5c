//! Call/put orientation of a payoff.

use std::fmt;

use super::error::InstrumentError;

/// Payoff orientation: `Call` (+1) or `Put` (-1).
///
/// # Examples
/// ```
/// use pricer_models::instruments::Direction;
///
/// assert_eq!(Direction::from_flag(1).unwrap(), Direction::Call);
/// assert_eq!(Direction::from_flag(-1).unwrap().sign(), -1.0);
/// assert!(Direction::from_flag(3).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Call orientation, flag +1
    Call,
    /// Put orientation, flag -1
    Put,
}

impl Direction {
    /// Builds a direction from an integer call/put flag.
    pub fn from_flag(flag: i32) -> Result<Self, InstrumentError> {
        match flag {
            1 => Ok(Direction::Call),
            -1 => Ok(Direction::Put),
            _ => Err(InstrumentError::InvalidDirection { flag }),
        }
    }

    /// Integer flag (+1 / -1).
    #[inline]
    pub fn flag(self) -> i32 {
        match self {
            Direction::Call => 1,
            Direction::Put => -1,
        }
    }

    /// Flag as a float multiplier.
    #[inline]
    pub fn sign(self) -> f64 {
        f64::from(self.flag())
    }

    /// Suffix used in catalog type names (`Call` / `Put`).
    pub fn suffix(self) -> &'static str {
        match self {
            Direction::Call => "Call",
            Direction::Put => "Put",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_flag() {
        assert_eq!(Direction::from_flag(1), Ok(Direction::Call));
        assert_eq!(Direction::from_flag(-1), Ok(Direction::Put));
        for flag in [0, 2, 3, -2, i32::MAX] {
            assert_eq!(
                Direction::from_flag(flag),
                Err(InstrumentError::InvalidDirection { flag })
            );
        }
    }

    #[test]
    fn test_flag_roundtrip() {
        for d in [Direction::Call, Direction::Put] {
            assert_eq!(Direction::from_flag(d.flag()), Ok(d));
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Direction::Call), "Call");
        assert_eq!(format!("{}", Direction::Put), "Put");
    }
}
