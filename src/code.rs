//! Gain and phase register words

use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 7-bit gain or phase setting for one channel
///
/// The ADAR1000 stores per-channel gain and phase as 7-bit words. A `Code`
/// can only be constructed through [`Code::new`], so every value that
/// reaches a [`Channel`] is known to fit.
///
/// The value is guaranteed to be in the following range:
/// 0 <= `value` <= 127
///
/// [`Channel`]: crate::device::Channel
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Code(u8);

impl Code {
    /// The largest value a code can hold
    pub const MAX: u8 = 0x7f;

    /// The zero code
    pub const ZERO: Code = Code(0);

    /// Creates a new instance of `Code`
    ///
    /// Returns `None` if `value` doesn't fit in 7 bits.
    pub const fn new(value: u8) -> Option<Self> {
        if value > Self::MAX {
            return None;
        }

        Some(Code(value))
    }

    /// Returns the raw 7-bit value
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Code {
    type Error = u8;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Code::new(value).ok_or(value)
    }
}

impl From<Code> for u8 {
    fn from(code: Code) -> Self {
        code.0
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
