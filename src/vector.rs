//! Validation of per-channel phase and gain vectors

use core::fmt;

use num_traits::ToPrimitive;

use crate::{code::Code, device::CHANNEL_COUNT};

/// Which quantity a vector carries
///
/// Only used to name the vector in error messages.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum VectorKind {
    /// Phase words
    Phase,
    /// Gain words
    Gain,
}

impl VectorKind {
    fn name(&self) -> &'static str {
        match self {
            VectorKind::Phase => "Phase",
            VectorKind::Gain => "Gain",
        }
    }
}

/// What was wrong with a vector
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Violation {
    /// The vector did not have one entry per channel
    WrongLength {
        /// Number of entries that were provided
        len: usize,
    },
    /// An entry was not an integer
    NonInteger {
        /// Position of the offending entry
        index: usize,
    },
    /// An entry was outside 0..=127
    OutOfRange {
        /// Position of the offending entry
        index: usize,
    },
}

/// A phase or gain vector was rejected
///
/// Raised before anything is written to the device.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ValidationError {
    /// The vector that was rejected
    pub kind: VectorKind,
    /// The first violation found
    pub violation: Violation,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.kind.name();
        match self.violation {
            Violation::WrongLength { .. } => write!(
                f,
                "{} must be provided as a list of {} integers",
                name, CHANNEL_COUNT
            ),
            Violation::NonInteger { .. } => write!(f, "{} entries must be integers", name),
            Violation::OutOfRange { .. } => {
                write!(f, "{} values must be between 0 and {}", name, Code::MAX)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ValidationError {}

/// A value that can be passed as a phase or gain vector entry
///
/// Implemented for every primitive integer and float type. Only integer
/// types are accepted; float entries are rejected as
/// [`Violation::NonInteger`], even when they hold a whole number.
pub trait Entry: ToPrimitive {
    /// Whether the type holds integers
    const IS_INTEGER: bool;
}

macro_rules! impl_entry {
    ($is_integer:expr; $($ty:ty),*) => {
        $(
            impl Entry for $ty {
                const IS_INTEGER: bool = $is_integer;
            }
        )*
    };
}

impl_entry!(true; i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_entry!(false; f32, f64);

/// Validates a phase or gain vector
///
/// The vector must hold exactly one entry per channel, and every entry must
/// be an integer between 0 and 127. Entries are checked in channel order and
/// the first violation is returned. Float entries are never integers.
///
/// On success, returns the entries as codes in channel order.
pub fn validate_phase_gain_vector<V>(
    vec: &[V],
    kind: VectorKind,
) -> Result<[Code; CHANNEL_COUNT], ValidationError>
where
    V: Entry,
{
    let error = |violation| ValidationError { kind, violation };

    if vec.len() != CHANNEL_COUNT {
        return Err(error(Violation::WrongLength { len: vec.len() }));
    }

    let mut codes = [Code::ZERO; CHANNEL_COUNT];
    for (index, (value, code)) in vec.iter().zip(codes.iter_mut()).enumerate() {
        if !V::IS_INTEGER {
            return Err(error(Violation::NonInteger { index }));
        }

        *code = value
            .to_i64()
            .and_then(|v| u8::try_from(v).ok())
            .and_then(Code::new)
            .ok_or(error(Violation::OutOfRange { index }))?;
    }

    Ok(codes)
}
