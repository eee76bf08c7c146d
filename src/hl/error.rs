use core::fmt;
use core::fmt::{Display, Formatter};

use crate::{configs::BiasRange, device::Beamformer, vector::ValidationError};

/// An error that can occur when configuring the beamformer
pub enum Error<D>
where
    D: Beamformer,
{
    /// A phase or gain vector was rejected
    ///
    /// Nothing was written to the device.
    Validation(ValidationError),

    /// The PA bias was outside the configured range
    ///
    /// Nothing was written to the device.
    InvalidArgument {
        /// The rejected bias, in volts
        bias: f32,
        /// The range it had to be in
        range: BiasRange,
    },

    /// The device reported an error while being written, latched or read
    ///
    /// If this happened during a write or latch, the chip state is unknown
    /// and the full configuration has to be re-issued.
    Device(D::Error),
}

impl<D> From<ValidationError> for Error<D>
where
    D: Beamformer,
{
    fn from(error: ValidationError) -> Self {
        Error::Validation(error)
    }
}

impl<D> Display for Error<D>
where
    D: Beamformer,
    D::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Error::Validation(error) => write!(f, "{}", error),
            Error::InvalidArgument { bias, range } => write!(
                f,
                "PA bias {} V is outside {}..={} V",
                bias, range.min, range.max
            ),
            Error::Device(error) => write!(f, "device access failed: {:?}", error),
        }
    }
}

#[cfg(feature = "std")]
impl<D> std::error::Error for Error<D>
where
    D: Beamformer,
    D::Error: fmt::Debug,
{
}

// We can't derive this implementation, as `Debug` is only implemented
// conditionally for `D::Error`.
impl<D> fmt::Debug for Error<D>
where
    D: Beamformer,
    D::Error: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::Validation(error) => write!(f, "Validation({:?})", error),
            Error::InvalidArgument { bias, range } => write!(
                f,
                "InvalidArgument {{ bias: {:?}, range: {:?} }}",
                bias, range
            ),
            Error::Device(error) => write!(f, "Device({:?})", error),
        }
    }
}

#[cfg(feature = "defmt")]
impl<D> defmt::Format for Error<D>
where
    D: Beamformer,
    D::Error: defmt::Format,
{
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::Validation(error) => defmt::write!(f, "Validation({:?})", error),
            Error::InvalidArgument { bias, range } => {
                defmt::write!(f, "InvalidArgument {{ bias: {:?}, range: {:?} }}", bias, range)
            }
            Error::Device(error) => defmt::write!(f, "Device({:?})", error),
        }
    }
}
