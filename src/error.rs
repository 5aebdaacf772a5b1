//! Unified error types for the soundbar firmware.
//!
//! Inside the control loop the service handles the per-subsystem enums
//! directly through the fault-latching path; the unified `Error` is the
//! boot boundary type that init and config failures funnel into before the
//! loop starts.  All variants are `Copy` so they can be passed around
//! without allocation.
//!
//! None of the subsystem errors abort the loop: clock and sensor faults
//! degrade to last-known values, output faults forfeit the current cycle
//! only.

use core::fmt;

use crate::drivers::hw_init::HwInitError;

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The RTC could not produce a valid time.
    Clock(ClockError),
    /// An analog input could not be read.
    Sensor(SensorError),
    /// An output device rejected a write.
    Output(OutputError),
    /// Peripheral initialisation failed.
    Init(HwInitError),
    /// Configuration failed validation.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Clock(e) => write!(f, "clock: {e}"),
            Self::Sensor(e) => write!(f, "sensor: {e}"),
            Self::Output(e) => write!(f, "output: {e}"),
            Self::Init(e) => write!(f, "init: {e}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

impl From<HwInitError> for Error {
    fn from(e: HwInitError) -> Self {
        Self::Init(e)
    }
}

// ---------------------------------------------------------------------------
// Clock errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockError {
    /// The RTC did not acknowledge on the I2C bus (hardware absent).
    NotResponding,
    /// Register read succeeded but decoded to an out-of-range time.
    InvalidTime,
}

impl fmt::Display for ClockError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotResponding => write!(f, "RTC not responding"),
            Self::InvalidTime => write!(f, "invalid time registers"),
        }
    }
}

impl From<ClockError> for Error {
    fn from(e: ClockError) -> Self {
        Self::Clock(e)
    }
}

// ---------------------------------------------------------------------------
// Sensor errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// ADC read returned an error or timed out.
    AdcReadFailed,
    /// Reading is outside the configured ADC range.
    OutOfRange,
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AdcReadFailed => write!(f, "ADC read failed"),
            Self::OutOfRange => write!(f, "reading out of range"),
        }
    }
}

impl From<SensorError> for Error {
    fn from(e: SensorError) -> Self {
        Self::Sensor(e)
    }
}

// ---------------------------------------------------------------------------
// Output errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputError {
    /// LEDC duty-cycle write failed.
    PwmWriteFailed,
    /// I2C transaction to the LCD failed.
    BusWriteFailed,
}

impl fmt::Display for OutputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PwmWriteFailed => write!(f, "PWM write failed"),
            Self::BusWriteFailed => write!(f, "I2C bus write failed"),
        }
    }
}

impl From<OutputError> for Error {
    fn from(e: OutputError) -> Self {
        Self::Output(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subsystem_errors_convert_into_the_boundary_type() {
        assert_eq!(
            Error::from(ClockError::NotResponding),
            Error::Clock(ClockError::NotResponding)
        );
        assert_eq!(
            Error::from(SensorError::AdcReadFailed),
            Error::Sensor(SensorError::AdcReadFailed)
        );
        assert_eq!(
            Error::from(OutputError::BusWriteFailed),
            Error::Output(OutputError::BusWriteFailed)
        );
        assert_eq!(
            Error::from(HwInitError::LedcInitFailed),
            Error::Init(HwInitError::LedcInitFailed)
        );
    }

    #[test]
    fn display_prefixes_the_subsystem() {
        let e = Error::from(HwInitError::AdcInitFailed(-1));
        assert!(format!("{e}").starts_with("init: "));
        let e = Error::Config("bad window");
        assert_eq!(format!("{e}"), "config: bad window");
    }
}
