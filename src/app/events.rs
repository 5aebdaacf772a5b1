//! Outbound application events.
//!
//! The [`MeterService`](super::service::MeterService) emits these through
//! the [`EventSink`](super::ports::EventSink) port.  Adapters on the other
//! side decide what to do with them — today that is the serial log.

use crate::control::time_window::TimeOfDay;
use crate::error::{ClockError, OutputError, SensorError};

use super::ports::AnalogChannel;

/// The two externally observable system modes.  Derived fresh from the
/// active window every cycle — never stored, so it cannot go stale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModeId {
    /// Inside the active window: bar renders sound, buzzer silent.
    Active,
    /// Outside the active window: bar dark, buzzer sounding.
    Cutoff,
}

/// Structured events emitted by the application core.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// The service has started and driven outputs to their safe state.
    Started,

    /// The window decision flipped between cycles.
    ModeChanged { from: ModeId, to: ModeId },

    /// The RTC stopped producing valid readings (emitted once per outage).
    ClockFault(ClockError),

    /// An analog channel stopped responding (emitted once per outage).
    SensorFault {
        channel: AnalogChannel,
        error: SensorError,
    },

    /// An output or display write was rejected (emitted once per outage).
    OutputFault(OutputError),

    /// Periodic cycle snapshot, paced with the display refresh.
    Telemetry(TelemetryData),
}

/// A point-in-time snapshot suitable for logging or transmission.
#[derive(Debug, Clone, Copy)]
pub struct TelemetryData {
    pub time: TimeOfDay,
    pub mode: ModeId,
    pub threshold: u16,
    pub level: u8,
}
