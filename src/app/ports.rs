//! Port traits — the hexagonal boundary between domain logic and hardware.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ MeterService (domain)
//! ```
//!
//! Driven adapters (RTC, ADC, LED bar, buzzer, LCD, event sinks) implement
//! these traits.  The [`MeterService`](super::service::MeterService)
//! consumes them via generics, so the decision logic never touches hardware
//! directly and every §4 component is testable with fakes.
//!
//! All fallible port methods return typed errors; the service translates
//! failures into the degrade-and-continue fault policy rather than
//! propagating them out of the loop.

use crate::control::render::RenderCommand;
use crate::control::status::DisplayText;
use crate::control::time_window::TimeOfDay;
use crate::error::{ClockError, OutputError, SensorError};

// ───────────────────────────────────────────────────────────────
// Clock port (driven adapter: RTC → domain)
// ───────────────────────────────────────────────────────────────

/// Wall-clock source.  One fresh reading per cycle.
pub trait ClockPort {
    /// Current time of day.  `Err` when the RTC is absent or returns
    /// garbage; the service then holds the last-known time.
    fn now(&mut self) -> Result<TimeOfDay, ClockError>;
}

// ───────────────────────────────────────────────────────────────
// Analog input port (driven adapter: ADC → domain)
// ───────────────────────────────────────────────────────────────

/// The two fixed analog channels the meter samples each cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalogChannel {
    /// Sensitivity potentiometer.
    Sensitivity,
    /// Sound sensor envelope output.
    Sound,
}

/// Raw analog sampling.
pub trait AnalogPort {
    /// Read one raw sample from `channel` (0..=adc_max).
    fn read(&mut self, channel: AnalogChannel) -> Result<u16, SensorError>;
}

// ───────────────────────────────────────────────────────────────
// Output port (driven adapter: domain → LED bar + buzzer)
// ───────────────────────────────────────────────────────────────

/// Write-side port for the bar LEDs and the alert buzzer.
pub trait OutputPort {
    /// Apply a full render command in one call: every LED's on/off state
    /// and the buzzer state together.  Atomicity within the call is the
    /// adapter's responsibility.
    fn apply(&mut self, cmd: &RenderCommand) -> Result<(), OutputError>;

    /// Kill all outputs (LEDs dark, buzzer silent) — safe shutdown.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Display port (driven adapter: domain → LCD)
// ───────────────────────────────────────────────────────────────

/// Two-line character display.
pub trait DisplayPort {
    /// Write both lines together.  Lines are pre-padded to full width, so
    /// no clear is needed between refreshes.
    fn write_lines(&mut self, text: &DisplayText) -> Result<(), OutputError>;
}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging / telemetry)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log today; a
/// future telemetry channel would implement the same trait).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}
