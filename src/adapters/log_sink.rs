//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing structured application events to the
//! logger (UART / USB-CDC in production).  A future telemetry channel would
//! implement the same trait.

use log::{info, warn};

use crate::app::events::AppEvent;
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Telemetry(t) => {
                info!(
                    "TELEM | {} | mode={:?} | threshold={} | level={}",
                    t.time, t.mode, t.threshold, t.level,
                );
            }
            AppEvent::ModeChanged { from, to } => {
                info!("MODE  | {:?} -> {:?}", from, to);
            }
            AppEvent::ClockFault(e) => {
                warn!("FAULT | clock: {}", e);
            }
            AppEvent::SensorFault { channel, error } => {
                warn!("FAULT | {:?}: {}", channel, error);
            }
            AppEvent::OutputFault(e) => {
                warn!("FAULT | output: {}", e);
            }
            AppEvent::Started => {
                info!("START | outputs in safe state");
            }
        }
    }
}
