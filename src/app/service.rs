//! Meter service — the hexagonal core.
//!
//! [`MeterService`] runs one sense→decide→render cycle per tick.  All I/O
//! flows through port traits injected at call sites, making the entire
//! service testable with mock adapters.
//!
//! ```text
//!   ClockPort ──▶ ┌────────────────────────────┐ ──▶ OutputPort
//!  AnalogPort ──▶ │        MeterService        │ ──▶ DisplayPort
//!                 │ window · mappers · render  │ ──▶ EventSink
//!                 └────────────────────────────┘
//! ```
//!
//! The only state carried across cycles is the display rate-limit stamp,
//! the last-known inputs used for fault degradation, and the fault latches
//! that keep each outage report to a single emission.  The Active/Cutoff
//! mode is recomputed fresh from the window every cycle, so there is no
//! stored mode that could desync from the clock.

use log::{info, warn};

use crate::config::MeterConfig;
use crate::control::level::bar_level;
use crate::control::render::render;
use crate::control::sensitivity::SensitivityMap;
use crate::control::status::present;
use crate::control::time_window::{ActiveWindow, TimeOfDay};
use crate::error::OutputError;

use super::events::{AppEvent, ModeId, TelemetryData};
use super::ports::{AnalogChannel, AnalogPort, ClockPort, DisplayPort, EventSink, OutputPort};

// ───────────────────────────────────────────────────────────────
// MeterService
// ───────────────────────────────────────────────────────────────

/// Orchestrates the fixed-cadence control cycle.
pub struct MeterService {
    config: MeterConfig,
    window: ActiveWindow,
    sensitivity: SensitivityMap,

    /// Total control ticks executed since `start()`.
    tick_count: u64,
    /// Tick at which the display was last successfully refreshed.
    last_present_tick: Option<u64>,

    /// Last valid RTC reading, held across clock outages.
    last_time: Option<TimeOfDay>,
    /// Last valid raw readings, held across sensor outages.
    last_pot_raw: u16,
    last_sound_raw: u16,

    /// Mode observed on the previous cycle (for transition events).
    mode: Option<ModeId>,

    // Fault latches: one report per outage, cleared on recovery.  The
    // output and display paths latch independently so a healthy display
    // cannot re-arm a persistent LED fault (or vice versa).
    clock_fault_latched: bool,
    pot_fault_latched: bool,
    sound_fault_latched: bool,
    output_fault_latched: bool,
    display_fault_latched: bool,
}

impl MeterService {
    /// Construct the service from configuration.
    ///
    /// Expects a validated config (see `MeterConfig::validate()`).  Does
    /// **not** touch hardware — call [`start`](Self::start) next.
    pub fn new(config: MeterConfig) -> Self {
        let window = config.active_window();
        let sensitivity =
            SensitivityMap::new(config.adc_max, config.threshold_min, config.threshold_max);
        Self {
            config,
            window,
            sensitivity,
            tick_count: 0,
            last_present_tick: None,
            last_time: None,
            last_pot_raw: 0,
            last_sound_raw: 0,
            mode: None,
            clock_fault_latched: false,
            pot_fault_latched: false,
            sound_fault_latched: false,
            output_fault_latched: false,
            display_fault_latched: false,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// Drive all outputs to their safe state before the first cycle.
    pub fn start(&mut self, hw: &mut impl OutputPort, sink: &mut impl EventSink) {
        hw.all_off();
        sink.emit(&AppEvent::Started);
        info!("MeterService started (window {} - {})", self.window.start, self.window.end);
    }

    /// Safe-state hook for shutdown paths: LEDs dark, buzzer silent.
    ///
    /// An abrupt stop with the bar half-lit or the alert sounding is the
    /// failure mode this guards against.
    pub fn shutdown(&mut self, hw: &mut impl OutputPort) {
        hw.all_off();
        info!("MeterService stopped, outputs driven to safe state");
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// Run one full control cycle: clock → inputs → decision → display →
    /// render → apply.  Pacing between ticks is the caller's concern.
    ///
    /// The `hw` parameter satisfies all four hardware ports — this avoids
    /// a double mutable borrow while keeping the port boundary explicit.
    pub fn tick(
        &mut self,
        hw: &mut (impl ClockPort + AnalogPort + OutputPort + DisplayPort),
        sink: &mut impl EventSink,
    ) {
        self.tick_count += 1;

        // 1. Wall-clock time, degrading to last-known on RTC failure.
        let time = self.read_clock(hw, sink);

        // 2. Raw analog inputs, same degrade policy per channel.
        let pot_raw = self.read_input(hw, AnalogChannel::Sensitivity, sink);
        let sound_raw = self.read_input(hw, AnalogChannel::Sound, sink);

        // 3. Window decision — derived, never stored across cycles.
        let active = self.window.contains(time);
        let mode = if active { ModeId::Active } else { ModeId::Cutoff };
        if let Some(prev) = self.mode {
            if prev != mode {
                sink.emit(&AppEvent::ModeChanged { from: prev, to: mode });
            }
        }
        self.mode = Some(mode);

        // 4. Rate-limited display refresh.
        let presented = self.display_due() && self.refresh_display(hw, active, time, sink);

        // 5. Threshold and bar level.  The level is irrelevant during
        //    cutoff; the renderer ignores it when inactive.
        let threshold = self.sensitivity.threshold(pot_raw);
        let level = if active {
            bar_level(sound_raw, threshold, self.config.output_count)
        } else {
            0
        };

        // 6. Render and apply atomically.
        let cmd = render(active, level, self.config.output_count);
        match hw.apply(&cmd) {
            Ok(()) => self.output_fault_latched = false,
            // Fatal for this cycle only; outputs keep their previous
            // state until the next successful apply.
            Err(e) => self.report_output_fault(e, sink),
        }

        if presented {
            sink.emit(&AppEvent::Telemetry(TelemetryData {
                time,
                mode,
                threshold,
                level,
            }));
        }
    }

    // ── Queries ───────────────────────────────────────────────

    /// Mode observed on the most recent cycle (`None` before first tick).
    pub fn mode(&self) -> Option<ModeId> {
        self.mode
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    // ── Internal ──────────────────────────────────────────────

    fn read_clock(&mut self, hw: &mut impl ClockPort, sink: &mut impl EventSink) -> TimeOfDay {
        match hw.now() {
            Ok(t) => {
                if self.clock_fault_latched {
                    info!("clock recovered at {t}");
                    self.clock_fault_latched = false;
                }
                self.last_time = Some(t);
                t
            }
            Err(e) => {
                if !self.clock_fault_latched {
                    warn!("clock read failed ({e}), holding last-known time");
                    sink.emit(&AppEvent::ClockFault(e));
                    self.clock_fault_latched = true;
                }
                // Before the first valid reading the only safe assumption
                // is "outside the window": midnight.
                self.last_time.unwrap_or(TimeOfDay::MIDNIGHT)
            }
        }
    }

    fn read_input(
        &mut self,
        hw: &mut impl AnalogPort,
        channel: AnalogChannel,
        sink: &mut impl EventSink,
    ) -> u16 {
        let (last, latched) = match channel {
            AnalogChannel::Sensitivity => (&mut self.last_pot_raw, &mut self.pot_fault_latched),
            AnalogChannel::Sound => (&mut self.last_sound_raw, &mut self.sound_fault_latched),
        };
        match hw.read(channel) {
            Ok(raw) => {
                *latched = false;
                *last = raw;
                raw
            }
            Err(error) => {
                if !*latched {
                    warn!("{channel:?} read failed ({error}), holding last-known value");
                    sink.emit(&AppEvent::SensorFault { channel, error });
                    *latched = true;
                }
                *last
            }
        }
    }

    fn display_due(&self) -> bool {
        match self.last_present_tick {
            None => true,
            Some(t) => {
                let elapsed_ms = (self.tick_count - t) * u64::from(self.config.loop_interval_ms);
                elapsed_ms >= u64::from(self.config.display_refresh_ms)
            }
        }
    }

    /// Returns `true` on a successful refresh; a failed write is retried
    /// on the next cycle (the stamp is only advanced on success).
    fn refresh_display(
        &mut self,
        hw: &mut impl DisplayPort,
        active: bool,
        time: TimeOfDay,
        sink: &mut impl EventSink,
    ) -> bool {
        let text = present(active, time);
        match hw.write_lines(&text) {
            Ok(()) => {
                self.display_fault_latched = false;
                self.last_present_tick = Some(self.tick_count);
                true
            }
            Err(e) => {
                self.report_display_fault(e, sink);
                false
            }
        }
    }

    fn report_output_fault(&mut self, e: OutputError, sink: &mut impl EventSink) {
        if !self.output_fault_latched {
            warn!("output apply failed ({e}), forfeiting this cycle");
            sink.emit(&AppEvent::OutputFault(e));
            self.output_fault_latched = true;
        }
    }

    fn report_display_fault(&mut self, e: OutputError, sink: &mut impl EventSink) {
        if !self.display_fault_latched {
            warn!("display write failed ({e}), retrying next cycle");
            sink.emit(&AppEvent::OutputFault(e));
            self.display_fault_latched = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_is_none_before_first_tick() {
        let svc = MeterService::new(MeterConfig::default());
        assert!(svc.mode().is_none());
        assert_eq!(svc.tick_count(), 0);
    }
}
