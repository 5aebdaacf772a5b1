//! Hardware adapter — bridges real peripherals to domain port traits.
//!
//! Owns the RTC, ADC, LED bar, buzzer, and LCD drivers, exposing them
//! through [`ClockPort`], [`AnalogPort`], [`OutputPort`], and
//! [`DisplayPort`].  This is the only module in the system that touches
//! actual hardware.  On non-espidf targets the underlying drivers use
//! cfg-gated simulation stubs.

use crate::app::ports::{AnalogChannel, AnalogPort, ClockPort, DisplayPort, OutputPort};
use crate::control::render::RenderCommand;
use crate::control::status::DisplayText;
use crate::control::time_window::TimeOfDay;
use crate::drivers::analog::AnalogInputs;
use crate::drivers::buzzer::Buzzer;
use crate::drivers::lcd::Lcd;
use crate::drivers::led_bar::LedBar;
use crate::drivers::rtc::Ds3231;
use crate::error::{ClockError, OutputError, SensorError};

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter {
    rtc: Ds3231,
    adc: AnalogInputs,
    bar: LedBar,
    buzzer: Buzzer,
    lcd: Lcd,
}

impl HardwareAdapter {
    pub fn new(rtc: Ds3231, adc: AnalogInputs, bar: LedBar, buzzer: Buzzer, lcd: Lcd) -> Self {
        Self {
            rtc,
            adc,
            bar,
            buzzer,
            lcd,
        }
    }

    /// Borrow the LCD driver (startup banner).
    pub fn lcd_mut(&mut self) -> &mut Lcd {
        &mut self.lcd
    }
}

// ── ClockPort implementation ──────────────────────────────────

impl ClockPort for HardwareAdapter {
    fn now(&mut self) -> Result<TimeOfDay, ClockError> {
        self.rtc.read_time()
    }
}

// ── AnalogPort implementation ─────────────────────────────────

impl AnalogPort for HardwareAdapter {
    fn read(&mut self, channel: AnalogChannel) -> Result<u16, SensorError> {
        self.adc.read(channel)
    }
}

// ── OutputPort implementation ─────────────────────────────────

impl OutputPort for HardwareAdapter {
    fn apply(&mut self, cmd: &RenderCommand) -> Result<(), OutputError> {
        self.bar.set_pattern(&cmd.outputs)?;
        self.buzzer.set(cmd.alert_on)
    }

    fn all_off(&mut self) {
        self.bar.all_off();
        self.buzzer.off();
    }
}

// ── DisplayPort implementation ────────────────────────────────

impl DisplayPort for HardwareAdapter {
    fn write_lines(&mut self, text: &DisplayText) -> Result<(), OutputError> {
        self.lcd.write_lines(text)
    }
}
