//! Alert buzzer driver.
//!
//! The buzzer is a piezo on an LEDC channel; a tone is a 50% duty square
//! wave at the configured frequency, silence is zero duty.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives LEDC channel 6 via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::error::OutputError;

/// 50% duty square wave (8-bit resolution).
const DUTY_TONE: u8 = 128;

pub struct Buzzer {
    tone_hz: u16,
    on: bool,
}

impl Buzzer {
    pub fn new(tone_hz: u16) -> Self {
        hw_init::ledc_set_tone_freq(u32::from(tone_hz));
        Self { tone_hz, on: false }
    }

    /// Sound or silence the alert tone.
    pub fn set(&mut self, on: bool) -> Result<(), OutputError> {
        let duty = if on { DUTY_TONE } else { 0 };
        if !hw_init::ledc_set(hw_init::LEDC_CH_BUZZER, duty) {
            return Err(OutputError::PwmWriteFailed);
        }
        self.on = on;
        Ok(())
    }

    /// Silence unconditionally (safe shutdown path).
    pub fn off(&mut self) {
        let _ = hw_init::ledc_set(hw_init::LEDC_CH_BUZZER, 0);
        self.on = false;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }

    pub fn tone_hz(&self) -> u16 {
        self.tone_hz
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_tracks_state() {
        let mut b = Buzzer::new(1000);
        assert!(!b.is_on());
        b.set(true).unwrap();
        assert!(b.is_on());
        b.set(false).unwrap();
        assert!(!b.is_on());
    }

    #[test]
    fn off_silences() {
        let mut b = Buzzer::new(1000);
        b.set(true).unwrap();
        b.off();
        assert!(!b.is_on());
    }
}
