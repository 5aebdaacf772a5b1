//! Bar LED driver.
//!
//! One LEDC PWM channel per LED (CH0..=CH5).  The bar pattern is applied
//! in a single call so the LEDs never show a torn intermediate state.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: drives LEDC channels via hw_init.
//! On host/test: tracks state in-memory only.

use crate::drivers::hw_init;
use crate::error::OutputError;
use crate::pins;

/// Duty for a lit LED (full brightness, 8-bit).
const DUTY_ON: u8 = 255;

pub struct LedBar {
    current: [bool; pins::LED_GPIOS.len()],
}

impl LedBar {
    /// Number of LEDs in the bar, fixed by the pin map.
    pub const LEN: usize = pins::LED_GPIOS.len();

    pub fn new() -> Self {
        Self {
            current: [false; Self::LEN],
        }
    }

    /// Apply a full on/off pattern, index 0 first.  A pattern shorter than
    /// the bar leaves the remaining LEDs dark.
    pub fn set_pattern(&mut self, pattern: &[bool]) -> Result<(), OutputError> {
        for i in 0..Self::LEN {
            let lit = pattern.get(i).copied().unwrap_or(false);
            let duty = if lit { DUTY_ON } else { 0 };
            if !hw_init::ledc_set(i as u32, duty) {
                return Err(OutputError::PwmWriteFailed);
            }
            self.current[i] = lit;
        }
        Ok(())
    }

    /// All LEDs dark.
    pub fn all_off(&mut self) {
        for i in 0..Self::LEN {
            let _ = hw_init::ledc_set(i as u32, 0);
            self.current[i] = false;
        }
    }

    /// Last applied pattern (for tests and diagnostics).
    pub fn current_pattern(&self) -> &[bool] {
        &self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_length_follows_the_pin_map() {
        assert_eq!(LedBar::LEN, pins::LED_GPIOS.len());
        assert_eq!(LedBar::new().current_pattern().len(), LedBar::LEN);
    }

    #[test]
    fn pattern_is_tracked() {
        let mut bar = LedBar::new();
        bar.set_pattern(&[true, true, false, false, false, false]).unwrap();
        assert_eq!(bar.current_pattern(), &[true, true, false, false, false, false]);
    }

    #[test]
    fn short_pattern_darkens_tail() {
        let mut bar = LedBar::new();
        bar.set_pattern(&[true; 6]).unwrap();
        bar.set_pattern(&[true, true]).unwrap();
        assert_eq!(bar.current_pattern(), &[true, true, false, false, false, false]);
    }

    #[test]
    fn all_off_clears_everything() {
        let mut bar = LedBar::new();
        bar.set_pattern(&[true; 6]).unwrap();
        bar.all_off();
        assert!(bar.current_pattern().iter().all(|&on| !on));
    }
}
