//! System configuration parameters
//!
//! All tunable parameters for the soundbar controller.  Constants for the
//! process lifetime — there is no runtime persistence layer, configuration
//! is fixed at boot.

use serde::{Deserialize, Serialize};

use crate::control::render::MAX_OUTPUTS;
use crate::control::time_window::{ActiveWindow, TimeOfDay};
use crate::error::Error;

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeterConfig {
    // --- Active window ---
    /// Hour the daily active window opens (0-23)
    pub window_start_hour: u8,
    /// Minute the daily active window opens (0-59)
    pub window_start_minute: u8,
    /// Hour the daily active window closes (0-23, exclusive)
    pub window_end_hour: u8,
    /// Minute the daily active window closes (0-59, exclusive)
    pub window_end_minute: u8,

    // --- Analog inputs ---
    /// Full-scale raw ADC value for both analog channels
    pub adc_max: u16,

    // --- Sensitivity thresholds ---
    /// Lowest sound threshold the pot can select (most sensitive)
    pub threshold_min: u16,
    /// Highest sound threshold the pot can select (least sensitive)
    pub threshold_max: u16,

    // --- Bar outputs ---
    /// Number of LEDs in the bar (1 to MAX_OUTPUTS)
    pub output_count: u8,

    // --- Alert ---
    /// Buzzer tone frequency during cutoff (Hz)
    pub alert_tone_hz: u16,

    // --- Timing ---
    /// LCD refresh interval (milliseconds)
    pub display_refresh_ms: u32,
    /// Control loop pacing interval (milliseconds)
    pub loop_interval_ms: u32,
}

impl Default for MeterConfig {
    fn default() -> Self {
        Self {
            // Active window 08:00–15:00
            window_start_hour: 8,
            window_start_minute: 0,
            window_end_hour: 15,
            window_end_minute: 0,

            // 10-bit ADC full scale
            adc_max: 1023,

            // Sensitivity
            threshold_min: 100,
            threshold_max: 800,

            // Bar
            output_count: 6,

            // Alert
            alert_tone_hz: 1000,

            // Timing
            display_refresh_ms: 1000, // 1 Hz LCD refresh
            loop_interval_ms: 80,     // ~12 Hz control loop
        }
    }
}

impl MeterConfig {
    /// The configured daily active window.
    pub fn active_window(&self) -> ActiveWindow {
        ActiveWindow::new(
            TimeOfDay::new(self.window_start_hour, self.window_start_minute),
            TimeOfDay::new(self.window_end_hour, self.window_end_minute),
        )
    }

    /// Validate all parameter ranges.  Called once at boot; an invalid
    /// config is a deployment error, not a runtime condition.
    pub fn validate(&self) -> crate::error::Result<()> {
        if self.window_start_hour > 23 || self.window_end_hour > 23 {
            return Err(Error::Config("window hour out of range"));
        }
        if self.window_start_minute > 59 || self.window_end_minute > 59 {
            return Err(Error::Config("window minute out of range"));
        }
        let window = self.active_window();
        if window.start.minutes_since_midnight() >= window.end.minutes_since_midnight() {
            return Err(Error::Config("window start must precede end (no midnight crossing)"));
        }
        if self.adc_max == 0 {
            return Err(Error::Config("adc_max must be non-zero"));
        }
        if self.threshold_min == 0 || self.threshold_min > self.threshold_max {
            return Err(Error::Config("threshold bounds must satisfy 0 < min <= max"));
        }
        if self.output_count == 0 || self.output_count as usize > MAX_OUTPUTS {
            return Err(Error::Config("output_count outside supported range"));
        }
        if self.loop_interval_ms == 0 || self.loop_interval_ms >= self.display_refresh_ms {
            return Err(Error::Config("loop interval must be shorter than display refresh"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_sane() {
        let c = MeterConfig::default();
        assert!(c.validate().is_ok());
        assert!(c.threshold_min < c.threshold_max);
        assert!(c.output_count > 0 && (c.output_count as usize) <= MAX_OUTPUTS);
        assert!(c.loop_interval_ms < c.display_refresh_ms);
    }

    #[test]
    fn default_window_matches_reference() {
        let w = MeterConfig::default().active_window();
        assert_eq!(w.start, TimeOfDay::new(8, 0));
        assert_eq!(w.end, TimeOfDay::new(15, 0));
    }

    #[test]
    fn serde_roundtrip() {
        let c = MeterConfig::default();
        let json = serde_json::to_string(&c).unwrap();
        let c2: MeterConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(c.window_start_hour, c2.window_start_hour);
        assert_eq!(c.threshold_max, c2.threshold_max);
        assert_eq!(c.output_count, c2.output_count);
    }

    #[test]
    fn postcard_roundtrip() {
        let c = MeterConfig::default();
        let bytes = postcard::to_allocvec(&c).unwrap();
        let c2: MeterConfig = postcard::from_bytes(&bytes).unwrap();
        assert_eq!(c.adc_max, c2.adc_max);
        assert_eq!(c.loop_interval_ms, c2.loop_interval_ms);
    }

    #[test]
    fn inverted_window_rejected() {
        let c = MeterConfig {
            window_start_hour: 15,
            window_end_hour: 8,
            ..MeterConfig::default()
        };
        assert!(matches!(c.validate(), Err(Error::Config(_))));
    }

    #[test]
    fn empty_window_rejected() {
        let c = MeterConfig {
            window_start_hour: 8,
            window_end_hour: 8,
            window_start_minute: 0,
            window_end_minute: 0,
            ..MeterConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn inverted_threshold_bounds_rejected() {
        let c = MeterConfig {
            threshold_min: 900,
            threshold_max: 800,
            ..MeterConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn oversized_bar_rejected() {
        let c = MeterConfig {
            output_count: MAX_OUTPUTS as u8 + 1,
            ..MeterConfig::default()
        };
        assert!(c.validate().is_err());
    }

    #[test]
    fn loop_must_outpace_display() {
        let c = MeterConfig {
            loop_interval_ms: 1000,
            display_refresh_ms: 1000,
            ..MeterConfig::default()
        };
        assert!(c.validate().is_err());
    }
}
