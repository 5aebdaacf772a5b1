//! Potentiometer-to-threshold mapping.
//!
//! The sensitivity pot is read as a raw ADC value and mapped onto the sound
//! threshold that saturates the bar (see [`level`](super::level)).  The map
//! is inverse-linear: raw 0 yields `threshold_max` (least sensitive end of
//! the comparison saturates latest), raw `adc_max` yields `threshold_min`.
//! The result is clamped to `[threshold_min, threshold_max]` so integer
//! rounding can never push it out of bounds.

/// Precomputed mapping from a raw pot reading to a sound threshold.
#[derive(Debug, Clone, Copy)]
pub struct SensitivityMap {
    adc_max: u16,
    threshold_min: u16,
    threshold_max: u16,
}

impl SensitivityMap {
    /// Build a map.  Expects `threshold_min <= threshold_max` and
    /// `adc_max > 0` (guaranteed by `MeterConfig::validate()`).
    pub const fn new(adc_max: u16, threshold_min: u16, threshold_max: u16) -> Self {
        Self {
            adc_max,
            threshold_min,
            threshold_max,
        }
    }

    /// Map a raw pot reading to a threshold.
    ///
    /// Monotonically non-increasing in `raw`; always within
    /// `[threshold_min, threshold_max]`, even for out-of-range readings.
    pub fn threshold(&self, raw: u16) -> u16 {
        if self.adc_max == 0 {
            return self.threshold_max;
        }
        let raw = u32::from(raw.min(self.adc_max));
        let span = u32::from(self.threshold_max - self.threshold_min);
        let drop = raw * span / u32::from(self.adc_max);
        let t = (u32::from(self.threshold_max) - drop) as u16;
        t.clamp(self.threshold_min, self.threshold_max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map() -> SensitivityMap {
        SensitivityMap::new(1023, 100, 800)
    }

    #[test]
    fn raw_zero_yields_max_threshold() {
        assert_eq!(map().threshold(0), 800);
    }

    #[test]
    fn raw_full_scale_yields_min_threshold() {
        assert_eq!(map().threshold(1023), 100);
    }

    #[test]
    fn midpoint_lands_near_centre() {
        let t = map().threshold(512);
        assert!((440..=460).contains(&t), "midpoint threshold {t}");
    }

    #[test]
    fn out_of_range_raw_is_clamped() {
        assert_eq!(map().threshold(u16::MAX), 100);
    }

    #[test]
    fn monotonically_non_increasing() {
        let m = map();
        let mut prev = m.threshold(0);
        for raw in 1..=1023u16 {
            let t = m.threshold(raw);
            assert!(t <= prev, "threshold rose at raw={raw}: {prev} -> {t}");
            prev = t;
        }
    }

    #[test]
    fn degenerate_equal_bounds() {
        let m = SensitivityMap::new(1023, 500, 500);
        assert_eq!(m.threshold(0), 500);
        assert_eq!(m.threshold(1023), 500);
    }
}
