//! Sound reading to bar-level mapping.
//!
//! Classic VU-meter scaling: the threshold is the sound level at which every
//! output is lit.  Readings are scaled from `[0, threshold]` onto
//! `[0, count]` with integer truncation and saturate at `count`.

/// Number of outputs that should be lit for the given sound reading.
///
/// `raw = 0` yields 0; `raw >= threshold` yields `count`.  The result is
/// always within `[0, count]`.
pub fn bar_level(raw: u16, threshold: u16, count: u8) -> u8 {
    if threshold == 0 {
        // Degenerate threshold: any sound saturates the bar.
        return count;
    }
    let scaled = u32::from(raw) * u32::from(count) / u32::from(threshold);
    scaled.min(u32::from(count)) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silence_is_level_zero() {
        assert_eq!(bar_level(0, 800, 6), 0);
    }

    #[test]
    fn threshold_saturates_bar() {
        assert_eq!(bar_level(800, 800, 6), 6);
    }

    #[test]
    fn above_threshold_stays_saturated() {
        assert_eq!(bar_level(1023, 800, 6), 6);
        assert_eq!(bar_level(u16::MAX, 800, 6), 6);
    }

    #[test]
    fn half_threshold_lights_half_bar() {
        assert_eq!(bar_level(400, 800, 6), 3);
    }

    #[test]
    fn integer_truncation_rounds_down() {
        // 100 * 6 / 800 = 0.75 → 0
        assert_eq!(bar_level(100, 800, 6), 0);
        // 150 * 6 / 800 = 1.125 → 1
        assert_eq!(bar_level(150, 800, 6), 1);
    }

    #[test]
    fn zero_threshold_saturates() {
        assert_eq!(bar_level(0, 0, 6), 6);
        assert_eq!(bar_level(1, 0, 6), 6);
    }

    #[test]
    fn zero_count_is_always_zero() {
        assert_eq!(bar_level(1023, 800, 0), 0);
    }
}
