//! Property-based tests for the pure control core.
//!
//! These run on the host only; proptest is not available on the target.

#![cfg(not(target_os = "espidf"))]

use proptest::prelude::*;

use soundbar::control::level::bar_level;
use soundbar::control::render::{render, MAX_OUTPUTS};
use soundbar::control::sensitivity::SensitivityMap;
use soundbar::control::status::{present, LCD_COLS};
use soundbar::control::time_window::{ActiveWindow, TimeOfDay};

// ── Sensitivity mapping ───────────────────────────────────────

proptest! {
    #[test]
    fn threshold_stays_within_bounds(
        adc_max in 1u16..=4095,
        lo in 1u16..=1000,
        span in 0u16..=1000,
        raw in 0u16..=u16::MAX,
    ) {
        let hi = lo.saturating_add(span);
        let map = SensitivityMap::new(adc_max, lo, hi);
        let t = map.threshold(raw);
        prop_assert!(t >= lo && t <= hi, "threshold {t} outside [{lo}, {hi}]");
    }

    #[test]
    fn threshold_never_increases_with_raw(
        adc_max in 1u16..=4095,
        lo in 1u16..=1000,
        span in 0u16..=1000,
        a in 0u16..=4095,
        b in 0u16..=4095,
    ) {
        let hi = lo.saturating_add(span);
        let map = SensitivityMap::new(adc_max, lo, hi);
        let (lo_raw, hi_raw) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(map.threshold(lo_raw) >= map.threshold(hi_raw));
    }

    #[test]
    fn threshold_endpoints_hit_the_bounds(
        adc_max in 1u16..=4095,
        lo in 1u16..=1000,
        span in 0u16..=1000,
    ) {
        let hi = lo.saturating_add(span);
        let map = SensitivityMap::new(adc_max, lo, hi);
        prop_assert_eq!(map.threshold(0), hi);
        prop_assert_eq!(map.threshold(adc_max), lo);
    }
}

// ── Bar level scaling ─────────────────────────────────────────

proptest! {
    #[test]
    fn level_is_always_in_range(
        raw in 0u16..=u16::MAX,
        threshold in 0u16..=u16::MAX,
        count in 0u8..=MAX_OUTPUTS as u8,
    ) {
        prop_assert!(bar_level(raw, threshold, count) <= count);
    }

    #[test]
    fn level_saturates_at_threshold(
        threshold in 1u16..=u16::MAX,
        count in 0u8..=MAX_OUTPUTS as u8,
    ) {
        prop_assert_eq!(bar_level(threshold, threshold, count), count);
    }

    #[test]
    fn level_is_monotone_in_raw(
        a in 0u16..=u16::MAX,
        b in 0u16..=u16::MAX,
        threshold in 1u16..=u16::MAX,
        count in 1u8..=MAX_OUTPUTS as u8,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(bar_level(lo, threshold, count) <= bar_level(hi, threshold, count));
    }
}

// ── Rendering ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn lit_outputs_and_alert_never_coexist(
        active in any::<bool>(),
        level in 0u8..=u8::MAX,
        count in 0u8..=MAX_OUTPUTS as u8,
    ) {
        let cmd = render(active, level, count);
        prop_assert!(!(cmd.any_lit() && cmd.alert_on));
    }

    #[test]
    fn bar_is_a_contiguous_prefix(
        level in 0u8..=u8::MAX,
        count in 1u8..=MAX_OUTPUTS as u8,
    ) {
        let cmd = render(true, level, count);
        // Once an output is dark, every later output is dark too.
        let mut seen_dark = false;
        for &on in cmd.outputs.iter() {
            if seen_dark {
                prop_assert!(!on);
            }
            seen_dark |= !on;
        }
    }

    #[test]
    fn inactive_render_ignores_level(
        level in 0u8..=u8::MAX,
        count in 0u8..=MAX_OUTPUTS as u8,
    ) {
        let cmd = render(false, level, count);
        prop_assert!(!cmd.any_lit());
        prop_assert!(cmd.alert_on);
    }

    #[test]
    fn pattern_length_equals_count(
        active in any::<bool>(),
        level in 0u8..=u8::MAX,
        count in 0u8..=MAX_OUTPUTS as u8,
    ) {
        prop_assert_eq!(render(active, level, count).outputs.len(), count as usize);
    }
}

// ── Window and presentation ───────────────────────────────────

proptest! {
    #[test]
    fn window_boundaries_are_half_open(
        start in 0u16..1439,
        len in 1u16..=200,
        hour in 0u8..24,
        minute in 0u8..60,
    ) {
        let end = (start + len).min(1439);
        let window = ActiveWindow::new(
            TimeOfDay::new((start / 60) as u8, (start % 60) as u8),
            TimeOfDay::new((end / 60) as u8, (end % 60) as u8),
        );
        let now = TimeOfDay::new(hour, minute);
        let m = now.minutes_since_midnight();
        prop_assert_eq!(window.contains(now), start <= m && m < end);
    }

    #[test]
    fn presented_lines_are_always_full_width(
        active in any::<bool>(),
        hour in 0u8..24,
        minute in 0u8..60,
    ) {
        let text = present(active, TimeOfDay::new(hour, minute));
        prop_assert_eq!(text.line1.len(), LCD_COLS);
        prop_assert_eq!(text.line2.len(), LCD_COLS);
    }
}
