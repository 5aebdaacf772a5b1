//! Output rendering — bar pattern and alert state for one cycle.
//!
//! [`render`] is the only place where the mode decision and the bar level
//! meet.  Its output is applied atomically by the service, so the LEDs and
//! buzzer can never disagree about which mode the system is in.

use heapless::Vec;

/// Upper bound on the number of bar outputs the fixed pattern can hold.
/// `MeterConfig::validate()` rejects `output_count` above this.
pub const MAX_OUTPUTS: usize = 8;

/// The atomic snapshot of desired output state for one cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCommand {
    /// Per-output on/off, index 0 first.  Length = configured output count.
    pub outputs: Vec<bool, MAX_OUTPUTS>,
    /// Buzzer state.  Mutually exclusive with any lit output.
    pub alert_on: bool,
}

impl RenderCommand {
    /// True if at least one output is lit.
    pub fn any_lit(&self) -> bool {
        self.outputs.iter().any(|&on| on)
    }
}

/// Compute the render command for one cycle.
///
/// Inactive: all outputs dark, alert on.  Active: a contiguous bar lit from
/// index 0 up to `level`, alert off.  Pure and total — `level` is already
/// clamped by [`bar_level`](super::level::bar_level).
pub fn render(active: bool, level: u8, count: u8) -> RenderCommand {
    let count = (count as usize).min(MAX_OUTPUTS);
    let mut outputs: Vec<bool, MAX_OUTPUTS> = Vec::new();
    for i in 0..count {
        let lit = active && (i as u8) < level;
        let _ = outputs.push(lit);
    }
    RenderCommand {
        outputs,
        alert_on: !active,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inactive_is_dark_with_alert() {
        for level in 0..=6u8 {
            let cmd = render(false, level, 6);
            assert!(!cmd.any_lit(), "level {level} lit outputs while inactive");
            assert!(cmd.alert_on);
        }
    }

    #[test]
    fn active_bar_is_contiguous_from_zero() {
        let cmd = render(true, 4, 6);
        assert_eq!(cmd.outputs.as_slice(), &[true, true, true, true, false, false]);
        assert!(!cmd.alert_on);
    }

    #[test]
    fn active_level_zero_is_dark_and_silent() {
        let cmd = render(true, 0, 6);
        assert!(!cmd.any_lit());
        assert!(!cmd.alert_on);
    }

    #[test]
    fn full_level_lights_everything() {
        let cmd = render(true, 6, 6);
        assert!(cmd.outputs.iter().all(|&on| on));
    }

    #[test]
    fn pattern_length_matches_count() {
        for count in 0..=MAX_OUTPUTS as u8 {
            assert_eq!(render(true, 3, count).outputs.len(), count as usize);
        }
    }

    #[test]
    fn render_is_idempotent() {
        let a = render(true, 3, 6);
        let b = render(true, 3, 6);
        assert_eq!(a, b);
    }

    #[test]
    fn lit_and_alert_are_mutually_exclusive() {
        for active in [false, true] {
            for level in 0..=8u8 {
                let cmd = render(active, level, 6);
                assert!(!(cmd.any_lit() && cmd.alert_on));
            }
        }
    }
}
