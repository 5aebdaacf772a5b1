//! Status text formatting for the 16x2 character LCD.
//!
//! Both lines are padded to the full display width so that a shorter label
//! fully overwrites a longer previous one.  The display is never cleared
//! wholesale — a full clear between refreshes causes visible flicker.
//!
//! Rate limiting lives in the service; this module is pure formatting.

use core::fmt::Write as _;

use heapless::String;

use super::time_window::TimeOfDay;

/// Character columns on the LCD.
pub const LCD_COLS: usize = 16;

/// Second-line label while the active window is open.
pub const LABEL_ACTIVE: &str = "DJ Time";
/// Second-line label outside the active window.
pub const LABEL_CUTOFF: &str = "Cutoff Time!";

/// Two fixed-width lines, always updated together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayText {
    pub line1: String<LCD_COLS>,
    pub line2: String<LCD_COLS>,
}

/// Format the current time and mode label into display text.
///
/// Line 1: `"Time HH:MM"` plus trailing fill.  Line 2: the mode label plus
/// trailing fill.  Both lines are exactly [`LCD_COLS`] characters.
pub fn present(active: bool, time: TimeOfDay) -> DisplayText {
    let mut line1: String<LCD_COLS> = String::new();
    let _ = write!(line1, "Time {time}");
    pad_to_width(&mut line1);

    let mut line2: String<LCD_COLS> = String::new();
    let _ = line2.push_str(if active { LABEL_ACTIVE } else { LABEL_CUTOFF });
    pad_to_width(&mut line2);

    DisplayText { line1, line2 }
}

/// Boot splash shown once before the first cycle.
pub fn banner() -> DisplayText {
    let mut line1: String<LCD_COLS> = String::new();
    let _ = line1.push_str("Sound Reactive");
    pad_to_width(&mut line1);

    let mut line2: String<LCD_COLS> = String::new();
    let _ = line2.push_str("System Starting");
    pad_to_width(&mut line2);

    DisplayText { line1, line2 }
}

fn pad_to_width(line: &mut String<LCD_COLS>) {
    while line.len() < LCD_COLS {
        let _ = line.push(' ');
    }
}
