//! HD44780 16x2 character LCD behind a PCF8574 I2C backpack.
//!
//! Classic 4-bit nibble protocol: each byte goes out as two nibbles on the
//! expander's upper four bits, strobed with the EN line.  Both display
//! lines are written in one call; the presenter pads them to full width so
//! the screen is never cleared between refreshes (a full clear flickers).
//!
//! ## Dual-target design
//!
//! On ESP-IDF: writes the expander via the shared I2C bus.
//! On host/test: stores the last written lines in-memory.

use crate::control::status::DisplayText;
#[cfg(target_os = "espidf")]
use crate::control::status::LCD_COLS;
use crate::error::OutputError;
use crate::pins;

#[cfg(target_os = "espidf")]
use crate::drivers::hw_init;

// PCF8574 bit assignments (common backpack wiring).
#[cfg(target_os = "espidf")]
const RS_DATA: u8 = 0x01;
#[cfg(target_os = "espidf")]
const EN: u8 = 0x04;
#[cfg(target_os = "espidf")]
const BACKLIGHT: u8 = 0x08;

// HD44780 DDRAM addresses for the two lines.
#[cfg(target_os = "espidf")]
const LINE_ADDR: [u8; 2] = [0x00, 0x40];

pub struct Lcd {
    #[cfg_attr(not(target_os = "espidf"), allow(dead_code))]
    addr: u8,
    #[cfg(not(target_os = "espidf"))]
    lines: Option<DisplayText>,
}

impl Lcd {
    pub fn new() -> Self {
        Self {
            addr: pins::LCD_I2C_ADDR,
            #[cfg(not(target_os = "espidf"))]
            lines: None,
        }
    }

    /// Run the HD44780 4-bit init sequence and switch the backlight on.
    #[cfg(target_os = "espidf")]
    pub fn init(&mut self) -> Result<(), OutputError> {
        use esp_idf_svc::hal::delay::FreeRtos;

        // Power-on takes >40 ms before the controller accepts commands.
        FreeRtos::delay_ms(50);

        // Three wake-up nibbles, then switch to 4-bit mode.
        for _ in 0..3 {
            self.write_nibble(0x30, false)?;
            FreeRtos::delay_ms(5);
        }
        self.write_nibble(0x20, false)?;

        self.command(0x28)?; // 4-bit, 2 lines, 5x8 font
        self.command(0x0C)?; // display on, cursor off
        self.command(0x06)?; // entry mode: increment, no shift
        self.command(0x01)?; // clear once at boot
        FreeRtos::delay_ms(2);
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn init(&mut self) -> Result<(), OutputError> {
        Ok(())
    }

    /// Write both lines together.  No clear — lines are full width.
    #[cfg(target_os = "espidf")]
    pub fn write_lines(&mut self, text: &DisplayText) -> Result<(), OutputError> {
        for (row, line) in [&text.line1, &text.line2].into_iter().enumerate() {
            self.command(0x80 | LINE_ADDR[row])?;
            for byte in line.as_bytes().iter().take(LCD_COLS) {
                self.data(*byte)?;
            }
        }
        Ok(())
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn write_lines(&mut self, text: &DisplayText) -> Result<(), OutputError> {
        self.lines = Some(text.clone());
        Ok(())
    }

    /// Last written lines (host/test only).
    #[cfg(not(target_os = "espidf"))]
    pub fn last_lines(&self) -> Option<&DisplayText> {
        self.lines.as_ref()
    }

    // ── Internal (ESP-IDF nibble protocol) ────────────────────

    #[cfg(target_os = "espidf")]
    fn command(&mut self, byte: u8) -> Result<(), OutputError> {
        self.send(byte, false)
    }

    #[cfg(target_os = "espidf")]
    fn data(&mut self, byte: u8) -> Result<(), OutputError> {
        self.send(byte, true)
    }

    #[cfg(target_os = "espidf")]
    fn send(&mut self, byte: u8, is_data: bool) -> Result<(), OutputError> {
        self.write_nibble(byte & 0xF0, is_data)?;
        self.write_nibble(byte << 4, is_data)
    }

    #[cfg(target_os = "espidf")]
    fn write_nibble(&mut self, nibble: u8, is_data: bool) -> Result<(), OutputError> {
        let flags = BACKLIGHT | if is_data { RS_DATA } else { 0 };
        // Strobe EN high then low to latch the nibble.
        let frame = [nibble | flags | EN, nibble | flags];
        if hw_init::i2c_write(self.addr, &frame) {
            Ok(())
        } else {
            Err(OutputError::BusWriteFailed)
        }
    }
}

#[cfg(all(test, not(target_os = "espidf")))]
mod tests {
    use super::*;
    use crate::control::status::{present, LCD_COLS};
    use crate::control::time_window::TimeOfDay;

    #[test]
    fn write_lines_stores_both_lines() {
        let mut lcd = Lcd::new();
        let text = present(true, TimeOfDay::new(9, 30));
        lcd.write_lines(&text).unwrap();
        let last = lcd.last_lines().unwrap();
        assert_eq!(last.line1.len(), LCD_COLS);
        assert!(last.line1.starts_with("Time 09:30"));
    }
}
