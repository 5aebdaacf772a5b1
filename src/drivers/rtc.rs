//! DS3231 real-time clock driver.
//!
//! Reads the seconds/minutes/hours registers over I2C and decodes the BCD
//! fields into a [`TimeOfDay`].  The DS3231 is run in 24-hour mode.
//!
//! ## Dual-target design
//!
//! On ESP-IDF: burst-reads registers 0x00..0x02 through the shared I2C bus.
//! On host/test: reads from static atomics for injection.

#[cfg(not(target_os = "espidf"))]
use core::sync::atomic::{AtomicBool, AtomicU16, Ordering};

use crate::control::time_window::TimeOfDay;
use crate::error::ClockError;
use crate::pins;

// Host-side simulation state: packed hour<<8 | minute, plus a presence flag
// so tests can fake an unplugged RTC.
#[cfg(not(target_os = "espidf"))]
static SIM_TIME: AtomicU16 = AtomicU16::new(0);
#[cfg(not(target_os = "espidf"))]
static SIM_PRESENT: AtomicBool = AtomicBool::new(true);

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_time(hour: u8, minute: u8) {
    SIM_TIME.store(u16::from(hour) << 8 | u16::from(minute), Ordering::Relaxed);
}

#[cfg(not(target_os = "espidf"))]
pub fn sim_set_present(present: bool) {
    SIM_PRESENT.store(present, Ordering::Relaxed);
}

pub struct Ds3231 {
    addr: u8,
}

impl Ds3231 {
    pub fn new() -> Self {
        Self {
            addr: pins::RTC_I2C_ADDR,
        }
    }

    /// Current time of day from the RTC.
    pub fn read_time(&mut self) -> Result<TimeOfDay, ClockError> {
        let (hour, minute) = self.read_registers()?;
        if hour > 23 || minute > 59 {
            return Err(ClockError::InvalidTime);
        }
        Ok(TimeOfDay::new(hour, minute))
    }

    #[cfg(target_os = "espidf")]
    fn read_registers(&mut self) -> Result<(u8, u8), ClockError> {
        let mut regs = [0u8; 3]; // seconds, minutes, hours
        if !crate::drivers::hw_init::i2c_read_reg(self.addr, 0x00, &mut regs) {
            return Err(ClockError::NotResponding);
        }
        // Bit 6 of the hours register selects 12-hour mode; we program the
        // clock for 24-hour mode, so treat a set bit as a bad read.
        if regs[2] & 0x40 != 0 {
            return Err(ClockError::InvalidTime);
        }
        let minute = bcd_to_dec(regs[1] & 0x7F);
        let hour = bcd_to_dec(regs[2] & 0x3F);
        Ok((hour, minute))
    }

    #[cfg(not(target_os = "espidf"))]
    fn read_registers(&mut self) -> Result<(u8, u8), ClockError> {
        if !SIM_PRESENT.load(Ordering::Relaxed) {
            return Err(ClockError::NotResponding);
        }
        let packed = SIM_TIME.load(Ordering::Relaxed);
        Ok(((packed >> 8) as u8, (packed & 0xFF) as u8))
    }
}

/// Decode one packed-BCD byte (upper nibble = tens, lower = units).
#[cfg(any(target_os = "espidf", test))]
fn bcd_to_dec(bcd: u8) -> u8 {
    (bcd >> 4) * 10 + (bcd & 0x0F)
}
