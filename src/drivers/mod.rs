//! Hardware drivers for the soundbar board.
//!
//! Every driver follows the dual-target design: real register access under
//! `#[cfg(target_os = "espidf")]`, an in-memory simulation elsewhere so the
//! whole crate builds and tests on the host.

pub mod analog;
pub mod buzzer;
pub mod hw_init;
pub mod lcd;
pub mod led_bar;
pub mod rtc;
