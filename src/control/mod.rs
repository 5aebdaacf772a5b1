//! Pure decision logic for the sound meter.
//!
//! Everything in this module is a total, deterministic function over plain
//! values — no hardware, no clocks, no I/O.  The [`MeterService`]
//! (`crate::app::service`) wires these together once per control cycle.
//!
//! [`MeterService`]: crate::app::service::MeterService

pub mod level;
pub mod render;
pub mod sensitivity;
pub mod status;
pub mod time_window;
