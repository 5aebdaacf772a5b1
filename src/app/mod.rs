//! Application layer: port traits, structured events, and the
//! [`MeterService`](service::MeterService) that orchestrates one control
//! cycle per tick.

pub mod events;
pub mod ports;
pub mod service;
