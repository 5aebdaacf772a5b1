//! Adapters bridging the port traits to concrete back-ends.

pub mod hardware;
pub mod log_sink;
