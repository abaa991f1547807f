//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Input events (mapped to start/jump signals)
//! - Display output (write-only sink)
//! - Frame scheduling and cancellation

pub mod display;
pub mod input;
pub mod scheduler;

pub use display::{Display, RecordingDisplay};
pub use input::{HostEvent, Signal, signal_for};
pub use scheduler::{CancelToken, Runner};
