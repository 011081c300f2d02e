#![forbid(unsafe_code)]

pub mod access;
pub mod alerts;
pub mod error;
pub mod model;
pub mod progress;
pub mod sample;
pub mod schedule;
pub mod time;

pub use error::Error;
pub use progress::{Progress, calculate_progress, current_week};
pub use time::Clock;
