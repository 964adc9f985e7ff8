//! Platform-agnostic building blocks: records, formatting, seed data, timers.

pub mod format;
pub mod platform;
pub mod record;
pub mod seed;
pub mod timing;
