//! Visual components.

pub mod starfield;
