//! Command entry points

pub mod diff;
