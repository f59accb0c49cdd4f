//! Shared types used across nwalign crates

pub mod format;

pub use format::OutputFormat;
