//! The profiled variant of the workload
//!
//! Same stages as `run`, smaller defaults, and the two allocation-heavy
//! stages wrapped with memory instrumentation at the call site.

pub mod command;

pub use command::{run, ProfileCommand};
