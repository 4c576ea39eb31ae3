//! End-to-end exercise of the logging pipeline
//!
//! Emits a fixed sequence of records covering every severity, a caught
//! failure, and a record from a second module, then re-reads the file to
//! prove each one landed in the right shape and order.

pub mod command;
pub mod emitter;

pub use command::{emit_demo_records, run, verify_demo_records, LogCheckCommand, LogRecord};
