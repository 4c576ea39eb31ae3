//! # wastrel
//!
//! Deliberately wasteful workloads with built-in logging and memory
//! instrumentation, for exercising profilers and log pipelines with
//! predictable bad behavior.
//!
//! ## Usage
//!
//! ```bash
//! wastrel run [--list-size N] [--string-count N] [--burn N]
//! wastrel profile [--json]
//! wastrel log-check
//! ```
//!
//! ## Modules
//!
//! - `app` - Configuration, the logging pipeline, and fatal error handling
//! - `cli` - Argument parsing, command routing, and input validation
//! - `error` - The classified application error type
//! - `logcheck` - End-to-end exercise and verification of the log pipeline
//! - `monitor` - Memory sampling and call-site instrumentation
//! - `profile` - The reduced, instrumented workload variant
//! - `workload` - The wasteful primitives and the full-size run command
pub mod app;
pub mod cli;
pub mod error;
pub mod logcheck;
pub mod monitor;
pub mod profile;
pub mod workload;
