//! Process and system memory sampling
//!
//! Thin wrapper over sysinfo, pinned to the current process. Sampling is
//! deliberately synchronous; a reading taken around a workload stage must
//! bracket that stage exactly.

use serde::Serialize;
use sysinfo::{Pid, ProcessesToUpdate, System};

/// One point-in-time memory reading, all values in bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MemorySample {
    /// Resident set size of this process
    pub process_bytes: u64,
    /// Used memory across the whole machine
    pub system_bytes: u64,
}

/// Samples memory usage for the current process.
pub struct MemoryMonitor {
    system: System,
    pid: Pid,
}

impl MemoryMonitor {
    pub fn new() -> Self {
        Self {
            system: System::new(),
            pid: Pid::from_u32(std::process::id()),
        }
    }

    /// Take a fresh sample, refreshing the backing tables first.
    pub fn sample(&mut self) -> MemorySample {
        self.system.refresh_memory();
        self.system
            .refresh_processes(ProcessesToUpdate::Some(&[self.pid]), true);

        let process_bytes = self
            .system
            .process(self.pid)
            .map(|process| process.memory())
            .unwrap_or(0);

        MemorySample {
            process_bytes,
            system_bytes: self.system.used_memory(),
        }
    }
}

impl Default for MemoryMonitor {
    fn default() -> Self {
        Self::new()
    }
}
