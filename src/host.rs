use serde::Serialize;
use sysinfo::{CpuExt, System, SystemExt};

/// Machine the numbers were taken on. Only attached to JSON reports.
#[derive(Debug, Clone, Serialize)]
pub struct HostInfo {
    pub os: Option<String>,
    pub os_version: Option<String>,
    pub cpu_brand: Option<String>,
    pub cpu_count: usize,
    pub total_memory_bytes: u64,
}

impl HostInfo {
    pub fn collect() -> Self {
        let mut sys = System::new();
        sys.refresh_cpu();
        sys.refresh_memory();

        let cpu_brand = sys
            .cpus()
            .first()
            .map(|cpu| cpu.brand().trim().to_string())
            .filter(|brand| !brand.is_empty());

        Self {
            os: sys.name(),
            os_version: sys.os_version(),
            cpu_brand,
            cpu_count: sys.cpus().len(),
            total_memory_bytes: sys.total_memory(),
        }
    }
}
