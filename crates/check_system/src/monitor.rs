//! Coleta de métricas do sistema via `sysinfo`.

use sysinfo::{CpuRefreshKind, Disks, MemoryRefreshKind, RefreshKind, System};
use tracing::debug;

/// Uso de um ponto de montagem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DiskSample {
    /// Ponto de montagem (ex: "/", "C:\\")
    pub mount: String,
    /// Espaço usado (bytes)
    pub used: u64,
    /// Espaço total (bytes)
    pub total: u64,
}

/// Uma leitura completa do sistema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SystemSample {
    /// Uso global da CPU (0–100%)
    pub cpu_usage: f32,
    pub memory_used: u64,
    pub memory_total: u64,
    pub swap_used: u64,
    pub swap_total: u64,
    /// Load average de 1, 5 e 15 minutos (zeros no Windows)
    pub load: [f64; 3],
    pub disks: Vec<DiskSample>,
}

/// Monitor do sistema local.
pub struct SystemMonitor {
    sys: System,
    disks: Disks,
}

impl SystemMonitor {
    pub fn new() -> Self {
        let sys = System::new_with_specifics(
            RefreshKind::nothing()
                .with_cpu(CpuRefreshKind::nothing().with_cpu_usage())
                .with_memory(MemoryRefreshKind::everything()),
        );

        Self {
            sys,
            disks: Disks::new_with_refreshed_list(),
        }
    }

    /// Lê todas as métricas.
    ///
    /// O uso de CPU exige duas leituras separadas por
    /// [`sysinfo::MINIMUM_CPU_UPDATE_INTERVAL`], então esta chamada bloqueia.
    pub fn collect(&mut self) -> SystemSample {
        self.sys.refresh_cpu_usage();
        std::thread::sleep(sysinfo::MINIMUM_CPU_UPDATE_INTERVAL);
        self.sys.refresh_cpu_usage();
        self.sys.refresh_memory();
        self.disks.refresh(true);

        let load = System::load_average();
        let sample = SystemSample {
            cpu_usage: self.sys.global_cpu_usage(),
            memory_used: self.sys.used_memory(),
            memory_total: self.sys.total_memory(),
            swap_used: self.sys.used_swap(),
            swap_total: self.sys.total_swap(),
            load: [load.one, load.five, load.fifteen],
            disks: self.collect_disks(),
        };

        debug!(
            "Amostra: CPU {:.1}% | RAM {}/{} | {} discos",
            sample.cpu_usage,
            sample.memory_used,
            sample.memory_total,
            sample.disks.len()
        );
        sample
    }

    fn collect_disks(&self) -> Vec<DiskSample> {
        self.disks
            .iter()
            .filter(|disk| disk.total_space() > 0)
            .map(|disk| {
                let total = disk.total_space();
                DiskSample {
                    mount: disk.mount_point().to_string_lossy().into_owned(),
                    used: total.saturating_sub(disk.available_space()),
                    total,
                }
            })
            .collect()
    }
}
