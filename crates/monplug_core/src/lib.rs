//! # Monplug Core
//!
//! Crate compartilhada que implementa o formato de saída de plugins de
//! monitoramento (convenção Nagios): thresholds de faixa, performance data,
//! agregação de status e o harness que converte o resultado em exit code.
//!
//! ## Módulos
//! - [`status`] – Níveis de severidade (Ok, Warning, Critical)
//! - [`number`] – Formatação numérica compatível com o formato
//! - [`threshold`] – Parse/render de faixas `@start:end`
//! - [`perfdata`] – Performance data individual e coleção
//! - [`check`] – Execução do check e mapeamento para exit code
//! - [`config`] – Thresholds por label via TOML

pub mod status;
pub mod number;
pub mod threshold;
pub mod perfdata;
pub mod check;
pub mod config;

// Re-exports convenientes
pub use status::Status;
pub use number::{perf_float, OptionalNumber};
pub use threshold::{InvalidThreshold, Threshold};
pub use perfdata::{Perfdata, PerfdataCollection};
pub use check::{execute_check, CheckErrors, CheckOutput};
pub use config::{PluginConfig, ThresholdPair};
