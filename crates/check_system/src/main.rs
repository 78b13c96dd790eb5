//! # check_system
//!
//! Plugin de monitoramento (convenção Nagios) para CPU, memória, swap,
//! load average e uso de disco.
//!
//! ## Uso
//! ```bash
//! check_system                              # Usa check_system.toml ao lado do executável
//! check_system --config /etc/check_system.toml
//! ```
//!
//! Executado em terminal interativo, apenas mostra esta ajuda (exit 3).
//! Logs vão para stderr e são controlados por `RUST_LOG`.

mod monitor;
mod report;

use monitor::SystemMonitor;
use monplug_core::check::{execute_check, CheckErrors, CheckOutput};
use monplug_core::config::PluginConfig;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::warn;

const CONFIG_FILE: &str = "check_system.toml";

fn main() -> ExitCode {
    // ── Logging (stderr, stdout é a saída do plugin) ──
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config_path = config_path_from_args(std::env::args().skip(1));
    execute_check(usage, move || run(config_path.as_deref()))
}

fn run(config_path: Option<&Path>) -> Result<CheckOutput, CheckErrors> {
    let config = load_config(config_path)?;

    let mut monitor = SystemMonitor::new();
    let sample = monitor.collect();
    report::build_report(&sample, &config)
}

/// Carrega a configuração e registra avisos de validação.
///
/// Um caminho explícito precisa existir: sem ele o plugin rodaria sem
/// thresholds e reportaria OK sempre.
fn load_config(explicit: Option<&Path>) -> Result<PluginConfig, CheckErrors> {
    let loaded = match explicit {
        Some(path) => PluginConfig::load_required(path),
        None => PluginConfig::load(&PluginConfig::default_path(CONFIG_FILE)),
    };
    let config = loaded.map_err(|e| {
        let mut errors = CheckErrors::new();
        errors.insert("config".into(), e.into());
        errors
    })?;

    for warning in config.validate() {
        warn!("Configuração suspeita: {warning}");
    }
    Ok(config)
}

/// Valor de `--config <path>` / `--config=<path>`, se informado.
fn config_path_from_args(mut args: impl Iterator<Item = String>) -> Option<PathBuf> {
    while let Some(arg) = args.next() {
        if arg == "--config" {
            if let Some(path) = args.next() {
                return Some(PathBuf::from(path));
            }
        } else if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
    }
    None
}

fn usage() -> String {
    format!(
        "check_system {} – plugin de monitoramento do sistema local

Uso: check_system [--config <arquivo.toml>]

Métricas: cpu, memory, swap, load1, load5, load15, disk_<montagem>
Thresholds por métrica em {CONFIG_FILE}:

  [thresholds.cpu]
  warn = \"80\"
  crit = \"95\"

Exit codes: 0 OK, 1 WARNING, 2 CRITICAL, 3 UNKNOWN
",
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> std::vec::IntoIter<String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn config_flag_with_separate_value() {
        assert_eq!(
            config_path_from_args(args(&["--config", "/etc/x.toml"])),
            Some(PathBuf::from("/etc/x.toml"))
        );
    }

    #[test]
    fn config_flag_with_equals() {
        assert_eq!(
            config_path_from_args(args(&["-v", "--config=y.toml"])),
            Some(PathBuf::from("y.toml"))
        );
    }

    #[test]
    fn no_flag_means_no_explicit_path() {
        assert_eq!(config_path_from_args(args(&[])), None);
        assert_eq!(config_path_from_args(args(&["--config"])), None);
    }

    #[test]
    fn default_path_sits_next_to_executable() {
        let path = PluginConfig::default_path(CONFIG_FILE);
        assert_eq!(path.file_name().unwrap(), CONFIG_FILE);
    }

    #[test]
    fn missing_explicit_config_is_unknown() {
        let path = std::env::temp_dir().join("check_system_inexistente_9c1e.toml");
        let errors = load_config(Some(&path)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors["config"].to_string().contains("não encontrado"));

        let mut out = Vec::new();
        let code = monplug_core::check::run_check(&mut out, false, usage, || run(Some(&path)));
        assert_eq!(code, monplug_core::check::UNKNOWN);
        let printed = String::from_utf8(out).unwrap();
        assert!(printed.starts_with("config: Arquivo de configuração não encontrado"), "{printed}");
    }

    #[test]
    fn usage_mentions_exit_codes() {
        let text = usage();
        assert!(text.contains("3 UNKNOWN"));
        assert!(text.contains(CONFIG_FILE));
    }
}
