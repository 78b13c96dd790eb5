//! Converte uma amostra do sistema em saída de plugin.

use crate::monitor::SystemSample;
use monplug_core::check::{CheckErrors, CheckOutput};
use monplug_core::config::PluginConfig;
use monplug_core::perfdata::{Perfdata, PerfdataCollection};
use monplug_core::OptionalNumber;

/// Monta a linha de saída e o performance data a partir de `sample`.
pub fn build_report(sample: &SystemSample, config: &PluginConfig) -> Result<CheckOutput, CheckErrors> {
    if sample.memory_total == 0 {
        let mut errors = CheckErrors::new();
        errors.insert("memory".into(), "total de memória indisponível".into());
        return Err(errors);
    }

    let cpu = round2(f64::from(sample.cpu_usage));
    let memory = percent(sample.memory_used, sample.memory_total);

    let mut perfdata = PerfdataCollection::new();
    perfdata.push(percent_perfdata(config, "cpu", cpu));
    perfdata.push(percent_perfdata(config, "memory", memory));

    // Sem swap configurado não há o que medir
    if sample.swap_total > 0 {
        let swap = percent(sample.swap_used, sample.swap_total);
        perfdata.push(percent_perfdata(config, "swap", swap));
    }

    for (label, value) in ["load1", "load5", "load15"].into_iter().zip(sample.load) {
        let pair = config.thresholds_for(label);
        perfdata.push(
            Perfdata::new(label, round2(value))
                .with_thresholds(pair.warn, pair.crit)
                .with_bounds(0.0, OptionalNumber::NONE),
        );
    }

    for disk in &sample.disks {
        let label = format!("disk_{}", disk.mount);
        perfdata.push(percent_perfdata(config, &label, percent(disk.used, disk.total)));
    }

    let output = format!(
        "SYSTEM {} - cpu {cpu:.1}%, memory {memory:.1}%",
        perfdata.status()
    );
    Ok(CheckOutput::new(output, perfdata))
}

fn percent_perfdata(config: &PluginConfig, label: &str, value: f64) -> Perfdata {
    let pair = config.thresholds_for(label);
    Perfdata::new(label, value)
        .with_uom("%")
        .with_thresholds(pair.warn, pair.crit)
        .with_bounds(0.0, 100.0)
}

fn percent(used: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(used as f64 / total as f64 * 100.0)
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::monitor::DiskSample;
    use monplug_core::Status;

    fn sample() -> SystemSample {
        SystemSample {
            cpu_usage: 12.5,
            memory_used: 4 * 1024,
            memory_total: 16 * 1024,
            swap_used: 0,
            swap_total: 0,
            load: [0.5, 0.25, 0.125],
            disks: vec![DiskSample {
                mount: "/".into(),
                used: 70,
                total: 100,
            }],
        }
    }

    fn config(toml: &str) -> PluginConfig {
        PluginConfig::from_toml_str(toml).unwrap()
    }

    #[test]
    fn renders_all_metrics_without_thresholds() {
        let result = build_report(&sample(), &PluginConfig::default()).unwrap();
        assert_eq!(result.output, "SYSTEM OK - cpu 12.5%, memory 25.0%");
        assert_eq!(
            result.perfdata.to_string(),
            " |'cpu'=12.5%;;;0;100 'memory'=25%;;;0;100 'load1'=0.5;;;0 \
             'load5'=0.25;;;0 'load15'=0.13;;;0 'disk_/'=70%;;;0;100"
        );
    }

    #[test]
    fn values_are_rounded_to_two_decimals() {
        let mut s = sample();
        s.cpu_usage = 33.333_33;
        s.load = [1.004, 2.675_1, 0.125];
        let result = build_report(&s, &PluginConfig::default()).unwrap();
        let value = |label: &str| result.perfdata.iter().find(|p| p.label == label).unwrap().value;
        assert_eq!(value("cpu"), 33.33);
        assert_eq!(value("load1"), 1.0);
        assert_eq!(value("load5"), 2.68);
        assert_eq!(value("load15"), 0.13);
    }

    #[test]
    fn swap_is_reported_when_present() {
        let mut s = sample();
        s.swap_used = 1;
        s.swap_total = 3;
        let result = build_report(&s, &PluginConfig::default()).unwrap();
        let swap = result
            .perfdata
            .iter()
            .find(|p| p.label == "swap")
            .unwrap();
        assert_eq!(swap.value, 33.33);
    }

    #[test]
    fn thresholds_come_from_config() {
        let cfg = config(
            r#"
[thresholds.cpu]
warn = "10"
crit = "50"

[thresholds."disk_/"]
crit = "60"
"#,
        );
        let result = build_report(&sample(), &cfg).unwrap();
        assert_eq!(result.perfdata.status(), Status::Critical);
        assert!(result.output.starts_with("SYSTEM CRITICAL - "));

        let cpu = result.perfdata.iter().next().unwrap();
        assert_eq!(cpu.to_string(), "'cpu'=12.5%;10;50;0;100");
        assert_eq!(cpu.status(), Status::Warning);
    }

    #[test]
    fn missing_memory_total_is_an_error() {
        let mut s = sample();
        s.memory_total = 0;
        let errors = build_report(&s, &PluginConfig::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors["memory"].to_string(),
            "total de memória indisponível"
        );
    }

    #[test]
    fn percent_handles_zero_total() {
        assert_eq!(percent(5, 0), 0.0);
        assert_eq!(percent(1, 8), 12.5);
    }
}
