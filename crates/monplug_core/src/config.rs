//! Configuração de thresholds via TOML.
//!
//! Exemplo de `check_system.toml`:
//!
//! ```toml
//! [thresholds.cpu]
//! warn = "80"
//! crit = "95"
//!
//! [thresholds.memory]
//! crit = "~:90"
//! ```

use crate::threshold::Threshold;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::info;

/// Erros de configuração.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Arquivo de configuração não encontrado: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Erro ao ler {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Erro ao parsear configuração: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Erro de serialização: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Par warning/critical de um label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThresholdPair {
    pub warn: Option<Threshold>,
    pub crit: Option<Threshold>,
}

/// Configuração raiz de um plugin.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Thresholds por label de performance data
    pub thresholds: BTreeMap<String, ThresholdPair>,
}

impl PluginConfig {
    /// Carrega configuração de um arquivo TOML.
    ///
    /// Arquivo ausente resulta na configuração padrão (sem thresholds).
    /// Para caminhos informados pelo usuário use [`PluginConfig::load_required`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            info!("{} não encontrado, usando configuração padrão", path.display());
            return Ok(Self::default());
        }
        Self::load_required(path)
    }

    /// Carrega configuração de um arquivo TOML que precisa existir.
    pub fn load_required(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!("Configuração carregada de {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Thresholds configurados para `label` (vazio se não houver).
    pub fn thresholds_for(&self, label: &str) -> ThresholdPair {
        self.thresholds.get(label).copied().unwrap_or_default()
    }

    /// Retorna o caminho padrão de `file_name` ao lado do executável.
    pub fn default_path(file_name: &str) -> PathBuf {
        let exe_dir = std::env::current_exe()
            .map(|p| p.parent().unwrap_or(Path::new(".")).to_path_buf())
            .unwrap_or_else(|_| PathBuf::from("."));
        exe_dir.join(file_name)
    }

    /// Valida a configuração e retorna lista de avisos para o chamador.
    ///
    /// Faixas com `start > end` são aceitas pela gramática mas não contêm
    /// valor algum: sem `@` disparam sempre, com `@` nunca disparam.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        for (label, pair) in &self.thresholds {
            for (kind, threshold) in [("warn", pair.warn), ("crit", pair.crit)] {
                if let Some(t) = threshold {
                    if t.start > t.end {
                        warnings.push(format!("{label}.{kind}: faixa vazia ({t})"));
                    }
                }
            }
        }

        warnings
    }
}
