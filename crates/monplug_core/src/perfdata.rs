//! Performance data – medições nomeadas e o bloco anexado à saída do plugin.
//!
//! Formato de uma linha:
//!
//! ```text
//! 'label'=value[UOM][;warn[;crit[;min[;max]]]]
//! ```
//!
//! Campos opcionais vazios no final são omitidos junto com seus `;`.

use crate::number::{perf_float, OptionalNumber};
use crate::status::Status;
use crate::threshold::{render_optional, Threshold};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Uma medição com thresholds e limites opcionais.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Perfdata {
    /// Nome da métrica, emitido entre aspas simples sem escape
    pub label: String,
    /// Unidade de medida (ex: "%", "B", "s")
    pub uom: String,
    pub value: f64,
    pub warn: Option<Threshold>,
    pub crit: Option<Threshold>,
    pub min: OptionalNumber,
    pub max: OptionalNumber,
}

impl Perfdata {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            ..Default::default()
        }
    }

    pub fn with_uom(mut self, uom: impl Into<String>) -> Self {
        self.uom = uom.into();
        self
    }

    pub fn with_thresholds(mut self, warn: Option<Threshold>, crit: Option<Threshold>) -> Self {
        self.warn = warn;
        self.crit = crit;
        self
    }

    pub fn with_bounds(mut self, min: impl Into<OptionalNumber>, max: impl Into<OptionalNumber>) -> Self {
        self.min = min.into();
        self.max = max.into();
        self
    }

    /// Critical tem precedência sobre Warning.
    pub fn status(&self) -> Status {
        if self.crit.is_some_and(|t| t.contains(self.value)) {
            Status::Critical
        } else if self.warn.is_some_and(|t| t.contains(self.value)) {
            Status::Warning
        } else {
            Status::Ok
        }
    }
}

impl fmt::Display for Perfdata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let head = format!("'{}'={}{}", self.label, perf_float(self.value), self.uom);
        let line = [
            head,
            render_optional(self.warn),
            render_optional(self.crit),
            self.min.to_string(),
            self.max.to_string(),
        ]
        .join(";");

        f.write_str(line.trim_end_matches(';'))
    }
}

// ──────────────────────────────────────────────
// Coleção
// ──────────────────────────────────────────────

/// Sequência ordenada de performance data.
///
/// Labels duplicados são permitidos; a ordem de inserção é preservada.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PerfdataCollection(Vec<Perfdata>);

impl PerfdataCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, perfdata: Perfdata) {
        self.0.push(perfdata);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Perfdata> {
        self.0.iter()
    }

    /// Pior status entre os membros (Ok para coleção vazia).
    pub fn status(&self) -> Status {
        let status = self.0.iter().map(Perfdata::status).max().unwrap_or_default();
        debug!("Status agregado de {} perfdata: {status}", self.0.len());
        status
    }
}

impl From<Vec<Perfdata>> for PerfdataCollection {
    fn from(items: Vec<Perfdata>) -> Self {
        Self(items)
    }
}

impl FromIterator<Perfdata> for PerfdataCollection {
    fn from_iter<I: IntoIterator<Item = Perfdata>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for PerfdataCollection {
    type Item = Perfdata;
    type IntoIter = std::vec::IntoIter<Perfdata>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a PerfdataCollection {
    type Item = &'a Perfdata;
    type IntoIter = std::slice::Iter<'a, Perfdata>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for PerfdataCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return Ok(());
        }

        f.write_str(" |")?;
        for (i, perfdata) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{perfdata}")?;
        }
        Ok(())
    }
}
