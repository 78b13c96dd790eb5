//! Thresholds de faixa no formato de plugins Nagios.
//!
//! Gramática aceita (sem espaços):
//!
//! ```text
//! threshold := "@"? ( ( start? ":" )? number | start ":" )
//! start     := number | "~"
//! number    := "-"? digits ( "." digits )?
//! ```
//!
//! Exemplos: `10`, `:10`, `10:`, `~:10`, `-5:5`, `@0:3.5`.
//!
//! Um threshold ausente é representado por `Option<Threshold>::None`, que
//! renderiza como texto vazio e nunca dispara.

use crate::number::{perf_float, NEG_INF, POS_INF};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Texto que não corresponde à gramática de thresholds.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid threshold: {0:?}")]
pub struct InvalidThreshold(pub String);

/// Faixa `[start, end]`, opcionalmente invertida com `@`.
///
/// `start <= end` não é imposto: a gramática aceita qualquer par e a
/// comparação é puramente aritmética.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Threshold {
    pub inverted: bool,
    /// Pode ser [`NEG_INF`] (limite inferior aberto, `~`).
    pub start: f64,
    /// Pode ser [`POS_INF`] (limite superior aberto).
    pub end: f64,
}

impl Threshold {
    pub fn new(inverted: bool, start: f64, end: f64) -> Self {
        Self {
            inverted,
            start,
            end,
        }
    }

    /// Indica se `value` dispara este threshold.
    ///
    /// Regra literal do formato consumido: `(start <= value <= end) == inverted`.
    pub fn contains(&self, value: f64) -> bool {
        (self.start <= value && value <= self.end) == self.inverted
    }
}

impl FromStr for Threshold {
    type Err = InvalidThreshold;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        if !matches_grammar(text) {
            debug!("Threshold rejeitado: {text:?}");
            return Err(InvalidThreshold(text.to_owned()));
        }

        let (inverted, body) = match text.strip_prefix('@') {
            Some(rest) => (true, rest),
            None => (false, text),
        };

        let (start, end) = match body.split_once(':') {
            None => (0.0, parse_bound(body).unwrap_or(POS_INF)),
            Some((start, end)) => {
                let start = match start {
                    "" => 0.0,
                    "~" => NEG_INF,
                    other => parse_bound(other).unwrap_or(POS_INF),
                };
                let end = match end {
                    "" => POS_INF,
                    other => parse_bound(other).unwrap_or(POS_INF),
                };
                (start, end)
            }
        };

        Ok(Self {
            inverted,
            start,
            end,
        })
    }
}

impl TryFrom<String> for Threshold {
    type Error = InvalidThreshold;

    fn try_from(text: String) -> Result<Self, Self::Error> {
        text.parse()
    }
}

impl From<Threshold> for String {
    fn from(threshold: Threshold) -> Self {
        threshold.to_string()
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inverted {
            f.write_str("@")?;
        }

        if self.start == 0.0 {
            if self.end == POS_INF {
                f.write_str("0:")
            } else {
                f.write_str(&perf_float(self.end))
            }
        } else {
            if self.start == NEG_INF {
                f.write_str("~")?;
            } else {
                f.write_str(&perf_float(self.start))?;
            }
            f.write_str(":")?;
            if self.end != POS_INF {
                f.write_str(&perf_float(self.end))?;
            }
            Ok(())
        }
    }
}

/// Renderiza um threshold opcional (vazio quando ausente).
pub(crate) fn render_optional(threshold: Option<Threshold>) -> String {
    threshold.map(|t| t.to_string()).unwrap_or_default()
}

// ──────────────────────────────────────────────
// Gramática
// ──────────────────────────────────────────────

fn matches_grammar(text: &str) -> bool {
    let body = text.strip_prefix('@').unwrap_or(text);
    match body.split_once(':') {
        None => is_number(body),
        Some((start, "")) => is_start(start),
        Some((start, end)) => (start.is_empty() || is_start(start)) && is_number(end),
    }
}

fn is_start(s: &str) -> bool {
    s == "~" || is_number(s)
}

fn is_number(s: &str) -> bool {
    let unsigned = s.strip_prefix('-').unwrap_or(s);
    match unsigned.split_once('.') {
        Some((int, frac)) => is_digits(int) && is_digits(frac),
        None => is_digits(unsigned),
    }
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Literais que estouram para ±inf contam como falha de parse.
fn parse_bound(s: &str) -> Option<f64> {
    s.parse::<f64>().ok().filter(|v| v.is_finite())
}
