//! Formatação numérica para performance data.
//!
//! Consumidores do formato (gráficos, alertas) não aceitam `inf`/`NaN`,
//! então infinitos viram o maior finito representável e NaN vira `0`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sentinela de limite superior aberto.
pub const POS_INF: f64 = f64::INFINITY;

/// Sentinela de limite inferior aberto.
pub const NEG_INF: f64 = f64::NEG_INFINITY;

/// Formata um float em notação fixa com o menor número de dígitos que
/// preserva o valor exato.
pub fn perf_float(x: f64) -> String {
    let x = if x.is_nan() {
        0.0
    } else if x == POS_INF {
        f64::MAX
    } else if x == NEG_INF {
        -f64::MAX
    } else {
        x
    };

    // `Display` de f64 nunca usa expoente e emite a forma mais curta.
    format!("{x}")
}

/// Número opcional (min/max de um performance data).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OptionalNumber(pub Option<f64>);

impl OptionalNumber {
    pub const NONE: OptionalNumber = OptionalNumber(None);

    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}

impl From<f64> for OptionalNumber {
    fn from(value: f64) -> Self {
        Self(Some(value))
    }
}

impl From<Option<f64>> for OptionalNumber {
    fn from(value: Option<f64>) -> Self {
        Self(value)
    }
}

impl fmt::Display for OptionalNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => f.write_str(&perf_float(value)),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_becomes_zero() {
        assert_eq!(perf_float(f64::NAN), "0");
    }

    #[test]
    fn infinities_become_max_finite() {
        let max = format!("{}", f64::MAX);
        assert_eq!(perf_float(POS_INF), max);
        assert_eq!(perf_float(NEG_INF), format!("-{max}"));
        assert!(max.starts_with("17976931348623157"));
        assert_eq!(max.len(), 309);
    }

    #[test]
    fn fixed_notation_shortest_digits() {
        assert_eq!(perf_float(1.5), "1.5");
        assert_eq!(perf_float(512.0), "512");
        assert_eq!(perf_float(-1.5), "-1.5");
        assert_eq!(perf_float(0.0), "0");
        assert_eq!(perf_float(0.1), "0.1");
        assert_eq!(perf_float(1e-7), "0.0000001");
        assert_eq!(perf_float(1e21), "1000000000000000000000");
    }

    #[test]
    fn optional_number_rendering() {
        assert_eq!(OptionalNumber::NONE.to_string(), "");
        assert_eq!(OptionalNumber::from(100.0).to_string(), "100");
        assert_eq!(OptionalNumber::from(f64::NAN).to_string(), "0");
        assert!(!OptionalNumber::from(None).is_set());
        assert!(OptionalNumber::from(Some(0.0)).is_set());
    }
}
