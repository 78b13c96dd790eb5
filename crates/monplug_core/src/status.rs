//! Níveis de severidade de um check.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Severidade resultante da avaliação de thresholds.
///
/// A ordem é numérica: `Ok < Warning < Critical`. Agregações usam o máximo.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Status {
    #[default]
    Ok,
    Warning,
    Critical,
}

impl Status {
    /// Rótulo em maiúsculas usado na linha de saída do plugin.
    pub fn label(self) -> &'static str {
        match self {
            Status::Ok => "OK",
            Status::Warning => "WARNING",
            Status::Critical => "CRITICAL",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordering_is_by_severity() {
        assert!(Status::Ok < Status::Warning);
        assert!(Status::Warning < Status::Critical);
        assert_eq!(
            [Status::Warning, Status::Ok, Status::Critical]
                .into_iter()
                .max(),
            Some(Status::Critical)
        );
    }

    #[test]
    fn default_is_ok() {
        assert_eq!(Status::default(), Status::Ok);
    }

    #[test]
    fn labels() {
        assert_eq!(Status::Ok.to_string(), "OK");
        assert_eq!(Status::Warning.to_string(), "WARNING");
        assert_eq!(Status::Critical.to_string(), "CRITICAL");
    }
}
