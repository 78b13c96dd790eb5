//! Execução de um check e conversão do resultado em exit code.
//!
//! Contrato de processo (convenção Nagios):
//!
//! | Exit | Significado |
//! |------|-------------|
//! | 0 | OK |
//! | 1 | WARNING |
//! | 2 | CRITICAL |
//! | 3 | UNKNOWN (erro, falha de escrita ou ajuda exibida no terminal) |
//!
//! Toda a saída vai para stdout; stderr fica livre para logs.

use crate::perfdata::PerfdataCollection;
use crate::status::Status;
use std::collections::BTreeMap;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::{debug, info, warn};

/// Exit code UNKNOWN.
pub const UNKNOWN: u8 = 3;

/// Erros de um check, indexados pelo contexto em que ocorreram.
pub type CheckErrors = BTreeMap<String, Box<dyn std::error::Error + Send + Sync>>;

/// Resultado de um check bem-sucedido.
#[derive(Debug, Clone, Default)]
pub struct CheckOutput {
    /// Texto legível (primeira parte da linha de saída)
    pub output: String,
    pub perfdata: PerfdataCollection,
}

impl CheckOutput {
    pub fn new(output: impl Into<String>, perfdata: PerfdataCollection) -> Self {
        Self {
            output: output.into(),
            perfdata,
        }
    }
}

/// Converte o status agregado em exit code do processo.
pub fn exit_code(status: Status) -> u8 {
    match status {
        Status::Ok => 0,
        Status::Warning => 1,
        Status::Critical => 2,
    }
}

/// Executa o check sobre o stdout real do processo.
///
/// Em terminal interativo imprime `on_terminal()` e não executa o check.
pub fn execute_check<T, C>(on_terminal: T, check: C) -> ExitCode
where
    T: FnOnce() -> String,
    C: FnOnce() -> Result<CheckOutput, CheckErrors>,
{
    let stdout = io::stdout();
    let interactive = stdout.is_terminal();
    let code = run_check(&mut stdout.lock(), interactive, on_terminal, check);
    ExitCode::from(code)
}

/// Núcleo testável de [`execute_check`] sobre qualquer writer.
pub fn run_check<W, T, C>(out: &mut W, interactive: bool, on_terminal: T, check: C) -> u8
where
    W: Write,
    T: FnOnce() -> String,
    C: FnOnce() -> Result<CheckOutput, CheckErrors>,
{
    if interactive {
        info!("stdout é um terminal, exibindo ajuda");
        let _ = out.write_all(on_terminal().as_bytes());
        let _ = out.flush();
        return UNKNOWN;
    }

    let result = match check() {
        Ok(result) => result,
        Err(errors) => {
            warn!("Check reportou {} erro(s)", errors.len());
            for (context, err) in &errors {
                let _ = writeln!(out, "{context}: {err}");
            }
            let _ = out.flush();
            return UNKNOWN;
        }
    };

    let line = format!("{}{}", result.output, result.perfdata);
    if let Err(e) = out.write_all(line.as_bytes()).and_then(|()| out.flush()) {
        warn!("Falha ao escrever saída do check: {e}");
        return UNKNOWN;
    }

    let status = result.perfdata.status();
    debug!("Check finalizado com status {status}");
    exit_code(status)
}
