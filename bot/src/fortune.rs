//! Random quotes for `fortune | cowsay`.
//!
//! The quote comes from an external program, `fortune` by default. The
//! program is run once per request with no stdin, its output drained on
//! background threads, and it is killed if it outlives the configured
//! timeout.

use std::io::Read;
use std::process::{Command, Stdio};
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::debug;
use wait_timeout::ChildExt;

use crate::config::FortuneConfig;
use crate::error::FortuneError;

/// Quote used in place of a fortune when the feature is switched off.
pub const DISABLED_FORTUNE_TEXT: &str = "fortune is disabled.";

/// A source of random quotes.
pub trait FortuneSource: Send + Sync {
    /// Returns one quote.
    fn fetch(&self) -> Result<String, FortuneError>;
}

/// Stands in for the fortune program when the feature is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledFortune;

impl FortuneSource for DisabledFortune {
    fn fetch(&self) -> Result<String, FortuneError> {
        Ok(DISABLED_FORTUNE_TEXT.to_string())
    }
}

/// Runs an external program and uses its stdout as the quote.
#[derive(Debug, Clone)]
pub struct CommandFortune {
    program: String,
    args: Vec<String>,
    timeout: Duration,
}

impl CommandFortune {
    pub fn new(program: impl Into<String>, args: Vec<String>, timeout: Duration) -> Self {
        Self {
            program: program.into(),
            args,
            timeout,
        }
    }

    pub fn from_config(config: &FortuneConfig) -> Self {
        Self::new(
            config.command.clone(),
            config.args.clone(),
            Duration::from_millis(config.timeout_ms),
        )
    }
}

impl FortuneSource for CommandFortune {
    fn fetch(&self) -> Result<String, FortuneError> {
        debug!(program = %self.program, args = ?self.args, "Requesting fortune");
        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|source| FortuneError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        // Drain both pipes so a chatty child cannot block on a full buffer.
        let stdout_thread = child.stdout.take().map(drain_pipe);
        let stderr_thread = child.stderr.take().map(drain_pipe);

        let status = match child.wait_timeout(self.timeout) {
            Ok(Some(status)) => status,
            Ok(None) => {
                debug!(
                    program = %self.program,
                    timeout = ?self.timeout,
                    "Fortune timed out, killing process"
                );
                let _ = child.kill();
                let _ = child.wait();
                return Err(FortuneError::Timeout {
                    timeout_ms: u64::try_from(self.timeout.as_millis()).unwrap_or(u64::MAX),
                });
            }
            Err(err) => {
                let _ = child.kill();
                let _ = child.wait();
                return Err(FortuneError::Wait(err));
            }
        };

        let stdout = join_pipe(stdout_thread, &self.program);
        let stderr = join_pipe(stderr_thread, &self.program);

        if !status.success() {
            return Err(FortuneError::Failed {
                status,
                stderr: stderr.trim().to_string(),
            });
        }

        let quote = stdout.strip_suffix('\n').unwrap_or(&stdout);
        if quote.trim().is_empty() {
            return Err(FortuneError::Empty);
        }
        Ok(quote.to_string())
    }
}

/// Picks the fortune source described by `config`.
pub fn fortune_source(config: &FortuneConfig) -> Box<dyn FortuneSource> {
    if config.enabled {
        Box::new(CommandFortune::from_config(config))
    } else {
        Box::new(DisabledFortune)
    }
}

fn drain_pipe<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<std::io::Result<Vec<u8>>> {
    std::thread::spawn(move || {
        let mut buf = Vec::new();
        pipe.read_to_end(&mut buf)?;
        Ok(buf)
    })
}

fn join_pipe(handle: Option<JoinHandle<std::io::Result<Vec<u8>>>>, program: &str) -> String {
    let buf = match handle.map(JoinHandle::join) {
        Some(Ok(Ok(buf))) => buf,
        Some(Ok(Err(err))) => {
            debug!(program, error = %err, "Failed to read fortune output");
            Vec::new()
        }
        Some(Err(_)) | None => Vec::new(),
    };
    String::from_utf8_lossy(&buf).into_owned()
}
