use super::ScriptRunner;
use crate::{config::ScriptConfig, Error, Result};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::{Duration, Instant};
use tokio::process::Command;
use tokio::time::timeout;
use tracing::{debug, warn};

pub struct PythonRunner {
    config: ScriptConfig,
}

impl PythonRunner {
    pub fn new(config: ScriptConfig) -> Self {
        Self { config }
    }
}

#[async_trait]
impl ScriptRunner for PythonRunner {
    async fn run(&self) -> Result<String> {
        debug!(
            "Spawning script: {} {} {:?}",
            self.config.interpreter, self.config.path, self.config.args
        );

        let mut cmd = Command::new(&self.config.interpreter);
        cmd.arg(&self.config.path);
        cmd.args(&self.config.args);
        cmd.stdin(Stdio::null());
        cmd.stdout(Stdio::piped());
        cmd.stderr(Stdio::piped());
        // A timed-out script must not outlive its request.
        cmd.kill_on_drop(true);

        let deadline = Duration::from_secs(self.config.timeout_secs);
        let started = Instant::now();

        let output = match timeout(deadline, cmd.output()).await {
            Ok(result) => result.map_err(|e| {
                Error::execution(format!(
                    "Failed to run {} {}: {}",
                    self.config.interpreter, self.config.path, e
                ))
            })?,
            Err(_) => {
                warn!(
                    "Script {} exceeded {}s deadline, killing it",
                    self.config.path, self.config.timeout_secs
                );
                return Err(Error::Timeout {
                    seconds: self.config.timeout_secs,
                });
            }
        };

        // The exit status is logged but never interpreted: a script that
        // fails internally still gets its text delivered to the caller.
        if !output.status.success() {
            warn!("Script {} exited with {}", self.config.path, output.status);
        }

        let mut combined = String::from_utf8_lossy(&output.stdout).into_owned();
        combined.push_str(&String::from_utf8_lossy(&output.stderr));

        debug!(
            "Script {} finished in {:?}, captured {} bytes",
            self.config.path,
            started.elapsed(),
            combined.len()
        );

        Ok(combined)
    }
}
