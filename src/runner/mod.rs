mod python;

pub use python::PythonRunner;

use crate::Result;
use async_trait::async_trait;

/// Seam between the HTTP layer and the child process, so handlers can be
/// exercised against a canned implementation.
#[async_trait]
pub trait ScriptRunner: Send + Sync {
    /// Runs the configured script to completion and returns its merged
    /// stdout/stderr text.
    async fn run(&self) -> Result<String>;
}
