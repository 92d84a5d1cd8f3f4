use async_trait::async_trait;
use script_trigger_rust::{runner::ScriptRunner, Error, Result};
use std::sync::{Arc, Mutex};

/// Mock script runner for testing: returns a canned output or error and
/// records how often it was invoked.
pub struct MockScriptRunner {
    output: String,
    error: Option<String>,
    calls: Arc<Mutex<usize>>,
}

impl MockScriptRunner {
    pub fn with_output(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            error: None,
            calls: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_error(message: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            error: Some(message.into()),
            calls: Arc::new(Mutex::new(0)),
        }
    }

    /// Handle to the call counter; keep it before handing the runner to the
    /// router, the runner itself moves into the app state.
    pub fn calls(&self) -> Arc<Mutex<usize>> {
        self.calls.clone()
    }
}

#[async_trait]
impl ScriptRunner for MockScriptRunner {
    async fn run(&self) -> Result<String> {
        *self.calls.lock().unwrap() += 1;

        if let Some(ref message) = self.error {
            return Err(Error::execution(message.clone()));
        }

        Ok(self.output.clone())
    }
}
