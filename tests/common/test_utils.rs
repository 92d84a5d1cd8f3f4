use script_trigger_rust::config::ScriptConfig;
use std::path::Path;
use tempfile::TempDir;

/// Create a temporary directory for test scripts
pub fn create_temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Write a shell script into the temp directory and return its path
pub fn write_script(dir: &TempDir, name: &str, body: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, body).expect("Failed to write test script");
    path.to_string_lossy().to_string()
}

/// Script config that runs a test script through `sh`, so the tests do not
/// depend on a Python toolchain being installed.
pub fn sh_config(path: impl AsRef<Path>, timeout_secs: u64) -> ScriptConfig {
    ScriptConfig {
        interpreter: "sh".to_string(),
        path: path.as_ref().to_string_lossy().to_string(),
        args: Vec::new(),
        timeout_secs,
    }
}
