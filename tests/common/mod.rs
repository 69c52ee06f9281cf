pub mod fixtures;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Installs a test logger once per test binary.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
