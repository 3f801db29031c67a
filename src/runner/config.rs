// Runner configuration

/// Runner configuration
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Lower bound applied to every requested timeout, in milliseconds
    pub min_timeout_ms: u64,
    /// Maximum captured bytes per stream (stdout and stderr each)
    pub max_output_bytes: usize,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            min_timeout_ms: 100,
            max_output_bytes: 1048576, // 1MB
        }
    }
}
