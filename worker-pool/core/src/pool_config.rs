use crate::PoolError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Inclusive range of simulated work duration, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DelayRange {
    pub min_ms: u64,
    pub max_ms: u64,
}

impl DelayRange {
    pub fn new(min_ms: u64, max_ms: u64) -> Self {
        Self { min_ms, max_ms }
    }

    /// Ordered (low, high) bounds, tolerant of a range written backwards
    pub fn bounds(&self) -> (u64, u64) {
        (self.min_ms.min(self.max_ms), self.min_ms.max(self.max_ms))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PoolConfig {
    /// Number of workers, fixed for the life of the pool
    pub num_workers: usize,
    /// Capacity of both the job queue and the result queue
    pub queue_capacity: usize,
    /// Cancels the run this many milliseconds after submit; `None` waits forever
    pub timeout_ms: Option<u64>,
    /// Multiplier applied by the default processor
    pub factor: i64,
    /// Simulated work duration per job
    pub work_delay_ms: Option<DelayRange>,
}

impl Default for PoolConfig {
    fn default() -> Self {
        Self {
            num_workers: 3,
            queue_capacity: 16,
            timeout_ms: None,
            factor: 2,
            work_delay_ms: None,
        }
    }
}

impl PoolConfig {
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PoolError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|source| PoolError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self, PoolError> {
        let config: PoolConfig = serde_json::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), PoolError> {
        if self.num_workers == 0 {
            return Err(PoolError::InvalidConfig(
                "num_workers must be at least 1".to_string(),
            ));
        }
        if self.queue_capacity == 0 {
            return Err(PoolError::InvalidConfig(
                "queue_capacity must be at least 1".to_string(),
            ));
        }
        if let Some(delay) = self.work_delay_ms {
            if delay.min_ms > delay.max_ms {
                return Err(PoolError::InvalidConfig(format!(
                    "work_delay_ms.min_ms ({}) exceeds max_ms ({})",
                    delay.min_ms, delay.max_ms
                )));
            }
        }
        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_ms.map(Duration::from_millis)
    }

    pub fn with_workers(mut self, num_workers: usize) -> Self {
        self.num_workers = num_workers;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = Some(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
        self
    }

    pub fn with_queue_capacity(mut self, queue_capacity: usize) -> Self {
        self.queue_capacity = queue_capacity;
        self
    }
}
