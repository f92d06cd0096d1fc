use std::env;
use std::str::FromStr;
use std::time::Duration;

/// Compute worker pool configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkerConfig {
    /// Number of worker tasks draining the job queue.
    pub workers: usize,
    /// Bounded job-queue capacity; `submit` waits when full.
    pub queue_capacity: usize,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            workers: default_workers(),
            queue_capacity: 64,
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Compute worker pool settings.
    pub worker: WorkerConfig,
    /// How long a price flash stays lit in the realtime store.
    pub flash_duration: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            worker: WorkerConfig::default(),
            flash_duration: Duration::from_millis(800),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            worker: WorkerConfig {
                workers: positive_env("KAHIN_WORKERS").unwrap_or(defaults.worker.workers),
                queue_capacity: positive_env("KAHIN_QUEUE_CAPACITY")
                    .unwrap_or(defaults.worker.queue_capacity),
            },
            flash_duration: positive_env("KAHIN_FLASH_MS")
                .map(Duration::from_millis)
                .unwrap_or(defaults.flash_duration),
        }
    }
}

/// Read a strictly positive number; zero, negatives and junk fall back to the default.
fn positive_env<T: FromStr + PartialOrd + Default>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|raw| parse_positive(&raw))
}

fn parse_positive<T: FromStr + PartialOrd + Default>(raw: &str) -> Option<T> {
    raw.trim().parse().ok().filter(|v| *v > T::default())
}

fn default_workers() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}
