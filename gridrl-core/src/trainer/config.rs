//! Configuration of [`Trainer`](super::Trainer).
use crate::error::GridRlError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`Trainer`](super::Trainer).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct TrainerConfig {
    /// Number of episodes to run.
    pub episodes: usize,

    /// Interval of progress logs in episodes.
    pub progress_interval: usize,

    /// Interval of flushing the recorder in episodes.
    pub flush_record_interval: usize,

    /// Optional diagnostic cap on moves per episode.
    ///
    /// `None` keeps episodes unbounded, the original behavior.
    pub max_steps_per_episode: Option<usize>,

    /// Seed of the environment's random number generator.
    pub seed: i64,
}

impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            episodes: 10_000,
            progress_interval: 100,
            flush_record_interval: 1000,
            max_steps_per_episode: None,
            seed: 0,
        }
    }
}

impl TrainerConfig {
    /// Sets the number of episodes.
    pub fn episodes(mut self, v: usize) -> Self {
        self.episodes = v;
        self
    }

    /// Sets the interval of progress logs in episodes.
    pub fn progress_interval(mut self, v: usize) -> Self {
        self.progress_interval = v;
        self
    }

    /// Sets the interval of flushing the recorder in episodes.
    pub fn flush_record_interval(mut self, v: usize) -> Self {
        self.flush_record_interval = v;
        self
    }

    /// Sets the diagnostic cap on moves per episode.
    pub fn max_steps_per_episode(mut self, v: Option<usize>) -> Self {
        self.max_steps_per_episode = v;
        self
    }

    /// Sets the seed of the environment's random number generator.
    pub fn seed(mut self, v: i64) -> Self {
        self.seed = v;
        self
    }

    /// Checks that the parameters are in their valid ranges.
    ///
    /// The intervals divide episode counters, so they must be at least 1.
    pub fn validate(&self) -> Result<()> {
        if self.progress_interval < 1 {
            return Err(GridRlError::InvalidConfig("progress_interval must be >= 1".into()).into());
        }
        if self.flush_record_interval < 1 {
            return Err(
                GridRlError::InvalidConfig("flush_record_interval must be >= 1".into()).into(),
            );
        }
        if let Some(cap) = self.max_steps_per_episode {
            if cap < 1 {
                return Err(GridRlError::InvalidConfig(
                    "max_steps_per_episode must be >= 1 when set".into(),
                )
                .into());
            }
        }
        Ok(())
    }

    /// Constructs [`TrainerConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`TrainerConfig`].
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(serde_yaml::to_string(&self)?.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_serde_trainer_config() -> Result<()> {
        let config = TrainerConfig::default()
            .episodes(100)
            .progress_interval(10)
            .max_steps_per_episode(Some(1000))
            .seed(42);

        let dir = TempDir::new("trainer_config")?;
        let path = dir.path().join("trainer_config.yaml");

        config.save(&path)?;
        let config_ = TrainerConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn rejects_zero_intervals() {
        assert!(TrainerConfig::default()
            .progress_interval(0)
            .validate()
            .is_err());
        assert!(TrainerConfig::default()
            .flush_record_interval(0)
            .validate()
            .is_err());
        assert!(TrainerConfig::default()
            .max_steps_per_episode(Some(0))
            .validate()
            .is_err());
        assert!(TrainerConfig::default().validate().is_ok());
    }
}
