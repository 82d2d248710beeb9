//! Configuration of [`GridWorld`](super::GridWorld).
use crate::error::GridRlError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Write},
    path::Path,
};

/// Configuration of [`GridWorld`](super::GridWorld).
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct GridWorldConfig {
    /// Number of cells along one side of the grid.
    pub grid_size: usize,

    /// Probability that the intended move is the one executed.
    pub success_probability: f32,
}

impl Default for GridWorldConfig {
    fn default() -> Self {
        Self {
            grid_size: 50,
            success_probability: 0.9,
        }
    }
}

impl GridWorldConfig {
    /// Sets the grid size.
    pub fn grid_size(mut self, v: usize) -> Self {
        self.grid_size = v;
        self
    }

    /// Sets the probability of executing the intended move.
    pub fn success_probability(mut self, v: f32) -> Self {
        self.success_probability = v;
        self
    }

    /// Checks that the parameters are in their valid ranges.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size < 1 {
            return Err(GridRlError::InvalidConfig("grid_size must be >= 1".into()).into());
        }
        if !(0.0..=1.0).contains(&self.success_probability) {
            return Err(GridRlError::InvalidConfig(
                "success_probability must be in [0, 1]".into(),
            )
            .into());
        }
        Ok(())
    }

    /// Constructs [`GridWorldConfig`] from YAML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path)?;
        let rdr = BufReader::new(file);
        let b = serde_yaml::from_reader(rdr)?;
        Ok(b)
    }

    /// Saves [`GridWorldConfig`].
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
    fn test_serde_gridworld_config() -> Result<()> {
        let config = GridWorldConfig::default()
            .grid_size(3)
            .success_probability(1.0);

        let dir = TempDir::new("gridworld_config")?;
        let path = dir.path().join("gridworld_config.yaml");

        config.save(&path)?;
        let config_ = GridWorldConfig::load(&path)?;
        assert_eq!(config, config_);
        Ok(())
    }

    #[test]
    fn rejects_out_of_range_parameters() {
        assert!(GridWorldConfig::default().grid_size(0).validate().is_err());
        assert!(GridWorldConfig::default()
            .success_probability(1.5)
            .validate()
            .is_err());
    }
}
