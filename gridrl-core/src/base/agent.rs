//! Agent.
use super::{Env, Transition};
use anyhow::Result;

/// Represents a trainable policy on an environment.
///
/// An agent samples actions from its current value estimates and updates
/// those estimates from observed transitions.
pub trait Agent<E: Env> {
    /// Configuration.
    type Config: Clone;

    /// Builds the agent.
    fn build(config: Self::Config) -> Result<Self>
    where
        Self: Sized;

    /// Samples an action given an observation.
    fn sample(&mut self, obs: &E::Obs) -> E::Act;

    /// Performs an update step for a single transition.
    ///
    /// Returns the temporal-difference error of the update.
    fn update(&mut self, transition: &Transition<E>) -> f32;

    /// Name of the algorithm, used in progress logs.
    fn name(&self) -> &'static str;
}
