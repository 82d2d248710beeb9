//! Environment step.
use super::Env;

/// Represents an action, observation and reward tuple `(a_t, o_t+1, r_t)`.
///
/// An environment emits a [`Step`] object at every interaction step. The
/// action stored here is the one that was actually executed, which may differ
/// from the intended one in a stochastic environment.
pub struct Step<E: Env> {
    /// Action actually executed.
    pub act: E::Act,

    /// Observation after the action.
    pub obs: E::Obs,

    /// Reward.
    pub reward: f32,

    /// Flag denoting if the episode is terminated.
    pub is_terminated: bool,
}

impl<E: Env> Step<E> {
    /// Constructs a [`Step`] object.
    pub fn new(obs: E::Obs, act: E::Act, reward: f32, is_terminated: bool) -> Self {
        Step {
            act,
            obs,
            reward,
            is_terminated,
        }
    }
}

/// A transition `(o_t, a_t, o_t+1, r_t)` consumed by [`Agent::update`].
///
/// Tabular agents apply each transition to their value table as soon as it is
/// observed, so transitions are built by the trainer from consecutive
/// observations and never buffered.
///
/// [`Agent::update`]: super::Agent::update
pub struct Transition<E: Env> {
    /// Observation before the action.
    pub obs: E::Obs,

    /// Action actually executed.
    pub act: E::Act,

    /// Observation after the action.
    pub next_obs: E::Obs,

    /// Reward.
    pub reward: f32,
}
