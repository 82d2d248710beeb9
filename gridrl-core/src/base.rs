//! Core functionalities.
mod agent;
mod env;
mod step;
pub use agent::Agent;
pub use env::Env;
use std::fmt::Debug;
pub use step::{Step, Transition};

/// An observation of an environment.
pub trait Obs: Clone + Debug {}

/// An action on an environment.
pub trait Act: Clone + Debug {}
