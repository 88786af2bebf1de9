//! # rotation-engine
//!
//! Fleet sail-rotation assignment engine for the Regatta Suite.
//!
//! Given a round's race pairings and a pool of numbered/colored sails, the
//! engine computes which boat each competing team slot uses, in each race,
//! in each scoring division:
//!
//! 1. [`validate`] checks the [`FleetRotation`](rotation_types::FleetRotation)
//!    configuration against an ordered, fail-fast rule chain.
//! 2. [`assigner_for`] maps the configured rotation type and style to one of
//!    the three policies (constant, frequent, infrequent).
//! 3. [`SailAssigner::assign_sails`] produces the [`AssignmentTable`], which
//!    the caller persists or renders.
//!
//! The engine is synchronous and pure: no I/O, no shared state, each run
//! owns only its locals. Independent runs may execute in parallel.

mod assigner;
mod constant_assigner;
mod frequent_assigner;
mod infrequent_assigner;
mod validation;

pub use assigner::{assigner_for, AssignmentTable, DivisionSails, SailAssigner};
pub use constant_assigner::ConstantAssigner;
pub use frequent_assigner::FrequentAssigner;
pub use infrequent_assigner::InfrequentAssigner;
pub use validation::{validate, ConfigurationError};
