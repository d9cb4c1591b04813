//! Repository implementations.
//!
//! - `local`: In-memory implementation for tests, demos and single-node deployments
pub mod local;

pub use local::LocalRepository;
