//! Repository trait definitions.
//!
//! One focused trait per collection, composed into [`FullRepository`]:
//!
//! - [`error`]: Error types for repository operations
//! - [`inspection`]: Inspection CRUD plus the health check
//! - [`rig`]: Rig CRUD
//! - [`inspector`]: Inspector CRUD
//!
//! Rigs and inspectors are referenced from inspections by name, so renaming
//! one through its repository trait is expected to rewrite the references.

pub mod error;
pub mod inspection;
pub mod inspector;
pub mod rig;

pub use error::{ErrorContext, RepositoryError, RepositoryResult};

pub use inspection::InspectionRepository;
pub use inspector::InspectorRepository;
pub use rig::RigRepository;

/// Composite trait bound for a complete repository implementation.
///
/// Automatically implemented for any type implementing all three collection
/// traits. Handlers hold an `Arc<dyn FullRepository>`.
pub trait FullRepository: InspectionRepository + RigRepository + InspectorRepository {}

impl<T> FullRepository for T where T: InspectionRepository + RigRepository + InspectorRepository {}
