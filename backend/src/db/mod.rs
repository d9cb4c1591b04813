//! Storage for inspections, rigs and inspectors.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │  HTTP handlers / report services                        │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Service Layer (services.rs)                            │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  Repository Traits (repository/)                        │
//! │  - InspectionRepository                                 │
//! │  - RigRepository                                        │
//! │  - InspectorRepository                                  │
//! └───────────────────┬─────────────────────────────────────┘
//!                     │
//! ┌───────────────────▼─────────────────────────────────────┐
//! │  LocalRepository (in-memory, optional JSON seed)        │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! # Recommended Usage
//!
//! ```no_run
//! use rig_inspect::db::{services, RepositoryFactory};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let repo = match RepositoryFactory::from_default_config()? {
//!         Some(repo) => repo,
//!         None => RepositoryFactory::from_env()?,
//!     };
//!     let rigs = services::list_rigs(repo.as_ref()).await?;
//!     Ok(())
//! }
//! ```

pub mod factory;
pub mod repo_config;
pub mod repositories;
pub mod repository;
pub mod seed;
pub mod services;

pub use factory::{RepositoryFactory, RepositoryType};
pub use repo_config::RepositoryConfig;
pub use repositories::LocalRepository;
pub use repository::{
    ErrorContext, FullRepository, InspectionRepository, InspectorRepository, RepositoryError,
    RepositoryResult, RigRepository,
};
pub use seed::SeedData;
