//! Investment-project registry core
//!
//! Record model and query/update/aggregation engines for tracking
//! capital-investment projects across terminals and regional clusters:
//! RKAP budget plans, monthly realization and prognosis, contract data,
//! and open issues.
//!
//! The core is storage-agnostic. A bootstrap layer (not part of this
//! crate) constructs one [`store::ProjectStore`] handle, either PostgreSQL
//! via [`database::DatabaseManager`] or the in-memory store, and hands it
//! to a [`registry::ProjectRegistry`], which exposes the operation surface:
//! filtered count-then-page listing, point lookups, guarded creation,
//! full/progress/issue updates with field-presence masking, hard delete,
//! and the dashboard summary.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use invest_registry::models::NewProject;
//! use invest_registry::registry::ProjectRegistry;
//! use invest_registry::store::MemoryProjectStore;
//!
//! # async fn demo() -> invest_registry::error::RegistryResult<()> {
//! let registry = ProjectRegistry::new(Arc::new(MemoryProjectStore::new()));
//! let project = registry
//!     .create(NewProject {
//!         id_root: "P/19.02.022-001".to_string(),
//!         id_investasi: "INV-2025-001".to_string(),
//!         project_definition: "Perpanjangan dermaga".to_string(),
//!         ..NewProject::default()
//!     })
//!     .await?;
//! assert_eq!(project.klaster_regional, "Regional 2");
//! # Ok(())
//! # }
//! ```

// Core error handling
pub mod error;

// Cross-backend identifier codec
pub mod id_codec;

// Entity schema and typed patch payloads
pub mod models;

// Storage contract and the in-memory backend
pub mod store;

// Query / patch / uniqueness / aggregation engines
pub mod registry;

// PostgreSQL backend (when enabled)
#[cfg(feature = "database")]
pub mod database;

// Public re-exports for the common surface
pub use error::{RegistryError, RegistryResult};
pub use models::{
    FilterOptions, InvestmentProject, IssuePatch, NewProject, ProgressPatch, ProjectFilter,
    ProjectPage, ProjectUpdate, StatusIssue, SummaryStats, TypeInvestasi,
};
pub use registry::ProjectRegistry;
pub use store::{MemoryProjectStore, ProjectStore, SumField};

// Database integration re-exports (when the database feature is enabled)
#[cfg(feature = "database")]
pub use database::{DatabaseConfig, DatabaseManager, MonitorService, PgProjectStore};
