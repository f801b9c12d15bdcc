//! Project data for a portfolio site: the projects API, and the lookup
//! chain the project pages use to find a record by slug.

pub mod core;
pub mod error;
pub mod server;
pub mod types;
pub mod view;

pub use crate::core::resolver::{HttpResolver, Outcome, ProjectResolver};
pub use crate::types::{ProjectId, ProjectRecord};
