pub mod card;
pub mod detail;

/// Listing page every error state links back to.
pub const PROJECTS_HREF: &str = "/projects";
