//! Slug lookup across the remote API, the static dataset and the built-in
//! fallback list, tried in that order.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::{
    core::{
        data::{ApiSource, DatasetLocation, DatasetSource},
        fallback::builtin_projects,
        settings::Settings,
    },
    error::SourceError,
    types::{find_by_slug, ProjectRecord},
};

pub const NOT_FOUND_MESSAGE: &str = "Project not found";
pub const LOAD_FAILED_MESSAGE: &str = "Failed to load project data";

/// A source answering single-project queries.
#[async_trait(?Send)]
pub trait RemoteProjects {
    /// Any error, including a non-success status, sends the lookup on to
    /// the next source.
    async fn fetch(&self, slug: &str) -> Result<ProjectRecord, SourceError>;
}

/// A source that only hands out the whole dataset.
#[async_trait(?Send)]
pub trait ProjectDataset {
    async fn load(&self) -> Result<Vec<ProjectRecord>, SourceError>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    Found(ProjectRecord),
    /// The dataset loaded but no source knows the slug. This is the
    /// "Project not found" failure; `Failed` only carries load failures.
    NotFound,
    Failed(String),
}

impl Outcome {
    /// User-facing message for the error outcomes.
    pub fn message(&self) -> Option<&str> {
        match self {
            Outcome::Found(_) => None,
            Outcome::NotFound => Some(NOT_FOUND_MESSAGE),
            Outcome::Failed(reason) => Some(reason),
        }
    }
}

/// How the dataset step ended when it did not produce a record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Miss {
    NotFound,
    LoadFailed,
}

impl From<Miss> for Outcome {
    fn from(miss: Miss) -> Self {
        match miss {
            Miss::NotFound => Outcome::NotFound,
            Miss::LoadFailed => Outcome::Failed(LOAD_FAILED_MESSAGE.to_string()),
        }
    }
}

pub struct ProjectResolver<R, D> {
    remote: R,
    dataset: D,
    fallback: Vec<ProjectRecord>,
}

pub type HttpResolver = ProjectResolver<ApiSource, DatasetSource>;

impl HttpResolver {
    pub fn from_settings(settings: &Settings) -> Self {
        let timeout = Duration::from_secs(settings.request_timeout_secs.value);
        ProjectResolver::new(
            ApiSource::new(&settings.api_base_url.value, timeout),
            DatasetSource::new(DatasetLocation::parse(&settings.local_dataset.value), timeout),
            builtin_projects(),
        )
    }
}

impl<R: RemoteProjects, D: ProjectDataset> ProjectResolver<R, D> {
    pub fn new(remote: R, dataset: D, fallback: Vec<ProjectRecord>) -> Self {
        ProjectResolver {
            remote,
            dataset,
            fallback,
        }
    }

    pub async fn resolve(&self, slug: &str) -> Outcome {
        match self.remote.fetch(slug).await {
            Ok(record) => return Outcome::Found(record),
            Err(error) => warn!(slug, %error, "API fetch failed, trying local dataset"),
        }

        let miss = match self.dataset.load().await {
            Ok(records) => match find_by_slug(records, slug) {
                Some(record) => return Outcome::Found(record),
                None => Miss::NotFound,
            },
            Err(error) => {
                warn!(slug, %error, "local dataset unavailable");
                Miss::LoadFailed
            }
        };

        match self.fallback.iter().find(|record| record.slug == slug) {
            Some(record) => {
                debug!(slug, ?miss, "serving built-in project after dataset miss");
                Outcome::Found(record.clone())
            }
            None => miss.into(),
        }
    }
}
