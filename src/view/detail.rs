//! Project detail page state.
//!
//! Every `load` call bumps a generation counter. A resolution only writes
//! its outcome back when its generation is still the latest, so a slow
//! lookup for an old slug can never overwrite a newer one.

use std::cell::{Cell, RefCell};

use tracing::debug;

use crate::{
    core::resolver::{Outcome, ProjectDataset, ProjectResolver, RemoteProjects},
    types::ProjectRecord,
    view::PROJECTS_HREF,
};

pub const NOT_FOUND_NOTICE: &str = "Project not found";
pub const LOAD_ERROR_NOTICE: &str = "Failed to load project. Please try again later.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DetailState {
    /// Nothing requested yet.
    Idle,
    Loading { slug: String },
    Success(ProjectRecord),
    NotFound,
    LoadError,
}

impl DetailState {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            DetailState::Success(_) | DetailState::NotFound | DetailState::LoadError
        )
    }

    pub fn notice(&self) -> Option<&'static str> {
        match self {
            DetailState::NotFound => Some(NOT_FOUND_NOTICE),
            DetailState::LoadError => Some(LOAD_ERROR_NOTICE),
            _ => None,
        }
    }

    /// Error states offer a way back to the listing.
    pub fn back_href(&self) -> Option<&'static str> {
        self.notice().map(|_| PROJECTS_HREF)
    }

    pub fn page(&self) -> Option<DetailPage> {
        match self {
            DetailState::Success(record) => Some(DetailPage::from(record)),
            _ => None,
        }
    }
}

impl From<Outcome> for DetailState {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Found(record) => DetailState::Success(record),
            Outcome::NotFound => DetailState::NotFound,
            Outcome::Failed(_) => DetailState::LoadError,
        }
    }
}

/// What the detail page shows for a resolved record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailPage {
    pub title: String,
    pub tags: Vec<String>,
    pub description: String,
    pub github: Option<String>,
    pub content: String,
    pub back_href: &'static str,
}

impl From<&ProjectRecord> for DetailPage {
    fn from(record: &ProjectRecord) -> Self {
        DetailPage {
            title: record.title.clone(),
            tags: record.tags.clone(),
            description: record.description.clone(),
            github: record.github_link().map(str::to_string),
            content: record.content_or_placeholder().to_string(),
            back_href: PROJECTS_HREF,
        }
    }
}

pub struct DetailView<R, D> {
    resolver: ProjectResolver<R, D>,
    generation: Cell<u64>,
    state: RefCell<DetailState>,
}

impl<R: RemoteProjects, D: ProjectDataset> DetailView<R, D> {
    pub fn new(resolver: ProjectResolver<R, D>) -> Self {
        DetailView {
            resolver,
            generation: Cell::new(0),
            state: RefCell::new(DetailState::Idle),
        }
    }

    pub fn state(&self) -> DetailState {
        self.state.borrow().clone()
    }

    /// Resolves `slug` and shows the result. Returns `false` when a newer
    /// `load` started in the meantime and this result was dropped.
    pub async fn load(&self, slug: &str) -> bool {
        let generation = self.generation.get() + 1;
        self.generation.set(generation);
        *self.state.borrow_mut() = DetailState::Loading {
            slug: slug.to_string(),
        };

        let outcome = self.resolver.resolve(slug).await;

        if self.generation.get() != generation {
            debug!(slug, generation, "discarding stale project lookup");
            return false;
        }
        *self.state.borrow_mut() = DetailState::from(outcome);
        true
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use async_trait::async_trait;
    use rstest::rstest;

    use super::*;
    use crate::{error::SourceError, types::ProjectId, types::CONTENT_PLACEHOLDER};

    fn project(slug: &str) -> ProjectRecord {
        ProjectRecord {
            id: ProjectId::Text(slug.to_string()),
            title: slug.to_uppercase(),
            slug: slug.to_string(),
            tags: Vec::new(),
            description: "D".to_string(),
            github: Some("https://github.com/u/r".to_string()),
            is_private: false,
            featured: false,
            content: None,
        }
    }

    /// Answers every slug after a per-slug delay.
    struct SlowApi {
        delays: Vec<(&'static str, u64)>,
    }

    #[async_trait(?Send)]
    impl RemoteProjects for SlowApi {
        async fn fetch(&self, slug: &str) -> Result<ProjectRecord, SourceError> {
            let millis = self
                .delays
                .iter()
                .find(|(s, _)| *s == slug)
                .map(|(_, ms)| *ms)
                .unwrap_or(0);
            tokio::time::sleep(Duration::from_millis(millis)).await;
            Ok(project(slug))
        }
    }

    struct NoApi;

    #[async_trait(?Send)]
    impl RemoteProjects for NoApi {
        async fn fetch(&self, _slug: &str) -> Result<ProjectRecord, SourceError> {
            Err(SourceError::Status(503))
        }
    }

    struct Dataset(Option<Vec<ProjectRecord>>);

    #[async_trait(?Send)]
    impl ProjectDataset for Dataset {
        async fn load(&self) -> Result<Vec<ProjectRecord>, SourceError> {
            self.0
                .clone()
                .ok_or_else(|| SourceError::Transport("dataset".to_string()))
        }
    }

    fn slow_view(delays: Vec<(&'static str, u64)>) -> DetailView<SlowApi, Dataset> {
        DetailView::new(ProjectResolver::new(
            SlowApi { delays },
            Dataset(Some(Vec::new())),
            Vec::new(),
        ))
    }

    #[rstest]
    #[case::older_finishes_last(vec![("a", 60), ("b", 5)])]
    #[case::older_finishes_first(vec![("a", 5), ("b", 60)])]
    #[tokio::test]
    async fn latest_slug_wins(#[case] delays: Vec<(&'static str, u64)>) {
        let view = slow_view(delays);

        let (applied_a, applied_b) = tokio::join!(view.load("a"), view.load("b"));

        assert!(!applied_a);
        assert!(applied_b);
        assert_eq!(view.state(), DetailState::Success(project("b")));
    }

    #[tokio::test]
    async fn loading_is_entered_before_resolution_completes() {
        let view = slow_view(vec![("a", 30)]);

        let observe = async {
            tokio::time::sleep(Duration::from_millis(5)).await;
            view.state()
        };
        let (_, during) = tokio::join!(view.load("a"), observe);

        assert_eq!(
            during,
            DetailState::Loading {
                slug: "a".to_string()
            }
        );
        assert!(view.state().is_terminal());
    }

    #[rstest]
    #[case::miss(Dataset(Some(Vec::new())), DetailState::NotFound, NOT_FOUND_NOTICE)]
    #[case::unreadable(Dataset(None), DetailState::LoadError, LOAD_ERROR_NOTICE)]
    #[tokio::test]
    async fn error_states_carry_distinct_notices(
        #[case] dataset: Dataset,
        #[case] expected: DetailState,
        #[case] notice: &str,
    ) {
        let view = DetailView::new(ProjectResolver::new(NoApi, dataset, Vec::new()));

        assert!(view.load("missing").await);

        let state = view.state();
        assert_eq!(state, expected);
        assert_eq!(state.notice(), Some(notice));
        assert_eq!(state.back_href(), Some("/projects"));
    }

    #[tokio::test]
    async fn reloading_the_same_slug_retries() {
        let view = DetailView::new(ProjectResolver::new(
            NoApi,
            Dataset(None),
            vec![project("fallback")],
        ));

        view.load("missing").await;
        assert_eq!(view.state(), DetailState::LoadError);

        view.load("fallback").await;
        assert_eq!(view.state(), DetailState::Success(project("fallback")));
    }

    #[test]
    fn detail_page_hides_private_github_and_fills_placeholder() {
        let mut record = project("client-crm");
        record.is_private = true;

        let page = DetailState::Success(record).page().unwrap();

        assert_eq!(page.github, None);
        assert_eq!(page.content, CONTENT_PLACEHOLDER);
        assert_eq!(page.back_href, "/projects");
    }

    #[test]
    fn detail_page_renders_public_record() {
        let mut record = project("portfolio-website");
        record.content = Some("# Portfolio".to_string());

        let page = DetailPage::from(&record);

        assert_eq!(page.title, "PORTFOLIO-WEBSITE");
        assert_eq!(page.github.as_deref(), Some("https://github.com/u/r"));
        assert_eq!(page.content, "# Portfolio");
    }
}
