use std::{
    fs::File,
    io::{BufReader, Read},
    path::{Path, PathBuf},
    time::Duration,
};

use async_trait::async_trait;
use awc::Client;
use serde::de::DeserializeOwned;
use tracing::info;

use crate::{
    core::resolver::{ProjectDataset, RemoteProjects},
    error::SourceError,
    types::ProjectRecord,
};

const BODY_LIMIT: usize = 2 * 1024 * 1024;

pub fn load_from_storage(local_projects_path: &Path) -> Result<Vec<ProjectRecord>, SourceError> {
    let file = File::open(local_projects_path).map_err(|error| {
        SourceError::Transport(format!("{}: {}", local_projects_path.display(), error))
    })?;
    let mut buffer: Vec<u8> = Vec::new();
    let mut reader = BufReader::new(file);
    let size = reader
        .read_to_end(&mut buffer)
        .map_err(|error| SourceError::Payload(error.to_string()))?;
    info!(size, path = %local_projects_path.display(), "local projects data read");
    Ok(serde_json::from_slice::<Vec<ProjectRecord>>(&buffer)?)
}

async fn get_json<T: DeserializeOwned>(client: &Client, url: &str) -> Result<T, SourceError> {
    let mut response = client
        .get(url)
        .send()
        .await
        .map_err(|error| SourceError::Transport(format!("{}: {}", url, error)))?;
    if !response.status().is_success() {
        return Err(SourceError::Status(response.status().as_u16()));
    }
    let body = response
        .body()
        .limit(BODY_LIMIT)
        .await
        .map_err(|error| SourceError::Payload(error.to_string()))?;
    info!(size = body.len(), url, "remote projects data read");
    Ok(serde_json::from_slice::<T>(&body)?)
}

fn http_client(timeout: Duration) -> Client {
    Client::builder().timeout(timeout).finish()
}

/// The projects API, queried one slug at a time.
#[derive(Clone)]
pub struct ApiSource {
    client: Client,
    base_url: String,
}

impl ApiSource {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        ApiSource {
            client: http_client(timeout),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// The slug is escaped as a single path segment.
    pub fn project_url(&self, slug: &str) -> String {
        format!("{}/api/projects/{}", self.base_url, urlencoding::encode(slug))
    }
}

#[async_trait(?Send)]
impl RemoteProjects for ApiSource {
    async fn fetch(&self, slug: &str) -> Result<ProjectRecord, SourceError> {
        get_json(&self.client, &self.project_url(slug)).await
    }
}

/// Where the static projects dataset lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DatasetLocation {
    Path(PathBuf),
    Url(String),
}

impl DatasetLocation {
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            DatasetLocation::Url(location.to_string())
        } else {
            DatasetLocation::Path(PathBuf::from(location))
        }
    }
}

/// The static projects dataset, read whole on every load.
#[derive(Clone)]
pub struct DatasetSource {
    client: Client,
    location: DatasetLocation,
}

impl DatasetSource {
    pub fn new(location: DatasetLocation, timeout: Duration) -> Self {
        DatasetSource {
            client: http_client(timeout),
            location,
        }
    }
}

#[async_trait(?Send)]
impl ProjectDataset for DatasetSource {
    async fn load(&self) -> Result<Vec<ProjectRecord>, SourceError> {
        match &self.location {
            DatasetLocation::Path(path) => load_from_storage(path),
            DatasetLocation::Url(url) => get_json(&self.client, url).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = env::temp_dir().join(format!("folio-{}-{}", process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn dataset_location_detects_urls() {
        assert_eq!(
            DatasetLocation::parse("https://example.com/data/projects.json"),
            DatasetLocation::Url("https://example.com/data/projects.json".to_string())
        );
        assert_eq!(
            DatasetLocation::parse("data/projects.json"),
            DatasetLocation::Path(PathBuf::from("data/projects.json"))
        );
    }

    #[actix_web::test]
    async fn api_source_builds_project_urls() {
        let source = ApiSource::new("http://127.0.0.1:4010/", Duration::from_secs(1));

        assert_eq!(
            source.project_url("portfolio-website"),
            "http://127.0.0.1:4010/api/projects/portfolio-website"
        );
    }

    #[actix_web::test]
    async fn api_source_escapes_reserved_slug_characters() {
        let source = ApiSource::new("http://127.0.0.1:4010", Duration::from_secs(1));

        assert_eq!(
            source.project_url("portfolio-website?x=1#top"),
            "http://127.0.0.1:4010/api/projects/portfolio-website%3Fx%3D1%23top"
        );
        assert_eq!(
            source.project_url("../health"),
            "http://127.0.0.1:4010/api/projects/..%2Fhealth"
        );
    }

    #[test]
    fn loads_records_from_storage() {
        let path = scratch_file(
            "storage-ok.json",
            r#"[{"id": 1, "title": "AI File Organizer", "slug": "ai-file-organizer",
                 "description": "Organizes codebases."}]"#,
        );

        let records = load_from_storage(&path).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].slug, "ai-file-organizer");
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn malformed_storage_is_a_parse_error() {
        let path = scratch_file("storage-bad.json", r#"{"not": "a list"}"#);

        let result = load_from_storage(&path);

        assert!(matches!(result, Err(SourceError::Parse(_))));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_storage_is_a_transport_error() {
        let path = env::temp_dir().join("folio-does-not-exist.json");

        let result = load_from_storage(&path);

        assert!(matches!(result, Err(SourceError::Transport(_))));
    }
}
