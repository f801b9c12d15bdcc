use std::{
    io::Result,
    net::TcpListener,
    path::{Path, PathBuf},
};

use actix_cors::Cors;
use actix_web::{
    dev::Server,
    http::StatusCode,
    web::{self, resource, scope, Data, Query, ServiceConfig},
    App, HttpResponse, HttpServer,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::{
    core::{data::load_from_storage, resolver::NOT_FOUND_MESSAGE, settings::Settings},
    types::{find_by_slug, ProjectRecord},
};

/// The JSON file the API serves projects from.
#[derive(Clone, Debug)]
pub struct ProjectStore {
    path: PathBuf,
}

impl ProjectStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        ProjectStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[derive(Deserialize)]
struct TagFilter {
    tag: Option<String>,
}

pub async fn start_server(settings: &Settings) -> Result<()> {
    let listener = TcpListener::bind(settings.bind_addr.value)?;
    let store = ProjectStore::new(&settings.projects_path.value);
    info!(addr = %settings.bind_addr.value, path = %store.path().display(), "server started");
    run(listener, store)?.await
}

pub fn run(listener: TcpListener, store: ProjectStore) -> Result<Server> {
    let store = Data::new(store);
    let server = HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .configure(routes)
            .wrap(
                Cors::default()
                    .allow_any_origin()
                    .allow_any_header()
                    .allow_any_method(),
            )
    })
    .listen(listener)?
    .run();
    Ok(server)
}

pub fn routes(cfg: &mut ServiceConfig) {
    cfg.service(
        scope("/api")
            .service(resource("/projects").route(web::get().to(list_handler)))
            .service(resource("/projects/featured").route(web::get().to(featured_handler)))
            .service(resource("/projects/{slug}").route(web::get().to(project_handler)))
            .service(resource("/health").route(web::get().to(health_handler))),
    );
}

fn error_response(status: StatusCode, message: &str) -> HttpResponse {
    HttpResponse::build(status).json(json!({ "status": "error", "message": message }))
}

fn load_projects(store: &ProjectStore) -> std::result::Result<Vec<ProjectRecord>, HttpResponse> {
    load_from_storage(store.path()).map_err(|err| {
        error!(error = %err, "failed to load projects data");
        error_response(StatusCode::INTERNAL_SERVER_ERROR, &err.to_string())
    })
}

fn summaries<'a>(records: impl Iterator<Item = &'a ProjectRecord>) -> Vec<ProjectRecord> {
    records.map(ProjectRecord::summary).collect()
}

async fn list_handler(store: Data<ProjectStore>, filter: Query<TagFilter>) -> HttpResponse {
    match load_projects(&store) {
        Ok(projects) => {
            let listed = match &filter.tag {
                Some(tag) => summaries(projects.iter().filter(|p| p.has_tag(tag))),
                None => summaries(projects.iter()),
            };
            HttpResponse::Ok().json(listed)
        }
        Err(response) => response,
    }
}

async fn featured_handler(store: Data<ProjectStore>) -> HttpResponse {
    match load_projects(&store) {
        Ok(projects) => {
            HttpResponse::Ok().json(summaries(projects.iter().filter(|p| p.featured)))
        }
        Err(response) => response,
    }
}

async fn project_handler(store: Data<ProjectStore>, slug: web::Path<String>) -> HttpResponse {
    match load_projects(&store) {
        Ok(projects) => match find_by_slug(projects, &slug) {
            Some(project) => HttpResponse::Ok().json(project),
            None => error_response(StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
        },
        Err(response) => response,
    }
}

async fn health_handler() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "success",
        "message": "folio API is running",
        "time": Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }))
}
