use std::{env, io::Result, path::PathBuf};

use folio::{
    core::settings::{Settings, SETTINGS_PATH},
    server::start_server,
    view::detail::DetailView,
    HttpResolver,
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn load_settings(path: Option<String>) -> Settings {
    let path = path.map(PathBuf::from).unwrap_or_else(|| PathBuf::from(SETTINGS_PATH));
    match Settings::load(&path) {
        Ok(settings) => settings,
        Err(error) => {
            warn!(path = %path.display(), %error, "using default settings");
            Settings::new()
        }
    }
}

async fn show_project(slug: &str, settings: &Settings) {
    let view = DetailView::new(HttpResolver::from_settings(settings));
    view.load(slug).await;
    let state = view.state();
    match state.page() {
        Some(page) => {
            println!("{}", page.title);
            println!("[{}]", page.tags.join(", "));
            println!("{}", page.description);
            if let Some(github) = page.github {
                println!("View on GitHub: {}", github);
            }
            println!();
            println!("{}", page.content);
        }
        None => {
            println!("{}", state.notice().unwrap_or_default());
            println!("Back to Projects: {}", state.back_href().unwrap_or_default());
        }
    }
}

#[actix_web::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut args = env::args().skip(1);
    match args.next().as_deref() {
        Some("resolve") => {
            let Some(slug) = args.next() else {
                eprintln!("usage: folio resolve <slug> [settings.json]");
                std::process::exit(2);
            };
            let settings = load_settings(args.next());
            show_project(&slug, &settings).await;
            Ok(())
        }
        other => {
            let settings = load_settings(other.map(str::to_string));
            start_server(&settings).await
        }
    }
}
