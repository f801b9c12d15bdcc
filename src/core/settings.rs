use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, Read},
    net::{Ipv4Addr, SocketAddr},
    path::Path,
};

use crate::error::SettingsError;

pub const SETTINGS_PATH: &str = "core/settings.json";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Settings {
    pub bind_addr: Setting<SocketAddr>,
    pub api_base_url: Setting<String>,
    pub local_dataset: Setting<String>,
    pub projects_path: Setting<String>,
    pub request_timeout_secs: Setting<u64>,
}

/// A labelled settings entry, stored as `{ "name": ..., "value": ... }`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Setting<T> {
    pub name: String,
    pub value: T,
}

impl<T> Setting<T> {
    fn new(name: &str, value: T) -> Self {
        Setting {
            name: name.to_string(),
            value,
        }
    }
}

impl Settings {
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let file = File::open(path)?;
        let mut buffer = Vec::new();
        let mut reader = BufReader::new(file);
        reader.read_to_end(&mut buffer)?;
        Ok(serde_json::from_slice::<Settings>(&buffer)?)
    }

    pub fn new() -> Self {
        Settings {
            bind_addr: Setting::new(
                "Bind Address",
                SocketAddr::new(Ipv4Addr::new(127, 0, 0, 1).into(), 4010),
            ),
            api_base_url: Setting::new("API Base URL", "http://127.0.0.1:4010".to_string()),
            local_dataset: Setting::new("Local Dataset", "data/projects.json".to_string()),
            projects_path: Setting::new("Projects Path", "data/projects.json".to_string()),
            request_timeout_secs: Setting::new("Request Timeout (s)", 5),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Settings::new()
    }
}

#[cfg(test)]
mod tests {
    use std::{env, fs, process};

    use super::*;

    #[test]
    fn the_shipped_settings_file_parses() {
        let settings = Settings::load(Path::new(SETTINGS_PATH)).unwrap();

        assert_eq!(settings, Settings::new());
    }

    #[test]
    fn malformed_settings_are_a_parse_error() {
        let path = env::temp_dir().join(format!("folio-settings-{}.json", process::id()));
        fs::write(&path, r#"{"bind_addr": "nowhere"}"#).unwrap();

        let result = Settings::load(&path);

        assert!(matches!(result, Err(SettingsError::Parse(_))));
        fs::remove_file(path).unwrap();
    }

    #[test]
    fn missing_settings_are_an_io_error() {
        let result = Settings::load(Path::new("core/missing.json"));

        assert!(matches!(result, Err(SettingsError::Io(_))));
    }
}
