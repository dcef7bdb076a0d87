// Application state module
// Read-only state shared by every connection

use std::path::PathBuf;

use super::types::Config;

/// Application state
///
/// Holds the loaded configuration plus the resolved site paths so that
/// request handlers never re-join path segments per request.
pub struct AppState {
    pub config: Config,
    /// Document root for asset lookups
    pub root: PathBuf,
    /// Sub-root for model file lookups (`<root>/<models_dir>`)
    pub models_root: PathBuf,
    /// Full path of the entry document (`<root>/<index_file>`)
    pub index_path: PathBuf,
    /// Full path of the phone manifest (`<root>/<manifest_file>`)
    pub manifest_path: PathBuf,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let root = PathBuf::from(&config.site.root);
        let models_root = root.join(&config.site.models_dir);
        let index_path = root.join(&config.site.index_file);
        let manifest_path = root.join(&config.site.manifest_file);

        Self {
            config,
            root,
            models_root,
            index_path,
            manifest_path,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn site_paths_are_joined_from_root() {
        let config = Config::load_from("no-such-config").expect("defaults");
        let state = AppState::new(config);

        assert_eq!(state.models_root, state.root.join("models"));
        assert_eq!(state.index_path, state.root.join("index.html"));
        assert_eq!(state.manifest_path, state.root.join("phones.json"));
    }
}
