//! Layered configuration for the CLI.
//!
//! Sources merge in ascending priority: built-in defaults, the XDG config
//! file (`~/.config/gitscope/config.toml`), a `./gitscope.toml` in the
//! working directory, then `GITSCOPE_`-prefixed environment variables.
//! A `.env` file is loaded into the environment before any of this runs.
//!
//! ```toml
//! [github]
//! token = "ghp_..."                # or GITSCOPE_GITHUB_TOKEN
//! url = "https://api.github.com"   # or GITSCOPE_GITHUB_URL
//!
//! [favorites]
//! path = "/home/me/.local/state/gitscope/favorites.json"
//! ```

use std::path::PathBuf;
use std::{fs, io};

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;

use gitscope::github::DEFAULT_API_URL;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub github: GitHubConfig,
    pub favorites: FavoritesConfig,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Personal access token. Optional: public data works unauthenticated,
    /// just with a much lower rate limit.
    pub token: Option<String>,
    /// API base URL, for GitHub Enterprise instances.
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FavoritesConfig {
    /// Where the favorites JSON file lives. Defaults to the XDG state
    /// directory when unset.
    pub path: Option<PathBuf>,
}

impl Config {
    /// Merge every configuration source. A broken source logs a warning and
    /// falls back to defaults rather than aborting the command.
    pub fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        if let Some(path) = Self::default_config_path()
            && path.exists()
        {
            tracing::debug!(path = %path.display(), "loading config file");
            builder =
                builder.add_source(File::from(path).format(FileFormat::Toml).required(false));
        }

        let local = PathBuf::from("gitscope.toml");
        if local.exists() {
            tracing::debug!("loading ./gitscope.toml");
            builder =
                builder.add_source(File::from(local).format(FileFormat::Toml).required(false));
        }

        // GITSCOPE_GITHUB_TOKEN -> github.token, etc.
        builder = builder.add_source(
            Environment::with_prefix("GITSCOPE")
                .separator("_")
                .try_parsing(true),
        );

        builder
            .build()
            .and_then(|settings| settings.try_deserialize::<Config>())
            .unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring unreadable configuration");
                Config::default()
            })
    }

    pub fn github_token(&self) -> Option<String> {
        self.github.token.clone()
    }

    /// API base URL, falling back to the public API.
    pub fn api_url(&self) -> String {
        self.github
            .url
            .clone()
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
    }

    /// Favorites file path, falling back to the state directory.
    pub fn favorites_path(&self) -> io::Result<PathBuf> {
        if let Some(path) = &self.favorites.path {
            return Ok(path.clone());
        }
        Self::default_state_dir()
            .map(|dir| dir.join("favorites.json"))
            .ok_or_else(|| {
                io::Error::new(
                    io::ErrorKind::NotFound,
                    "could not determine a state directory for favorites",
                )
            })
    }

    pub fn default_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gitscope").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    /// `$XDG_STATE_HOME/gitscope` on Linux; platforms without a state
    /// directory get the data directory instead.
    pub fn default_state_dir() -> Option<PathBuf> {
        ProjectDirs::from("", "", "gitscope").map(|dirs| {
            dirs.state_dir()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| dirs.data_dir().to_path_buf())
        })
    }

    /// Write a token into `[github] token` of the config file, creating the
    /// file if needed. Existing formatting, comments, and unrelated keys are
    /// left untouched, which is why this goes through `toml_edit` instead of
    /// a plain serialize.
    pub fn save_github_token(token: &str) -> io::Result<PathBuf> {
        use toml_edit::{DocumentMut, value};

        let config_path = Self::default_config_path().ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "could not determine config directory")
        })?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = if config_path.exists() {
            fs::read_to_string(&config_path)?
        } else {
            String::new()
        };

        let mut doc: DocumentMut = content.parse().map_err(|e| {
            io::Error::new(io::ErrorKind::InvalidData, format!("invalid TOML: {e}"))
        })?;

        if !doc.contains_key("github") {
            doc["github"] = toml_edit::table();
        }
        doc["github"]["token"] = value(token);

        fs::write(&config_path, doc.to_string())?;
        Ok(config_path)
    }
}
