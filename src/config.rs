//! Layered configuration: defaults, then the JSON config file, then CLI flags

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::Deserialize;

use crate::cli::Cli;
use crate::error::ConfigError;
use crate::pages::PageId;
use crate::theme::{SidebarLayout, Theme};

/// Resolved startup configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub theme: Theme,
    pub layout: SidebarLayout,
    /// Attraction image paths are joined onto this directory
    pub assets_dir: PathBuf,
    pub start_page: PageId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            layout: SidebarLayout::default(),
            assets_dir: PathBuf::from("."),
            start_page: PageId::Overview,
        }
    }
}

/// On-disk shape of the config file; every field is optional
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    theme: Option<Theme>,
    layout: Option<SidebarLayout>,
    assets_dir: Option<PathBuf>,
    start_page: Option<String>,
}

impl Config {
    /// Default config file location (`~/.config/travelguide/config.json` on Linux)
    pub fn default_path() -> Option<PathBuf> {
        let project_dirs = ProjectDirs::from("", "", "travelguide")?;
        Some(project_dirs.config_dir().join("config.json"))
    }

    /// Loads the configuration for the given command line.
    ///
    /// An explicit `--config` file must exist. The default file is read only
    /// if it is present.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let file = match &cli.config {
            Some(path) => read_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.is_file() => read_file(&path)?,
                _ => ConfigFile::default(),
            },
        };
        resolve(file, cli)
    }

    /// Loads the configuration from a specific file with no CLI overrides
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        resolve(read_file(path)?, &Cli::default())
    }
}

fn read_file(path: &Path) -> Result<ConfigFile, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

fn resolve(file: ConfigFile, cli: &Cli) -> Result<Config, ConfigError> {
    let defaults = Config::default();

    let start_page = match cli.page.as_deref().or(file.start_page.as_deref()) {
        Some(name) => parse_page_arg(name)?,
        None => defaults.start_page,
    };

    Ok(Config {
        theme: cli.theme.or(file.theme).unwrap_or(defaults.theme),
        layout: cli.layout.or(file.layout).unwrap_or(defaults.layout),
        assets_dir: cli
            .assets
            .clone()
            .or(file.assets_dir)
            .unwrap_or(defaults.assets_dir),
        start_page,
    })
}

/// Parses a page title into a PageId, ignoring case and surrounding whitespace
pub fn parse_page_arg(s: &str) -> Result<PageId, ConfigError> {
    PageId::from_title(s).ok_or_else(|| ConfigError::UnknownPage(s.to_string()))
}
