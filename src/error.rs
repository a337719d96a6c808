//! Error types for the travel guide
//!
//! Asset failures are recoverable and degrade to placeholder cards.
//! Configuration failures are fatal and stop the application before the
//! terminal is taken over.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load an attraction image
#[derive(Debug, Error)]
pub enum AssetLoadError {
    /// The path does not name a file
    #[error("image not found: {}", path.display())]
    Missing { path: PathBuf },
    /// The file exists but could not be decoded as an image
    #[error("could not decode image {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl AssetLoadError {
    /// Path of the asset that failed to load
    pub fn path(&self) -> &std::path::Path {
        match self {
            AssetLoadError::Missing { path } | AssetLoadError::Decode { path, .. } => path,
        }
    }
}

/// Invalid or unreadable configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("could not read config file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// The config file is not valid JSON for the expected shape
    #[error("invalid config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// A start page name that is not one of the guide's pages
    #[error("Unknown page: '{0}'. Valid pages: Overview, Top Attractions, Itineraries, Local Transportation, Accommodation, Food & Drink, Practical Info, Maps & Visuals, Day Trips & Hidden Gems")]
    UnknownPage(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_asset_message_names_path() {
        let err = AssetLoadError::Missing {
            path: PathBuf::from("assets/images/nowhere.jpg"),
        };
        assert!(err.to_string().contains("nowhere.jpg"));
        assert_eq!(err.path(), std::path::Path::new("assets/images/nowhere.jpg"));
    }

    #[test]
    fn test_unknown_page_message_lists_pages() {
        let err = ConfigError::UnknownPage("Nightlife".to_string());
        let msg = err.to_string();
        assert!(msg.contains("Nightlife"));
        assert!(msg.contains("Top Attractions"));
    }
}
