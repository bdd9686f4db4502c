use log::{error, info};
use std::path::PathBuf;
use url::Url;

use crate::error::{LoadError, Result};
use crate::models::profile::Profile;

/// Where the profile document lives.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfileSource {
    File(PathBuf),
    Remote(Url),
}

impl ProfileSource {
    /// Classify a configured source string. Anything that does not parse as an
    /// absolute URL is treated as a filesystem path.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(LoadError::InvalidSource("empty source".to_string()));
        }
        match Url::parse(raw) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Ok(ProfileSource::Remote(url)),
                "file" => url
                    .to_file_path()
                    .map(ProfileSource::File)
                    .map_err(|_| LoadError::InvalidSource(raw.to_string())),
                // Windows drive letters parse as one-letter schemes
                s if s.len() == 1 => Ok(ProfileSource::File(PathBuf::from(raw))),
                _ => Err(LoadError::InvalidSource(raw.to_string())),
            },
            Err(_) => Ok(ProfileSource::File(PathBuf::from(raw))),
        }
    }
}

impl std::fmt::Display for ProfileSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileSource::File(path) => write!(f, "{}", path.display()),
            ProfileSource::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// Read and parse the profile. One attempt, no timeout.
pub async fn load_profile(source: &ProfileSource) -> Result<Profile> {
    let raw = match source {
        ProfileSource::File(path) => rocket::tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoadError::Io {
                path: path.display().to_string(),
                source: e,
            })?,
        ProfileSource::Remote(url) => {
            let response = reqwest::get(url.clone()).await?;
            let status = response.status();
            if !status.is_success() {
                return Err(LoadError::Status {
                    url: url.to_string(),
                    status: status.as_u16(),
                });
            }
            response.text().await?
        }
    };
    Ok(Profile::from_json(&raw)?)
}

/// Startup entry point: load once, log any failure and carry on without data.
pub async fn load_or_log(raw_source: &str) -> Option<Profile> {
    let source = match ProfileSource::parse(raw_source) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to load profile data: {}", e);
            return None;
        }
    };
    match load_profile(&source).await {
        Ok(profile) => {
            info!("Loaded profile from {}", source);
            Some(profile)
        }
        Err(e) => {
            error!("Failed to load profile data: {}", e);
            None
        }
    }
}
