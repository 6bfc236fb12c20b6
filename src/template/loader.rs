use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Timeout for downloading a template.
pub const ONLINE_TIMEOUT: Duration = Duration::from_secs(8);

/// Where templates come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemplateProvider {
    /// Base location is a directory
    #[default]
    FileSystem,
    /// Base location is a URL
    Online,
}

impl FromStr for TemplateProvider {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "filesystem" | "fs" => Ok(TemplateProvider::FileSystem),
            "online" => Ok(TemplateProvider::Online),
            other => Err(anyhow!(
                "Unknown template provider '{other}'. Choose between 'FileSystem' or 'Online'"
            )),
        }
    }
}

impl fmt::Display for TemplateProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TemplateProvider::FileSystem => f.write_str("FileSystem"),
            TemplateProvider::Online => f.write_str("Online"),
        }
    }
}

/// Resolves template names against a base location and fetches their source.
#[derive(Debug, Clone)]
pub struct TemplateLoader {
    provider: TemplateProvider,
    base_location: String,
}

impl TemplateLoader {
    pub fn new(provider: TemplateProvider, base_location: impl Into<String>) -> Self {
        TemplateLoader {
            provider,
            base_location: base_location.into(),
        }
    }

    pub fn provider(&self) -> TemplateProvider {
        self.provider
    }

    /// Full location of `name`: a file path or a URL depending on the provider.
    ///
    /// # Errors
    ///
    /// Returns an error when the online base location is not a valid URL.
    pub fn location(&self, name: &str) -> anyhow::Result<String> {
        match self.provider {
            TemplateProvider::FileSystem => Ok(self.file_location(name).display().to_string()),
            TemplateProvider::Online => Ok(self.online_location(name)?.to_string()),
        }
    }

    /// Retrieve the source of template `name`.
    ///
    /// # Errors
    ///
    /// Returns an error naming the location if the template cannot be read or
    /// downloaded.
    pub fn load(&self, name: &str) -> anyhow::Result<String> {
        tracing::debug!(template = name, provider = %self.provider, "retrieving template");
        match self.provider {
            TemplateProvider::FileSystem => read_from_fs(&self.file_location(name)),
            TemplateProvider::Online => fetch_online(&self.online_location(name)?),
        }
    }

    fn file_location(&self, name: &str) -> PathBuf {
        Path::new(self.base_location.trim()).join(name)
    }

    fn online_location(&self, name: &str) -> anyhow::Result<Url> {
        let mut base = self.base_location.trim().to_string();
        // without the trailing slash Url::join would replace the last segment
        if !base.ends_with('/') {
            base.push('/');
        }
        let base = Url::parse(&base).with_context(|| {
            format!("Invalid templates base location '{base}'. Validate your configuration")
        })?;
        base.join(name)
            .with_context(|| format!("Cannot resolve template '{name}' against {base}"))
    }
}

fn read_from_fs(path: &Path) -> anyhow::Result<String> {
    tracing::trace!(location = %path.display(), "reading template");
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Error reading template from {}", path.display()))?;
    tracing::trace!(bytes = content.len(), "finished reading template");
    Ok(content)
}

fn fetch_online(url: &Url) -> anyhow::Result<String> {
    tracing::trace!(location = %url, "downloading template");
    let client = reqwest::blocking::Client::builder()
        .timeout(ONLINE_TIMEOUT)
        .build()
        .context("Failed to build HTTP client")?;
    let content = client
        .get(url.clone())
        .header(reqwest::header::CONTENT_TYPE, "text/yaml")
        .send()
        .and_then(|response| response.error_for_status())
        .and_then(|response| response.text())
        .with_context(|| format!("Error downloading template from {url}"))?;
    tracing::trace!(bytes = content.len(), "finished download");
    Ok(content)
}
