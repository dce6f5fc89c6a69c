pub mod error;

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, anyhow};

use crate::models::CarouselManifest;
use error::ConfigLoadError;

pub const CONFIG_PATH_VAR: &str = "REELSTRIP_CONFIG_PATH";
pub const CONFIG_JSON_VAR: &str = "REELSTRIP_CONFIG_JSON";

const DEFAULT_CANDIDATES: &[&str] = &[
    "carousel.toml",
    "carousel.json",
    "config/carousel.toml",
    "config/carousel.json",
];

/// Where the effective manifest came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestSource {
    EnvPath(PathBuf),
    EnvInline,
    File(PathBuf),
}

impl CarouselManifest {
    /// Load the manifest using environment variables.
    /// Evaluation order:
    /// 1) `$REELSTRIP_CONFIG_PATH` (TOML or JSON file),
    /// 2) `$REELSTRIP_CONFIG_JSON` (inline JSON),
    /// 3) the first default file found under the working directory.
    pub fn load_from_env() -> anyhow::Result<(Self, ManifestSource)> {
        Self::load_with(|key| env::var(key).ok(), Path::new("."))
    }

    /// Same resolution as [`Self::load_from_env`] with an injected variable
    /// lookup and search root.
    pub fn load_with<F>(
        lookup: F,
        search_root: &Path,
    ) -> anyhow::Result<(Self, ManifestSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        let loaded = Self::resolve(lookup, search_root)?;
        tracing::info!(source = ?loaded.1, container = %loaded.0.container_id, "loaded carousel manifest");
        Ok(loaded)
    }

    fn resolve<F>(
        lookup: F,
        search_root: &Path,
    ) -> anyhow::Result<(Self, ManifestSource)>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path_str) = lookup(CONFIG_PATH_VAR)
            && !path_str.trim().is_empty()
        {
            let path = PathBuf::from(path_str);
            let manifest = Self::load_from_file(&path)?;
            return Ok((manifest, ManifestSource::EnvPath(path)));
        }

        if let Some(raw) = lookup(CONFIG_JSON_VAR)
            && !raw.trim().is_empty()
        {
            let parsed = Self::parse_json(&raw)
                .with_context(|| format!("failed to parse {CONFIG_JSON_VAR}"))?;
            return Ok((parsed, ManifestSource::EnvInline));
        }

        if let Some(path) = Self::find_default_file(search_root) {
            let manifest = Self::load_from_file(&path)?;
            return Ok((manifest, ManifestSource::File(path)));
        }

        Err(ConfigLoadError::NotFound.into())
    }

    pub fn load_from_file(path: &Path) -> anyhow::Result<Self> {
        let contents =
            fs::read_to_string(path).map_err(|source| ConfigLoadError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::parse_json(&contents).with_context(|| {
                format!("invalid carousel manifest {}", path.display())
            }),
            Some("toml") | Some("tml") => {
                toml::from_str(&contents).map_err(|err| {
                    anyhow!(ConfigLoadError::Parse {
                        origin: path.display().to_string(),
                        message: err.to_string(),
                    })
                })
            }
            _ => Self::parse_from_str(&contents, &path.display().to_string()),
        }
    }

    /// Parse manifest text of unknown format, trying TOML first, then JSON.
    pub fn parse_from_str(
        contents: &str,
        origin: &str,
    ) -> anyhow::Result<Self> {
        toml::from_str(contents).or_else(|toml_err| {
            serde_json::from_str(contents).map_err(|json_err| {
                anyhow!(ConfigLoadError::Parse {
                    origin: origin.to_string(),
                    message: format!(
                        "toml error: {toml_err}; json error: {json_err}"
                    ),
                })
            })
        })
    }

    pub fn parse_json(raw: &str) -> anyhow::Result<Self> {
        serde_json::from_str(raw).map_err(|err| {
            anyhow!(ConfigLoadError::Parse {
                origin: "inline json".to_string(),
                message: err.to_string(),
            })
        })
    }

    fn find_default_file(root: &Path) -> Option<PathBuf> {
        DEFAULT_CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| path.exists())
    }
}
