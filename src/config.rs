//! `nock.toml` discovery and loading.
//!
//! ```toml
//! [eval]
//! revision = "4K"   # or 4, 5, "5K", "current"
//! ```
//!
//! A revision given on the command line wins over the file, and the file
//! wins over [`Revision::CURRENT`].

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::eval::{Revision, UnknownRevision};

pub const FILE_NAME: &str = "nock.toml";

/// Settings read from a `nock.toml`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Default revision for `eval` and `repl`.
    pub revision: Option<Revision>,
    /// The file this was loaded from, if any.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid nock.toml: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid nock.toml: {0}")]
    Revision(#[from] UnknownRevision),
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    #[serde(default)]
    eval: EvalSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct EvalSection {
    revision: Option<RevisionValue>,
}

/// `revision = 4` and `revision = "4K"` are both accepted.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RevisionValue {
    Number(u32),
    Text(String),
}

impl RevisionValue {
    fn resolve(self) -> Result<Revision, UnknownRevision> {
        match self {
            RevisionValue::Number(n) => n.to_string().parse(),
            RevisionValue::Text(s) => s.parse(),
        }
    }
}

impl Config {
    /// Parse the contents of a `nock.toml`.
    pub fn parse(content: &str) -> Result<Config, ConfigError> {
        let file: ConfigFile = toml::from_str(content)?;
        let revision = file.eval.revision.map(RevisionValue::resolve).transpose()?;
        Ok(Config {
            revision,
            path: None,
        })
    }

    pub fn load(path: &Path) -> Result<Config, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Config::parse(&content)?;
        config.path = Some(path.to_path_buf());
        log::debug!("loaded {}: revision {:?}", path.display(), config.revision);
        Ok(config)
    }

    /// Try to find a nock.toml in the given directory or its ancestors.
    pub fn find(start_dir: &Path) -> Option<PathBuf> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(FILE_NAME);
            if candidate.is_file() {
                return Some(candidate);
            }
            if !dir.pop() {
                return None;
            }
        }
    }

    /// Load the nearest nock.toml above `start_dir`, or the defaults if none.
    pub fn discover(start_dir: &Path) -> Result<Config, ConfigError> {
        match Config::find(start_dir) {
            Some(path) => Config::load(&path),
            None => {
                log::trace!("no {} above {}", FILE_NAME, start_dir.display());
                Ok(Config::default())
            }
        }
    }

    /// The revision to run: `cli`, then this file, then the current one.
    pub fn resolve_revision(&self, cli: Option<Revision>) -> Revision {
        cli.or(self.revision).unwrap_or(Revision::CURRENT)
    }
}
