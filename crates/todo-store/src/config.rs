//! Layered configuration: defaults, TOML file, environment, command line.

use std::path::{Path, PathBuf};
use std::{env, fs, io};

use serde::Deserialize;
use todo_core::DEFAULT_LOOKBACK_DAYS;

use crate::error::{Result, StoreError};

const FALLBACK_EDITOR: &str = "vi";

fn dirs_home() -> PathBuf {
    env::var("HOME")
        .or_else(|_| env::var("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("."))
}

/// Default directory holding the day documents.
pub fn default_base_dir() -> PathBuf {
    dirs_home().join(".todo")
}

/// Config file location: `$TODO_CONFIG`, else `~/.todo.toml`.
pub fn default_config_path() -> PathBuf {
    env::var_os("TODO_CONFIG")
        .map(PathBuf::from)
        .unwrap_or_else(|| dirs_home().join(".todo.toml"))
}

/// Expand a leading `~/` against the home directory.
fn expand_home(path: &Path) -> PathBuf {
    match path.strip_prefix("~") {
        Ok(rest) => dirs_home().join(rest),
        Err(_) => path.to_path_buf(),
    }
}

/// Contents of the optional TOML config file. Every key is optional.
///
/// ```toml
/// root = "~/journal"
/// lookback_days = 10
/// editor = "code -w"
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub root: Option<PathBuf>,
    pub lookback_days: Option<u32>,
    pub editor: Option<String>,
}

impl ConfigFile {
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|source| StoreError::Config {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Read the file at `path`. A missing file is an empty config.
    pub fn load(path: &Path) -> Result<Self> {
        match fs::read_to_string(path) {
            Ok(content) => {
                tracing::debug!("loaded config from {}", path.display());
                Self::parse(path, &content)
            }
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(StoreError::io(path, e)),
        }
    }
}

/// Values given on the command line; they win over everything else.
#[derive(Debug, Default, Clone)]
pub struct Overrides {
    pub root: Option<PathBuf>,
    pub lookback_days: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Directory holding `YYYY-MM-DD.md` documents.
    pub root: PathBuf,
    /// Days in the lookback window, today included.
    pub lookback_days: u32,
    /// Editor command line, split on whitespace when launched.
    pub editor: String,
}

impl Config {
    /// Resolve from the default config file and the process environment.
    pub fn load(overrides: &Overrides) -> Result<Self> {
        let file = ConfigFile::load(&default_config_path())?;
        Ok(Self::resolve(file, |key| env::var(key).ok(), overrides))
    }

    /// Precedence, lowest first: defaults, `file`, environment
    /// (`TODO_ROOT`, `TODO_LOOKBACK_DAYS`, `EDITOR`), `overrides`.
    pub fn resolve(
        file: ConfigFile,
        env_var: impl Fn(&str) -> Option<String>,
        overrides: &Overrides,
    ) -> Self {
        let env_var = |key: &str| env_var(key).filter(|v| !v.trim().is_empty());

        let env_root = env_var("TODO_ROOT").map(PathBuf::from);
        let root = overrides
            .root
            .clone()
            .or(env_root)
            .or_else(|| file.root.as_deref().map(expand_home))
            .unwrap_or_else(default_base_dir);

        let env_lookback = env_var("TODO_LOOKBACK_DAYS").and_then(|raw| {
            raw.trim()
                .parse::<u32>()
                .inspect_err(|e| tracing::warn!("ignoring TODO_LOOKBACK_DAYS={raw:?}: {e}"))
                .ok()
        });
        let lookback_days = overrides
            .lookback_days
            .or(env_lookback)
            .or(file.lookback_days)
            .unwrap_or(DEFAULT_LOOKBACK_DAYS);

        let editor = file
            .editor
            .filter(|e| !e.trim().is_empty())
            .or_else(|| env_var("EDITOR"))
            .unwrap_or_else(|| FALLBACK_EDITOR.to_string());

        Self {
            root,
            lookback_days,
            editor,
        }
    }

    /// Program and arguments of the editor command.
    pub fn editor_argv(&self) -> Vec<&str> {
        let argv: Vec<&str> = self.editor.split_whitespace().collect();
        if argv.is_empty() {
            vec![FALLBACK_EDITOR]
        } else {
            argv
        }
    }
}
