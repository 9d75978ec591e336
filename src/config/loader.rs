//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{MenuError, MenuResult};

use super::types::Config;

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown config key '{}' in {}", self.key, self.file.display())?;
        if let Some(line) = self.line {
            write!(f, ":{line}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, " (did you mean '{suggestion}'?)")?;
        }
        Ok(())
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| MenuError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve the configuration for a run.
///
/// An explicit path must exist. Otherwise the user config is used when
/// present, then defaults. Env overrides are applied last and the result is
/// validated.
pub fn load_or_default(explicit: Option<&Path>) -> MenuResult<(Config, Vec<ConfigWarning>)> {
    let path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => user_config_path().filter(|p| p.exists()),
    };

    let (config, warnings, origin) = match path {
        Some(path) => {
            let (config, warnings) = load_with_warnings(&path)?;
            tracing::debug!(file = %path.display(), warnings = warnings.len(), "loaded config");
            (config, warnings, path)
        }
        None => (Config::default(), Vec::new(), PathBuf::from("<defaults>")),
    };

    let config = with_env_overrides(config);
    config.validate(&origin)?;
    Ok((config, warnings))
}

/// `<config dir>/nestmenu/config.toml`
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("nestmenu").join("config.toml"))
}

/// Apply environment variable overrides (NESTMENU_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    apply_env_overrides(config, |key| std::env::var(key).ok())
}

pub(super) fn apply_env_overrides(
    mut config: Config,
    get_env: impl Fn(&str) -> Option<String>,
) -> Config {
    // NESTMENU_SHELL
    if let Some(program) = get_env("NESTMENU_SHELL").filter(|s| !s.trim().is_empty()) {
        config.shell.program = program;
    }

    // NESTMENU_NESTED_PREFIX
    if let Some(prefix) = get_env("NESTMENU_NESTED_PREFIX") {
        config.menu.nested_prefix = prefix;
    }

    // NESTMENU_SORT
    if let Some(sort) = get_env("NESTMENU_SORT") {
        config.menu.sort = !matches!(sort.to_lowercase().as_str(), "false" | "0" | "no" | "");
    }

    config
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

pub(super) fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "menu",
        "sort",
        "nested_prefix",
        "nested_indicator",
        "min_width",
        "shell",
        "program",
        "args",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
