//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::{ConfigWarning, OutputStyle};
use crate::error::{SassGuardError, SassGuardResult};

use super::types::Config;

/// Project config file name, looked up in the working directory
pub const PROJECT_CONFIG_FILE: &str = "sass-guard.toml";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> SassGuardResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| SassGuardError::ConfigParse {
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
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve configuration by priority, then apply the environment
///
/// An explicit file must load. Otherwise the first existing of the project
/// config and the user config is used, falling back to defaults.
pub fn load_layered(
    explicit: Option<&Path>,
    project_root: &Path,
) -> SassGuardResult<(Config, Vec<ConfigWarning>)> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [
            Some(project_root.join(PROJECT_CONFIG_FILE)),
            user_config_path(),
        ]
        .into_iter()
        .flatten()
        .find(|p| p.is_file()),
    };

    let (config, warnings) = match candidate {
        Some(path) => load_with_warnings(&path)?,
        None => (Config::default(), Vec::new()),
    };

    Ok((with_env_overrides(config), warnings))
}

/// Apply environment variable overrides (SASS_GUARD_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |name| std::env::var(name).ok())
}

/// Apply overrides read through `lookup`
///
/// Values that do not parse leave the configured value in place.
pub fn with_overrides_from<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(dir) = lookup("SASS_GUARD_OUTPUT").filter(|v| !v.is_empty()) {
        config.output.dir = PathBuf::from(dir);
    }

    if let Some(extension) = lookup("SASS_GUARD_EXTENSION") {
        config.output.extension = extension;
    }

    if let Some(style) = lookup("SASS_GUARD_STYLE") {
        if let Ok(style) = style.parse::<OutputStyle>() {
            config.compile.style = style;
        }
    }

    // SASS_GUARD_LOAD_PATHS (colon or comma separated)
    if let Some(paths) = lookup("SASS_GUARD_LOAD_PATHS") {
        config.compile.load_paths = paths
            .split([':', ','])
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(PathBuf::from)
            .collect();
    }

    if let Some(val) = lookup("SASS_GUARD_SHALLOW") {
        config.output.shallow = parse_flag(&val);
    }

    if let Some(val) = lookup("SASS_GUARD_NOOP") {
        config.output.noop = parse_flag(&val);
    }

    if let Some(val) = lookup("SASS_GUARD_HIDE_SUCCESS") {
        config.watch.hide_success = parse_flag(&val);
    }

    config
}

fn parse_flag(val: &str) -> bool {
    !matches!(val.trim().to_lowercase().as_str(), "" | "0" | "false" | "no" | "off")
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("sass-guard").join("config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.trim_start().starts_with(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "output",
        "dir",
        "extension",
        "shallow",
        "noop",
        "compile",
        "load_paths",
        "style",
        "debug_info",
        "line_numbers",
        "executable",
        "watch",
        "source",
        "all_on_start",
        "hide_success",
        "ui",
        "color",
        "unicode",
    ];

    CANDIDATES
        .iter()
        .map(|candidate| (*candidate, levenshtein(unknown, candidate)))
        .min_by_key(|(_, dist)| *dist)
        .filter(|(_, dist)| *dist <= 2)
        .map(|(candidate, _)| candidate.to_string())
}

/// Edit distance used for typo suggestions
pub(super) fn levenshtein(a: &str, b: &str) -> usize {
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
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_bytes.len()]
}
