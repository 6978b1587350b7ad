//! Option file loading

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

use crate::error::{DropmenuError, DropmenuResult};

use super::types::OptionsPatch;

pub use crate::domain::value_objects::ConfigWarning;

/// Environment variable naming the user options file
pub const CONFIG_ENV: &str = "DROPMENU_CONFIG";

/// Load an options file and collect non-fatal warnings (e.g. unknown keys).
///
/// `.json` files are read as JSON, everything else as TOML.
pub fn load_with_warnings(path: &Path) -> DropmenuResult<(OptionsPatch, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;
    parse_with_warnings(path, &content)
}

/// Parse `content` as the format implied by `path`, reporting unknown keys
/// instead of rejecting them.
pub fn parse_with_warnings<T>(path: &Path, content: &str) -> DropmenuResult<(T, Vec<ConfigWarning>)>
where
    T: DeserializeOwned,
{
    let mut unknown_paths: Vec<String> = Vec::new();

    let value: T = if is_json(path) {
        let mut deserializer = serde_json::Deserializer::from_str(content);
        serde_ignored::deserialize(&mut deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| DropmenuError::Json {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?
    } else {
        let deserializer = toml::de::Deserializer::new(content);
        serde_ignored::deserialize(deserializer, |p| {
            unknown_paths.push(p.to_string());
        })
        .map_err(|e| DropmenuError::Toml {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?
    };

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                line: find_line_number(content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                path: path_str,
                key,
            }
        })
        .collect();

    Ok((value, warnings))
}

/// Locate the user options file.
///
/// An explicit path wins, then `$DROPMENU_CONFIG`, then
/// `<config dir>/dropmenu/options.toml` when it exists.
pub fn user_options_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(path) = std::env::var_os(CONFIG_ENV).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }

    dirs::config_dir()
        .map(|dir| dir.join("dropmenu").join("options.toml"))
        .filter(|path| path.exists())
}

/// Load the user options layer, or an empty patch when there is none
pub fn load_user_options(
    explicit: Option<&Path>,
) -> DropmenuResult<(OptionsPatch, Vec<ConfigWarning>)> {
    match user_options_path(explicit) {
        Some(path) => load_with_warnings(&path),
        None => Ok((OptionsPatch::default(), Vec::new())),
    }
}

fn is_json(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    for (i, line) in content.lines().enumerate() {
        if line.contains(needle) {
            return Some(i + 1);
        }
    }
    None
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "options",
        "speed",
        "easing",
        "margin",
        "collision",
        "auto_resize",
        "scroll_selected",
        "keyboard",
        "nested",
        "select_parents",
        "multi",
        "max_select",
        "min_select",
        "select_links",
        "follow_links",
        "auto_close",
        "auto_close_max",
        "auto_close_link",
        "close_reset",
        "auto_toggle",
        "auto_toggle_link",
        "auto_toggle_html",
        "auto_title",
        "toggle_text",
        "title_text",
        "close_text",
        "back_text",
        "select",
        "list",
        "multiple",
        "group",
        "label",
        "value",
        "selected",
        "items",
        "children",
        "data_text",
        "data_value",
        "data_url",
        "data_selected",
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
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
