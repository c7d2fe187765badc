//! Output path mapping
//!
//! Pure domain logic deciding where a compiled stylesheet lands. No I/O.

use std::ffi::OsString;
use std::path::{Component, Path, PathBuf};

use crate::domain::entities::FileTask;
use crate::domain::value_objects::CompileOptions;

/// Map an input stylesheet to its output path
///
/// The input's last extension is replaced by `options.extension`. With
/// `shallow`, only the file name is kept; otherwise the input's directory
/// (relative to `input_root`, when set) is mirrored under `output_dir`.
pub fn map_output_path(input: &Path, options: &CompileOptions) -> PathBuf {
    let mut file_name: OsString = input.file_stem().map(OsString::from).unwrap_or_default();
    file_name.push(options.normalized_extension());

    let mut output = options.output_dir.clone();
    if !options.shallow {
        let relative = strip_input_root(input, options.input_root());
        if let Some(parent) = relative.parent() {
            output.extend(parent.components().filter_map(|c| match c {
                Component::Normal(part) => Some(part),
                _ => None,
            }));
        }
    }
    output.push(file_name);
    output
}

/// Pair an input with its mapped output
pub fn file_task(input: &Path, options: &CompileOptions) -> FileTask {
    FileTask::new(input, map_output_path(input, options))
}

/// Lexically normalize a path: drop `.` and fold `dir/..`
///
/// Leading `..` components are kept since there is nothing to fold them into.
pub fn normalize(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
            other => parts.push(other),
        }
    }
    parts.iter().collect()
}

/// Express `path` relative to `base` when it lies inside it
///
/// Relative paths and absolute paths outside `base` come back normalized but
/// otherwise untouched. `base` itself maps to `.`.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    let path = normalize(path);
    if !path.is_absolute() {
        return path;
    }
    match path.strip_prefix(normalize(base)) {
        Ok(rest) if rest.as_os_str().is_empty() => PathBuf::from("."),
        Ok(rest) => rest.to_path_buf(),
        Err(_) => path,
    }
}

fn strip_input_root(input: &Path, root: Option<&Path>) -> PathBuf {
    let input = normalize(input);
    match root {
        Some(root) => {
            let root = normalize(root);
            input
                .strip_prefix(&root)
                .map(Path::to_path_buf)
                .unwrap_or(input)
        }
        None => input,
    }
}
