//! Turns source globs into [`InputFile`]s.

use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use glob::{Pattern, glob};
use walkdir::WalkDir;

use super::extract::InputFile;

/// Check if a pattern contains glob syntax (`*`, `?` or `[`).
/// Anything else is a literal file or directory; directories are walked
/// recursively.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?') || pattern.contains('[')
}

/// A source path that could not be expanded.
#[derive(Debug, Clone)]
pub struct ScanWarning {
    pub path: String,
    pub error: String,
}

#[derive(Debug, Default)]
pub struct ScanResult {
    /// Matched paths, in source order and then glob order. Paths are
    /// relative to the base directory when the source was relative.
    pub paths: Vec<PathBuf>,
    pub warnings: Vec<ScanWarning>,
}

/// Expand `sources` relative to `base_dir`, dropping anything that matches
/// one of `ignores`. Each path is listed once, at its first match.
///
/// Literal ignores exclude the path and everything below it. Missing
/// literal sources produce a warning only when `report_missing` is set.
pub fn scan_sources(
    base_dir: &Path,
    sources: &[String],
    ignores: &[String],
    report_missing: bool,
) -> Result<ScanResult> {
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut ignore_patterns: Vec<Pattern> = Vec::new();
    for p in ignores {
        if is_glob_pattern(p) {
            ignore_patterns.push(
                Pattern::new(p)
                    .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", p))?,
            );
        } else {
            literal_ignore_paths.push(PathBuf::from(p));
        }
    }

    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut result = ScanResult::default();

    for source in sources {
        let full = base_dir.join(source);

        let mut candidates: Vec<PathBuf> = Vec::new();
        if is_glob_pattern(source) {
            let pattern_str = full.to_string_lossy();
            let entries = glob(&pattern_str)
                .with_context(|| format!("Invalid glob pattern in 'sources': \"{}\"", source))?;
            for entry in entries {
                match entry {
                    Ok(path) => candidates.push(path),
                    Err(e) => result.warnings.push(ScanWarning {
                        path: e.path().to_string_lossy().to_string(),
                        error: e.error().to_string(),
                    }),
                }
            }
        } else if full.is_dir() {
            for entry in WalkDir::new(&full).sort_by_file_name() {
                match entry {
                    Ok(e) if e.file_type().is_dir() => {}
                    Ok(e) => candidates.push(e.into_path()),
                    Err(e) => result.warnings.push(ScanWarning {
                        path: e
                            .path()
                            .map(|p| p.to_string_lossy().to_string())
                            .unwrap_or_else(|| full.to_string_lossy().to_string()),
                        error: e.to_string(),
                    }),
                }
            }
        } else if full.exists() {
            candidates.push(full);
        } else if report_missing {
            result.warnings.push(ScanWarning {
                path: full.to_string_lossy().to_string(),
                error: "no such file or directory".to_string(),
            });
        }

        for path in candidates {
            let relative = path.strip_prefix(base_dir).unwrap_or(&path);
            if literal_ignore_paths
                .iter()
                .any(|ignore_path| relative.starts_with(ignore_path))
                || ignore_patterns.iter().any(|p| p.matches_path(relative))
            {
                continue;
            }
            let relative = relative.to_path_buf();
            if seen.insert(relative.clone()) {
                result.paths.push(relative);
            }
        }
    }

    Ok(result)
}

/// Load one path as an input file.
///
/// Regular files are buffered, directories become null files and anything
/// else (pipes, sockets, devices) is a stream.
pub fn load_input_file(base_dir: &Path, path: &Path) -> Result<InputFile> {
    let full = base_dir.join(path);
    let display = path.to_string_lossy().to_string();
    let metadata =
        fs::metadata(&full).with_context(|| format!("Failed to access {:?}", full))?;
    let file_type = metadata.file_type();

    if file_type.is_file() {
        let contents = fs::read(&full).with_context(|| format!("Failed to read {:?}", full))?;
        Ok(InputFile::buffer(display, contents))
    } else if file_type.is_dir() {
        Ok(InputFile::null(display))
    } else {
        Ok(InputFile::stream(display))
    }
}
