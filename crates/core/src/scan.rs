use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rayon::prelude::*;
use thiserror::Error;
use walkdir::WalkDir;

use crate::cache::{CacheManager, CachedScan};
use crate::detector::{DetectorRegistry, ScanContext};
use crate::problem::Problem;

/// Known source extensions and the language tag each maps to.
const EXTENSION_TAGS: &[(&str, &str)] = &[
    ("py", "python"),
    ("js", "javascript"),
    ("ts", "typescript"),
    ("jsx", "jsx"),
    ("tsx", "tsx"),
];

/// Directories never worth scanning.
const SKIP_DIRS: &[&str] = &["node_modules", "__pycache__", "dist", "build", "target"];

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("no supported source files found in: {0}")]
    NoSources(PathBuf),
}

/// Result of scanning a path: problems in file-discovery order, plus the
/// source text of every scanned file.
pub struct WorkspaceScan {
    pub files: Vec<PathBuf>,
    pub problems: Vec<Problem>,
    pub source_map: HashMap<PathBuf, String>,
    /// Files found but not scanned (no detector for their language).
    pub skipped: Vec<PathBuf>,
}

/// Map a file path to a language tag by extension.
pub fn language_for_path(path: &Path) -> Option<&'static str> {
    let ext = path.extension()?.to_str()?.to_lowercase();
    EXTENSION_TAGS
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|(_, tag)| *tag)
}

/// Discover all supported source files under a path.
pub fn discover_sources(path: &Path) -> Result<Vec<PathBuf>> {
    // A single file is scanned as-is; the caller may still override its language.
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }

    let files: Vec<PathBuf> = WalkDir::new(path)
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            !(e.file_type().is_dir()
                && (SKIP_DIRS.contains(&name.as_ref()) || name.starts_with('.')))
        })
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| language_for_path(e.path()).is_some())
        .map(|e| e.path().to_path_buf())
        .collect();

    if files.is_empty() {
        return Err(ScanError::NoSources(path.to_path_buf()).into());
    }

    Ok(files)
}

struct ScanJob {
    path: PathBuf,
    source: String,
    tag: String,
    hash: String,
    from_cache: bool,
    problems: Option<Vec<Problem>>,
}

/// Scan every supported file under `path` with the registered detectors,
/// optionally reusing cached results keyed by content hash. Cache misses are
/// scanned in parallel; each scan is a pure function of its source text.
pub fn scan_path(
    registry: &DetectorRegistry,
    path: &Path,
    language_override: Option<&str>,
    mut cache: Option<&mut CacheManager>,
) -> Result<WorkspaceScan> {
    let files = discover_sources(path)?;

    let mut skipped = Vec::new();
    let mut jobs: Vec<ScanJob> = Vec::new();

    for file_path in &files {
        let tag = match language_override.or_else(|| language_for_path(file_path)) {
            Some(tag) if registry.for_language(tag).is_some() => tag.to_string(),
            _ => {
                skipped.push(file_path.clone());
                continue;
            }
        };

        let source = std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read: {}", file_path.display()))?;
        let hash = CacheManager::hash_contents(&source);

        let cached = cache
            .as_deref()
            .and_then(|c| c.lookup(file_path, &hash))
            .map(|scan| scan.problems);

        jobs.push(ScanJob {
            path: file_path.clone(),
            source,
            tag,
            hash,
            from_cache: cached.is_some(),
            problems: cached,
        });
    }

    jobs.par_iter_mut().for_each(|job| {
        if job.problems.is_some() {
            return;
        }
        let ctx = ScanContext::new(&job.source, Some(&job.path));
        let mut problems = registry
            .run_for_language(&job.tag, &ctx)
            .unwrap_or_default();
        for p in &mut problems {
            if p.snippet.is_none() {
                p.snippet = ctx.line(p.position.line).map(str::to_string);
            }
        }
        job.problems = Some(problems);
    });

    // Non-fatal: a cache write failure never fails the scan
    if let Some(c) = cache.as_deref_mut() {
        for job in &jobs {
            if !job.from_cache {
                let scan = CachedScan {
                    language: job.tag.clone(),
                    problems: job.problems.clone().unwrap_or_default(),
                };
                let _ = c.store(&job.path, &job.hash, &scan);
            }
        }
        let _ = c.flush();
    }

    let mut problems = Vec::new();
    let mut source_map = HashMap::new();
    let mut scanned_files = Vec::new();
    for job in jobs {
        problems.extend(job.problems.unwrap_or_default());
        scanned_files.push(job.path.clone());
        source_map.insert(job.path, job.source);
    }

    Ok(WorkspaceScan {
        files: scanned_files,
        problems,
        source_map,
        skipped,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_for_path() {
        assert_eq!(language_for_path(Path::new("lesson.py")), Some("python"));
        assert_eq!(language_for_path(Path::new("app.JSX")), Some("jsx"));
        assert_eq!(language_for_path(Path::new("index.tsx")), Some("tsx"));
        assert_eq!(language_for_path(Path::new("notes.txt")), None);
        assert_eq!(language_for_path(Path::new("Makefile")), None);
    }

    #[test]
    fn test_discover_skips_junk_dirs() {
        let dir = std::env::temp_dir().join("tutorlint-test-discover");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(dir.join("node_modules")).unwrap();
        std::fs::write(dir.join("lesson.py"), "x = 5\n").unwrap();
        std::fs::write(dir.join("node_modules").join("dep.js"), "var x;\n").unwrap();

        let files = discover_sources(&dir).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("lesson.py"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_discover_empty_dir_errors() {
        let dir = std::env::temp_dir().join("tutorlint-test-empty");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        assert!(discover_sources(&dir).is_err());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
