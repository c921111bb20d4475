use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::problem::Problem;

/// Schema version. Bump when cached struct layouts change.
const SCHEMA_VERSION: u32 = 1;

/// Per-file cached artifact: the problems found in one source file.
/// Valid only while the file's content hash matches.
#[derive(Serialize, Deserialize)]
pub struct CachedScan {
    pub language: String,
    pub problems: Vec<Problem>,
}

/// Cache manifest tracking file hashes and artifact locations
#[derive(Serialize, Deserialize)]
struct Manifest {
    schema_version: u32,
    files: HashMap<PathBuf, FileEntry>,
}

#[derive(Serialize, Deserialize)]
struct FileEntry {
    hash: String,
    artifact_file: String,
}

/// Manages file-level caching of scan results
pub struct CacheManager {
    cache_dir: PathBuf,
    manifest: Manifest,
}

impl CacheManager {
    /// Open or create a cache in the given directory
    pub fn open(cache_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&cache_dir)
            .with_context(|| format!("Failed to create cache dir: {}", cache_dir.display()))?;

        let artifacts_dir = cache_dir.join("artifacts");
        fs::create_dir_all(&artifacts_dir)?;

        let manifest_path = cache_dir.join("manifest.json");
        let manifest = if manifest_path.exists() {
            let data = fs::read_to_string(&manifest_path)?;
            let m: Manifest = serde_json::from_str(&data).unwrap_or_else(|_| Manifest {
                schema_version: SCHEMA_VERSION,
                files: HashMap::new(),
            });
            // Invalidate if schema version changed
            if m.schema_version != SCHEMA_VERSION {
                Manifest {
                    schema_version: SCHEMA_VERSION,
                    files: HashMap::new(),
                }
            } else {
                m
            }
        } else {
            Manifest {
                schema_version: SCHEMA_VERSION,
                files: HashMap::new(),
            }
        };

        Ok(Self {
            cache_dir,
            manifest,
        })
    }

    /// Compute SHA256 hash of file contents
    pub fn hash_contents(contents: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(contents.as_bytes());
        format!("{:x}", hasher.finalize())
    }

    /// Look up a cached scan for a file. Returns None on miss or hash mismatch.
    pub fn lookup(&self, file_path: &Path, current_hash: &str) -> Option<CachedScan> {
        let entry = self.manifest.files.get(file_path)?;
        if entry.hash != current_hash {
            return None;
        }
        let artifact_path = self.cache_dir.join("artifacts").join(&entry.artifact_file);
        let data = fs::read(&artifact_path).ok()?;
        bincode::deserialize(&data).ok()
    }

    /// Store a cached scan for a file
    pub fn store(&mut self, file_path: &Path, hash: &str, scan: &CachedScan) -> Result<()> {
        let artifact_name = format!("{}.bin", &hash[..16]);
        let artifact_path = self.cache_dir.join("artifacts").join(&artifact_name);
        let data = bincode::serialize(scan)?;
        fs::write(&artifact_path, data)?;

        self.manifest.files.insert(
            file_path.to_path_buf(),
            FileEntry {
                hash: hash.to_string(),
                artifact_file: artifact_name,
            },
        );
        Ok(())
    }

    /// Flush manifest to disk
    pub fn flush(&self) -> Result<()> {
        let manifest_path = self.cache_dir.join("manifest.json");
        let data = serde_json::to_string_pretty(&self.manifest)?;
        fs::write(manifest_path, data)?;
        Ok(())
    }

    /// Clear all cached artifacts
    pub fn clear(&mut self) -> Result<()> {
        let artifacts_dir = self.cache_dir.join("artifacts");
        if artifacts_dir.exists() {
            fs::remove_dir_all(&artifacts_dir)?;
            fs::create_dir_all(&artifacts_dir)?;
        }
        self.manifest.files.clear();
        self.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::problem::{problem_id, Category, Position, ProblemType, Severity};

    fn sample_problem() -> Problem {
        Problem {
            id: problem_id("E501", 3, 80, "a very long line"),
            problem_type: ProblemType::Warning,
            severity: Severity::Minor,
            category: Category::Style,
            code: "E501".to_string(),
            message: "Line too long".to_string(),
            explanation: "test".to_string(),
            fix_suggestion: None,
            learn_more: None,
            position: Position::at(3, 80),
            source: "Python".to_string(),
            file: Some(PathBuf::from("lesson.py")),
            snippet: None,
        }
    }

    #[test]
    fn test_hash_contents() {
        let h1 = CacheManager::hash_contents("hello");
        let h2 = CacheManager::hash_contents("hello");
        let h3 = CacheManager::hash_contents("world");
        assert_eq!(h1, h2);
        assert_ne!(h1, h3);
        assert_eq!(h1.len(), 64); // SHA256 hex
    }

    #[test]
    fn test_cache_roundtrip() {
        let dir = std::env::temp_dir().join("tutorlint-test-cache");
        let _ = fs::remove_dir_all(&dir);

        let mut cache = CacheManager::open(dir.clone()).unwrap();

        let scan = CachedScan {
            language: "python".to_string(),
            problems: vec![sample_problem()],
        };

        let file = PathBuf::from("lesson.py");
        let hash = CacheManager::hash_contents("x = 5\n");

        cache.store(&file, &hash, &scan).unwrap();
        cache.flush().unwrap();

        // Lookup should hit
        let hit = cache.lookup(&file, &hash);
        assert!(hit.is_some());
        let hit = hit.unwrap();
        assert_eq!(hit.problems.len(), 1);
        assert_eq!(hit.problems[0].code, "E501");

        // Different hash should miss
        let different = CacheManager::hash_contents("y = 6\n");
        assert!(cache.lookup(&file, &different).is_none());

        // Clear should remove everything
        cache.clear().unwrap();
        assert!(cache.lookup(&file, &hash).is_none());

        let _ = fs::remove_dir_all(&dir);
    }
}
