//! Backups of stored personal data, tracked by content hash.
//!
//! The first time a data file is overwritten its previous contents are
//! copied aside. Later writes keep that copy unless the file on disk no
//! longer matches anything we wrote or backed up, which means someone
//! replaced it and the replacement deserves its own backup.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackupError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Hashes known for a backed-up data file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupRecord {
    /// Hash of the contents copied into the backup
    pub backed_up: String,
    /// Hash of the contents we last wrote
    pub last_written: String,
}

impl BackupRecord {
    fn new(hash: String) -> Self {
        BackupRecord {
            backed_up: hash.clone(),
            last_written: hash,
        }
    }

    fn knows(&self, hash: &str) -> bool {
        self.backed_up == hash || self.last_written == hash
    }

    fn read(path: &Path) -> Result<Option<Self>, BackupError> {
        if !path.exists() {
            return Ok(None);
        }
        let data = fs::read_to_string(path)?;
        Ok(Some(serde_json::from_str(&data)?))
    }

    fn write(&self, path: &Path) -> Result<(), BackupError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}

/// SHA-256 of a file, hex encoded
pub fn hash_file(path: &Path) -> Result<String, BackupError> {
    let data = fs::read(path)?;
    Ok(hex::encode(Sha256::digest(&data)))
}

/// Backup copy and hash record locations for `path`
pub fn backup_paths(path: &Path) -> (PathBuf, PathBuf) {
    let mut backup = path.as_os_str().to_owned();
    backup.push(".bak");
    let mut record = backup.clone();
    record.push(".json");
    (PathBuf::from(backup), PathBuf::from(record))
}

fn needs_backup(path: &Path, backup: &Path, record: &Path) -> Result<bool, BackupError> {
    if !backup.exists() {
        return Ok(true);
    }
    // A backup we cannot account for is left alone
    let Some(known) = BackupRecord::read(record)? else {
        return Ok(false);
    };
    Ok(!known.knows(&hash_file(path)?))
}

/// Copy `path` aside if it has not been backed up yet.
///
/// Returns true when a new backup was written. Does nothing if `path`
/// does not exist.
pub fn backup_before_write(path: &Path) -> Result<bool, BackupError> {
    if !path.exists() {
        return Ok(false);
    }
    let (backup, record) = backup_paths(path);
    if !needs_backup(path, &backup, &record)? {
        return Ok(false);
    }

    fs::copy(path, &backup)?;
    BackupRecord::new(hash_file(path)?).write(&record)?;
    tracing::info!("backed up {} to {}", path.display(), backup.display());
    Ok(true)
}

/// Remember the contents just written to `path` so the next write does not
/// mistake them for a replacement.
pub fn record_write(path: &Path) -> Result<(), BackupError> {
    let (backup, record_path) = backup_paths(path);
    if !backup.exists() {
        return Ok(());
    }
    let hash = hash_file(path)?;
    let mut record =
        BackupRecord::read(&record_path)?.unwrap_or_else(|| BackupRecord::new(hash.clone()));
    record.last_written = hash;
    record.write(&record_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, content: &str) {
        fs::write(path, content).unwrap();
    }

    #[test]
    fn test_hash_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        write(&path, "{}");

        let hash = hash_file(&path).unwrap();
        assert_eq!(hash.len(), 64);
        assert_eq!(hash, hash_file(&path).unwrap());
    }

    #[test]
    fn test_backup_paths() {
        let (backup, record) = backup_paths(Path::new("/tmp/personal-data.json"));
        assert_eq!(backup, PathBuf::from("/tmp/personal-data.json.bak"));
        assert_eq!(record, PathBuf::from("/tmp/personal-data.json.bak.json"));
    }

    #[test]
    fn test_missing_file_is_not_backed_up() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        assert!(!backup_before_write(&path).unwrap());
        assert!(!backup_paths(&path).0.exists());
    }

    #[test]
    fn test_first_write_backs_up_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        write(&path, "original");

        assert!(backup_before_write(&path).unwrap());
        assert_eq!(fs::read_to_string(backup_paths(&path).0).unwrap(), "original");

        write(&path, "edited");
        record_write(&path).unwrap();
        assert!(!backup_before_write(&path).unwrap());
        assert_eq!(fs::read_to_string(backup_paths(&path).0).unwrap(), "original");
    }

    #[test]
    fn test_restored_backup_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        write(&path, "original");
        backup_before_write(&path).unwrap();
        write(&path, "edited");
        record_write(&path).unwrap();

        write(&path, "original");
        assert!(!backup_before_write(&path).unwrap());
    }

    #[test]
    fn test_replaced_file_gets_new_backup() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        write(&path, "original");
        backup_before_write(&path).unwrap();

        write(&path, "imported from elsewhere");
        assert!(backup_before_write(&path).unwrap());
        assert_eq!(
            fs::read_to_string(backup_paths(&path).0).unwrap(),
            "imported from elsewhere"
        );
    }

    #[test]
    fn test_unaccounted_backup_is_left_alone() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.json");
        write(&path, "current");
        write(&backup_paths(&path).0, "hand made");

        assert!(!backup_before_write(&path).unwrap());
        assert_eq!(fs::read_to_string(backup_paths(&path).0).unwrap(), "hand made");
    }
}
