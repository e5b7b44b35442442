//! Platform-specific directory paths.
//!
//! Uses XDG on Linux, standard locations on macOS/Windows.

use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;

const QUALIFIER: &str = "org";
const ORGANIZATION: &str = "budget";
const APPLICATION: &str = "budget-console";

const CONFIG_FILE: &str = "config.toml";

/// Maximum number of archived log files to keep.
const MAX_OLD_LOGS: usize = 10;

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from(QUALIFIER, ORGANIZATION, APPLICATION)
}

/// Get the config directory.
///
/// - Linux: `$XDG_CONFIG_HOME/budget-console` or `~/.config/budget-console`
/// - macOS: `~/Library/Application Support/org.budget.budget-console`
/// - Windows: `C:\Users\<User>\AppData\Roaming\budget\budget-console\config`
pub fn config_dir() -> Option<PathBuf> {
    project_dirs().map(|dirs| dirs.config_dir().to_path_buf())
}

/// Default config file location.
pub fn config_file() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Archive `log` under a timestamped name and prune old archives.
///
/// Call this before opening a fresh log file.
pub fn rotate_logs(log: &Path) {
    let Some(dir) = log.parent() else { return };

    if log.exists() {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        let archived = dir.join(format!("{}.log", timestamp));
        if let Err(e) = fs::rename(log, &archived) {
            eprintln!("Could not archive {}: {}", log.display(), e);
        }
    }

    cleanup_old_logs(dir, log);
}

fn cleanup_old_logs(dir: &Path, current: &Path) {
    let Ok(entries) = fs::read_dir(dir) else { return };

    let mut logs: Vec<_> = entries
        .filter_map(|e| e.ok())
        .filter(|e| {
            let path = e.path();
            path.extension().is_some_and(|ext| ext == "log") && path != current
        })
        .collect();

    // Oldest first
    logs.sort_by_key(|e| e.metadata().and_then(|m| m.modified()).ok());

    if logs.len() > MAX_OLD_LOGS {
        for entry in logs.iter().take(logs.len() - MAX_OLD_LOGS) {
            let _ = fs::remove_file(entry.path());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rotate_archives_latest() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("console.log");
        fs::write(&log, "old run").unwrap();

        rotate_logs(&log);

        assert!(!log.exists());
        let archived: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(archived.len(), 1);
    }

    #[test]
    fn test_rotate_prunes_old_archives() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..(MAX_OLD_LOGS + 3) {
            let name = format!("2024010{}_00000{}.log", i / 10, i % 10);
            fs::write(dir.path().join(name), "").unwrap();
        }
        let log = dir.path().join("console.log");

        rotate_logs(&log);

        let remaining = fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(remaining, MAX_OLD_LOGS);
    }

    #[test]
    fn test_default_config_location() {
        if let Some(path) = config_file() {
            assert!(path.ends_with(CONFIG_FILE));
        }
    }
}
