//! Timestamped file names derived from a base path template
//!
//! A base path such as `logs/app.log` is never written to directly. Each file
//! the logger opens is named after the moment it was opened:
//!
//! ```text
//! logs/app.log  ->  logs/app_31.01.2026_23-10-15.log
//!               ->  logs/app_31.01.2026_23-10-15_01.log   (same second, taken)
//! ```
//!
//! The suffix avoids `:` so the names are valid on every common filesystem.

use crate::core::error::{LoggerError, Result};
use chrono::NaiveDateTime;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// One-second resolution suffix: `31.01.2026_23-10-15`
pub const SUFFIX_FORMAT: &str = "%d.%m.%Y_%H-%M-%S";

/// Millisecond suffix used once every numbered candidate is taken
pub const FALLBACK_SUFFIX_FORMAT: &str = "%d.%m.%Y_%H-%M-%S%.3f";

/// Highest numeric disambiguator tried within one second
pub const MAX_DISAMBIGUATOR: u32 = 9999;

pub fn timestamp_suffix(now: &NaiveDateTime) -> String {
    now.format(SUFFIX_FORMAT).to_string()
}

/// Directory, stem and extension (with its dot) of a base path
///
/// A trailing separator names a directory: `logs/` splits into `logs`, `logs`
/// and no extension. The extension starts at the last `.` of the file name, so
/// `logs/.log` has an empty stem and the extension `.log`.
fn split_base(base_path: &Path) -> (PathBuf, OsString, OsString) {
    let name = base_path.file_name().unwrap_or_default();

    let dir = if ends_with_separator(base_path) {
        base_path.components().collect()
    } else {
        base_path.parent().map(Path::to_path_buf).unwrap_or_default()
    };

    let (stem, ext) = match name.to_str() {
        Some(name) => {
            let dot = name.rfind('.').unwrap_or(name.len());
            (OsString::from(&name[..dot]), OsString::from(&name[dot..]))
        }
        None => {
            let name = Path::new(name);
            let mut ext = OsString::new();
            if let Some(e) = name.extension() {
                ext.push(".");
                ext.push(e);
            }
            let stem = name.file_stem().unwrap_or(name.as_os_str());
            (stem.to_os_string(), ext)
        }
    };

    (dir, stem, ext)
}

fn ends_with_separator(path: &Path) -> bool {
    path.as_os_str()
        .to_string_lossy()
        .ends_with(std::path::is_separator)
}

/// Insert `_<suffix>` between the file stem and its extension
pub fn path_with_suffix(base_path: &Path, suffix: &str) -> PathBuf {
    let (dir, stem, ext) = split_base(base_path);

    let mut file_name = stem;
    file_name.push("_");
    file_name.push(suffix);
    file_name.push(ext);

    if dir.as_os_str().is_empty() {
        PathBuf::from(file_name)
    } else {
        dir.join(file_name)
    }
}

/// Pick a path for a new log file that does not exist yet
///
/// Tries the plain timestamp first, then `_01` through `_9999`. If all of
/// those exist the millisecond suffix is returned without a further check.
///
/// # Errors
///
/// Any stat failure other than "not found" stops the search.
pub fn unique_path(base_path: &Path, now: &NaiveDateTime) -> Result<PathBuf> {
    let suffix = timestamp_suffix(now);

    let candidate = path_with_suffix(base_path, &suffix);
    if is_free(&candidate)? {
        return Ok(candidate);
    }

    for i in 1..=MAX_DISAMBIGUATOR {
        let candidate = path_with_suffix(base_path, &format!("{}_{:02}", suffix, i));
        if is_free(&candidate)? {
            return Ok(candidate);
        }
    }

    let fallback = now.format(FALLBACK_SUFFIX_FORMAT).to_string();
    Ok(path_with_suffix(base_path, &fallback))
}

fn is_free(candidate: &Path) -> Result<bool> {
    match fs::metadata(candidate) {
        Ok(_) => Ok(false),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(true),
        Err(e) => Err(LoggerError::io_operation(
            "checking log file name",
            format!("Cannot stat '{}'", candidate.display()),
            e,
        )),
    }
}

/// Create the directory that will hold files derived from `base_path`
pub fn ensure_dir(base_path: &Path) -> Result<()> {
    let (dir, _, _) = split_base(base_path);
    if dir.as_os_str().is_empty() {
        return Ok(());
    }

    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o755);
    }

    builder.create(&dir).map_err(|e| {
        LoggerError::io_operation(
            "creating log directory",
            format!("Failed to create directory '{}'", dir.display()),
            e,
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 1, 31)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn test_suffix_has_no_colons() {
        let suffix = timestamp_suffix(&at(23, 10, 15));
        assert_eq!(suffix, "31.01.2026_23-10-15");
        assert!(!suffix.contains(':'));
    }

    #[test]
    fn test_path_with_suffix() {
        assert_eq!(
            path_with_suffix(Path::new("logs/app.log"), "31.01.2026_23-10-15"),
            PathBuf::from("logs/app_31.01.2026_23-10-15.log")
        );
        assert_eq!(
            path_with_suffix(Path::new("app.log"), "X"),
            PathBuf::from("app_X.log")
        );
        assert_eq!(
            path_with_suffix(Path::new("var/log/server"), "X"),
            PathBuf::from("var/log/server_X")
        );
        assert_eq!(
            path_with_suffix(Path::new("out/archive.tar.gz"), "X"),
            PathBuf::from("out/archive.tar_X.gz")
        );
    }

    #[test]
    fn test_path_with_suffix_directory_base() {
        // A trailing separator keeps the files inside that directory
        assert_eq!(
            path_with_suffix(Path::new("logs/"), "X"),
            PathBuf::from("logs/logs_X")
        );
        assert_eq!(
            path_with_suffix(Path::new("var/log/server/"), "X"),
            PathBuf::from("var/log/server/server_X")
        );
    }

    #[test]
    fn test_path_with_suffix_dot_file_base() {
        // The suffix still goes before the extension when the stem is empty
        assert_eq!(
            path_with_suffix(Path::new("logs/.log"), "X"),
            PathBuf::from("logs/_X.log")
        );
        assert_eq!(path_with_suffix(Path::new(".log"), "X"), PathBuf::from("_X.log"));
    }

    #[test]
    fn test_unique_path_free_slot() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("app.log");

        let path = unique_path(&base, &at(8, 0, 0)).unwrap();
        assert_eq!(path, dir.path().join("app_31.01.2026_08-00-00.log"));
    }

    #[test]
    fn test_unique_path_same_second_collision() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("app.log");
        let now = at(8, 0, 0);

        let first = unique_path(&base, &now).unwrap();
        fs::write(&first, b"taken").unwrap();

        let second = unique_path(&base, &now).unwrap();
        assert_ne!(first, second);
        assert_eq!(second, dir.path().join("app_31.01.2026_08-00-00_01.log"));

        fs::write(&second, b"taken").unwrap();
        let third = unique_path(&base, &now).unwrap();
        assert_eq!(third, dir.path().join("app_31.01.2026_08-00-00_02.log"));
    }

    #[test]
    fn test_unique_path_millisecond_fallback() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("app.log");
        let now = NaiveDate::from_ymd_opt(2026, 1, 31)
            .unwrap()
            .and_hms_milli_opt(8, 0, 0, 250)
            .unwrap();

        let suffix = timestamp_suffix(&now);
        fs::write(path_with_suffix(&base, &suffix), b"").unwrap();
        for i in 1..=MAX_DISAMBIGUATOR {
            fs::write(path_with_suffix(&base, &format!("{}_{:02}", suffix, i)), b"").unwrap();
        }

        let path = unique_path(&base, &now).unwrap();
        assert_eq!(path, dir.path().join("app_31.01.2026_08-00-00.250.log"));
    }

    #[cfg(unix)]
    #[test]
    fn test_unique_path_surfaces_stat_errors() {
        // A regular file standing in for the directory makes stat fail with ENOTDIR
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("not_a_dir");
        fs::write(&blocker, b"").unwrap();

        let err = unique_path(&blocker.join("app.log"), &at(8, 0, 0)).unwrap_err();
        assert!(matches!(err, LoggerError::IoOperation { .. }));
    }

    #[test]
    fn test_ensure_dir_creates_parents() {
        let dir = tempdir().unwrap();
        let base = dir.path().join("a").join("b").join("app.log");

        ensure_dir(&base).unwrap();
        assert!(dir.path().join("a").join("b").is_dir());

        // no directory component
        ensure_dir(Path::new("app.log")).unwrap();
    }

    #[test]
    fn test_directory_base_resolves_inside_it() {
        let dir = tempdir().unwrap();
        let base = PathBuf::from(format!("{}/logs/", dir.path().display()));

        ensure_dir(&base).unwrap();
        assert!(dir.path().join("logs").is_dir());

        let path = unique_path(&base, &at(8, 0, 0)).unwrap();
        assert_eq!(path, dir.path().join("logs").join("logs_31.01.2026_08-00-00"));
    }
}
