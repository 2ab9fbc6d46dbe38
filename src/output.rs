//! Output placement: timestamped filenames and atomic writes
//!
//! Files are named `<prefix>_<YYYYMMDD>_<HHMMSS>.<ext>`. Two writes within
//! the same second land on the same name and the later one wins.

use crate::{Error, Result};
use chrono::{Local, NaiveDateTime};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Source of the wall-clock time embedded in filenames
pub trait Clock {
    fn now(&self) -> NaiveDateTime;
}

/// Local wall-clock time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// Always reports the same instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

/// Where and under which name rendered documents are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlacement {
    dir: PathBuf,
    prefix: String,
    extension: String,
}

impl OutputPlacement {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            prefix: "scorecard".to_string(),
            extension: "svg".to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// File name for a document written at `at`
    pub fn file_name(&self, at: NaiveDateTime) -> String {
        format!("{}_{}.{}", self.prefix, at.format("%Y%m%d_%H%M%S"), self.extension)
    }

    /// Write `content` under the name for `at` and return the full path.
    ///
    /// The directory is created if needed. The document goes to a hidden
    /// temporary file first and is renamed over the final name.
    pub fn write(&self, content: &str, at: NaiveDateTime) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir).map_err(|e| Error::output(&self.dir, e))?;

        let name = self.file_name(at);
        let path = self.dir.join(&name);
        let tmp = self.dir.join(format!(".{}.tmp", name));

        fs::write(&tmp, content).map_err(|e| Error::output(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &path) {
            debug!("Rename of {} failed, removing temporary file", tmp.display());
            let _ = fs::remove_file(&tmp);
            return Err(Error::output(&path, e));
        }

        info!("Wrote scorecard {}", path.display());
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    #[test]
    fn file_name_embeds_second_granularity_timestamp() {
        let placement = OutputPlacement::new("out");
        assert_eq!(placement.file_name(at(7, 5, 3)), "scorecard_20240309_070503.svg");
        let placement = placement.with_prefix("live").with_extension("xml");
        assert_eq!(placement.file_name(at(23, 59, 59)), "live_20240309_235959.xml");
    }

    #[test]
    fn write_creates_nested_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let dir = tmp.path().join("a").join("b");
        let path = OutputPlacement::new(&dir).write("<svg/>", at(1, 2, 3)).unwrap();
        assert_eq!(path, dir.join("scorecard_20240309_010203.svg"));
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
    }

    #[test]
    fn same_second_overwrites_and_leaves_no_temp_file() {
        let tmp = tempfile::tempdir().unwrap();
        let placement = OutputPlacement::new(tmp.path());
        placement.write("first", at(1, 2, 3)).unwrap();
        let path = placement.write("second", at(1, 2, 3)).unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
        let entries: Vec<_> = fs::read_dir(tmp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn existing_directory_is_not_an_error() {
        let tmp = tempfile::tempdir().unwrap();
        let placement = OutputPlacement::new(tmp.path());
        placement.write("x", at(0, 0, 0)).unwrap();
        placement.write("y", at(0, 0, 1)).unwrap();
    }

    #[test]
    fn unwritable_target_reports_path() {
        let tmp = tempfile::tempdir().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, "not a dir").unwrap();
        let err = OutputPlacement::new(&blocker).write("x", at(0, 0, 0)).unwrap_err();
        match err {
            Error::Output { path, .. } => assert_eq!(path, blocker),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn fixed_clock_is_stable() {
        let clock = FixedClock(at(12, 0, 0));
        assert_eq!(clock.now(), clock.now());
    }
}
