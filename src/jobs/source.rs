use std::fs::File;
use std::io::{self, Cursor, Read};
use std::path::{Path, PathBuf};

/// Where the job export is read from.
pub trait JobSource: Send + Sync {
    /// Human readable origin, used in log lines.
    fn describe(&self) -> String;

    fn open(&self) -> io::Result<Box<dyn Read + '_>>;
}

/// Export stored on disk.
#[derive(Debug, Clone)]
pub struct CsvFile {
    path: PathBuf,
}

impl CsvFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl JobSource for CsvFile {
    fn describe(&self) -> String {
        self.path().display().to_string()
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(File::open(&self.path)?))
    }
}

/// Export already held in memory, e.g. embedded fixtures.
#[derive(Debug, Clone)]
pub struct InMemoryCsv {
    contents: String,
}

impl InMemoryCsv {
    pub fn new(contents: impl Into<String>) -> Self {
        Self {
            contents: contents.into(),
        }
    }
}

impl JobSource for InMemoryCsv {
    fn describe(&self) -> String {
        format!("in-memory export ({} bytes)", self.contents.len())
    }

    fn open(&self) -> io::Result<Box<dyn Read + '_>> {
        Ok(Box::new(Cursor::new(self.contents.as_bytes())))
    }
}
