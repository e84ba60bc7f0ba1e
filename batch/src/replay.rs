use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::Error;

#[derive(Debug, Clone)]
pub enum ReplayData {
    MemMapped(Arc<memmap2::Mmap>),
    Preloaded(Arc<[u8]>),
}

/// A replay's bytes plus what the file system knows about it.
#[derive(Debug, Clone)]
pub struct ReplayFile {
    pub path: PathBuf,
    /// Modification time in milliseconds since the epoch, 0 if unknown.
    pub modified_ms: i64,
    data: ReplayData,
}

impl ReplayFile {
    pub fn load<P>(path: P) -> Result<Self, Error>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(Error::io(path))?;
        let metadata = file.metadata().map_err(Error::io(path))?;

        let modified_ms = metadata
            .modified()
            .map(|t| chrono::DateTime::<chrono::Utc>::from(t).timestamp_millis())
            .unwrap_or(0);

        // mapping a zero-length file fails on some platforms
        let data = if metadata.len() == 0 {
            ReplayData::Preloaded(Arc::from(Vec::new()))
        } else {
            // SAFETY: replays are only read, and are not expected to change
            // while a batch is running.
            let mmap = unsafe { memmap2::MmapOptions::new().map(&file) }.map_err(Error::io(path))?;
            ReplayData::MemMapped(Arc::new(mmap))
        };

        tracing::trace!(path = %path.display(), len = metadata.len(), "Loaded replay");

        Ok(Self {
            path: path.to_path_buf(),
            modified_ms,
            data,
        })
    }

    pub fn from_bytes(path: impl Into<PathBuf>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            path: path.into(),
            modified_ms: 0,
            data: ReplayData::Preloaded(bytes.into()),
        }
    }

    pub fn data(&self) -> &[u8] {
        match &self.data {
            ReplayData::MemMapped(v) => &v[..],
            ReplayData::Preloaded(v) => &v[..],
        }
    }

    pub fn parse(&self, config: &analysis::Config) -> Result<analysis::normalize::Match, Error> {
        analysis::parse_replay(config, self.data()).map_err(|source| Error::Replay {
            path: self.path.clone(),
            source,
        })
    }
}
