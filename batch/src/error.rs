use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("{}: {source}", path.display())]
    Replay {
        path: PathBuf,
        #[source]
        source: analysis::ReplayError,
    },
    #[error("serializing output: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error(transparent)]
    RoleTable(#[from] analysis::roles::RoleTableError),
    #[error("worker pool closed")]
    PoolClosed(#[from] tokio::sync::AcquireError),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(std::io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }

    pub(crate) fn json(path: impl Into<PathBuf>) -> impl FnOnce(serde_json::Error) -> Self {
        let path = path.into();
        move |source| Self::Json { path, source }
    }
}
