/// Reasons a single replay could not be turned into a match.
///
/// All of these are scoped to one file; batch callers log them and move on.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("no statistics payload found (is this a replay file?)")]
    PayloadNotFound,
    #[error("payload starting at byte {start} is not closed within {window} bytes")]
    UnterminatedPayload { start: usize, window: usize },
    #[error("payload is not valid JSON: {0}")]
    CorruptPayload(#[source] serde_json::Error),
    #[error("payload is missing required field `{0}`")]
    MissingStatField(&'static str),
}

impl ReplayError {
    pub(crate) fn corrupt(msg: impl std::fmt::Display) -> Self {
        Self::CorruptPayload(<serde_json::Error as serde::de::Error>::custom(msg))
    }
}
