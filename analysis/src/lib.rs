//! Match statistics from League of Legends `.rofl` replays.
//!
//! A replay goes through [`scanner`] (find the embedded JSON), [`decoder`]
//! (parse it into per-player stat records) and [`normalize`] (typed
//! [`normalize::Match`]). From there [`export`] renders documents and
//! [`scrim`] aggregates many matches. [`roles`] infers a player's lane from
//! external match or mastery data.

pub mod decoder;
pub mod error;
pub mod export;
pub mod normalize;
pub mod roles;
pub mod scanner;
pub mod scrim;

pub use error::ReplayError;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub scan: scanner::ScanConfig,
    pub normalize: normalize::NormalizeConfig,
}

/// Runs the whole per-file pipeline over a replay's bytes.
#[tracing::instrument(skip_all, fields(len = buf.len()))]
pub fn parse_replay(config: &Config, buf: &[u8]) -> Result<normalize::Match, ReplayError> {
    let range = scanner::scan(&config.scan, buf)?;
    let payload = decoder::decode(&buf[range])?;
    let id = normalize::match_id(&config.normalize, buf);

    normalize::normalize(id, &payload)
}
