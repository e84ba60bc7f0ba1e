use std::path::{Path, PathBuf};

use analysis::roles::{ChampionMastery, ChampionRoleTable, RecentMatch, Role, RoleHistoryConfig};

use crate::Error;

#[derive(Debug, Clone)]
pub struct RolesRequest {
    pub puuid: String,
    /// JSON array of `match-v5` documents, most recent first.
    pub history: Option<PathBuf>,
    /// JSON array of `{"championId", "championPoints"}`, highest first.
    pub mastery: Option<PathBuf>,
    pub champion_roles: PathBuf,
    pub history_config: RoleHistoryConfig,
}

fn read_json<T>(path: &Path) -> Result<T, Error>
where
    T: serde::de::DeserializeOwned,
{
    let content = std::fs::read(path).map_err(Error::io(path))?;
    serde_json::from_slice(&content).map_err(Error::json(path))
}

pub fn infer(request: &RolesRequest) -> Result<Option<Role>, Error> {
    let table = ChampionRoleTable::load(&request.champion_roles)?;

    let history: Vec<RecentMatch> = match request.history.as_deref() {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };
    let masteries: Vec<ChampionMastery> = match request.mastery.as_deref() {
        Some(path) => read_json(path)?,
        None => Vec::new(),
    };

    tracing::debug!(
        puuid = %request.puuid,
        history = history.len(),
        masteries = masteries.len(),
        "Inferring role"
    );

    Ok(analysis::roles::infer_role(
        &request.history_config,
        &table,
        &request.puuid,
        &history,
        &masteries,
    ))
}
