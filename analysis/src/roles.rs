//! Lane inference for a player.
//!
//! Recent ranked games are the primary signal: whatever position the player
//! actually queued into most often wins. Champion mastery is only consulted
//! when no history is available, since flex picks make it unreliable.
//!
//! Neither method fails; "no idea" is `None`, rendered as `"unknown"`.

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Top,
    Jungle,
    Mid,
    Bot,
    Support,
}

// Riot uses MIDDLE/BOTTOM/UTILITY in match data, the site uses the short forms.
static POSITION_SYNONYMS: phf::Map<&'static str, Role> = phf::phf_map! {
    "TOP" => Role::Top,
    "JUNGLE" => Role::Jungle,
    "MIDDLE" => Role::Mid,
    "MID" => Role::Mid,
    "BOTTOM" => Role::Bot,
    "BOT" => Role::Bot,
    "UTILITY" => Role::Support,
    "SUPPORT" => Role::Support,
};

impl Role {
    /// Normalizes a recorded position. `None` for empty, `Invalid` and
    /// anything else that is not a lane.
    pub fn from_position(raw: &str) -> Option<Self> {
        POSITION_SYNONYMS.get(raw).copied()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Top => "TOP",
            Self::Jungle => "JUNGLE",
            Self::Mid => "MID",
            Self::Bot => "BOT",
            Self::Support => "SUPPORT",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

pub fn role_label(role: Option<Role>) -> &'static str {
    role.map(Role::as_str).unwrap_or("unknown")
}

/// Counts per key, remembering the order keys were first seen in.
///
/// The winner is the key with the highest count; on a tie the one seen first.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Tally<K> {
    entries: Vec<(K, u64)>,
}

impl<K> Default for Tally<K> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K: PartialEq + Copy> Tally<K> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: K, amount: u64) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, count)) => *count = count.saturating_add(amount),
            None => self.entries.push((key, amount)),
        }
    }

    pub fn merge(&mut self, other: &Self) {
        for (key, amount) in other.entries.iter() {
            self.add(*key, *amount);
        }
    }

    pub fn get(&self, key: K) -> u64 {
        self.entries
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn winner(&self) -> Option<K> {
        let mut best: Option<(K, u64)> = None;
        for (key, count) in self.entries.iter().copied() {
            match best {
                Some((_, best_count)) if best_count >= count => {}
                _ => best = Some((key, count)),
            }
        }
        best.map(|(k, _)| k)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (K, u64)> + '_ {
        self.entries.iter().copied()
    }
}

/// The parts of a `match-v5` document role inference looks at. Anything
/// else in the document is ignored, missing fields default.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentMatch {
    #[serde(default)]
    pub info: RecentMatchInfo,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentMatchInfo {
    #[serde(default)]
    pub queue_id: u32,
    #[serde(default)]
    pub game_duration: u64,
    #[serde(default)]
    pub participants: Vec<PositionRecord>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionRecord {
    #[serde(default)]
    pub puuid: String,
    #[serde(default)]
    pub team_position: String,
    #[serde(default)]
    pub individual_position: String,
}

impl PositionRecord {
    /// `teamPosition` when set, `individualPosition` otherwise.
    pub fn role(&self) -> Option<Role> {
        let raw = if self.team_position.is_empty() {
            &self.individual_position
        } else {
            &self.team_position
        };
        Role::from_position(raw)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleHistoryConfig {
    /// Only games from this queue count; `None` accepts every queue.
    pub queue_id: Option<u32>,
    pub max_matches: usize,
}

impl Default for RoleHistoryConfig {
    fn default() -> Self {
        Self {
            // ranked solo/duo
            queue_id: Some(420),
            max_matches: 15,
        }
    }
}

/// Majority vote over the positions the player had in `matches`, which are
/// expected most recent first.
pub fn infer_from_history(
    config: &RoleHistoryConfig,
    puuid: &str,
    matches: &[RecentMatch],
) -> Option<Role> {
    let mut votes = Tally::new();

    let considered = matches
        .iter()
        .filter(|m| config.queue_id.map_or(true, |q| m.info.queue_id == q))
        .take(config.max_matches);

    for recent in considered {
        let player = match recent.info.participants.iter().find(|p| p.puuid == puuid) {
            Some(p) => p,
            None => {
                tracing::trace!("Player not part of match, skipping");
                continue;
            }
        };

        match player.role() {
            Some(role) => votes.add(role, 1),
            None => tracing::trace!(
                team_position = %player.team_position,
                individual_position = %player.individual_position,
                "No usable position"
            ),
        }
    }

    let role = votes.winner();
    tracing::debug!(?role, votes = ?votes, "Role from match history");
    role
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChampionMastery {
    pub champion_id: u32,
    #[serde(default)]
    pub champion_points: u64,
}

/// Mastery entries considered by [`infer_from_mastery`].
pub const MASTERY_TOP_N: usize = 3;

#[derive(Debug, thiserror::Error)]
pub enum RoleTableError {
    #[error("reading champion role table: {0}")]
    Io(#[from] std::io::Error),
    #[error("parsing champion role table: {0}")]
    Json(#[from] serde_json::Error),
    #[error("champion {champion_id} is listed as both {first} and {second}")]
    DuplicateChampion {
        champion_id: u32,
        first: Role,
        second: Role,
    },
}

#[derive(Debug, serde::Deserialize)]
struct RoleTableFile {
    #[serde(default = "default_role")]
    default_role: Role,
    roles: std::collections::BTreeMap<Role, Vec<u32>>,
}

fn default_role() -> Role {
    Role::Mid
}

/// Primary role per champion id, plus the role assumed for champions the
/// table does not know.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChampionRoleTable {
    default_role: Role,
    roles: std::collections::HashMap<u32, Role>,
}

impl ChampionRoleTable {
    pub fn from_entries<I>(default_role: Role, entries: I) -> Result<Self, RoleTableError>
    where
        I: IntoIterator<Item = (u32, Role)>,
    {
        let mut roles = std::collections::HashMap::new();
        for (champion_id, role) in entries {
            match roles.entry(champion_id) {
                std::collections::hash_map::Entry::Vacant(v) => {
                    v.insert(role);
                }
                std::collections::hash_map::Entry::Occupied(o) if *o.get() == role => {}
                std::collections::hash_map::Entry::Occupied(o) => {
                    return Err(RoleTableError::DuplicateChampion {
                        champion_id,
                        first: *o.get(),
                        second: role,
                    });
                }
            }
        }

        Ok(Self {
            default_role,
            roles,
        })
    }

    /// Parses `{"default_role": "MID", "roles": {"TOP": [1, 2], ...}}`.
    pub fn from_json(text: &str) -> Result<Self, RoleTableError> {
        let file: RoleTableFile = serde_json::from_str(text)?;
        Self::from_entries(
            file.default_role,
            file.roles
                .into_iter()
                .flat_map(|(role, ids)| ids.into_iter().map(move |id| (id, role))),
        )
    }

    pub fn load<P>(path: P) -> Result<Self, RoleTableError>
    where
        P: AsRef<std::path::Path>,
    {
        let text = std::fs::read_to_string(path.as_ref())?;
        let table = Self::from_json(&text)?;
        tracing::debug!(
            path = %path.as_ref().display(),
            champions = table.len(),
            "Loaded champion role table"
        );
        Ok(table)
    }

    pub fn role_of(&self, champion_id: u32) -> Role {
        self.roles
            .get(&champion_id)
            .copied()
            .unwrap_or(self.default_role)
    }

    pub fn default_role(&self) -> Role {
        self.default_role
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

/// Sums mastery points per role over the top [`MASTERY_TOP_N`] entries (as
/// ranked by the caller) and picks the role with the most.
pub fn infer_from_mastery(table: &ChampionRoleTable, masteries: &[ChampionMastery]) -> Option<Role> {
    let mut points = Tally::new();
    for mastery in masteries.iter().take(MASTERY_TOP_N) {
        points.add(table.role_of(mastery.champion_id), mastery.champion_points);
    }

    let role = points.winner();
    tracing::debug!(?role, points = ?points, "Role from champion mastery");
    role
}

/// History first; mastery when history yields no role (no matches, none in
/// the queue, the player absent, or no usable position).
pub fn infer_role(
    config: &RoleHistoryConfig,
    table: &ChampionRoleTable,
    puuid: &str,
    history: &[RecentMatch],
    masteries: &[ChampionMastery],
) -> Option<Role> {
    infer_from_history(config, puuid, history).or_else(|| {
        tracing::debug!("No role from match history, falling back to mastery");
        infer_from_mastery(table, masteries)
    })
}
