//! Turns decoded stat records into a typed [`Match`].
//!
//! The replay encodes team and outcome as strings (`"100"`/`"200"`,
//! `"Win"`/`"Fail"`); they are converted to [`Side`] and [`WinLoss`] here and
//! never looked at as text again.

use crate::decoder::{Payload, StatRecord};
use crate::ReplayError;

use sha2::Digest;

/// How many leading bytes of a replay feed its identifier.
const MATCH_ID_PREFIX_LEN: usize = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Side {
    Blue,
    Red,
}

impl Side {
    pub fn from_team_field(raw: &str) -> Self {
        if raw == "100" {
            Self::Blue
        } else {
            Self::Red
        }
    }

    pub fn team_id(self) -> u32 {
        match self {
            Self::Blue => 100,
            Self::Red => 200,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Blue => "BLUE",
            Self::Red => "RED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum WinLoss {
    Win,
    Loss,
}

impl WinLoss {
    /// Only the literal `"Win"` counts as a win.
    pub fn from_win_field(raw: Option<&str>) -> Self {
        match raw {
            Some("Win") => Self::Win,
            _ => Self::Loss,
        }
    }

    pub fn is_win(self) -> bool {
        matches!(self, Self::Win)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RiotId {
    pub game_name: String,
    pub tag_line: String,
}

impl RiotId {
    pub fn new(game_name: impl Into<String>, tag_line: impl Into<String>) -> Self {
        Self {
            game_name: game_name.into(),
            tag_line: tag_line.into(),
        }
    }

    /// Stand-in for a PUUID, derived from `gameName#tagLine`.
    ///
    /// Stable for a given Riot ID but unrelated to the account's real PUUID;
    /// the two must not be mixed.
    pub fn pseudo_puuid(&self) -> String {
        sha256_hex(self.to_string().as_bytes())
    }
}

impl std::fmt::Display for RiotId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}#{}", self.game_name, self.tag_line)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub struct MatchId(pub String);

impl MatchId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric game id for schemas that want one, derived from the match id.
    pub fn game_id(&self) -> u64 {
        let digest = sha256_hex(self.0.as_bytes());
        u64::from_str_radix(&digest[..15], 16).unwrap_or(0)
    }
}

impl std::fmt::Display for MatchId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeConfig {
    pub platform_id: String,
}

impl Default for NormalizeConfig {
    fn default() -> Self {
        Self {
            platform_id: "EUW1".to_owned(),
        }
    }
}

/// Identifier derived from the replay's content, so re-parsing the same file
/// (under any name) gives the same id.
pub fn match_id(config: &NormalizeConfig, buf: &[u8]) -> MatchId {
    let prefix = &buf[..buf.len().min(MATCH_ID_PREFIX_LEN)];
    let digest = sha256_hex(prefix);
    MatchId(format!("{}_{}", config.platform_id, &digest[..10]))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Counters {
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,

    pub minions_killed: u64,
    pub neutral_minions_killed: u64,
    pub gold_earned: u64,
    pub gold_spent: u64,
    pub level: u64,

    pub total_damage_dealt: u64,
    pub physical_damage_dealt: u64,
    pub magic_damage_dealt: u64,
    pub true_damage_dealt: u64,
    pub damage_to_champions: u64,
    pub physical_damage_to_champions: u64,
    pub magic_damage_to_champions: u64,
    pub true_damage_to_champions: u64,
    pub damage_taken: u64,
    pub physical_damage_taken: u64,
    pub magic_damage_taken: u64,
    pub true_damage_taken: u64,
    pub damage_self_mitigated: u64,
    pub largest_critical_strike: u64,

    pub damage_to_buildings: u64,
    pub damage_to_objectives: u64,
    pub damage_to_turrets: u64,
    pub turret_kills: u64,
    pub inhibitor_kills: u64,
    pub dragon_kills: u64,
    pub baron_kills: u64,

    pub vision_score: u64,
    pub wards_placed: u64,
    pub wards_killed: u64,
    pub control_wards_placed: u64,
    pub vision_wards_bought: u64,

    pub killing_sprees: u64,
    pub largest_killing_spree: u64,
    pub largest_multi_kill: u64,
    pub double_kills: u64,
    pub triple_kills: u64,
    pub quadra_kills: u64,
    pub penta_kills: u64,
    pub unreal_kills: u64,

    pub time_ccing_others: u64,
    pub total_time_cc_dealt: u64,
    pub total_heal: u64,
    pub total_heal_on_teammates: u64,
    pub damage_shielded_on_teammates: u64,

    pub time_played: u64,
    pub time_spent_dead: u64,

    pub items: [u64; 7],
}

impl Counters {
    pub fn from_record(record: &StatRecord) -> Self {
        Self {
            kills: record.count("CHAMPIONS_KILLED"),
            deaths: record.count("NUM_DEATHS"),
            assists: record.count("ASSISTS"),

            minions_killed: record.count("MINIONS_KILLED"),
            neutral_minions_killed: record.count("NEUTRAL_MINIONS_KILLED"),
            gold_earned: record.count("GOLD_EARNED"),
            gold_spent: record.count("GOLD_SPENT"),
            level: record.count("LEVEL"),

            total_damage_dealt: record.count("TOTAL_DAMAGE_DEALT"),
            physical_damage_dealt: record.count("PHYSICAL_DAMAGE_DEALT_PLAYER"),
            magic_damage_dealt: record.count("MAGIC_DAMAGE_DEALT_PLAYER"),
            true_damage_dealt: record.count("TRUE_DAMAGE_DEALT_PLAYER"),
            damage_to_champions: record.count("TOTAL_DAMAGE_DEALT_TO_CHAMPIONS"),
            physical_damage_to_champions: record.count("PHYSICAL_DAMAGE_DEALT_TO_CHAMPIONS"),
            magic_damage_to_champions: record.count("MAGIC_DAMAGE_DEALT_TO_CHAMPIONS"),
            true_damage_to_champions: record.count("TRUE_DAMAGE_DEALT_TO_CHAMPIONS"),
            damage_taken: record.count("TOTAL_DAMAGE_TAKEN"),
            physical_damage_taken: record.count("PHYSICAL_DAMAGE_TAKEN"),
            magic_damage_taken: record.count("MAGIC_DAMAGE_TAKEN"),
            true_damage_taken: record.count("TRUE_DAMAGE_TAKEN"),
            damage_self_mitigated: record.count("TOTAL_DAMAGE_SELF_MITIGATED"),
            largest_critical_strike: record.count("LARGEST_CRITICAL_STRIKE"),

            damage_to_buildings: record.count("TOTAL_DAMAGE_DEALT_TO_BUILDINGS"),
            damage_to_objectives: record.count("TOTAL_DAMAGE_DEALT_TO_OBJECTIVES"),
            damage_to_turrets: record.count("TOTAL_DAMAGE_DEALT_TO_TURRETS"),
            turret_kills: record.count("TURRETS_KILLED"),
            inhibitor_kills: record.count("BARRACKS_KILLED"),
            dragon_kills: record.count("DRAGON_KILLS"),
            baron_kills: record.count("BARON_KILLS"),

            vision_score: record.count("VISION_SCORE"),
            wards_placed: record.count("WARD_PLACED"),
            wards_killed: record.count("WARD_KILLED"),
            control_wards_placed: record.count("WARD_PLACED_DETECTOR"),
            vision_wards_bought: record.count("VISION_WARDS_BOUGHT_IN_GAME"),

            killing_sprees: record.count("KILLING_SPREES"),
            largest_killing_spree: record.count("LARGEST_KILLING_SPREE"),
            largest_multi_kill: record.count("LARGEST_MULTI_KILL"),
            double_kills: record.count("DOUBLE_KILLS"),
            triple_kills: record.count("TRIPLE_KILLS"),
            quadra_kills: record.count("QUADRA_KILLS"),
            penta_kills: record.count("PENTA_KILLS"),
            unreal_kills: record.count("UNREAL_KILLS"),

            time_ccing_others: record.count("TIME_CCING_OTHERS"),
            total_time_cc_dealt: record.count("TOTAL_TIME_CROWD_CONTROL_DEALT"),
            total_heal: record.count("TOTAL_HEAL"),
            total_heal_on_teammates: record.count("TOTAL_HEAL_ON_TEAMMATES"),
            damage_shielded_on_teammates: record.count("TOTAL_DAMAGE_SHIELDED_ON_TEAMMATES"),

            time_played: record.count("TIME_PLAYED"),
            time_spent_dead: record.count("TOTAL_TIME_SPENT_DEAD"),

            items: std::array::from_fn(|slot| record.count(&format!("ITEM{}", slot))),
        }
    }

    /// Lane minions plus jungle monsters.
    pub fn cs(&self) -> u64 {
        self.minions_killed.saturating_add(self.neutral_minions_killed)
    }
}

/// `(kills + assists) / deaths`, or `kills + assists` for a deathless game.
pub fn kda(kills: u64, deaths: u64, assists: u64) -> f64 {
    let takedowns = kills as f64 + assists as f64;
    if deaths > 0 {
        takedowns / deaths as f64
    } else {
        takedowns
    }
}

/// `value / minutes`, 0 for a zero-length game.
pub fn per_minute(value: u64, minutes: f64) -> f64 {
    if minutes > 0.0 {
        value as f64 / minutes
    } else {
        0.0
    }
}

pub fn duration_minutes(duration_ms: u64) -> f64 {
    duration_ms as f64 / 60_000.0
}

#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rates {
    pub kda: f64,
    pub cs_per_min: f64,
    pub gold_per_min: f64,
    pub damage_per_min: f64,
    pub damage_taken_per_min: f64,
    pub vision_per_min: f64,
}

impl Rates {
    pub fn new(counters: &Counters, duration_ms: u64) -> Self {
        let minutes = duration_minutes(duration_ms);

        Self {
            kda: kda(counters.kills, counters.deaths, counters.assists),
            cs_per_min: per_minute(counters.cs(), minutes),
            gold_per_min: per_minute(counters.gold_earned, minutes),
            damage_per_min: per_minute(counters.damage_to_champions, minutes),
            damage_taken_per_min: per_minute(counters.damage_taken, minutes),
            vision_per_min: per_minute(counters.vision_score, minutes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Participant {
    /// Position in the replay's record list, starting at 0.
    pub index: usize,
    pub riot_id: RiotId,
    pub side: Side,
    pub champion: String,
    /// Position as the client recorded it (`TOP`, `UTILITY`, ...), possibly
    /// empty.
    pub position: String,
    pub outcome: WinLoss,
    pub counters: Counters,
    pub rates: Rates,
}

impl Participant {
    pub fn from_record(index: usize, record: &StatRecord, duration_ms: u64) -> Result<Self, ReplayError> {
        let side = match record.text("TEAM") {
            Some(team) => Side::from_team_field(&team),
            None => return Err(ReplayError::MissingStatField("TEAM")),
        };
        let outcome = WinLoss::from_win_field(record.text("WIN").as_deref());

        let counters = Counters::from_record(record);
        let rates = Rates::new(&counters, duration_ms);

        Ok(Self {
            index,
            riot_id: RiotId {
                game_name: text_or_empty(record, "RIOT_ID_GAME_NAME"),
                tag_line: text_or_empty(record, "RIOT_ID_TAG_LINE"),
            },
            side,
            champion: text_or_empty(record, "SKIN"),
            position: text_or_empty(record, "TEAM_POSITION"),
            outcome,
            counters,
            rates,
        })
    }

    pub fn cs(&self) -> u64 {
        self.counters.cs()
    }
}

fn text_or_empty(record: &StatRecord, key: &str) -> String {
    record.text(key).map(|t| t.into_owned()).unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TeamSummary {
    pub side: Side,
    pub outcome: WinLoss,
    pub kills: u64,
    pub towers: u64,
    pub inhibitors: u64,
    pub dragons: u64,
    pub barons: u64,
}

impl TeamSummary {
    fn new(side: Side, participants: &[Participant]) -> Self {
        let mut summary = Self {
            side,
            outcome: WinLoss::Loss,
            kills: 0,
            towers: 0,
            inhibitors: 0,
            dragons: 0,
            barons: 0,
        };

        for participant in participants.iter().filter(|p| p.side == side) {
            if participant.outcome.is_win() {
                summary.outcome = WinLoss::Win;
            }
            summary.kills = summary.kills.saturating_add(participant.counters.kills);
            summary.towers = summary.towers.saturating_add(participant.counters.turret_kills);
            summary.inhibitors = summary.inhibitors.saturating_add(participant.counters.inhibitor_kills);
            summary.dragons = summary.dragons.saturating_add(participant.counters.dragon_kills);
            summary.barons = summary.barons.saturating_add(participant.counters.baron_kills);
        }

        summary
    }
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Match {
    pub id: MatchId,
    pub duration_ms: u64,
    pub participants: Vec<Participant>,
    /// Blue first, then red.
    pub teams: [TeamSummary; 2],
}

impl Match {
    pub fn duration_seconds(&self) -> u64 {
        self.duration_ms / 1000
    }

    pub fn duration_minutes(&self) -> f64 {
        duration_minutes(self.duration_ms)
    }

    pub fn team(&self, side: Side) -> &TeamSummary {
        match side {
            Side::Blue => &self.teams[0],
            Side::Red => &self.teams[1],
        }
    }

    /// Share of the team's kills the participant took part in, 0 when the
    /// team got none.
    pub fn kill_participation(&self, participant: &Participant) -> f64 {
        let team_kills = self.team(participant.side).kills;
        if team_kills == 0 {
            return 0.0;
        }
        (participant.counters.kills as f64 + participant.counters.assists as f64) / team_kills as f64
    }
}

#[tracing::instrument(skip(payload), fields(participants = payload.records.len()))]
pub fn normalize(id: MatchId, payload: &Payload) -> Result<Match, ReplayError> {
    let participants = payload
        .records
        .iter()
        .enumerate()
        .map(|(idx, record)| Participant::from_record(idx, record, payload.game_length_ms))
        .collect::<Result<Vec<_>, _>>()?;

    let teams = [
        TeamSummary::new(Side::Blue, &participants),
        TeamSummary::new(Side::Red, &participants),
    ];

    Ok(Match {
        id,
        duration_ms: payload.game_length_ms,
        participants,
        teams,
    })
}

pub(crate) fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    let mut out = String::with_capacity(digest.len() * 2);
    for b in digest {
        out.push_str(&format!("{:02x}", b));
    }
    out
}
