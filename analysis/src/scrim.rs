//! Folds matches into per-player scrim statistics.
//!
//! Only raw counters are accumulated. Rates (KDA, per-minute values, win rate,
//! kill participation) are derived from the totals when a report is built, so
//! the result of folding does not depend on how matches were grouped.
//! This is totals-then-divide: it is not the average of per-match rates
//! unless all games had the same length.

use crate::export::round_to;
use crate::normalize::{kda, per_minute, Match, Participant, RiotId};
use crate::roles::{role_label, Role, Tally};

/// The players a summary is restricted to, as `gameName#tagLine`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    members: std::collections::HashSet<String>,
}

impl Roster {
    pub fn new<I, S>(members: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members
                .into_iter()
                .map(|m| m.into().trim().to_owned())
                .filter(|m| !m.is_empty())
                .collect(),
        }
    }

    pub fn contains(&self, riot_id: &RiotId) -> bool {
        self.members.contains(&riot_id.to_string())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Roster {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Totals {
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
    pub cs: u64,
    pub gold_earned: u64,
    pub damage_to_champions: u64,
    pub damage_taken: u64,
    pub vision_score: u64,
    /// Kills of the player's team in the games played, the denominator of
    /// kill participation.
    pub team_kills: u64,
    pub game_time_ms: u64,
}

impl Totals {
    fn from_participant(game: &Match, p: &Participant) -> Self {
        Self {
            kills: p.counters.kills,
            deaths: p.counters.deaths,
            assists: p.counters.assists,
            cs: p.cs(),
            gold_earned: p.counters.gold_earned,
            damage_to_champions: p.counters.damage_to_champions,
            damage_taken: p.counters.damage_taken,
            vision_score: p.counters.vision_score,
            team_kills: game.team(p.side).kills,
            game_time_ms: game.duration_ms,
        }
    }

    fn add(&mut self, other: &Self) {
        self.kills = self.kills.saturating_add(other.kills);
        self.deaths = self.deaths.saturating_add(other.deaths);
        self.assists = self.assists.saturating_add(other.assists);
        self.cs = self.cs.saturating_add(other.cs);
        self.gold_earned = self.gold_earned.saturating_add(other.gold_earned);
        self.damage_to_champions = self.damage_to_champions.saturating_add(other.damage_to_champions);
        self.damage_taken = self.damage_taken.saturating_add(other.damage_taken);
        self.vision_score = self.vision_score.saturating_add(other.vision_score);
        self.team_kills = self.team_kills.saturating_add(other.team_kills);
        self.game_time_ms = self.game_time_ms.saturating_add(other.game_time_ms);
    }

    pub fn game_time_minutes(&self) -> f64 {
        crate::normalize::duration_minutes(self.game_time_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ChampionAggregate {
    pub champion: String,
    pub games: u64,
    pub wins: u64,
    pub losses: u64,
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
}

impl ChampionAggregate {
    fn new(champion: String) -> Self {
        Self {
            champion,
            games: 0,
            wins: 0,
            losses: 0,
            kills: 0,
            deaths: 0,
            assists: 0,
        }
    }

    fn merge(&mut self, other: &Self) {
        self.games = self.games.saturating_add(other.games);
        self.wins = self.wins.saturating_add(other.wins);
        self.losses = self.losses.saturating_add(other.losses);
        self.kills = self.kills.saturating_add(other.kills);
        self.deaths = self.deaths.saturating_add(other.deaths);
        self.assists = self.assists.saturating_add(other.assists);
    }

    pub fn kda(&self) -> f64 {
        kda(self.kills, self.deaths, self.assists)
    }

    pub fn winrate(&self) -> f64 {
        percentage(self.wins, self.games)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerAggregate {
    pub summoner_name: String,
    pub games: u64,
    pub wins: u64,
    pub losses: u64,
    /// In first-played order; see [`PlayerAggregate::champions_by_games`].
    pub champions: Vec<ChampionAggregate>,
    pub positions: Tally<Role>,
    pub totals: Totals,
}

impl PlayerAggregate {
    fn new(summoner_name: String) -> Self {
        Self {
            summoner_name,
            games: 0,
            wins: 0,
            losses: 0,
            champions: Vec::new(),
            positions: Tally::new(),
            totals: Totals::default(),
        }
    }

    fn champion_mut(&mut self, champion: &str) -> &mut ChampionAggregate {
        let idx = match self.champions.iter().position(|c| c.champion == champion) {
            Some(idx) => idx,
            None => {
                self.champions.push(ChampionAggregate::new(champion.to_owned()));
                self.champions.len() - 1
            }
        };
        &mut self.champions[idx]
    }

    fn record(&mut self, game: &Match, p: &Participant) {
        let win = p.outcome.is_win();

        self.games += 1;
        if win {
            self.wins += 1;
        } else {
            self.losses += 1;
        }

        let champion = self.champion_mut(&p.champion);
        champion.games += 1;
        champion.kills = champion.kills.saturating_add(p.counters.kills);
        champion.deaths = champion.deaths.saturating_add(p.counters.deaths);
        champion.assists = champion.assists.saturating_add(p.counters.assists);
        if win {
            champion.wins += 1;
        } else {
            champion.losses += 1;
        }

        if let Some(role) = Role::from_position(&p.position) {
            self.positions.add(role, 1);
        }

        self.totals.add(&Totals::from_participant(game, p));
    }

    fn merge(&mut self, other: &Self) {
        self.games = self.games.saturating_add(other.games);
        self.wins = self.wins.saturating_add(other.wins);
        self.losses = self.losses.saturating_add(other.losses);

        for champion in other.champions.iter() {
            self.champion_mut(&champion.champion).merge(champion);
        }

        self.positions.merge(&other.positions);
        self.totals.add(&other.totals);
    }

    /// Most played first; equally played champions keep first-played order.
    pub fn champions_by_games(&self) -> Vec<&ChampionAggregate> {
        let mut champions: Vec<_> = self.champions.iter().collect();
        champions.sort_by(|a, b| b.games.cmp(&a.games));
        champions
    }

    pub fn position(&self) -> Option<Role> {
        self.positions.winner()
    }

    pub fn winrate(&self) -> f64 {
        percentage(self.wins, self.games)
    }

    pub fn kda(&self) -> f64 {
        kda(self.totals.kills, self.totals.deaths, self.totals.assists)
    }

    pub fn damage_per_min(&self) -> f64 {
        per_minute(self.totals.damage_to_champions, self.totals.game_time_minutes())
    }

    pub fn gold_per_min(&self) -> f64 {
        per_minute(self.totals.gold_earned, self.totals.game_time_minutes())
    }

    pub fn cs_per_min(&self) -> f64 {
        per_minute(self.totals.cs, self.totals.game_time_minutes())
    }

    pub fn vision_per_min(&self) -> f64 {
        per_minute(self.totals.vision_score, self.totals.game_time_minutes())
    }

    /// Fraction in `[0, 1]` (for sane inputs) of team kills the player took
    /// part in, over all games.
    pub fn kill_participation(&self) -> f64 {
        if self.totals.team_kills == 0 {
            return 0.0;
        }
        (self.totals.kills as f64 + self.totals.assists as f64) / self.totals.team_kills as f64
    }

    pub fn report(&self) -> common::PlayerReport {
        common::PlayerReport {
            summoner_name: self.summoner_name.clone(),
            position: role_label(self.position()).to_owned(),
            games: self.games,
            wins: self.wins,
            losses: self.losses,
            winrate: round_to(self.winrate(), 2),
            kda: round_to(self.kda(), 2),
            per_min_damage: round_to(self.damage_per_min(), 1),
            per_min_gold: round_to(self.gold_per_min(), 1),
            cs_per_min: round_to(self.cs_per_min(), 2),
            vision_per_min: round_to(self.vision_per_min(), 2),
            kill_participation: round_to(self.kill_participation() * 100.0, 1),
            totals: common::PlayerTotals {
                kills: self.totals.kills,
                deaths: self.totals.deaths,
                assists: self.totals.assists,
                cs: self.totals.cs,
                gold_earned: self.totals.gold_earned,
                damage_to_champions: self.totals.damage_to_champions,
                damage_taken: self.totals.damage_taken,
                vision_score: self.totals.vision_score,
                team_kills: self.totals.team_kills,
                game_time_minutes: round_to(self.totals.game_time_minutes(), 2),
            },
            champions: self
                .champions_by_games()
                .into_iter()
                .map(|c| common::ChampionReport {
                    champion: c.champion.clone(),
                    games: c.games,
                    wins: c.wins,
                    losses: c.losses,
                    winrate: round_to(c.winrate(), 1),
                    kda: round_to(c.kda(), 2),
                })
                .collect(),
            games_played: self.games,
        }
    }
}

fn percentage(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Per-player aggregates over any number of matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ScrimSummary {
    players: Vec<PlayerAggregate>,
}

impl ScrimSummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aggregate<'m, I>(roster: &Roster, matches: I) -> Self
    where
        I: IntoIterator<Item = &'m Match>,
    {
        let mut summary = Self::new();
        for game in matches {
            summary.add_match(roster, game);
        }
        summary
    }

    /// Adds the roster's participants of `game`. Everyone else is ignored.
    pub fn add_match(&mut self, roster: &Roster, game: &Match) {
        let mut tracked = 0;
        for participant in game.participants.iter() {
            if !roster.contains(&participant.riot_id) {
                continue;
            }

            tracked += 1;
            let name = participant.riot_id.to_string();
            self.player_mut(&name).record(game, participant);
        }

        tracing::debug!(match_id = %game.id, tracked, "Aggregated match");
    }

    /// Combines two summaries. Grouping does not matter:
    /// `(a + b) + c == a + (b + c)`.
    pub fn merge(&mut self, other: &ScrimSummary) {
        for player in other.players.iter() {
            self.player_mut(&player.summoner_name).merge(player);
        }
    }

    fn player_mut(&mut self, name: &str) -> &mut PlayerAggregate {
        let idx = match self.players.iter().position(|p| p.summoner_name == name) {
            Some(idx) => idx,
            None => {
                self.players.push(PlayerAggregate::new(name.to_owned()));
                self.players.len() - 1
            }
        };
        &mut self.players[idx]
    }

    pub fn player(&self, name: &str) -> Option<&PlayerAggregate> {
        self.players.iter().find(|p| p.summoner_name == name)
    }

    pub fn players(&self) -> &[PlayerAggregate] {
        &self.players
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn report(&self) -> common::ScrimReport {
        common::ScrimReport {
            players: self.players.iter().map(PlayerAggregate::report).collect(),
        }
    }
}
