#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrimReport {
    pub players: Vec<PlayerReport>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerReport {
    pub summoner_name: String,
    pub position: String,
    pub games: u64,
    pub wins: u64,
    pub losses: u64,
    /// Percentage, 0 - 100.
    pub winrate: f64,

    pub kda: f64,
    pub per_min_damage: f64,
    pub per_min_gold: f64,
    pub cs_per_min: f64,
    pub vision_per_min: f64,
    /// Percentage of the team's kills the player took part in.
    pub kill_participation: f64,

    pub totals: PlayerTotals,
    pub champions: Vec<ChampionReport>,
    pub games_played: u64,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct PlayerTotals {
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
    pub cs: u64,
    pub gold_earned: u64,
    pub damage_to_champions: u64,
    pub damage_taken: u64,
    pub vision_score: u64,
    pub team_kills: u64,
    pub game_time_minutes: f64,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChampionReport {
    pub champion: String,
    pub games: u64,
    pub wins: u64,
    pub losses: u64,
    pub winrate: f64,
    pub kda: f64,
}
