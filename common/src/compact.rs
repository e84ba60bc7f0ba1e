/// One replay flattened into per-player rows, ready for aggregation or
/// spreadsheet export.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompactMatch {
    pub match_id: String,
    pub game_length_seconds: f64,
    pub game_length_minutes: f64,
    pub players: Vec<CompactPlayer>,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct CompactPlayer {
    pub summoner_name: String,
    pub champion: String,
    pub position: String,
    pub team: String,
    pub win: bool,

    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
    pub kda: f64,

    pub cs: u64,
    pub cs_per_min: f64,
    pub gold_earned: u64,
    pub gold_per_min: f64,

    pub damage_to_champions: u64,
    pub damage_taken: u64,
    pub damage_per_min: f64,
    pub damage_taken_per_min: f64,

    pub vision_score: u64,
    pub wards_placed: u64,
    pub wards_destroyed: u64,
    pub control_wards_placed: u64,

    pub damage_to_objectives: u64,
    pub damage_to_turrets: u64,
    pub turret_kills: u64,

    pub killing_sprees: u64,
    pub largest_killing_spree: u64,
    pub double_kills: u64,
    pub triple_kills: u64,
    pub quadra_kills: u64,
    pub penta_kills: u64,

    pub time_ccing_others: u64,

    pub total_heal: u64,
    pub total_heal_on_teammates: u64,
    pub damage_self_mitigated: u64,
    pub damage_shielded_on_teammates: u64,

    pub items: [u64; 7],

    pub level: u64,
    pub time_played_seconds: u64,
    pub time_spent_dead: u64,

    pub magic_damage_to_champions: u64,
    pub physical_damage_to_champions: u64,
    pub true_damage_to_champions: u64,
}
