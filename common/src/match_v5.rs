//! Riot `match-v5` shaped documents.
//!
//! Field names follow the public API verbatim so the output can be fed to
//! tooling that already understands `/lol/match/v5/matches/{id}` responses.
//! Values a replay cannot provide are left at their defaults.

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchV5 {
    pub metadata: Metadata,
    pub info: Info,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub data_version: String,
    pub match_id: String,
    pub participants: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Info {
    pub end_of_game_result: String,
    pub game_creation: i64,
    pub game_duration: u64,
    pub game_end_timestamp: i64,
    pub game_id: u64,
    pub game_mode: String,
    pub game_name: String,
    pub game_start_timestamp: i64,
    pub game_type: String,
    pub game_version: String,
    pub map_id: u32,
    pub participants: Vec<Participant>,
    pub platform_id: String,
    pub queue_id: u32,
    pub teams: Vec<Team>,
    pub tournament_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Challenges {
    pub kda: f64,
    pub gold_per_minute: f64,
    pub damage_per_minute: f64,
    pub vision_score_per_minute: f64,
    pub kill_participation: f64,
}

#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    pub assists: u64,
    pub baron_kills: u64,
    pub bounty_level: u64,
    pub challenges: Challenges,
    pub champ_experience: u64,
    pub champ_level: u64,
    pub champion_id: u32,
    pub champion_name: String,
    pub command_pings: u64,
    pub champion_transform: u64,
    pub consumables_purchased: u64,
    pub damage_dealt_to_buildings: u64,
    pub damage_dealt_to_objectives: u64,
    pub damage_dealt_to_turrets: u64,
    pub damage_self_mitigated: u64,
    pub deaths: u64,
    pub detector_wards_placed: u64,
    pub double_kills: u64,
    pub dragon_kills: u64,
    pub eligible_for_progression: bool,
    pub first_blood_assist: bool,
    pub first_blood_kill: bool,
    pub first_tower_assist: bool,
    pub first_tower_kill: bool,
    pub game_ended_in_early_surrender: bool,
    pub game_ended_in_surrender: bool,
    pub gold_earned: u64,
    pub gold_spent: u64,
    pub individual_position: String,
    pub inhibitor_kills: u64,
    pub inhibitor_takedowns: u64,
    pub inhibitors_lost: u64,
    pub item0: u64,
    pub item1: u64,
    pub item2: u64,
    pub item3: u64,
    pub item4: u64,
    pub item5: u64,
    pub item6: u64,
    pub items_purchased: u64,
    pub killing_sprees: u64,
    pub kills: u64,
    pub lane: String,
    pub largest_critical_strike: u64,
    pub largest_killing_spree: u64,
    pub largest_multi_kill: u64,
    pub longest_time_spent_living: u64,
    pub magic_damage_dealt: u64,
    pub magic_damage_dealt_to_champions: u64,
    pub magic_damage_taken: u64,
    pub neutral_minions_killed: u64,
    pub nexus_kills: u64,
    pub nexus_lost: u64,
    pub nexus_takedowns: u64,
    pub objectives_stolen: u64,
    pub objectives_stolen_assists: u64,
    pub participant_id: u32,
    pub penta_kills: u64,
    pub physical_damage_dealt: u64,
    pub physical_damage_dealt_to_champions: u64,
    pub physical_damage_taken: u64,
    pub placement: u64,
    pub player_augment1: u64,
    pub player_augment2: u64,
    pub player_augment3: u64,
    pub player_augment4: u64,
    pub profile_icon: u64,
    pub puuid: String,
    pub quadra_kills: u64,
    pub riot_id_game_name: String,
    pub riot_id_tagline: String,
    pub role: String,
    pub sight_wards_bought_in_game: u64,
    pub spell1_casts: u64,
    pub spell2_casts: u64,
    pub spell3_casts: u64,
    pub spell4_casts: u64,
    pub summoner1_casts: u64,
    pub summoner1_id: u64,
    pub summoner2_casts: u64,
    pub summoner2_id: u64,
    pub summoner_id: String,
    pub summoner_level: u64,
    pub summoner_name: String,
    pub team_early_surrendered: bool,
    pub team_id: u32,
    pub team_position: String,
    #[serde(rename = "timeCCingOthers")]
    pub time_ccing_others: u64,
    pub time_played: u64,
    pub total_damage_dealt: u64,
    pub total_damage_dealt_to_champions: u64,
    pub total_damage_shielded_on_teammates: u64,
    pub total_damage_taken: u64,
    pub total_heal: u64,
    pub total_heals_on_teammates: u64,
    pub total_minions_killed: u64,
    #[serde(rename = "totalTimeCCDealt")]
    pub total_time_cc_dealt: u64,
    pub total_time_spent_dead: u64,
    pub total_units_healed: u64,
    pub triple_kills: u64,
    pub true_damage_dealt: u64,
    pub true_damage_dealt_to_champions: u64,
    pub true_damage_taken: u64,
    pub turret_kills: u64,
    pub turret_takedowns: u64,
    pub turrets_lost: u64,
    pub unreal_kills: u64,
    pub vision_score: u64,
    pub vision_wards_bought_in_game: u64,
    pub wards_killed: u64,
    pub wards_placed: u64,
    pub win: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub bans: Vec<Ban>,
    pub objectives: Objectives,
    pub team_id: u32,
    pub win: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ban {
    pub champion_id: i32,
    pub pick_turn: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objectives {
    pub baron: Objective,
    pub champion: Objective,
    pub dragon: Objective,
    pub inhibitor: Objective,
    pub rift_herald: Objective,
    pub tower: Objective,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Objective {
    pub first: bool,
    pub kills: u64,
}
