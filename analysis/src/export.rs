//! Output adapters over a normalized [`Match`].
//!
//! Both work from the same in-memory match, so a replay is scanned and
//! decoded once no matter how many shapes are produced from it.

use crate::normalize::{Match, Participant, Side};
use common::match_v5;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RiotExportOptions {
    pub platform_id: String,
    pub game_version: String,
    /// Milliseconds since the epoch. Replays carry no timestamp, callers
    /// usually pass the file's modification time.
    pub game_creation_ms: i64,
}

impl Default for RiotExportOptions {
    fn default() -> Self {
        Self {
            platform_id: "EUW1".to_owned(),
            game_version: "14.24".to_owned(),
            game_creation_ms: 0,
        }
    }
}

/// Rounds for presentation. Internal rates stay unrounded.
pub fn round_to(value: f64, digits: i32) -> f64 {
    let factor = 10f64.powi(digits);
    (value * factor).round() / factor
}

pub fn to_match_v5(game: &Match, options: &RiotExportOptions) -> common::MatchV5 {
    let participants: Vec<match_v5::Participant> = game
        .participants
        .iter()
        .map(|p| riot_participant(game, p))
        .collect();

    let game_end = options
        .game_creation_ms
        .saturating_add(i64::try_from(game.duration_ms).unwrap_or(i64::MAX));

    common::MatchV5 {
        metadata: match_v5::Metadata {
            data_version: "2".to_owned(),
            match_id: game.id.to_string(),
            participants: participants.iter().map(|p| p.puuid.clone()).collect(),
        },
        info: match_v5::Info {
            end_of_game_result: "GameComplete".to_owned(),
            game_creation: options.game_creation_ms,
            game_duration: game.duration_seconds(),
            game_end_timestamp: game_end,
            game_id: game.id.game_id(),
            game_mode: "CLASSIC".to_owned(),
            game_name: "teambuilder-match".to_owned(),
            game_start_timestamp: options.game_creation_ms,
            game_type: "CUSTOM_GAME".to_owned(),
            game_version: options.game_version.clone(),
            map_id: 11,
            participants,
            platform_id: options.platform_id.clone(),
            queue_id: 0,
            teams: [Side::Blue, Side::Red]
                .into_iter()
                .map(|side| riot_team(game, side))
                .collect(),
            tournament_code: String::new(),
        },
    }
}

fn riot_participant(game: &Match, p: &Participant) -> match_v5::Participant {
    let c = &p.counters;

    // the schema expects a filled-in Riot ID even when the replay has none
    let game_name = non_empty_or(&p.riot_id.game_name, "Unknown");
    let tag_line = non_empty_or(&p.riot_id.tag_line, "TAG");
    let riot_id = crate::normalize::RiotId::new(game_name, tag_line);

    match_v5::Participant {
        assists: c.assists,
        baron_kills: c.baron_kills,
        challenges: match_v5::Challenges {
            kda: round_to(p.rates.kda, 2),
            gold_per_minute: p.rates.gold_per_min,
            damage_per_minute: p.rates.damage_per_min,
            vision_score_per_minute: p.rates.vision_per_min,
            kill_participation: game.kill_participation(p),
        },
        champ_level: c.level,
        champion_name: non_empty_or(&p.champion, "Unknown").to_owned(),
        damage_dealt_to_buildings: c.damage_to_buildings,
        damage_dealt_to_objectives: c.damage_to_objectives,
        damage_dealt_to_turrets: c.damage_to_turrets,
        damage_self_mitigated: c.damage_self_mitigated,
        deaths: c.deaths,
        detector_wards_placed: c.control_wards_placed,
        double_kills: c.double_kills,
        dragon_kills: c.dragon_kills,
        eligible_for_progression: true,
        gold_earned: c.gold_earned,
        gold_spent: c.gold_spent,
        individual_position: position_or_invalid(p),
        inhibitor_kills: c.inhibitor_kills,
        inhibitor_takedowns: c.inhibitor_kills,
        item0: c.items[0],
        item1: c.items[1],
        item2: c.items[2],
        item3: c.items[3],
        item4: c.items[4],
        item5: c.items[5],
        item6: c.items[6],
        killing_sprees: c.killing_sprees,
        kills: c.kills,
        lane: position_or_invalid(p),
        largest_critical_strike: c.largest_critical_strike,
        largest_killing_spree: c.largest_killing_spree,
        largest_multi_kill: c.largest_multi_kill,
        magic_damage_dealt: c.magic_damage_dealt,
        magic_damage_dealt_to_champions: c.magic_damage_to_champions,
        magic_damage_taken: c.magic_damage_taken,
        neutral_minions_killed: c.neutral_minions_killed,
        participant_id: u32::try_from(p.index + 1).unwrap_or(u32::MAX),
        penta_kills: c.penta_kills,
        physical_damage_dealt: c.physical_damage_dealt,
        physical_damage_dealt_to_champions: c.physical_damage_to_champions,
        physical_damage_taken: c.physical_damage_taken,
        puuid: riot_id.pseudo_puuid(),
        quadra_kills: c.quadra_kills,
        riot_id_game_name: riot_id.game_name.clone(),
        riot_id_tagline: riot_id.tag_line.clone(),
        role: position_or_invalid(p),
        summoner_name: riot_id.to_string(),
        team_id: p.side.team_id(),
        team_position: position_or_invalid(p),
        time_ccing_others: c.time_ccing_others,
        time_played: c.time_played,
        total_damage_dealt: c.total_damage_dealt,
        total_damage_dealt_to_champions: c.damage_to_champions,
        total_damage_shielded_on_teammates: c.damage_shielded_on_teammates,
        total_damage_taken: c.damage_taken,
        total_heal: c.total_heal,
        total_heals_on_teammates: c.total_heal_on_teammates,
        total_minions_killed: c.minions_killed,
        total_time_cc_dealt: c.total_time_cc_dealt,
        total_time_spent_dead: c.time_spent_dead,
        triple_kills: c.triple_kills,
        true_damage_dealt: c.true_damage_dealt,
        true_damage_dealt_to_champions: c.true_damage_to_champions,
        true_damage_taken: c.true_damage_taken,
        turret_kills: c.turret_kills,
        turret_takedowns: c.turret_kills,
        unreal_kills: c.unreal_kills,
        vision_score: c.vision_score,
        vision_wards_bought_in_game: c.vision_wards_bought,
        wards_killed: c.wards_killed,
        wards_placed: c.wards_placed,
        win: p.outcome.is_win(),
        ..Default::default()
    }
}

fn riot_team(game: &Match, side: Side) -> match_v5::Team {
    let team = game.team(side);
    let objective = |kills: u64| match_v5::Objective { first: false, kills };

    match_v5::Team {
        bans: Vec::new(),
        objectives: match_v5::Objectives {
            baron: objective(team.barons),
            champion: objective(team.kills),
            dragon: objective(team.dragons),
            inhibitor: objective(team.inhibitors),
            rift_herald: objective(0),
            tower: objective(team.towers),
        },
        team_id: side.team_id(),
        win: team.outcome.is_win(),
    }
}

fn non_empty_or<'s>(value: &'s str, fallback: &'s str) -> &'s str {
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn position_or_invalid(p: &Participant) -> String {
    non_empty_or(&p.position, "Invalid").to_owned()
}

pub fn to_compact(game: &Match) -> common::CompactMatch {
    common::CompactMatch {
        match_id: game.id.to_string(),
        game_length_seconds: game.duration_ms as f64 / 1000.0,
        game_length_minutes: game.duration_minutes(),
        players: game.participants.iter().map(compact_player).collect(),
    }
}

fn compact_player(p: &Participant) -> common::CompactPlayer {
    let c = &p.counters;

    common::CompactPlayer {
        summoner_name: p.riot_id.to_string(),
        champion: p.champion.clone(),
        position: p.position.clone(),
        team: p.side.label().to_owned(),
        win: p.outcome.is_win(),

        kills: c.kills,
        deaths: c.deaths,
        assists: c.assists,
        kda: round_to(p.rates.kda, 2),

        cs: c.cs(),
        cs_per_min: round_to(p.rates.cs_per_min, 2),
        gold_earned: c.gold_earned,
        gold_per_min: round_to(p.rates.gold_per_min, 1),

        damage_to_champions: c.damage_to_champions,
        damage_taken: c.damage_taken,
        damage_per_min: round_to(p.rates.damage_per_min, 1),
        damage_taken_per_min: round_to(p.rates.damage_taken_per_min, 1),

        vision_score: c.vision_score,
        wards_placed: c.wards_placed,
        wards_destroyed: c.wards_killed,
        control_wards_placed: c.control_wards_placed,

        damage_to_objectives: c.damage_to_objectives,
        damage_to_turrets: c.damage_to_turrets,
        turret_kills: c.turret_kills,

        killing_sprees: c.killing_sprees,
        largest_killing_spree: c.largest_killing_spree,
        double_kills: c.double_kills,
        triple_kills: c.triple_kills,
        quadra_kills: c.quadra_kills,
        penta_kills: c.penta_kills,

        time_ccing_others: c.time_ccing_others,

        total_heal: c.total_heal,
        total_heal_on_teammates: c.total_heal_on_teammates,
        damage_self_mitigated: c.damage_self_mitigated,
        damage_shielded_on_teammates: c.damage_shielded_on_teammates,

        items: c.items,

        level: c.level,
        time_played_seconds: c.time_played,
        time_spent_dead: c.time_spent_dead,

        magic_damage_to_champions: c.magic_damage_to_champions,
        physical_damage_to_champions: c.physical_damage_to_champions,
        true_damage_to_champions: c.true_damage_to_champions,
    }
}
