mod fixtures;

use analysis::normalize::Match;
use analysis::roles::Role;
use analysis::scrim::{Roster, ScrimSummary};
use fixtures::Player;
use pretty_assertions::assert_eq;

fn team() -> Roster {
    Roster::new(["Ashfall#EUW", "Brindle#EUW", "Cinder#EUW", "Dunmore#EUW", "Ember#EUW"])
}

fn scrim_games() -> Vec<Match> {
    ["blue_win.rofl", "red_win.rofl"]
        .into_iter()
        .map(|name| fixtures::parse(&fixtures::testfile(name)))
        .collect()
}

fn synthetic(game_length_ms: u64, players: &[Player]) -> Match {
    fixtures::parse(&fixtures::game(game_length_ms, players))
}

#[test]
fn roster_only() {
    let games = scrim_games();

    let summary = ScrimSummary::aggregate(&team(), &games);

    let names: Vec<_> = summary.players().iter().map(|p| p.summoner_name.as_str()).collect();
    assert_eq!(
        vec!["Ashfall#EUW", "Brindle#EUW", "Cinder#EUW", "Dunmore#EUW", "Ember#EUW"],
        names
    );
    assert!(summary.player("Foxglove#NA1").is_none());
    assert!(summary.player("Kestrel#EUW").is_none());
}

#[test]
fn roster_normalizes_names() {
    let roster: Roster = ["  Ashfall#EUW ", "", "   "].into_iter().collect();

    assert_eq!(1, roster.len());
    assert!(roster.contains(&analysis::normalize::RiotId::new("Ashfall", "EUW")));
    assert!(!roster.contains(&analysis::normalize::RiotId::new("Ashfall", "NA1")));
}

#[test]
fn empty_roster_tracks_nobody() {
    let games = scrim_games();

    let summary = ScrimSummary::aggregate(&Roster::default(), &games);

    assert!(summary.is_empty());
    assert!(summary.report().players.is_empty());
}

#[test]
fn totals_over_scrim() {
    let games = scrim_games();

    let summary = ScrimSummary::aggregate(&team(), &games);
    let ashfall = summary.player("Ashfall#EUW").unwrap();

    assert_eq!((2, 2, 0), (ashfall.games, ashfall.wins, ashfall.losses));
    assert_eq!((13, 7, 11), (ashfall.totals.kills, ashfall.totals.deaths, ashfall.totals.assists));
    assert_eq!(200 + 235, ashfall.totals.cs);
    assert_eq!(25 + 24, ashfall.totals.team_kills);
    assert_eq!(3_300_000, ashfall.totals.game_time_ms);
    assert_eq!(Some(Role::Top), ashfall.position());
    assert_eq!(100.0, ashfall.winrate());

    // totals first: (12500 + 13000) gold over 55 minutes
    assert_eq!(25_500.0 / 55.0, ashfall.gold_per_min());
    assert_eq!(24.0 / 49.0, ashfall.kill_participation());

    let report = ashfall.report();
    assert_eq!("TOP", report.position);
    assert_eq!(3.43, report.kda);
    assert_eq!(463.6, report.per_min_gold);
    assert_eq!(49.0, report.kill_participation);
    assert_eq!(55.0, report.totals.game_time_minutes);
    assert_eq!(2, report.games_played);
}

#[test]
fn one_entry_per_champion() {
    let games = scrim_games();

    let summary = ScrimSummary::aggregate(&team(), &games);
    let brindle = summary.player("Brindle#EUW").unwrap();

    let champions: Vec<_> = brindle
        .champions_by_games()
        .into_iter()
        .map(|c| (c.champion.as_str(), c.games, c.wins))
        .collect();
    assert_eq!(vec![("LeeSin", 1, 1), ("Vi", 1, 1)], champions);

    let dunmore = summary.player("Dunmore#EUW").unwrap();
    assert_eq!(1, dunmore.champions.len());
    assert_eq!(2, dunmore.champions[0].games);
}

#[test]
fn champions_sorted_by_games() {
    let roster = Roster::new(["Ashfall#EUW"]);
    let games = vec![
        synthetic(600_000, &[Player::new("Ashfall", "100", "Win").champion("Ahri", "MIDDLE").kda(1, 1, 1)]),
        synthetic(600_000, &[Player::new("Ashfall", "100", "Fail").champion("Zed", "MIDDLE").kda(2, 2, 2)]),
        synthetic(600_000, &[Player::new("Ashfall", "200", "Win").champion("Zed", "MIDDLE").kda(5, 0, 1)]),
    ];

    let summary = ScrimSummary::aggregate(&roster, &games);
    let report = summary.player("Ashfall#EUW").unwrap().report();

    let champions: Vec<_> = report
        .champions
        .iter()
        .map(|c| (c.champion.as_str(), c.games, c.wins, c.losses, c.winrate, c.kda))
        .collect();
    assert_eq!(
        vec![("Zed", 2, 1, 1, 50.0, 5.0), ("Ahri", 1, 1, 0, 100.0, 2.0)],
        champions
    );
    assert_eq!("MID", report.position);
    assert_eq!(66.67, report.winrate);
}

#[test]
fn grouping_does_not_matter() {
    let roster = Roster::new(["Ashfall#EUW", "Brindle#EUW"]);
    let a = synthetic(
        1_200_000,
        &[
            Player::new("Ashfall", "100", "Win").champion("Aatrox", "TOP").kda(3, 1, 4),
            Player::new("Brindle", "100", "Win").champion("Vi", "JUNGLE").kda(2, 2, 6),
            Player::new("Foxglove", "200", "Fail").kda(1, 5, 0),
        ],
    );
    let b = synthetic(
        1_900_000,
        &[
            Player::new("Ashfall", "200", "Fail").champion("Garen", "TOP").kda(0, 4, 1),
            Player::new("Brindle", "200", "Fail").champion("Vi", "JUNGLE").kda(1, 3, 2),
        ],
    );
    let c = synthetic(
        1_500_000,
        &[
            Player::new("Brindle", "100", "Win").champion("LeeSin", "MIDDLE").kda(6, 0, 3),
            Player::new("Ashfall", "100", "Win").champion("Aatrox", "TOP").kda(4, 2, 2),
        ],
    );

    let all_at_once = ScrimSummary::aggregate(&roster, [&a, &b, &c]);

    let mut merged = ScrimSummary::aggregate(&roster, [&a, &b]);
    merged.merge(&ScrimSummary::aggregate(&roster, [&c]));
    assert_eq!(all_at_once, merged);

    let mut right = ScrimSummary::aggregate(&roster, [&b]);
    right.merge(&ScrimSummary::aggregate(&roster, [&c]));
    let mut left = ScrimSummary::aggregate(&roster, [&a]);
    left.merge(&right);
    assert_eq!(all_at_once, left);

    assert_eq!(all_at_once.report(), merged.report());

    let mut incremental = ScrimSummary::new();
    for game in [&a, &b, &c] {
        incremental.add_match(&roster, game);
    }
    assert_eq!(all_at_once, incremental);
}

#[test]
fn merge_into_empty() {
    let games = scrim_games();
    let summary = ScrimSummary::aggregate(&team(), &games);

    let mut global = ScrimSummary::new();
    global.merge(&summary);

    assert_eq!(summary, global);
}

#[test]
fn unknown_position() {
    let roster = Roster::new(["Ashfall#EUW"]);
    let games = vec![synthetic(600_000, &[Player::new("Ashfall", "100", "Win").champion("Ahri", "")])];

    let summary = ScrimSummary::aggregate(&roster, &games);

    assert_eq!(None, summary.player("Ashfall#EUW").unwrap().position());
    assert_eq!("unknown", summary.report().players[0].position);
}

#[test]
fn kill_participation_without_team_kills() {
    let roster = Roster::new(["Ashfall#EUW"]);
    let games = vec![synthetic(600_000, &[Player::new("Ashfall", "100", "Fail").kda(0, 3, 0)])];

    let summary = ScrimSummary::aggregate(&roster, &games);

    assert_eq!(0.0, summary.player("Ashfall#EUW").unwrap().kill_participation());
}

#[test]
fn huge_totals_saturate() {
    let roster = Roster::new(["Ashfall#EUW"]);
    let huge = || {
        let mut record = Player::new("Ashfall", "100", "Win").champion("Aatrox", "TOP").kda(0, 1, 0).record();
        record["CHAMPIONS_KILLED"] = u64::MAX.to_string().into();
        record["GOLD_EARNED"] = u64::MAX.to_string().into();
        fixtures::parse(&fixtures::game_from_records(600_000, vec![record]))
    };
    let games = vec![huge(), huge()];

    let summary = ScrimSummary::aggregate(&roster, &games);
    let ashfall = summary.player("Ashfall#EUW").unwrap();

    assert_eq!(u64::MAX, ashfall.totals.kills);
    assert_eq!(u64::MAX, ashfall.totals.gold_earned);
    assert_eq!(u64::MAX, ashfall.totals.team_kills);
    assert_eq!(u64::MAX, ashfall.champions[0].kills);
    assert_eq!(2, ashfall.games);

    let report = ashfall.report();
    assert!(report.kda.is_finite());
    assert!(report.per_min_gold.is_finite());
    assert!(report.kill_participation.is_finite());
}
