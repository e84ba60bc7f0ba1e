mod fixtures;

use analysis::decoder;
use analysis::normalize::{self, MatchId, NormalizeConfig, RiotId, Side, TeamSummary, WinLoss};
use analysis::ReplayError;
use pretty_assertions::assert_eq;

fn normalize_payload(payload: &str) -> Result<normalize::Match, ReplayError> {
    let decoded = decoder::decode(payload.as_bytes())?;
    normalize::normalize(MatchId("EUW1_test".to_owned()), &decoded)
}

#[test]
fn blue_win_participants() {
    let game = fixtures::parse(&fixtures::testfile("blue_win.rofl"));

    assert_eq!(1_500_000, game.duration_ms);
    assert_eq!(1500, game.duration_seconds());
    assert_eq!(10, game.participants.len());

    let ashfall = &game.participants[0];
    assert_eq!(0, ashfall.index);
    assert_eq!(RiotId::new("Ashfall", "EUW"), ashfall.riot_id);
    assert_eq!("Aatrox", ashfall.champion);
    assert_eq!("TOP", ashfall.position);
    assert_eq!(Side::Blue, ashfall.side);
    assert_eq!(WinLoss::Win, ashfall.outcome);
    assert_eq!((10, 3, 5), (ashfall.counters.kills, ashfall.counters.deaths, ashfall.counters.assists));
    assert_eq!(200, ashfall.cs());
    assert_eq!(16, ashfall.counters.level);
    assert_eq!([3071, 0, 0, 0, 0, 0, 0], ashfall.counters.items);

    assert_eq!(5.0, ashfall.rates.kda);
    assert_eq!(500.0, ashfall.rates.gold_per_min);
    assert_eq!(8.0, ashfall.rates.cs_per_min);
    assert_eq!(840.0, ashfall.rates.damage_per_min);
    assert_eq!(1000.0, ashfall.rates.damage_taken_per_min);
    assert_eq!(0.8, ashfall.rates.vision_per_min);

    let foxglove = &game.participants[5];
    assert_eq!(RiotId::new("Foxglove", "NA1"), foxglove.riot_id);
    assert_eq!(Side::Red, foxglove.side);
    assert_eq!(WinLoss::Loss, foxglove.outcome);
}

#[test]
fn blue_win_teams() {
    let game = fixtures::parse(&fixtures::testfile("blue_win.rofl"));

    assert_eq!(
        TeamSummary {
            side: Side::Blue,
            outcome: WinLoss::Win,
            kills: 25,
            towers: 6,
            inhibitors: 1,
            dragons: 3,
            barons: 1,
        },
        *game.team(Side::Blue)
    );
    assert_eq!(
        TeamSummary {
            side: Side::Red,
            outcome: WinLoss::Loss,
            kills: 11,
            towers: 1,
            inhibitors: 0,
            dragons: 1,
            barons: 0,
        },
        *game.team(Side::Red)
    );

    // (10 + 5) / 25
    assert_eq!(0.6, game.kill_participation(&game.participants[0]));
}

#[test]
fn red_win_sides() {
    let game = fixtures::parse(&fixtures::testfile("red_win.rofl"));

    assert_eq!(1_800_000, game.duration_ms);
    assert!(game.participants[..5].iter().all(|p| p.side == Side::Blue && !p.outcome.is_win()));
    assert!(game.participants[5..].iter().all(|p| p.side == Side::Red && p.outcome.is_win()));
    assert_eq!(12, game.team(Side::Blue).kills);
    assert_eq!(24, game.team(Side::Red).kills);
    assert_eq!(WinLoss::Win, game.team(Side::Red).outcome);
}

#[test]
fn deathless_kda() {
    let players = [fixtures::Player::new("Ashfall", "100", "Win").kda(7, 0, 4)];
    let records: Vec<_> = players.iter().map(|p| p.record()).collect();

    let game = normalize_payload(&fixtures::payload(600_000, &records)).unwrap();

    assert_eq!(11.0, game.participants[0].rates.kda);
}

#[test]
fn zero_duration_has_zero_rates() {
    let players = [fixtures::Player::new("Ashfall", "100", "Win").kda(1, 1, 1)];
    let mut records: Vec<_> = players.iter().map(|p| p.record()).collect();
    records[0]["GOLD_EARNED"] = "500".into();
    records[0]["MINIONS_KILLED"] = "10".into();

    let game = normalize_payload(&fixtures::payload(0, &records)).unwrap();
    let rates = game.participants[0].rates;

    assert_eq!(2.0, rates.kda);
    assert_eq!(0.0, rates.gold_per_min);
    assert_eq!(0.0, rates.cs_per_min);
    assert_eq!(0.0, rates.damage_per_min);
    assert_eq!(0.0, rates.vision_per_min);
}

#[test]
fn team_and_win_markers() {
    let players = [
        fixtures::Player::new("A", "100", "Win"),
        fixtures::Player::new("B", "200", "Fail"),
        fixtures::Player::new("C", "300", "Win"),
        fixtures::Player::new("D", "100", "win"),
    ];
    let records: Vec<_> = players.iter().map(|p| p.record()).collect();

    let game = normalize_payload(&fixtures::payload(60_000, &records)).unwrap();
    let markers: Vec<_> = game.participants.iter().map(|p| (p.side, p.outcome)).collect();

    assert_eq!(
        vec![
            (Side::Blue, WinLoss::Win),
            (Side::Red, WinLoss::Loss),
            (Side::Red, WinLoss::Win),
            (Side::Blue, WinLoss::Loss),
        ],
        markers
    );
}

#[test]
fn missing_win_is_loss() {
    let mut record = fixtures::Player::new("A", "100", "Win").record();
    record.as_object_mut().unwrap().remove("WIN");

    let game = normalize_payload(&fixtures::payload(60_000, &[record])).unwrap();

    assert_eq!(WinLoss::Loss, game.participants[0].outcome);
}

#[test]
fn missing_team_is_an_error() {
    let mut record = fixtures::Player::new("A", "100", "Win").record();
    record.as_object_mut().unwrap().remove("TEAM");

    let result = normalize_payload(&fixtures::payload(60_000, &[record]));

    assert!(matches!(result, Err(ReplayError::MissingStatField("TEAM"))), "{:?}", result);
}

#[test]
fn missing_identity_is_empty() {
    let record = serde_json::json!({"TEAM": "200", "WIN": "Win", "CHAMPIONS_KILLED": "2"});

    let game = normalize_payload(&fixtures::payload(60_000, &[record])).unwrap();
    let participant = &game.participants[0];

    assert_eq!(RiotId::default(), participant.riot_id);
    assert_eq!("", participant.champion);
    assert_eq!("", participant.position);
    assert_eq!(2, participant.counters.kills);
}

#[test]
fn repaired_payload_normalizes_identically() {
    let players = [
        fixtures::Player::new("Ashfall", "100", "Win").kda(3, 1, 2),
        fixtures::Player::new("Foxglove", "200", "Fail").kda(1, 3, 0),
    ];
    let records: Vec<_> = players.iter().map(|p| p.record()).collect();
    let payload = fixtures::payload(1_200_000, &records);

    let complete = normalize_payload(&payload).unwrap();
    let truncated = normalize_payload(payload.strip_suffix('}').unwrap()).unwrap();

    assert_eq!(complete, truncated);
}

#[test]
fn pseudo_puuid_is_stable() {
    let id = RiotId::new("Ashfall", "EUW");

    assert_eq!("Ashfall#EUW", id.to_string());
    assert_eq!(64, id.pseudo_puuid().len());
    assert_eq!(id.pseudo_puuid(), RiotId::new("Ashfall", "EUW").pseudo_puuid());
    assert_ne!(id.pseudo_puuid(), RiotId::new("Ashfall", "NA1").pseudo_puuid());
}

#[test]
fn match_id_from_content() {
    let input = fixtures::testfile("blue_win.rofl");
    let config = NormalizeConfig::default();

    let id = normalize::match_id(&config, &input);

    assert_eq!(id, normalize::match_id(&config, &input.clone()));
    assert!(id.as_str().starts_with("EUW1_"));
    assert_eq!("EUW1_".len() + 10, id.as_str().len());
    assert!(id.as_str()[5..].chars().all(|c| c.is_ascii_hexdigit()));

    let other = normalize::match_id(&config, &fixtures::testfile("red_win.rofl"));
    assert_ne!(id, other);

    let na = normalize::match_id(
        &NormalizeConfig {
            platform_id: "NA1".to_owned(),
        },
        &input,
    );
    assert_eq!(&id.as_str()[5..], &na.as_str()[4..]);
}

#[test]
fn match_id_only_reads_the_prefix() {
    let mut first = vec![b'x'; 10_000];
    let mut second = first.clone();
    first.extend_from_slice(b"one tail");
    second.extend_from_slice(b"another tail");

    let config = NormalizeConfig::default();

    assert_eq!(normalize::match_id(&config, &first), normalize::match_id(&config, &second));
}

#[test]
fn huge_counters_saturate() {
    let mut ally = fixtures::Player::new("Ashfall", "100", "Win").kda(0, 0, 1).record();
    ally["CHAMPIONS_KILLED"] = u64::MAX.to_string().into();
    ally["MINIONS_KILLED"] = u64::MAX.to_string().into();
    ally["NEUTRAL_MINIONS_KILLED"] = "5".into();
    let teammate = fixtures::Player::new("Brindle", "100", "Win").kda(3, 0, 0).record();

    let game = fixtures::parse(&fixtures::game_from_records(600_000, vec![ally, teammate]));
    let ashfall = &game.participants[0];

    assert_eq!(u64::MAX, ashfall.cs());
    assert_eq!(u64::MAX, game.team(Side::Blue).kills);
    assert!(ashfall.rates.kda.is_finite());
    assert_eq!(u64::MAX as f64 + 1.0, ashfall.rates.kda);
    assert!(game.kill_participation(ashfall).is_finite());
}
