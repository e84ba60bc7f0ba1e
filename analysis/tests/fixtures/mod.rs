#![allow(dead_code)]

use serde_json::json;

pub fn testfile(name: &str) -> Vec<u8> {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../testfiles/")
        .join(name);
    std::fs::read(path).unwrap()
}

pub struct Player {
    pub name: &'static str,
    pub tag: &'static str,
    pub team: &'static str,
    pub win: &'static str,
    pub champion: &'static str,
    pub position: &'static str,
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
}

impl Player {
    pub fn new(name: &'static str, team: &'static str, win: &'static str) -> Self {
        Self {
            name,
            tag: "EUW",
            team,
            win,
            champion: "Ahri",
            position: "MIDDLE",
            kills: 0,
            deaths: 0,
            assists: 0,
        }
    }

    pub fn champion(mut self, champion: &'static str, position: &'static str) -> Self {
        self.champion = champion;
        self.position = position;
        self
    }

    pub fn kda(mut self, kills: u64, deaths: u64, assists: u64) -> Self {
        self.kills = kills;
        self.deaths = deaths;
        self.assists = assists;
        self
    }

    pub fn record(&self) -> serde_json::Value {
        json!({
            "RIOT_ID_GAME_NAME": self.name,
            "RIOT_ID_TAG_LINE": self.tag,
            "TEAM": self.team,
            "WIN": self.win,
            "SKIN": self.champion,
            "TEAM_POSITION": self.position,
            "CHAMPIONS_KILLED": self.kills.to_string(),
            "NUM_DEATHS": self.deaths.to_string(),
            "ASSISTS": self.assists.to_string(),
        })
    }
}

/// `{"gameLength":...,"statsJson":"<escaped array>"}` with the keys in the
/// order the client writes them.
pub fn payload(game_length_ms: u64, records: &[serde_json::Value]) -> String {
    let stats = serde_json::to_string(records).unwrap();
    format!(
        r#"{{"gameLength":{},"lastGameChunkId":20,"lastKeyFrameId":10,"statsJson":{}}}"#,
        game_length_ms,
        serde_json::to_string(&stats).unwrap()
    )
}

/// Wraps a payload in container-looking bytes, including invalid UTF-8.
pub fn replay(payload: &str) -> Vec<u8> {
    let mut buf = b"RIOT\x02\x00\x00\x00\xff\xfe\x9c\x00header{\x00".to_vec();
    buf.extend_from_slice(payload.as_bytes());
    buf.extend_from_slice(b"\x00\x01\x02chunk}\x03");
    buf
}

pub fn game(game_length_ms: u64, players: &[Player]) -> Vec<u8> {
    game_from_records(game_length_ms, players.iter().map(Player::record).collect())
}

pub fn game_from_records(game_length_ms: u64, records: Vec<serde_json::Value>) -> Vec<u8> {
    replay(&payload(game_length_ms, &records))
}

pub fn parse(buf: &[u8]) -> analysis::normalize::Match {
    analysis::parse_replay(&analysis::Config::default(), buf).unwrap()
}
