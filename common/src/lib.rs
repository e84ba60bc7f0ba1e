//! JSON documents produced from parsed replays.
//!
//! Everything in here is plain data: the types mirror the shapes consumers
//! expect on disk or over HTTP and carry no parsing or aggregation logic.

pub mod compact;
pub mod match_v5;
pub mod scrim_report;

pub use compact::{CompactMatch, CompactPlayer};
pub use match_v5::MatchV5;
pub use scrim_report::{ChampionReport, PlayerReport, PlayerTotals, ScrimReport};

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct MatchList {
    pub matches: Vec<MatchV5>,
}
