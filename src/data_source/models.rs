//! Typed views of the Riot API payloads
//!
//! Match records are cached verbatim and re-read by the recap pass, so the
//! schema only names the fields the aggregation touches. Every level
//! carries a `#[serde(flatten)]` capture map: fields the types do not name
//! survive a decode/encode round trip instead of being silently dropped.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Account data returned by the summoner-v4 endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SummonerInfo {
    /// Opaque unique player identifier, stable across name changes.
    pub puuid: String,
    /// Display name at resolution time; informational only.
    #[serde(default)]
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One completed match as returned by the match-v5 endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub metadata: MatchMetadata,
    pub info: MatchInfo,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchMetadata {
    pub match_id: String,
    /// Puuids of every participant; the recap pass filters on membership.
    pub participants: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchInfo {
    /// Match length in seconds.
    pub game_duration: u64,
    pub participants: Vec<MatchParticipant>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-participant slice of a match record.
///
/// Each participant carries two summoner spell slots; `summonerXId` names
/// the spell in the slot and `summonerXCasts` how often it was activated.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchParticipant {
    pub puuid: String,
    pub summoner1_id: i64,
    #[serde(default)]
    pub summoner1_casts: u64,
    pub summoner2_id: i64,
    #[serde(default)]
    pub summoner2_casts: u64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MatchParticipant {
    /// Total casts of `spell_id` across this participant's two spell slots.
    pub fn casts_of(&self, spell_id: i64) -> u64 {
        let mut casts = 0;
        if self.summoner1_id == spell_id {
            casts += self.summoner1_casts;
        }
        if self.summoner2_id == spell_id {
            casts += self.summoner2_casts;
        }
        casts
    }
}

impl MatchRecord {
    /// True if the player identified by `puuid` took part in this match.
    pub fn has_participant(&self, puuid: &str) -> bool {
        self.metadata.participants.iter().any(|p| p == puuid)
    }
}
