//! Remote data source: rate-limited access to the Riot API

pub mod client;
pub mod date_logic;
pub mod models;
pub mod region;
pub mod throttle;
pub mod urls;

pub use client::RiotClient;
pub use models::{MatchParticipant, MatchRecord, SummonerInfo};
pub use region::Region;
pub use throttle::Throttle;
