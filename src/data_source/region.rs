//! Server regions and their Riot API subdomains
//!
//! The Riot API splits its endpoints into two families served from
//! different hosts: platform endpoints (summoner-v4) live on a
//! per-platform subdomain such as `euw1`, while match-v5 endpoints live on
//! a continental routing subdomain such as `europe`. Both mappings hang off
//! one [`Region`] so an unsupported region is a single typed error path.

use crate::error::AppError;
use std::fmt;
use std::str::FromStr;

/// A server region accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// Europe West
    Euw,
    /// Europe Nordic & East
    Eune,
    /// North America
    Na,
    /// Korea
    Kr,
    /// Brazil
    Br,
}

impl Region {
    /// Subdomain serving platform endpoints (summoner-v4) for this region.
    pub fn platform_subdomain(&self) -> &'static str {
        match self {
            Region::Euw => "euw1",
            Region::Eune => "eun1",
            Region::Na => "na1",
            Region::Kr => "kr",
            Region::Br => "br1",
        }
    }

    /// Subdomain serving regional routing endpoints (match-v5) for this region.
    pub fn regional_subdomain(&self) -> &'static str {
        match self {
            Region::Euw | Region::Eune => "europe",
            Region::Na | Region::Br => "americas",
            Region::Kr => "asia",
        }
    }

    /// All regions accepted by [`Region::from_str`], for help text.
    pub fn supported() -> &'static [&'static str] {
        &["euw", "eune", "na", "kr", "br"]
    }
}

impl FromStr for Region {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euw" => Ok(Region::Euw),
            "eune" => Ok(Region::Eune),
            "na" => Ok(Region::Na),
            "kr" => Ok(Region::Kr),
            "br" => Ok(Region::Br),
            other => Err(AppError::config_error(format!(
                "unsupported region '{other}' (supported: {})",
                Region::supported().join(", ")
            ))),
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Region::Euw => "euw",
            Region::Eune => "eune",
            Region::Na => "na",
            Region::Kr => "kr",
            Region::Br => "br",
        };
        write!(f, "{name}")
    }
}
