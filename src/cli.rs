use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::{Parser, Subcommand};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// ARAM match history crawler and recap tool
///
/// Crawls a summoner's ARAM matches from the Riot Games API into a local
/// cache, rate-limited to stay within the API key's budget, and computes
/// statistics (time in game, poro casts) over the cached records.
#[derive(Parser, Debug)]
#[command(author = "Iñaki Amatria-Barral", about, long_about = None, version)]
#[command(styles = get_styles())]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Riot API token. Overrides the config file and RECAP_API_TOKEN.
    #[arg(short = 'a', long = "api-token", global = true, help_heading = "Configuration")]
    pub api_token: Option<String>,

    /// Directory holding cached match records. Defaults to the platform
    /// cache directory.
    #[arg(short = 'c', long = "cache-dir", global = true, help_heading = "Configuration")]
    pub cache_dir: Option<String>,

    /// Maximum number of API requests per minute.
    #[arg(short = 'r', long = "rate", global = true, help_heading = "Configuration")]
    pub rate: Option<u32>,

    /// Specify a custom log file path. If not provided, logs will be
    /// written to the default location.
    #[arg(long = "log-file", global = true, help_heading = "Debug")]
    pub log_file: Option<String>,

    /// Also log to stdout, not just the log file.
    #[arg(long = "debug", global = true, help_heading = "Debug")]
    pub debug: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Crawl all ARAM matches a summoner played on a given date into the cache
    Crawl {
        /// Summoner to crawl
        #[arg(value_name = "SUMMONER")]
        summoner_name: String,

        /// Crawling date in dd/mm/yyyy format (interpreted as a UTC day)
        #[arg(short = 'd', long = "date", value_name = "dd/mm/yyyy")]
        date: String,

        /// Summoner's server region (euw, eune, na, kr, br)
        #[arg(short = 's', long = "server", value_name = "REGION")]
        region: String,
    },
    /// Summarize all cached ARAM matches for a summoner
    Recap {
        /// Summoner to summarize
        #[arg(value_name = "SUMMONER")]
        summoner_name: String,

        /// Summoner's server region (euw, eune, na, kr, br)
        #[arg(short = 's', long = "server", value_name = "REGION")]
        region: String,
    },
    /// List current configuration settings
    ListConfig,
}
