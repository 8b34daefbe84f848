//! User interaction and prompts for configuration setup
//!
//! Handles first-run input collection when no config file exists yet.

use crate::error::AppError;
use tokio::io::{self, AsyncBufReadExt};

/// Prompts the user for a Riot API token and returns the trimmed input.
///
/// Used on first run when no config file exists and no `RECAP_API_TOKEN`
/// environment variable is set.
///
/// # Returns
/// * `Ok(String)` - The trimmed user input
/// * `Err(AppError)` - Error reading from stdin
pub async fn prompt_for_api_token() -> Result<String, AppError> {
    println!("Please enter your Riot API token: ");
    let mut input = String::new();
    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin);
    reader.read_line(&mut input).await?;
    Ok(input.trim().to_string())
}
