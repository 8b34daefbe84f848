use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Arguments
/// * `api_token` - The Riot API credential to validate
/// * `max_requests_per_minute` - The configured rate cap
/// * `log_file_path` - Optional log file path to validate
///
/// # Returns
/// * `Ok(())` - Configuration is valid
/// * `Err(AppError)` - Configuration validation failed
///
/// # Validation Rules
/// - API token cannot be empty
/// - Rate cap must be a positive integer
/// - If a log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(
    api_token: &str,
    max_requests_per_minute: u32,
    log_file_path: &Option<String>,
) -> Result<(), AppError> {
    if api_token.trim().is_empty() {
        return Err(AppError::config_error("API token cannot be empty"));
    }

    if max_requests_per_minute == 0 {
        return Err(AppError::config_error(
            "max_requests_per_minute must be a positive integer",
        ));
    }

    if let Some(log_path) = log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        // Check if parent directory exists or can be created
        if let Some(parent) = Path::new(log_path).parent()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
