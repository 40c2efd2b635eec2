use std::collections::HashSet;

use crate::error::config::ConfigError;

/// Parses a Discord snowflake from an environment variable value
///
/// # Arguments
/// - `name` - Name of the environment variable, used in the error
/// - `value` - The value to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed value
/// - `Err(ConfigError::InvalidEnvVar)` - The value is not a valid u64
pub fn parse_id(name: &str, value: &str) -> Result<u64, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            value: value.to_string(),
            source: e,
        })
}

/// Parses a comma-separated list of Discord snowflakes
///
/// Blank entries (`"1,,2"`, trailing commas, whitespace) are ignored.
///
/// # Arguments
/// - `name` - Name of the environment variable, used in the error
/// - `value` - Comma-separated list of ids
///
/// # Returns
/// - `Ok(HashSet<u64>)` - Parsed ids, empty if the value is blank
/// - `Err(ConfigError::InvalidEnvVar)` - An entry is not a valid u64
pub fn parse_id_list(name: &str, value: &str) -> Result<HashSet<u64>, ConfigError> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| parse_id(name, s))
        .collect()
}
