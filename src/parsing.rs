use crate::error::ConfigError;

/// Parse the `max-artifacts` input into a retention count.
///
/// Only plain base-10 integers are accepted, after trimming surrounding whitespace:
/// - `"0"` keeps nothing and deletes every listed artifact
/// - `"3.5"`, `"10abc"` and `"abc"` are rejected rather than truncated
/// - `"-1"` is rejected as negative
pub fn parse_max_artifacts(input: &str) -> Result<usize, ConfigError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::MissingInput("max-artifacts"));
    }

    if let Some(digits) = trimmed.strip_prefix('-')
        && !digits.is_empty()
        && digits.bytes().all(|b| b.is_ascii_digit())
    {
        // "-0" is still zero
        if digits.bytes().all(|b| b == b'0') {
            return Ok(0);
        }
        return Err(ConfigError::NegativeThreshold(trimmed.to_string()));
    }

    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ConfigError::InvalidThreshold(trimmed.to_string()));
    }

    trimmed
        .parse::<usize>()
        .map_err(|_| ConfigError::InvalidThreshold(trimmed.to_string()))
}

/// Split a repository identity in the format "{owner}/{name}" into its components.
pub fn parse_repository(input: &str) -> Option<(&str, &str)> {
    let (owner, name) = input.trim().split_once('/')?;

    if owner.is_empty() || name.is_empty() || name.contains('/') {
        return None;
    }

    Some((owner, name))
}
