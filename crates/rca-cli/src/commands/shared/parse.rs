use std::str::FromStr;

use rca_core::errors::CoreError;

/// Parse a user-supplied enum value, naming the flag in the error.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: FromStr<Err = CoreError>,
{
    raw.parse::<T>()
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}
