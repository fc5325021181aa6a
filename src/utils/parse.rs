use crate::database::models::BetSlip;
use crate::error::BotError;

/// Parses a bet message into its components.
///
/// Expected format, whitespace-delimited and positional:
/// `<username> <user ID> <draw> <entry> <type id> <amount> <b / s>`
///
/// The whole message is rejected as a unit: a wrong token count or a
/// non-numeric integer field both yield the same format error, and no
/// partially parsed slip is ever returned. Pure function, no side effects.
pub fn parse_entry(text: &str) -> Result<BetSlip, BotError> {
    let parts: Vec<&str> = text.split_whitespace().collect();

    if parts.len() != 7 {
        return Err(BotError::invalid_format());
    }

    Ok(BetSlip {
        username: parts[0].to_string(),
        user_id: parse_int(parts[1])?,
        draw_id: parse_int(parts[2])?,
        entry: parts[3].to_string(),
        bet_type_id: parse_int(parts[4])?,
        multiplier: parse_int(parts[5])?,
        entry_size: parts[6].to_string(),
    })
}

fn parse_int(token: &str) -> Result<i64, BotError> {
    token.parse().map_err(|_| BotError::invalid_format())
}
