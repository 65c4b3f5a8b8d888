// ABOUTME: TimeTool - current time for a requested timezone.
// ABOUTME: Accepts UTC-offset strings and a handful of common zone names.

use async_trait::async_trait;
use chrono::{FixedOffset, Utc};
use serde::Deserialize;

use crate::tool::{Tool, ToolResult};

/// Tool for time and timezone queries.
pub struct TimeTool;

/// Resolve a timezone string to a fixed UTC offset.
///
/// Accepts "UTC", "UTC+5:30", "UTC-8", and a short alias table of common
/// zone names (standard time, no DST adjustment).
fn parse_timezone(tz: &str) -> Result<FixedOffset, String> {
    let normalized = tz.trim();

    let aliases: &[(&str, i32)] = &[
        ("UTC", 0),
        ("GMT", 0),
        ("America/New_York", -5 * 3600),
        ("America/Chicago", -6 * 3600),
        ("America/Los_Angeles", -8 * 3600),
        ("Europe/London", 0),
        ("Europe/Paris", 3600),
        ("Europe/Berlin", 3600),
        ("Asia/Kolkata", 5 * 3600 + 1800),
        ("Asia/Tokyo", 9 * 3600),
        ("Australia/Sydney", 10 * 3600),
    ];
    if let Some((_, secs)) = aliases
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(normalized))
    {
        return FixedOffset::east_opt(*secs).ok_or_else(|| "offset out of range".to_string());
    }

    let rest = normalized
        .strip_prefix("UTC")
        .or_else(|| normalized.strip_prefix("GMT"))
        .ok_or_else(|| format!("unknown timezone '{}'", tz))?;

    let (sign, rest) = match rest.chars().next() {
        Some('+') => (1, &rest[1..]),
        Some('-') => (-1, &rest[1..]),
        _ => return Err(format!("unknown timezone '{}'", tz)),
    };

    let (hours, minutes) = match rest.split_once(':') {
        Some((h, m)) => (
            h.parse::<i32>().map_err(|_| format!("bad offset '{}'", tz))?,
            m.parse::<i32>().map_err(|_| format!("bad offset '{}'", tz))?,
        ),
        None => (
            rest.parse::<i32>().map_err(|_| format!("bad offset '{}'", tz))?,
            0,
        ),
    };

    if hours > 14 || minutes > 59 {
        return Err(format!("offset '{}' out of range", tz));
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
        .ok_or_else(|| format!("offset '{}' out of range", tz))
}

#[async_trait]
impl Tool for TimeTool {
    fn name(&self) -> &str {
        "get_time"
    }

    fn description(&self) -> &str {
        "Get the current date and time for a timezone (UTC offset like 'UTC+5:30' or a common zone name)"
    }

    fn schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "timezone": {
                    "type": "string",
                    "description": "Timezone, e.g. 'UTC', 'UTC-8', 'Asia/Tokyo' (default: UTC)"
                }
            }
        })
    }

    async fn execute(&self, args: serde_json::Value) -> Result<ToolResult, anyhow::Error> {
        #[derive(Deserialize, Default)]
        struct Args {
            timezone: Option<String>,
        }
        let args: Args = if args.is_null() {
            Args::default()
        } else {
            serde_json::from_value(args)?
        };
        let tz = args.timezone.unwrap_or_else(|| "UTC".to_string());

        let offset = match parse_timezone(&tz) {
            Ok(offset) => offset,
            Err(message) => return Ok(ToolResult::error(message)),
        };

        let now = Utc::now().with_timezone(&offset);

        Ok(ToolResult::ok(serde_json::json!({
            "timezone": tz,
            "utc_offset": offset.to_string(),
            "datetime": now.to_rfc3339(),
            "weekday": now.format("%A").to_string(),
        })))
    }
}
