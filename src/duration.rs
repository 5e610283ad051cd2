//! ISO 8601 durations (`PT1H30M`) as readable strings.

use once_cell::sync::Lazy;
use regex::Regex;

static ISO_DURATION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)^P(?:\d+Y)?(?:\d+M)?(?:(\d+(?:\.\d+)?)D)?(?:T(?:(\d+(?:\.\d+)?)H)?(?:(\d+(?:\s*-\s*\d+)?(?:\.\d+)?)M)?(?:(\d+(?:\.\d+)?)S)?)?$",
    )
    .unwrap()
});

static HOURS_IN_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(?:hours?|hrs?|h)\b").unwrap());

static MINUTES_IN_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s*(?:minutes?|mins?|m)\b").unwrap());

/// How a site renders durations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DurationStyle {
    /// `1 hour 30 minutes`
    #[default]
    Human,
    /// `90 minutes`
    TotalMinutes,
}

fn plural(count: u64, word: &str) -> String {
    if count == 1 {
        format!("{count} {word}")
    } else {
        format!("{count} {word}s")
    }
}

fn component(captures: &regex::Captures, index: usize) -> f64 {
    captures
        .get(index)
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0)
}

/// Format an ISO 8601 duration.
///
/// Returns `None` for empty input, anything that is not an ISO duration,
/// and durations whose components are all zero.
pub fn format_iso_duration(duration: &str, style: DurationStyle) -> Option<String> {
    let duration = duration.trim();
    let captures = ISO_DURATION.captures(duration)?;

    let hours_total = component(&captures, 1) * 24.0 + component(&captures, 2);

    // ranges such as PT15-20M can't be summed; keep them as written
    if let Some(range) = captures.get(3).filter(|m| m.as_str().contains('-')) {
        let range = range.as_str().replace(' ', "");
        let hours = hours_total.round() as u64;
        return Some(if hours > 0 {
            format!("{} {range} minutes", plural(hours, "hour"))
        } else {
            format!("{range} minutes")
        });
    }

    let total_minutes = (hours_total * 60.0
        + component(&captures, 3)
        + component(&captures, 4) / 60.0)
        .round() as u64;

    format_minutes(total_minutes, style)
}

/// Render a minute count in the given style; `None` for zero.
pub fn format_minutes(total_minutes: u64, style: DurationStyle) -> Option<String> {
    if total_minutes == 0 {
        return None;
    }

    match style {
        DurationStyle::TotalMinutes => Some(plural(total_minutes, "minute")),
        DurationStyle::Human => {
            let hours = total_minutes / 60;
            let minutes = total_minutes % 60;
            let mut parts = Vec::new();
            if hours > 0 {
                parts.push(plural(hours, "hour"));
            }
            if minutes > 0 {
                parts.push(plural(minutes, "minute"));
            }
            Some(parts.join(" "))
        }
    }
}

pub fn is_iso_duration(text: &str) -> bool {
    ISO_DURATION.is_match(text.trim())
}

/// Total minutes in an already formatted duration such as `1 hour 30 minutes`.
pub fn minutes_in(text: &str) -> Option<u64> {
    let text = text.trim();
    if let Ok(plain) = text.parse::<u64>() {
        return Some(plain);
    }

    let mut found = false;
    let mut total = 0;
    for captures in HOURS_IN_TEXT.captures_iter(text) {
        found = true;
        total += captures[1].parse::<u64>().unwrap_or(0) * 60;
    }
    for captures in MINUTES_IN_TEXT.captures_iter(text) {
        found = true;
        total += captures[1].parse::<u64>().unwrap_or(0);
    }

    found.then_some(total)
}
