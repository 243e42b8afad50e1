use chrono::{NaiveDate, NaiveDateTime};

use crate::{
    errors::{ApiError, Result},
    types::{Episode, Event, Track},
};

/// Static DMA table consulted by the naming helper and the `regions` listing.
///
/// Subset of Ticketmaster's designated-market-area identifiers this tool has
/// been used with; extend as needed.
pub const REGIONS: &[(u32, &str)] = &[
    (212, "Atlanta"),
    (249, "Boston"),
    (264, "Chicago"),
    (324, "Dallas - Fort Worth"),
    (360, "Denver"),
    (385, "Houston"),
    (602, "Los Angeles"),
    (622, "Miami"),
    (345, "New York"),
    (504, "Philadelphia"),
    (553, "Phoenix"),
    (374, "Portland"),
    (668, "San Diego"),
    (682, "San Francisco - Oakland - San Jose"),
    (819, "Seattle - Tacoma"),
    (511, "Washington DC"),
];

/// Looks up a region display name from the static DMA table.
pub fn region_name(region_id: u32) -> Option<&'static str> {
    REGIONS
        .iter()
        .find(|(id, _)| *id == region_id)
        .map(|(_, name)| *name)
}

fn parse_date(date: &str) -> Result<NaiveDate> {
    // Accept a bare date or a full datetime; everything else is rejected.
    if let Ok(d) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        return Ok(d);
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S") {
        return Ok(dt.date());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%SZ") {
        return Ok(dt.date());
    }
    Err(ApiError::InvalidDate(date.to_string()))
}

/// Normalizes a date string into the timestamp format the Discovery API
/// requires: `YYYY-MM-DDT00:00:00Z`.
///
/// Midnight UTC is always assumed; a datetime input keeps its date part and
/// has its time-of-day discarded.
pub fn normalize_datetime(date: &str) -> Result<String> {
    let date = parse_date(date)?;
    Ok(format!("{}T00:00:00Z", date.format("%Y-%m-%d")))
}

/// Produces a human-readable playlist title from a region and a date range.
///
/// The region display name comes from the static DMA table; the dates are
/// formatted as `<month name> <day>`. Example:
///
/// ```text
/// suggest_playlist_name(602, "2024-04-21", "2024-06-30")
///   -> "Los Angeles, April 21 - June 30 (API)"
/// ```
///
/// # Errors
///
/// - [`ApiError::UnknownRegion`] when the id is not in the table
/// - [`ApiError::InvalidDate`] when either date fails to parse
pub fn suggest_playlist_name(region_id: u32, start: &str, end: &str) -> Result<String> {
    let region = region_name(region_id).ok_or(ApiError::UnknownRegion(region_id))?;
    let pretty_start = parse_date(start)?.format("%B %d");
    let pretty_end = parse_date(end)?.format("%B %d");

    Ok(format!("{}, {} - {} (API)", region, pretty_start, pretty_end))
}

/// Extracts the first attraction's name from each event.
///
/// Events without the nested attraction field are skipped, not failed on;
/// response order and duplicates are preserved.
pub fn first_attraction_names(events: &[Event]) -> Vec<String> {
    events
        .iter()
        .filter_map(|event| {
            event
                .embedded
                .as_ref()
                .and_then(|embedded| embedded.attractions.as_ref())
                .and_then(|attractions| attractions.first())
                .and_then(|attraction| attraction.name.clone())
        })
        .collect()
}

/// Builds `spotify:track:<id>` URIs for the first `min(len, max_tracks)` tracks,
/// keeping the source order.
pub fn track_uris(tracks: &[Track], max_tracks: usize) -> Vec<String> {
    tracks
        .iter()
        .take(max_tracks)
        .map(|track| format!("spotify:track:{}", track.id))
        .collect()
}

/// Builds `spotify:episode:<id>` URIs for the first `min(len, max_episodes)`
/// episodes, keeping the source order.
pub fn episode_uris(episodes: &[Episode], max_episodes: usize) -> Vec<String> {
    episodes
        .iter()
        .take(max_episodes)
        .map(|episode| format!("spotify:episode:{}", episode.id))
        .collect()
}
