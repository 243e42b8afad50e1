use gigmix::errors::ApiError;
use gigmix::types::{Attraction, Episode, Event, EventEmbedded, Track};
use gigmix::utils::*;

// Helper function to create a test event with an optional performer
fn create_test_event(name: &str, performer: Option<&str>) -> Event {
    Event {
        name: Some(name.to_string()),
        id: Some(format!("{}_id", name)),
        dates: None,
        embedded: performer.map(|p| EventEmbedded {
            attractions: Some(vec![Attraction {
                id: Some(format!("{}_attraction_id", p)),
                name: Some(p.to_string()),
            }]),
            venues: None,
        }),
    }
}

// Helper function to create a test track
fn create_test_track(id: &str, name: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
    }
}

#[test]
fn test_suggest_playlist_name() {
    let name = suggest_playlist_name(602, "2024-04-21", "2024-06-30").unwrap();
    assert_eq!(name, "Los Angeles, April 21 - June 30 (API)");
}

#[test]
fn test_suggest_playlist_name_unknown_region() {
    let result = suggest_playlist_name(1, "2024-04-21", "2024-06-30");
    assert!(matches!(result, Err(ApiError::UnknownRegion(1))));
}

#[test]
fn test_suggest_playlist_name_invalid_date() {
    let result = suggest_playlist_name(602, "soon", "2024-06-30");
    assert!(matches!(result, Err(ApiError::InvalidDate(_))));
}

#[test]
fn test_region_name_lookup() {
    assert_eq!(region_name(602), Some("Los Angeles"));
    assert_eq!(region_name(345), Some("New York"));
    assert_eq!(region_name(0), None);
}

#[test]
fn test_normalize_datetime_date_only() {
    let normalized = normalize_datetime("2024-04-21").unwrap();
    assert_eq!(normalized, "2024-04-21T00:00:00Z");
}

#[test]
fn test_normalize_datetime_discards_time_of_day() {
    // Datetime input keeps the date but is still pinned to midnight UTC
    let normalized = normalize_datetime("2024-04-21T18:30:00").unwrap();
    assert_eq!(normalized, "2024-04-21T00:00:00Z");

    let normalized = normalize_datetime("2024-04-21T18:30:00Z").unwrap();
    assert_eq!(normalized, "2024-04-21T00:00:00Z");
}

#[test]
fn test_normalize_datetime_rejects_garbage() {
    assert!(matches!(
        normalize_datetime("next tuesday"),
        Err(ApiError::InvalidDate(_))
    ));
}

#[test]
fn test_first_attraction_names_skips_malformed_events() {
    let events = vec![
        create_test_event("Show 1", Some("Artist A")),
        create_test_event("Show 2", None), // no attraction block
        create_test_event("Show 3", Some("Artist B")),
    ];

    let names = first_attraction_names(&events);
    assert_eq!(names, vec!["Artist A", "Artist B"]);
}

#[test]
fn test_first_attraction_names_preserves_order_and_duplicates() {
    let events = vec![
        create_test_event("Night 1", Some("Artist A")),
        create_test_event("Night 2", Some("Artist A")),
        create_test_event("Night 3", Some("Artist B")),
    ];

    let names = first_attraction_names(&events);
    assert_eq!(names, vec!["Artist A", "Artist A", "Artist B"]);
}

#[test]
fn test_first_attraction_names_empty_events() {
    let names = first_attraction_names(&[]);
    assert!(names.is_empty());
}

#[test]
fn test_first_attraction_names_empty_attraction_list() {
    let event = Event {
        name: Some("Show".to_string()),
        id: None,
        dates: None,
        embedded: Some(EventEmbedded {
            attractions: Some(vec![]),
            venues: None,
        }),
    };

    let names = first_attraction_names(&[event]);
    assert!(names.is_empty());
}

#[test]
fn test_track_uris_truncates_to_first_n() {
    let tracks = vec![
        create_test_track("t1", "One"),
        create_test_track("t2", "Two"),
        create_test_track("t3", "Three"),
        create_test_track("t4", "Four"),
        create_test_track("t5", "Five"),
    ];

    let uris = track_uris(&tracks, 3);
    assert_eq!(
        uris,
        vec![
            "spotify:track:t1",
            "spotify:track:t2",
            "spotify:track:t3",
        ]
    );
}

#[test]
fn test_track_uris_with_fewer_tracks_than_cap() {
    let tracks = vec![create_test_track("t1", "One"), create_test_track("t2", "Two")];

    let uris = track_uris(&tracks, 10);
    assert_eq!(uris, vec!["spotify:track:t1", "spotify:track:t2"]);
}

#[test]
fn test_episode_uris_default_cap() {
    let episodes = vec![
        Episode {
            id: "e1".to_string(),
            name: Some("Episode 1".to_string()),
        },
        Episode {
            id: "e2".to_string(),
            name: Some("Episode 2".to_string()),
        },
    ];

    let uris = episode_uris(&episodes, 1);
    assert_eq!(uris, vec!["spotify:episode:e1"]);
}
