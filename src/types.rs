use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Credentials for the Spotify Web API, held for the lifetime of a client.
#[derive(Debug, Clone)]
pub struct SpotifyCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub token: String,
}

/// Bearer token produced by the authorization-code exchange.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

/// Raw body of the token endpoint response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub scope: String,
    pub expires_in: u64,
}

// --- Ticketmaster Discovery API ---

#[derive(Debug, Clone, Deserialize)]
pub struct EventsResponse {
    #[serde(rename = "_embedded")]
    pub embedded: Option<EventsContainer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventsContainer {
    pub events: Vec<Event>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    pub name: Option<String>,
    pub id: Option<String>,
    pub dates: Option<EventDates>,
    #[serde(rename = "_embedded")]
    pub embedded: Option<EventEmbedded>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventDates {
    pub start: Option<EventStart>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventStart {
    #[serde(rename = "localDate")]
    pub local_date: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventEmbedded {
    pub attractions: Option<Vec<Attraction>>,
    pub venues: Option<Vec<Venue>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Attraction {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Venue {
    pub name: Option<String>,
}

#[derive(Tabled)]
pub struct EventTableRow {
    pub date: String,
    pub event: String,
    pub performer: String,
    pub venue: String,
}

#[derive(Tabled)]
pub struct RegionTableRow {
    pub id: u32,
    pub region: String,
}

// --- Spotify Web API ---

/// Decoded `/search` body; only the container matching the search type is set.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    pub artists: Option<ArtistsPage>,
    pub episodes: Option<EpisodesPage>,
    pub shows: Option<ShowsPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistsPage {
    pub items: Vec<ArtistItem>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArtistItem {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EpisodesPage {
    pub items: Vec<Episode>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Episode {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShowsPage {
    pub items: Vec<Show>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Show {
    pub id: String,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopTracksResponse {
    pub tracks: Vec<Track>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub public: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePlaylistResponse {
    pub id: String,
    pub name: String,
    pub public: Option<bool>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddEntitiesRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddEntitiesResponse {
    pub snapshot_id: Option<String>,
}
