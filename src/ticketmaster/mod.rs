//! # Ticketmaster Integration Module
//!
//! Client for the Ticketmaster Discovery API, used as the event source for
//! playlist building. Only one endpoint is needed: the events search, filtered
//! to music events in a date range and region (DMA). Two views of the result
//! exist - the full decoded event records, and the names-only mode that
//! reduces each event to its first attraction's name.
//!
//! All calls go through the shared request helper in [`crate::http`]; there is
//! no pagination beyond the single `size` parameter and no retry logic.

use crate::{
    errors::{ApiError, Result},
    http,
    types::{Event, EventsResponse},
    utils,
};

/// Default number of events requested per query.
pub const DEFAULT_PAGE_SIZE: u32 = 180;

/// Client for the Ticketmaster Discovery API.
///
/// Holds the consumer key and the base URL for the lifetime of the client;
/// neither is mutated after construction.
pub struct TicketmasterClient {
    api_key: String,
    base_url: String,
}

impl TicketmasterClient {
    /// Creates a client from an explicit consumer key, with the base URL
    /// taken from configuration.
    pub fn new(api_key: String) -> Self {
        TicketmasterClient {
            api_key,
            base_url: crate::config::ticketmaster_apiurl(),
        }
    }

    /// Retrieves music events in a date range and region.
    ///
    /// Both dates are normalized to `YYYY-MM-DDT00:00:00Z` before the query is
    /// built; date-only input is assumed to mean midnight UTC. The query is
    /// fixed to `classificationName=music`.
    ///
    /// # Arguments
    ///
    /// * `start` - Start of the search window (`YYYY-MM-DD` or datetime)
    /// * `end` - End of the search window
    /// * `region_id` - Ticketmaster DMA identifier
    /// * `page_size` - Number of events to request; see [`DEFAULT_PAGE_SIZE`]
    ///
    /// # Errors
    ///
    /// - [`ApiError::NoEventsFound`] when the response lacks the `_embedded`
    ///   results container
    /// - [`ApiError::InvalidDate`] for unparseable dates
    /// - [`ApiError::RequestFailed`] / [`ApiError::Transport`] from the
    ///   request helper
    pub async fn get_music_events(
        &self,
        start: &str,
        end: &str,
        region_id: u32,
        page_size: u32,
    ) -> Result<Vec<Event>> {
        let start = utils::normalize_datetime(start)?;
        let end = utils::normalize_datetime(end)?;

        let api_url = format!(
            "{uri}/events.json?classificationName=music&startDateTime={start}&endDateTime={end}&size={size}&dmaId={dma}&apikey={apikey}",
            uri = &self.base_url,
            start = start,
            end = end,
            size = page_size,
            dma = region_id,
            apikey = &self.api_key
        );

        let response = http::make_request("get", &api_url, None, None).await?;
        let json = response.json::<EventsResponse>().await?;

        match json.embedded {
            Some(container) => Ok(container.events),
            None => Err(ApiError::NoEventsFound),
        }
    }

    /// Names-only mode: retrieves music events and reduces each one to its
    /// first attraction's name.
    ///
    /// Events missing the nested attraction field are skipped rather than
    /// failed on; the returned list keeps the API response order, duplicates
    /// included.
    pub async fn get_performer_names(
        &self,
        start: &str,
        end: &str,
        region_id: u32,
        page_size: u32,
    ) -> Result<Vec<String>> {
        let events = self
            .get_music_events(start, end, region_id, page_size)
            .await?;
        Ok(utils::first_attraction_names(&events))
    }
}
