use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    config, error,
    ticketmaster::TicketmasterClient,
    types::{Event, EventTableRow},
    utils, warning,
};

pub async fn events(start: &str, end: &str, region: u32, size: u32, names_only: bool) {
    let client = TicketmasterClient::new(config::ticketmaster_apikey());

    let pb = spinner("Fetching upcoming music events...");
    let result = client.get_music_events(start, end, region, size).await;
    pb.finish_and_clear();

    let events = match result {
        Ok(events) => events,
        Err(e) => error!("Failed to fetch events: {}", e),
    };

    if names_only {
        for name in utils::first_attraction_names(&events) {
            println!("{}", name);
        }
        return;
    }

    if events.is_empty() {
        warning!("No events in the requested window.");
        return;
    }

    let table_rows: Vec<EventTableRow> = events.iter().map(table_row).collect();
    let table = Table::new(table_rows);
    println!("{}", table);
}

fn table_row(event: &Event) -> EventTableRow {
    let date = event
        .dates
        .as_ref()
        .and_then(|d| d.start.as_ref())
        .and_then(|s| s.local_date.clone())
        .unwrap_or_default();

    let performer = event
        .embedded
        .as_ref()
        .and_then(|e| e.attractions.as_ref())
        .and_then(|a| a.first())
        .and_then(|a| a.name.clone())
        .unwrap_or_default();

    let venue = event
        .embedded
        .as_ref()
        .and_then(|e| e.venues.as_ref())
        .and_then(|v| v.first())
        .and_then(|v| v.name.clone())
        .unwrap_or_default();

    EventTableRow {
        date,
        event: event.name.clone().unwrap_or_default(),
        performer,
        venue,
    }
}

pub(crate) fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_message(message);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );
    pb
}
