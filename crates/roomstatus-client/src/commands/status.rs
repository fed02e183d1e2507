//! Status command: builds the configured rooms and prints their state.

use std::path::Path;
use std::sync::Arc;

use roomstatus_core::{Clock, SystemClock};
use roomstatus_providers::{CalendarService, StaticService};
use roomstatus_room::{Room, RoomSnapshot};
use tracing::{error, info};

use crate::cli::StatusArgs;
use crate::config::PanelConfig;
use crate::error::{ClientError, ClientResult};
use crate::render::{render_json, render_text};

/// Prints the status of every configured room, or only `args.room`.
pub async fn run(args: &StatusArgs, config: &PanelConfig) -> ClientResult<()> {
    let service = build_service(config, args.events_file.as_deref())?;
    let rooms = build_rooms(config, args.room.as_deref(), service, Arc::new(SystemClock))?;

    let (snapshots, failed) = collect_snapshots(&rooms).await;

    if args.json {
        println!("{}", render_json(&snapshots)?);
    } else {
        for snapshot in &snapshots {
            print!("{}", render_text(snapshot));
        }
    }

    if failed > 0 {
        return Err(ClientError::RoomsFailed {
            failed,
            total: rooms.len(),
        });
    }
    Ok(())
}

/// Picks the calendar service: the events file when given, Google otherwise.
#[cfg_attr(not(feature = "google"), allow(unused_variables))]
pub fn build_service(
    config: &PanelConfig,
    events_file: Option<&Path>,
) -> ClientResult<Arc<dyn CalendarService>> {
    if let Some(path) = events_file {
        info!(path = %path.display(), "serving events from file");
        return Ok(Arc::new(StaticService::from_file(path)?));
    }

    #[cfg(feature = "google")]
    if let Some(ref google) = config.google {
        let service_config = google.to_service_config().map_err(ClientError::Config)?;
        let service = roomstatus_providers::google::GoogleCalendarService::new(service_config)?;
        info!("Google Calendar service initialized");
        return Ok(Arc::new(service));
    }

    Err(ClientError::config(format!(
        "no calendar service configured; add a [google] section to {} or pass --events-file",
        PanelConfig::default_path().display()
    )))
}

/// Builds a room per configured entry, optionally keeping only `only`.
pub fn build_rooms(
    config: &PanelConfig,
    only: Option<&str>,
    service: Arc<dyn CalendarService>,
    clock: Arc<dyn Clock>,
) -> ClientResult<Vec<Room>> {
    let settings = config.cache.to_room_settings();

    let selected: Vec<_> = match only {
        Some(name) => vec![
            config
                .room(name)
                .ok_or_else(|| ClientError::UnknownRoom(name.to_string()))?,
        ],
        None => config.rooms.iter().collect(),
    };

    if selected.is_empty() {
        return Err(ClientError::config("no rooms configured"));
    }

    Ok(selected
        .into_iter()
        .map(|room| Room::new(room.clone(), settings, Arc::clone(&service), Arc::clone(&clock)))
        .collect())
}

/// Snapshots each room in order. Failed rooms are logged and counted.
pub async fn collect_snapshots(rooms: &[Room]) -> (Vec<RoomSnapshot>, usize) {
    let mut snapshots = Vec::with_capacity(rooms.len());
    let mut failed = 0;

    for room in rooms {
        match room.snapshot().await {
            Ok(snapshot) => snapshots.push(snapshot),
            Err(e) => {
                error!(room = room.name(), error = %e, "failed to read room status");
                eprintln!("error: {}: {}", e, source_chain(&e));
                failed += 1;
            }
        }
    }

    (snapshots, failed)
}

fn source_chain(err: &dyn std::error::Error) -> String {
    let mut parts = Vec::new();
    let mut current = err.source();
    while let Some(source) = current {
        parts.push(source.to_string());
        current = source.source();
    }
    parts.join(": ")
}
