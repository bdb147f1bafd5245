//! Command handlers for CLI subcommands.

use std::path::Path;

use chrono::Utc;
use tracing::info;

use planner_api::{ApiConfig, AppState};
use planner_client::AuthClient;
use planner_events::EventManager;
use planner_models::{Attendee, Event, EventBuilder, EventId};
use planner_persistence::{EventStore, SessionStore};
use planner_views::{
    clamp_page_size, export_events, paginate, sort_events, EventFilter, Page,
    DEFAULT_EXPORT_FIELDS, DEFAULT_PAGE_SIZE,
};

use crate::cli::{Commands, OutputFormat};

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Execute a CLI command.
pub async fn execute(command: Commands, state_dir: &Path) -> Result<()> {
    match command {
        Commands::Serve { host, port } => cmd_serve(state_dir, host, port).await,
        Commands::Add {
            title,
            date,
            start,
            end,
            location,
            description,
            category,
            privacy,
            meeting_link,
            capacity,
            waitlist,
            recurrence,
            timezone,
        } => {
            let mut builder = EventBuilder::new(title, date, start, end, location);
            if let Some(description) = description {
                builder = builder.description(description);
            }
            if let Some(category) = category {
                builder = builder.category(category);
            }
            if let Some(privacy) = privacy {
                builder = builder.privacy(privacy.into());
            }
            if let Some(link) = meeting_link {
                builder = builder.online(link);
            }
            if let Some(capacity) = capacity {
                builder = builder.capacity(capacity, waitlist);
            }
            if let Some(recurrence) = recurrence {
                builder = builder.recurrence(recurrence.into());
            }
            if let Some(timezone) = timezone {
                builder = builder.timezone(timezone);
            }
            cmd_add(&open_manager(state_dir)?, builder.build())
        }
        Commands::List {
            search,
            category,
            privacy,
            past,
            sort,
            order,
            page,
            page_size,
            format,
        } => {
            let mut filter = EventFilter::new(Utc::now().date_naive());
            if let Some(search) = search {
                filter = filter.with_search(search);
            }
            if let Some(category) = category {
                filter = filter.with_category(category);
            }
            if let Some(privacy) = privacy {
                filter = filter.with_privacy(privacy.into());
            }
            if past {
                filter = filter.with_past();
            }

            let manager = open_manager(state_dir)?;
            let mut events = filter.apply(&manager.list());
            sort_events(&mut events, sort.into(), order.into());

            let page_size = clamp_page_size(page_size.unwrap_or(DEFAULT_PAGE_SIZE));
            cmd_list(paginate(&events, page, page_size), format)
        }
        Commands::Show { id } => cmd_show(&open_manager(state_dir)?, &id),
        Commands::Delete { id } => cmd_delete(&open_manager(state_dir)?, &id),
        Commands::Invite { id, email, status } => {
            let manager = open_manager(state_dir)?;
            manager.add_attendee(
                &EventId::from(id.as_str()),
                Attendee::with_status(email.clone(), status.into()),
            )?;
            println!("Invited {} to event {}", email, id);
            Ok(())
        }
        Commands::Rsvp { id, email, status } => {
            let manager = open_manager(state_dir)?;
            manager.rsvp(&EventId::from(id.as_str()), &email, status.into())?;
            println!("RSVP updated for {}", email);
            Ok(())
        }
        Commands::Export {
            format,
            past,
            output,
        } => {
            let mut filter = EventFilter::new(Utc::now().date_naive());
            if past {
                filter = filter.with_past();
            }
            let manager = open_manager(state_dir)?;
            let events = filter.apply(&manager.list());
            let rendered = export_events(&events, &DEFAULT_EXPORT_FIELDS, format.into())?;

            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    println!("Exported {} events to {}", events.len(), path.display());
                }
                None => println!("{}", rendered),
            }
            Ok(())
        }
        Commands::Register {
            name,
            email,
            password,
            server,
        } => {
            let client = auth_client(state_dir, &server);
            let session = client.register(&name, &email, &password).await?;
            println!("Registered and logged in as {}", session.user.email);
            Ok(())
        }
        Commands::Login {
            email,
            password,
            server,
        } => {
            let client = auth_client(state_dir, &server);
            let session = client.login(&email, &password).await?;
            println!("Logged in as {}", session.user.email);
            Ok(())
        }
        Commands::Logout => {
            let sessions = SessionStore::new(state_dir);
            sessions.clear()?;
            println!("Logged out");
            Ok(())
        }
        Commands::Whoami => {
            let sessions = SessionStore::new(state_dir);
            match sessions.load()? {
                Some(session) => println!(
                    "{} <{}> ({})",
                    session.user.name, session.user.email, session.user.role
                ),
                None => println!("Not logged in"),
            }
            Ok(())
        }
    }
}

fn open_manager(state_dir: &Path) -> Result<EventManager> {
    Ok(EventManager::load(EventStore::new(state_dir))?)
}

fn auth_client(state_dir: &Path, server: &str) -> AuthClient {
    AuthClient::new(server, SessionStore::new(state_dir))
}

async fn cmd_serve(state_dir: &Path, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut config = ApiConfig::from_env();
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(port) = port {
        config.port = port;
    }

    info!(address = %config.bind_address(), "starting server");

    let state = AppState::open(config.clone(), state_dir)?;
    planner_api::serve(config, state).await?;
    Ok(())
}

fn cmd_add(manager: &EventManager, event: Event) -> Result<()> {
    let title = event.title.clone();
    let id = manager.add_event(event)?;

    info!(event_id = %id, "added event");

    println!("Added '{}' ({})", title, id);
    Ok(())
}

fn cmd_list(page: Page, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&page.items)?),
        OutputFormat::Brief => {
            for event in &page.items {
                println!("{}  {} ({})", event.id, event.title, event.date);
            }
        }
        OutputFormat::Table => {
            if page.items.is_empty() {
                println!("No events");
            } else {
                println!(
                    "{:<42} {:<12} {:<13} {:<28} {:<20} {:>9}",
                    "ID", "DATE", "TIME", "TITLE", "LOCATION", "ATTENDEES"
                );
                for event in &page.items {
                    println!(
                        "{:<42} {:<12} {:<13} {:<28} {:<20} {:>9}",
                        event.id.to_string(),
                        event.date.to_string(),
                        format!(
                            "{}-{}",
                            event.start_time.format("%H:%M"),
                            event.end_time.format("%H:%M")
                        ),
                        event.title,
                        event.location,
                        event.attendee_count()
                    );
                }
            }
            println!(
                "\nPage {} of {} ({} events)",
                page.page, page.total_pages, page.total
            );
        }
    }
    Ok(())
}

fn cmd_show(manager: &EventManager, id: &str) -> Result<()> {
    let event = manager
        .get(&EventId::from(id))
        .ok_or_else(|| format!("Event not found: {}", id))?;

    println!("{}", event.title);
    println!("  ID:         {}", event.id);
    println!("  Date:       {}", event.date);
    println!(
        "  Time:       {} - {} ({})",
        event.start_time.format("%H:%M"),
        event.end_time.format("%H:%M"),
        event.timezone
    );
    println!("  Location:   {}", event.location);
    if let Some(ref venue) = event.venue {
        println!("  Venue:      {}", venue);
    }
    if !event.description.is_empty() {
        println!("  About:      {}", event.description);
    }
    if !event.category.is_empty() {
        println!("  Category:   {}", event.category);
    }
    println!("  Privacy:    {}", event.privacy);
    if event.online {
        println!(
            "  Online:     {}",
            event.meeting_link.as_deref().unwrap_or("(no link)")
        );
    }
    if let Some(capacity) = event.capacity {
        println!(
            "  Capacity:   {}{}",
            capacity,
            if event.waitlist { " (waitlist)" } else { "" }
        );
    }
    if event.is_recurring() {
        println!("  Recurs:     {:?}", event.recurrence);
    }
    if event.attendees.is_empty() {
        println!("  Attendees:  none");
    } else {
        println!("  Attendees:");
        for attendee in &event.attendees {
            println!("    {} [{}]", attendee.email, attendee.status);
        }
    }
    Ok(())
}

fn cmd_delete(manager: &EventManager, id: &str) -> Result<()> {
    manager.delete_event(&EventId::from(id))?;
    println!("Deleted event {}", id);
    Ok(())
}
