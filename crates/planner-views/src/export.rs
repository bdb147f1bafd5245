//! Export of event subsets to CSV, JSON, or plain text.
//!
//! A pure formatting transform over a caller-selected field subset. No
//! schema guarantee across versions.

use planner_models::Event;
use serde_json::{json, Value};
use thiserror::Error;

/// Errors that can occur while rendering an export.
#[derive(Error, Debug)]
pub enum ExportError {
    /// JSON rendering failed.
    #[error("failed to render export: {0}")]
    Render(#[from] serde_json::Error),
}

/// Output format of an export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Comma-separated values with a header row.
    #[default]
    Csv,
    /// Pretty-printed JSON array.
    Json,
    /// `Label: value` lines with a dashed separator per event.
    Txt,
}

/// Fields an export can include.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportField {
    Title,
    Description,
    Date,
    /// Rendered as `start - end`.
    Time,
    Location,
    Venue,
    Category,
    Privacy,
    /// Rendered as the attendee count.
    Attendees,
    Capacity,
    Online,
    Recurring,
    Timezone,
}

/// The fields selected when the caller does not choose.
pub const DEFAULT_EXPORT_FIELDS: [ExportField; 6] = [
    ExportField::Title,
    ExportField::Date,
    ExportField::Time,
    ExportField::Location,
    ExportField::Category,
    ExportField::Attendees,
];

impl ExportField {
    /// Column header / line label for the field.
    pub fn label(&self) -> &'static str {
        match self {
            ExportField::Title => "Title",
            ExportField::Description => "Description",
            ExportField::Date => "Date",
            ExportField::Time => "Time",
            ExportField::Location => "Location",
            ExportField::Venue => "Venue",
            ExportField::Category => "Type",
            ExportField::Privacy => "Privacy",
            ExportField::Attendees => "Attendees",
            ExportField::Capacity => "Capacity",
            ExportField::Online => "Online Event",
            ExportField::Recurring => "Recurring",
            ExportField::Timezone => "Timezone",
        }
    }

    /// Machine-friendly key used by the JSON format.
    pub fn key(&self) -> &'static str {
        match self {
            ExportField::Title => "title",
            ExportField::Description => "description",
            ExportField::Date => "date",
            ExportField::Time => "time",
            ExportField::Location => "location",
            ExportField::Venue => "venue",
            ExportField::Category => "category",
            ExportField::Privacy => "privacy",
            ExportField::Attendees => "attendees",
            ExportField::Capacity => "capacity",
            ExportField::Online => "online",
            ExportField::Recurring => "recurring",
            ExportField::Timezone => "timezone",
        }
    }

    /// Renders the field's value for one event.
    pub fn value(&self, event: &Event) -> String {
        match self {
            ExportField::Title => event.title.clone(),
            ExportField::Description => event.description.clone(),
            ExportField::Date => event.date.to_string(),
            ExportField::Time => format!(
                "{} - {}",
                event.start_time.format("%H:%M"),
                event.end_time.format("%H:%M")
            ),
            ExportField::Location => event.location.clone(),
            ExportField::Venue => event.venue.clone().unwrap_or_default(),
            ExportField::Category => event.category.clone(),
            ExportField::Privacy => event.privacy.to_string(),
            ExportField::Attendees => event.attendee_count().to_string(),
            ExportField::Capacity => event
                .capacity
                .map(|c| c.to_string())
                .unwrap_or_default(),
            ExportField::Online => yes_no(event.online),
            ExportField::Recurring => yes_no(event.is_recurring()),
            ExportField::Timezone => event.timezone.clone(),
        }
    }
}

fn yes_no(flag: bool) -> String {
    if flag { "Yes" } else { "No" }.to_string()
}

/// Renders the given events to the chosen format over the field subset.
pub fn export_events(
    events: &[Event],
    fields: &[ExportField],
    format: ExportFormat,
) -> Result<String, ExportError> {
    match format {
        ExportFormat::Csv => Ok(to_csv(events, fields)),
        ExportFormat::Json => to_json(events, fields),
        ExportFormat::Txt => Ok(to_txt(events, fields)),
    }
}

fn csv_cell(value: &str) -> String {
    // Every cell quoted; embedded quotes doubled
    format!("\"{}\"", value.replace('"', "\"\""))
}

fn to_csv(events: &[Event], fields: &[ExportField]) -> String {
    let header = fields
        .iter()
        .map(|f| csv_cell(f.label()))
        .collect::<Vec<_>>()
        .join(",");

    let mut rows = vec![header];
    for event in events {
        let row = fields
            .iter()
            .map(|f| csv_cell(&f.value(event)))
            .collect::<Vec<_>>()
            .join(",");
        rows.push(row);
    }
    rows.join("\n")
}

fn to_json(events: &[Event], fields: &[ExportField]) -> Result<String, ExportError> {
    let records: Vec<Value> = events
        .iter()
        .map(|event| {
            let mut record = serde_json::Map::new();
            for field in fields {
                record.insert(field.key().to_string(), json!(field.value(event)));
            }
            Value::Object(record)
        })
        .collect();

    Ok(serde_json::to_string_pretty(&records)?)
}

fn to_txt(events: &[Event], fields: &[ExportField]) -> String {
    events
        .iter()
        .map(|event| {
            let lines: Vec<String> = fields
                .iter()
                .map(|f| format!("{}: {}", f.label(), f.value(event)))
                .collect();
            format!("{}\n{}", lines.join("\n"), "-".repeat(50))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
