// src/export/view.rs

use crate::errors::{AppError, AppResult};
use crate::export::ViewFormat;
use crate::export::model::{EventRow, get_headers, row_cells};
use crate::models::event::Event;
use crate::utils::describe_category;
use crate::utils::table::{Column, Table};

/// Render the event table in the requested format.
pub fn render_events<'a>(
    events: impl IntoIterator<Item = &'a Event>,
    format: ViewFormat,
) -> AppResult<String> {
    let rows: Vec<EventRow> = events.into_iter().map(EventRow::from).collect();

    match format {
        ViewFormat::Table => Ok(render_table(&rows)),
        ViewFormat::Csv => render_csv(&rows),
        ViewFormat::Json => Ok(serde_json::to_string_pretty(&rows)?),
    }
}

fn render_table(rows: &[EventRow]) -> String {
    let mut table = Table::new(get_headers().into_iter().map(Column::new).collect());

    for r in rows {
        table.add_row(row_cells(r));
    }

    table.render()
}

/// CSV (header incluso grazie a serde).
fn render_csv(rows: &[EventRow]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());

    for r in rows {
        wtr.serialize(r)?;
    }

    let bytes = wtr
        .into_inner()
        .map_err(|e| AppError::Export(format!("CSV flush error: {e}")))?;

    String::from_utf8(bytes).map_err(|e| AppError::Export(format!("CSV encoding error: {e}")))
}

/// One-line colored count per category, e.g. `WORK 3`.
pub fn category_counts(events: &[&Event]) -> String {
    crate::models::category::Category::ALL
        .iter()
        .map(|&cat| {
            let (name, color) = describe_category(cat);
            let n = events.iter().filter(|e| e.category == cat).count();
            format!("{color}{name}\x1b[0m {n}")
        })
        .collect::<Vec<_>>()
        .join("  ")
}
