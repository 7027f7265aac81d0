use std::io::{self, Write};

use search_box_core::{AppViewModel, Cursor, ListStatus, RowKind, RowView};

/// Clears the terminal and draws the whole view. Every frame is a full
/// repaint, matching the core's replace-not-patch result list.
pub fn draw(out: &mut impl Write, view: &AppViewModel) -> io::Result<()> {
    write!(out, "\x1b[2J\x1b[H")?;
    for line in render_lines(view) {
        writeln!(out, "{line}")?;
    }
    write!(out, "> ")?;
    out.flush()
}

pub fn render_lines(view: &AppViewModel) -> Vec<String> {
    let mut lines = Vec::with_capacity(view.rows.len() + 4);

    lines.push(format!("search: {}", view.query));
    lines.push(status_line(view));
    lines.extend(view.rows.iter().map(format_row));

    if let Some(preview) = &view.preview {
        lines.push(format!(
            "preview @ ({}, {}): {}",
            preview.x, preview.y, preview.text
        ));
    }
    lines.push(format!("cursor: {}", cursor_label(view.cursor)));
    lines
}

fn status_line(view: &AppViewModel) -> String {
    let status = match view.status {
        ListStatus::Cleared => "idle".to_string(),
        ListStatus::NoMatches => "no matches".to_string(),
        ListStatus::Matches(1) => "1 match".to_string(),
        ListStatus::Matches(count) => format!("{count} matches"),
        ListStatus::Failed => "error".to_string(),
    };
    match view.rendered_ticket {
        Some(ticket) => format!("[#{ticket}] {status}"),
        None => status,
    }
}

fn format_row(row: &RowView) -> String {
    match row.kind {
        RowKind::Entry => {
            let marker = if row.hovered { '>' } else { ' ' };
            format!("{marker} [{}] {}", row.index, row.text)
        }
        RowKind::Placeholder => format!("    {}", row.text),
        RowKind::Error => format!("  ! {}", row.text),
    }
}

fn cursor_label(cursor: Cursor) -> &'static str {
    match cursor {
        Cursor::Default => "default",
        Cursor::Copy => "copy",
        Cursor::Copied => "copied",
    }
}
