//! Plain-text table renderer.

use meshview_lib::config::Padding;
use meshview_lib::table::{Alignment, Cell, HeaderCell, Health, SortOrder, TableBody, TableView};
use unicode_width::UnicodeWidthStr;

/// Shown in place of the body when no row is displayed.
pub const EMPTY_STATE: &str = "No data to display";

/// How cells are turned into text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Print link targets after their labels.
    pub show_links: bool,
    /// Column spacing.
    pub padding: Padding,
}

/// Render `view` as aligned text, one line per row.
pub fn render_table(view: &TableView, options: &RenderOptions) -> String {
    let gap = match options.padding {
        Padding::Dense => 2,
        Padding::Default => 4,
    };

    let header: Vec<String> = view.headers.iter().map(header_text).collect();
    let rows: Vec<Vec<String>> = view
        .body
        .rows()
        .iter()
        .map(|row| row.cells.iter().map(|cell| cell_text(cell, options)).collect())
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (width, text) in widths.iter_mut().zip(row) {
            *width = (*width).max(text.width());
        }
    }

    let mut out = String::new();
    if let Some(toolbar) = &view.toolbar
        && !toolbar.title.is_empty()
    {
        out.push_str(&toolbar.title);
        out.push('\n');
    }
    push_line(&mut out, &header, &view.headers, &widths, gap);

    match &view.body {
        TableBody::Empty => {
            out.push_str(EMPTY_STATE);
            out.push('\n');
        }
        TableBody::Rows(_) => {
            for row in &rows {
                push_line(&mut out, row, &view.headers, &widths, gap);
            }
        }
    }
    out
}

fn header_text(header: &HeaderCell) -> String {
    if !header.active {
        return header.title.clone();
    }
    let arrow = match header.direction {
        SortOrder::Asc => "▲",
        SortOrder::Desc => "▼",
    };
    format!("{} {}", header.title, arrow)
}

fn cell_text(cell: &Cell, options: &RenderOptions) -> String {
    match cell {
        Cell::Empty => String::new(),
        Cell::Text(text) => text.clone(),
        Cell::Link(link) if options.show_links => format!("{} <{}>", link.label, link.href),
        Cell::Link(link) => link.label.clone(),
        Cell::Gauge { label, health, .. } => match health {
            Health::Good => format!("● {}", label),
            Health::Warning => format!("◐ {}", label),
            Health::Poor => format!("○ {}", label),
            Health::Unknown => label.clone(),
        },
        Cell::Flagged { content, errors } => {
            format!("{} ⚠{}", cell_text(content, options), errors.count)
        }
    }
}

fn push_line(out: &mut String, texts: &[String], headers: &[HeaderCell], widths: &[usize], gap: usize) {
    let mut line = String::new();
    for (i, text) in texts.iter().enumerate() {
        if i > 0 {
            line.push_str(&" ".repeat(gap));
        }
        let fill = " ".repeat(widths[i].saturating_sub(text.width()));
        match headers.get(i).map(|h| h.alignment) {
            Some(Alignment::Right) => {
                line.push_str(&fill);
                line.push_str(text);
            }
            _ => {
                line.push_str(text);
                line.push_str(&fill);
            }
        }
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
