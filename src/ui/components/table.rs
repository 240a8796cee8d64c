//! Table component renderer.
//!
//! Renders the hit list as five columns (TITLE, AUTHOR, COMMENTS, POINTS,
//! AGE) using the widths in [`ColumnLayout`]. Text columns are left-aligned
//! and counters right-aligned.

use crate::store::SortDirection;
use crate::ui::helpers::{self, char_width, fit, fit_right, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{ColumnHeader, ColumnLayout, DisplayItem, MoreButton};

/// Heading text for one column: label, sort key hint and arrow.
///
/// ```rust
/// use hnsearch::store::{SortDirection, SortKey};
/// use hnsearch::ui::components::column_heading;
/// use hnsearch::ui::viewmodel::ColumnHeader;
///
/// let header = ColumnHeader::new(SortKey::Points, '4', Some(SortDirection::Descending));
/// assert_eq!(column_heading(&header), "POINTS[4]▼");
/// ```
#[must_use]
pub fn column_heading(header: &ColumnHeader) -> String {
    let arrow = match header.direction {
        Some(SortDirection::Ascending) => "▲",
        Some(SortDirection::Descending) => "▼",
        None => "",
    };
    format!("{}[{}]{arrow}", header.label, header.key_hint)
}

/// Renders the column headings and returns the next row.
///
/// The active sort column uses the `sort_active_fg` color.
pub fn render_table_headers(
    row: usize,
    columns: &[ColumnHeader],
    layout: &ColumnLayout,
    theme: &Theme,
) -> usize {
    let widths = [layout.title, layout.author, layout.comments, layout.points];

    position_cursor(row, 1);
    print!("{}", Theme::bold());
    for (idx, (header, width)) in columns.iter().zip(widths).enumerate() {
        let color = if header.direction.is_some() {
            &theme.colors.sort_active_fg
        } else {
            &theme.colors.header_fg
        };
        print!("{}", Theme::fg(color));
        let heading = column_heading(header);
        // Title and author are text columns; the rest are counters.
        if idx < 2 {
            print!("{}", fit(&heading, width));
        } else {
            print!("{} ", fit_right(&heading, width.saturating_sub(1)));
        }
    }
    print!("{}", Theme::fg(&theme.colors.header_fg));
    print!("{}", fit_right("AGE", layout.age));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders all rows starting at `row` and returns the next free row.
pub fn render_table_rows(
    row: usize,
    items: &[DisplayItem],
    layout: &ColumnLayout,
    theme: &Theme,
    cols: usize,
) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_table_row(current_row, item, layout, theme, cols);
    }
    current_row
}

/// Renders one hit, padded to the full width so selection fills the line.
fn render_table_row(row: usize, item: &DisplayItem, layout: &ColumnLayout, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    helpers::render_highlighted_text(&item.title, &item.highlight_ranges, theme, item.is_selected);
    print!("{}", " ".repeat(layout.title.saturating_sub(char_width(&item.title))));

    print!("{}", fit(&item.author, layout.author));
    print!("{} ", fit_right(&item.comments, layout.comments.saturating_sub(1)));
    print!("{} ", fit_right(&item.points, layout.points.saturating_sub(1)));

    if !item.is_selected {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    }
    print!("{}", fit_right(&item.age, layout.age));

    let line_len = layout.title + layout.author + layout.comments + layout.points + layout.age;
    print!("{}", " ".repeat(cols.saturating_sub(line_len)));

    print!("{}", Theme::reset());
    row + 1
}

/// Label of the pagination button.
///
/// ```rust
/// use hnsearch::ui::components::more_label;
/// use hnsearch::ui::viewmodel::MoreButton;
///
/// assert_eq!(more_label(MoreButton::Ready { next_page: 2 }), "[m] More (page 2)");
/// assert_eq!(more_label(MoreButton::Loading), "Loading...");
/// ```
#[must_use]
pub fn more_label(more: MoreButton) -> String {
    match more {
        MoreButton::Loading => "Loading...".to_string(),
        MoreButton::Ready { next_page } => format!("[m] More (page {next_page})"),
    }
}

/// Renders the pagination button at `row`.
pub fn render_more_button(row: usize, more: MoreButton, theme: &Theme, cols: usize) {
    let color = match more {
        MoreButton::Loading => &theme.colors.loading_fg,
        MoreButton::Ready { .. } => &theme.colors.text_normal,
    };

    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    helpers::print_centered(&more_label(more), cols);
    print!("{}", Theme::reset());
}
