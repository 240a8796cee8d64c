//! Composable UI component renderers.
//!
//! # Components
//!
//! - `header`: Title bar with the active search
//! - `search`: Search input box
//! - `table`: Column headings, hit rows and the more button
//! - `empty`: Placeholders for empty, loading and failed states
//! - `footer`: Keybinding hints
//!
//! # Layout
//!
//! ```text
//! [blank line]
//! [Header]
//! [Border]
//! [Search Bar - 3 lines]
//! [Column Headings]
//! [Rows | Placeholder]
//! [More Button]
//! [Border]
//! [Footer]
//! ```

mod empty;
mod footer;
mod header;
mod search;
mod table;

pub use empty::{render_empty_state, render_error, render_loading};
pub use table::{column_heading, more_label};

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{TableView, UIViewModel};

use footer::render_footer;
use header::render_header;
use search::render_search_bar;
use table::{render_more_button, render_table_headers, render_table_rows};

/// Renders a horizontal border line and returns the next row.
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the full layout; the table area shows whichever body the view model carries.
pub fn render_layout(vm: &UIViewModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &vm.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_search_bar(current_row, &vm.search_bar, theme, cols);
    current_row = render_table_headers(current_row, &vm.columns, &vm.layout, theme);

    let placeholder_row = current_row + 1;
    match &vm.body {
        TableView::Ready { rows: items, .. } => {
            render_table_rows(current_row, items, &vm.layout, theme, cols);
        }
        TableView::Loading => render_loading(placeholder_row, theme, cols),
        TableView::Empty(empty) => render_empty_state(placeholder_row, empty, theme, cols),
        TableView::Failed(notice) => render_error(placeholder_row, notice, theme, cols),
    }

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_more_button(border_row.saturating_sub(1), vm.more, theme, cols);
    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &vm.footer, theme, cols);
}
