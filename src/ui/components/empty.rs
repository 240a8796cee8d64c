//! Placeholder renderers for the table area: empty, loading and error states.

use crate::ui::helpers::{position_cursor, print_centered};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EmptyState, ErrorNotice};

/// Renders a centered message with a dimmed subtitle below it.
pub fn render_empty_state(row: usize, empty: &EmptyState, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print_centered(&empty.message, cols);
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&empty.subtitle, cols);
    print!("{}", Theme::reset());
}

/// Renders the loading placeholder shown before the first page arrives.
pub fn render_loading(row: usize, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::fg(&theme.colors.loading_fg));
    print_centered("Loading...", cols);
    print!("{}", Theme::reset());
}

/// Renders the failure notice that replaces the table.
pub fn render_error(row: usize, notice: &ErrorNotice, theme: &Theme, cols: usize) {
    position_cursor(row, 1);
    print!("{}", Theme::bold());
    print!("{}", Theme::fg(&theme.colors.error_fg));
    print_centered(&notice.message, cols);
    print!("{}", Theme::reset());

    position_cursor(row + 1, 1);
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print_centered(&notice.detail, cols);
    print!("{}", Theme::reset());
}
