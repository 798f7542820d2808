//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;

use crate::tui::component::Component;

/// Renders a component into a fresh `width` x `height` test terminal.
pub fn render<C: Component>(component: &mut C, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| component.render(f, f.area()))
        .unwrap();
    terminal.backend().buffer().clone()
}

/// All cell symbols concatenated, row after row.
pub fn buffer_text(buffer: &Buffer) -> String {
    buffer.content().iter().map(|c| c.symbol()).collect::<String>()
}

/// One string per screen row.
pub fn buffer_rows(buffer: &Buffer) -> Vec<String> {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect::<String>()
        })
        .collect()
}

/// Locate the first row containing `needle`, returning `(column, row)`.
/// Columns are counted in characters, which equals cells for the text used in tests.
pub fn find_text(buffer: &Buffer, needle: &str) -> Option<(usize, usize)> {
    buffer_rows(buffer)
        .iter()
        .enumerate()
        .find_map(|(row, line)| {
            line.find(needle)
                .map(|byte_idx| (line[..byte_idx].chars().count(), row))
        })
}

/// Number of non-overlapping occurrences of `needle` in the whole buffer, row by row.
pub fn count_text(buffer: &Buffer, needle: &str) -> usize {
    buffer_rows(buffer)
        .iter()
        .map(|line| line.matches(needle).count())
        .sum()
}
