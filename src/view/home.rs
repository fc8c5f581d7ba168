//! Home screen: the cycling schedule table.

use crate::model::TransferRecord;
use crate::state::Kiosk;
use crate::view::constants::{FOOTER_HEIGHT, HINT_BAR_HEIGHT, TITLE_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Column headers, matching the physical board.
pub const COLUMN_HEADERS: [&str; 4] = ["Booking No.", "Flight No.", "Hotel", "Pick-Up time"];

/// Render the home screen: title banner, schedule table, page footer,
/// and key hint bar.
pub fn render_home(frame: &mut Frame, kiosk: &Kiosk) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TITLE_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(FOOTER_HEIGHT),
            Constraint::Length(HINT_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_title(frame, chunks[0], kiosk);
    render_table(frame, chunks[1], kiosk);
    render_footer(frame, chunks[2], kiosk);
    render_hint_bar(frame, chunks[3]);
}

fn render_title(frame: &mut Frame, area: Rect, kiosk: &Kiosk) {
    let title = Paragraph::new(kiosk.board.dataset.title())
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

fn render_table(frame: &mut Frame, area: Rect, kiosk: &Kiosk) {
    let page = kiosk.page();
    let table = schedule_table(page.rows);
    frame.render_widget(table, area);
}

/// Build the four-column schedule table for a row window.
///
/// Shared with the search results panel, which lists matches with the
/// same four display fields.
pub fn schedule_table(records: &[TransferRecord]) -> Table<'_> {
    let header = Row::new(
        COLUMN_HEADERS
            .iter()
            .map(|h| Cell::from(*h))
            .collect::<Vec<_>>(),
    )
    .style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
    .bottom_margin(1);

    let rows: Vec<Row> = records
        .iter()
        .map(|r| {
            Row::new(vec![
                Cell::from(r.booking_ref.as_str()),
                Cell::from(r.flight.as_str()),
                Cell::from(r.hotel.as_str()),
                Cell::from(r.pickup_time.as_str()),
            ])
        })
        .collect();

    Table::new(
        rows,
        [
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(40),
            Constraint::Percentage(20),
        ],
    )
    .header(header)
    .block(Block::default().borders(Borders::ALL))
}

fn render_footer(frame: &mut Frame, area: Rect, kiosk: &Kiosk) {
    let page = kiosk.page();
    let footer = Paragraph::new(Line::from(format!(
        "Page {} of {}",
        page.page_number, page.total_pages
    )))
    .alignment(Alignment::Center)
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, area);
}

fn render_hint_bar(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new("s: search your transfer | q: quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::RecordStore;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::time::{Duration, Instant};

    fn kiosk(n: usize) -> Kiosk {
        let today = (0..n)
            .map(|i| TransferRecord {
                booking_ref: format!("REF{i}"),
                flight: format!("FL{i}"),
                hotel: format!("Hotel {i}"),
                pickup_time: "08:00".to_string(),
            })
            .collect();
        Kiosk::new(
            RecordStore::from_records(today, vec![]),
            Duration::from_secs(10),
            Duration::from_secs(20),
            Instant::now(),
        )
    }

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn home_screen_shows_title_and_page_indicator() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let kiosk = kiosk(3);

        terminal.draw(|frame| render_home(frame, &kiosk)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("PICK-UP AIRPORT TRANSFERS"));
        assert!(text.contains("Page 1 of 1"));
        assert!(text.contains("Booking No."));
        assert!(text.contains("REF0"));
    }

    #[test]
    fn empty_dataset_renders_headers_only() {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        let kiosk = kiosk(0);

        terminal.draw(|frame| render_home(frame, &kiosk)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("Booking No."));
        assert!(text.contains("Page 1 of 1"));
        assert!(!text.contains("REF0"));
    }
}
