//! Search screen: booking lookup input, results table, and the
//! contact-support panel shown when nothing matches.

use crate::config::ResolvedConfig;
use crate::state::{Kiosk, SearchState};
use crate::view::constants::{HINT_BAR_HEIGHT, SEARCH_INPUT_HEIGHT, SEARCH_LEGEND_HEIGHT};
use crate::view::home::schedule_table;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Render the search screen.
pub fn render_search(frame: &mut Frame, kiosk: &Kiosk, config: &ResolvedConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(SEARCH_INPUT_HEIGHT),
            Constraint::Length(SEARCH_LEGEND_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(HINT_BAR_HEIGHT),
        ])
        .split(frame.area());

    render_input(frame, chunks[0], kiosk);
    render_legend(frame, chunks[1], kiosk);
    render_result(frame, chunks[2], kiosk, config);
    render_hint_bar(frame, chunks[3]);
}

/// Input box with a block cursor at the end of the typed query.
fn render_input(frame: &mut Frame, area: Rect, kiosk: &Kiosk) {
    let spans = vec![
        Span::raw(kiosk.input.as_str()),
        Span::styled(
            " ",
            Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
    ];

    let paragraph = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("Booking No."),
    );
    frame.render_widget(paragraph, area);
}

fn render_legend(frame: &mut Frame, area: Rect, kiosk: &Kiosk) {
    if !kiosk.legend_visible {
        return;
    }
    let legend = Paragraph::new("Enter your booking reference and press Enter")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(legend, area);
}

fn render_result(frame: &mut Frame, area: Rect, kiosk: &Kiosk, config: &ResolvedConfig) {
    match &kiosk.search {
        SearchState::Idle => {}
        SearchState::Showing { matches, .. } if matches.is_empty() => {
            render_contact_panel(frame, area, config);
        }
        SearchState::Showing { matches, .. } => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(1), Constraint::Min(0)])
                .split(area);

            let banner = Paragraph::new("We got you, here are your transfer details")
                .alignment(Alignment::Center)
                .style(
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                );
            frame.render_widget(banner, chunks[0]);
            frame.render_widget(schedule_table(matches), chunks[1]);
        }
    }
}

/// Fixed not-found panel: static contact text plus the QR image reference.
fn render_contact_panel(frame: &mut Frame, area: Rect, config: &ResolvedConfig) {
    let lines = vec![
        Line::from(config.contact_text.as_str()),
        Line::from(""),
        Line::from(Span::styled(
            format!("Scan for assistance: {}", config.qr_url),
            Style::default().fg(Color::Cyan),
        )),
    ];
    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn render_hint_bar(frame: &mut Frame, area: Rect) {
    let hint = Paragraph::new("Enter: search | Esc: back to board")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(hint, area);
}
