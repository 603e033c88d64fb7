// UI module for rendering the TUI.
// Contains the project list, detail pane, and language bar widgets.

mod bar;
mod detail;
mod list;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::projects::{GITHUB_OWNER, PROJECTS};

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);
}

/// Draw the header with the app name and owner.
fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Line::from(vec![
        Span::styled(
            " folio ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("· projects by {}", GITHUB_OWNER),
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    let header = Paragraph::new(title).block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

/// Draw the project list next to the detail pane.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(area);

    list::render_projects_list(frame, PROJECTS, &mut app.list_state, chunks[0]);

    match app.selected_project() {
        Some(project) => {
            let languages = app.languages_for(project);
            detail::render_project_detail(frame, project, languages, chunks[1]);
        }
        None => list::render_empty(frame, chunks[1], "Select a project"),
    }
}

/// Draw the status bar with keybinding hints and rate limit.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = vec![
        Span::raw(" ↑↓/jk "),
        Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
        Span::raw("  g/G "),
        Span::styled("First/Last", Style::default().fg(Color::DarkGray)),
        Span::raw("  r "),
        Span::styled("Refresh", Style::default().fg(Color::DarkGray)),
        Span::raw("  q "),
        Span::styled("Quit", Style::default().fg(Color::DarkGray)),
    ];

    // Add rate limit info on the right if available
    let rate = app.client.rate_limit();
    if rate.limit > 0 {
        let rate_color = if rate.remaining < 5 {
            Color::Red
        } else if rate.remaining < 15 {
            Color::Yellow
        } else {
            Color::DarkGray
        };
        hints.push(Span::styled(
            format!("  API: {}/{}", rate.remaining, rate.limit),
            Style::default().fg(rate_color),
        ));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}
