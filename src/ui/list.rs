// Project list rendering.
// Styled list view plus shared loading, error, and empty states.

use ratatui::{prelude::*, widgets::*};

use crate::projects::Project;

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render the project list.
pub fn render_projects_list(
    frame: &mut Frame,
    projects: &[Project],
    list_state: &mut ListState,
    area: Rect,
) {
    if projects.is_empty() {
        render_empty(frame, area, "No projects");
        return;
    }

    let items: Vec<ListItem> = projects
        .iter()
        .map(|project| {
            ListItem::new(Line::from(vec![
                Span::styled("● ", Style::default().fg(project.accent)),
                Span::raw(project.title),
            ]))
        })
        .collect();

    let list_widget = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Projects "))
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(list_widget, area, list_state);
}
