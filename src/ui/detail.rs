// Project detail pane.
// Shows one project's metadata and its repository language breakdown.

use ratatui::{prelude::*, widgets::*};

use crate::github::Languages;
use crate::projects::Project;
use crate::state::LoadingState;

use super::{bar, list};

/// Render the detail pane for the selected project.
pub fn render_project_detail(
    frame: &mut Frame,
    project: &Project,
    languages: &LoadingState<Languages>,
    area: Rect,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", project.title))
        .border_style(Style::default().fg(project.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tagline
            Constraint::Length(1), // Tech stack
            Constraint::Length(1), // Link
            Constraint::Length(1), // Spacer
            Constraint::Length(5), // Summary
            Constraint::Min(3),    // Languages
        ])
        .split(inner);

    let tagline = Paragraph::new(project.tagline).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(tagline, chunks[0]);

    let tech = Paragraph::new(Line::from(vec![
        Span::styled("Stack: ", Style::default().fg(Color::DarkGray)),
        Span::raw(project.tech.join(" · ")),
    ]));
    frame.render_widget(tech, chunks[1]);

    let link = Paragraph::new(Line::from(vec![
        Span::styled("Link:  ", Style::default().fg(Color::DarkGray)),
        Span::styled(project.link, Style::default().fg(Color::Cyan)),
    ]));
    frame.render_widget(link, chunks[2]);

    let summary = Paragraph::new(project.summary).wrap(Wrap { trim: true });
    frame.render_widget(summary, chunks[4]);

    draw_languages_section(frame, project, languages, chunks[5]);
}

/// Draw the languages section: the bar once loaded, progress otherwise.
fn draw_languages_section(
    frame: &mut Frame,
    project: &Project,
    languages: &LoadingState<Languages>,
    area: Rect,
) {
    let block = Block::default().borders(Borders::TOP).title(" Languages ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if project.repo.is_none() {
        list::render_empty(frame, inner, "No linked repository");
        return;
    }

    match languages {
        LoadingState::Idle => list::render_empty(frame, inner, "Press r to load"),
        LoadingState::Loading => list::render_loading(frame, inner, "Loading languages"),
        LoadingState::Error(e) => list::render_error(frame, inner, e),
        LoadingState::Loaded(languages) => bar::draw_language_bar(frame, languages, inner),
    }
}
