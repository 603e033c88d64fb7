// Language composition bar.
// Renders byte counts per language as a proportional colored bar.

use ratatui::{prelude::*, widgets::*};

use crate::github::Languages;

/// Colors for languages and tools, mirroring the GitHub language map.
const LANGUAGE_COLORS: &[(&str, Color)] = &[
    ("Python", Color::Rgb(59, 130, 246)),
    ("CSS", Color::Rgb(168, 85, 247)),
    ("C++", Color::Rgb(250, 204, 21)),
    ("GDScript", Color::Rgb(30, 41, 59)),
    ("Svelte", Color::Rgb(255, 62, 0)),
    ("C", Color::Rgb(107, 114, 128)),
    ("Java", Color::Rgb(239, 68, 68)),
    ("Rust", Color::Rgb(206, 65, 43)),
    ("TypeScript", Color::Rgb(0, 122, 204)),
    ("HTML", Color::Rgb(16, 185, 129)),
    ("JavaScript", Color::Rgb(240, 219, 79)),
    ("React", Color::Rgb(97, 218, 251)),
    ("Next.js", Color::Rgb(0, 0, 0)),
    ("MongoDB", Color::Rgb(0, 237, 100)),
    ("Node.js", Color::Rgb(104, 160, 99)),
    ("Redis", Color::Rgb(220, 56, 45)),
    ("TailwindCSS", Color::Rgb(14, 165, 233)),
    ("MySQL", Color::Rgb(0, 117, 143)),
    ("SQLite", Color::Rgb(0, 59, 87)),
    ("PostgreSQL", Color::Rgb(51, 103, 145)),
    ("Firebase", Color::Rgb(255, 202, 40)),
    ("Vercel", Color::Rgb(0, 0, 0)),
];

/// One language's share of a repository.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub language: String,
    /// Share of total bytes, in percent.
    pub percent: f64,
    /// Display color; `None` for languages without a mapping.
    pub color: Option<Color>,
}

/// Look up the display color for a language.
pub fn language_color(language: &str) -> Option<Color> {
    LANGUAGE_COLORS
        .iter()
        .find(|(name, _)| *name == language)
        .map(|(_, color)| *color)
}

/// Turn language byte counts into proportional segments.
///
/// Input order is preserved. When the counts sum to zero there is
/// nothing to show and no segments are produced.
pub fn segments(languages: &Languages) -> Vec<Segment> {
    let total = languages.total_bytes();
    if total == 0 {
        return Vec::new();
    }

    languages
        .iter()
        .map(|(language, bytes)| Segment {
            language: language.to_string(),
            percent: bytes as f64 / total as f64 * 100.0,
            color: language_color(language),
        })
        .collect()
}

/// Render the language bar with a legend underneath.
pub fn draw_language_bar(frame: &mut Frame, languages: &Languages, area: Rect) {
    let segments = segments(languages);
    if segments.is_empty() {
        let text = Paragraph::new("No language data")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let mut lines = vec![bar_line(&segments, area.width), Line::from("")];
    for segment in &segments {
        lines.push(legend_line(segment));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

/// Lay segments out over `width` terminal cells.
///
/// Cell boundaries come from the running percentage total, so the bar
/// always fills the width exactly and rounding never drops a wide
/// segment. Sub-cell segments may still round away; unmapped languages
/// render as unstyled gaps.
fn bar_line(segments: &[Segment], width: u16) -> Line<'static> {
    let mut spans = Vec::new();
    let mut acc = 0.0;
    let mut cursor = 0u16;

    for segment in segments {
        acc += segment.percent;
        let end = ((acc / 100.0 * f64::from(width)).round() as u16).min(width);
        let cells = end.saturating_sub(cursor);
        if cells == 0 {
            continue;
        }
        cursor = end;

        let style = match segment.color {
            Some(color) => Style::default().bg(color),
            None => Style::default(),
        };
        spans.push(Span::styled(" ".repeat(cells as usize), style));
    }

    Line::from(spans)
}

/// One legend row: colored marker, language name, percentage.
fn legend_line(segment: &Segment) -> Line<'static> {
    let marker_style = match segment.color {
        Some(color) => Style::default().fg(color),
        None => Style::default().fg(Color::DarkGray),
    };

    Line::from(vec![
        Span::styled("■ ", marker_style),
        Span::raw(segment.language.clone()),
        Span::styled(
            format!("  {:.1}%", segment.percent),
            Style::default().fg(Color::DarkGray),
        ),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn languages(entries: &[(&str, u64)]) -> Languages {
        entries
            .iter()
            .map(|(name, bytes)| (name.to_string(), *bytes))
            .collect()
    }

    #[test]
    fn test_segments_sum_to_one_hundred() {
        let segments = segments(&languages(&[("Python", 1), ("Rust", 1), ("C", 1)]));

        let sum: f64 = segments.iter().map(|s| s.percent).sum();
        assert!((sum - 100.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_total_produces_no_segments() {
        assert!(segments(&Languages::default()).is_empty());
        assert!(segments(&languages(&[("Rust", 0), ("C", 0)])).is_empty());
    }

    #[test]
    fn test_proportions_and_order() {
        let segments = segments(&languages(&[("TypeScript", 300), ("CSS", 100)]));

        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].language, "TypeScript");
        assert_eq!(segments[0].percent, 75.0);
        assert_eq!(segments[1].language, "CSS");
        assert_eq!(segments[1].percent, 25.0);
    }

    #[test]
    fn test_input_order_is_preserved() {
        let segments = segments(&languages(&[
            ("CSS", 10),
            ("TypeScript", 10),
            ("HTML", 10),
        ]));

        let names: Vec<&str> = segments.iter().map(|s| s.language.as_str()).collect();
        assert_eq!(names, ["CSS", "TypeScript", "HTML"]);
    }

    #[test]
    fn test_unknown_language_has_no_color() {
        assert_eq!(language_color("COBOL"), None);
        assert_eq!(language_color("Rust"), Some(Color::Rgb(206, 65, 43)));

        let segments = segments(&languages(&[("COBOL", 1)]));
        assert_eq!(segments[0].color, None);
    }

    #[test]
    fn test_bar_line_fills_width_exactly() {
        let segments = segments(&languages(&[("Python", 1), ("Rust", 1), ("C", 1)]));

        let line = bar_line(&segments, 80);
        let cells: usize = line.spans.iter().map(|span| span.content.len()).sum();
        assert_eq!(cells, 80);
    }
}
