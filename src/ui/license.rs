use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

const LICENSE_TEXT: &str = include_str!("../../LICENSE");

/// License text as paragraphs, with the hard wraps inside each paragraph
/// joined so the terminal can reflow it.
pub fn paragraphs(text: &str) -> Vec<String> {
    text.split("\n\n")
        .map(|p| p.lines().map(str::trim).collect::<Vec<_>>().join(" "))
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect()
}

pub struct LicenseWidget {
    pub scroll: u16,
}

impl Widget for LicenseWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut lines = Vec::new();
        for paragraph in paragraphs(LICENSE_TEXT) {
            lines.push(Line::from(paragraph));
            lines.push(Line::default());
        }
        lines.push(Line::from(Span::styled(
            "(esc) close / (up/down) scroll",
            Style::default().add_modifier(Modifier::ITALIC),
        )));

        Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("License"))
            .wrap(Wrap { trim: true })
            .scroll((self.scroll, 0))
            .render(area, buf);
    }
}
