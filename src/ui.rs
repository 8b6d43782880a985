pub mod figure;
pub mod keyboard;
pub mod license;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};
use webbrowser::Browser;

use crate::app::{App, Screen};
use crate::game::{SessionView, Status};
use figure::FigureWidget;
use license::LicenseWidget;

const HORIZONTAL_MARGIN: u16 = 2;
const SPINNER: [char; 4] = ['|', '/', '-', '\\'];

impl Widget for &App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        match self.screen {
            Screen::License => LicenseWidget {
                scroll: self.license_scroll,
            }
            .render(area, buf),
            Screen::Game => render_game(self, area, buf),
        }
    }
}

fn render_game(app: &App, area: Rect, buf: &mut Buffer) {
    let view = app.controller.view();

    let bold_style = Style::default().add_modifier(Modifier::BOLD);
    let italic_style = Style::default().add_modifier(Modifier::ITALIC);
    let red_style = Style::default().fg(Color::Red);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .horizontal_margin(HORIZONTAL_MARGIN)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(u16::from(view.error.is_some())), // error
            Constraint::Min(8), // figure + word
            Constraint::Length(3), // keyboard
            Constraint::Length(1), // settings
            Constraint::Length(1), // legend
        ])
        .split(area);

    Paragraph::new(Span::styled("HANGMAN", bold_style))
        .alignment(Alignment::Center)
        .render(chunks[0], buf);

    if let Some(error) = view.error {
        Paragraph::new(Span::styled(error.to_string(), red_style))
            .alignment(Alignment::Center)
            .render(chunks[1], buf);
    }

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(chunks[2]);

    let part_color = if view.status == Status::Lost {
        Color::Red
    } else {
        Color::White
    };
    FigureWidget {
        style: view.settings.figure_style,
        parts: view.parts,
        part_color,
        title: format!("Wrong guesses: {} / {}", view.wrong_count(), view.budget),
    }
    .render(main[0], buf);

    Paragraph::new(info_lines(&view, app.spinner_frame))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(main[1], buf);

    keyboard::keyboard(
        view.guessed,
        view.incorrect,
        view.status == Status::Playing,
    )
    .render(chunks[3], buf);

    let settings = &view.settings;
    Paragraph::new(Span::styled(
        format!(
            "Figure: {}   Difficulty: {} ({} wrong guesses)   Word length: {} letters",
            settings.figure_style,
            settings.difficulty,
            settings.difficulty.budget(),
            settings.word_length()
        ),
        Style::default().add_modifier(Modifier::DIM),
    ))
    .alignment(Alignment::Center)
    .render(chunks[4], buf);

    let legend = if Browser::is_available() {
        "(enter) new / (1/2) difficulty / (3/4) figure / (</>) length / (?) license / (^o) source / (esc)ape"
    } else {
        "(enter) new / (1/2) difficulty / (3/4) figure / (</>) length / (?) license / (esc)ape"
    };
    Paragraph::new(Span::styled(legend, italic_style))
        .alignment(Alignment::Center)
        .render(chunks[5], buf);
}

fn masked_line(view: &SessionView) -> Line<'static> {
    let missed_style = Style::default().fg(Color::Red).add_modifier(Modifier::BOLD);
    let shown_style = Style::default().add_modifier(Modifier::BOLD);

    let spans: Vec<Span> = view
        .masked_word
        .iter()
        .flat_map(|slot| {
            let span = match slot {
                Some(c) if view.status == Status::Lost && !view.guessed.contains(c) => {
                    Span::styled(c.to_string(), missed_style)
                }
                Some(c) => Span::styled(c.to_string(), shown_style),
                None => Span::raw("_"),
            };
            [span, Span::raw(" ")]
        })
        .collect();
    Line::from(spans)
}

fn info_lines(view: &SessionView, spinner_frame: usize) -> Vec<Line<'static>> {
    let mut lines = vec![Line::default()];

    if view.status == Status::Loading {
        lines.push(Line::from(format!(
            "Loading word {}",
            SPINNER[spinner_frame % SPINNER.len()]
        )));
        return lines;
    }

    lines.push(masked_line(view));
    lines.push(Line::default());

    let incorrect: Vec<String> = view.incorrect.iter().map(char::to_string).collect();
    lines.push(Line::from(vec![
        Span::raw("Incorrect: "),
        Span::styled(incorrect.join(" "), Style::default().fg(Color::Red)),
    ]));

    let (headline, color) = match view.status {
        Status::Won => ("You Won!", Color::Green),
        Status::Lost => ("Game Over!", Color::Red),
        Status::Loading | Status::Playing => return lines,
    };

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        headline,
        Style::default().fg(color).add_modifier(Modifier::BOLD),
    )));
    if let Some(word) = view.word {
        lines.push(Line::from(format!("The word was: {word}")));
    }
    lines.push(Line::default());
    if view.definitions.is_empty() {
        lines.push(Line::from(Span::styled(
            "No definition available",
            Style::default().add_modifier(Modifier::ITALIC),
        )));
    } else {
        for (i, definition) in view.definitions.iter().enumerate() {
            lines.push(Line::from(format!("{}. {}", i + 1, definition)));
        }
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "Press enter for a new game",
        Style::default().add_modifier(Modifier::DIM),
    )));
    lines
}
