use std::collections::BTreeSet;

use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

const ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyState {
    Unused,
    Correct,
    Incorrect,
}

pub fn key_state(letter: char, guessed: &BTreeSet<char>, incorrect: &[char]) -> KeyState {
    if incorrect.contains(&letter) {
        KeyState::Incorrect
    } else if guessed.contains(&letter) {
        KeyState::Correct
    } else {
        KeyState::Unused
    }
}

fn key_style(state: KeyState, active: bool) -> Style {
    let style = match state {
        KeyState::Unused => Style::default().add_modifier(Modifier::BOLD),
        KeyState::Correct => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        KeyState::Incorrect => Style::default()
            .fg(Color::Red)
            .add_modifier(Modifier::CROSSED_OUT),
    };
    if active {
        style
    } else {
        style.add_modifier(Modifier::DIM)
    }
}

/// On-screen QWERTY keyboard. Keys are dimmed when guessing is not possible.
pub fn keyboard(guessed: &BTreeSet<char>, incorrect: &[char], active: bool) -> Paragraph<'static> {
    let lines: Vec<Line> = ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .flat_map(|c| {
                    let state = key_state(c, guessed, incorrect);
                    [
                        Span::styled(format!("[{c}]"), key_style(state, active)),
                        Span::raw(" "),
                    ]
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    Paragraph::new(lines).alignment(Alignment::Center)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn states_follow_guesses() {
        let guessed: BTreeSet<char> = ['A', 'Z'].into_iter().collect();
        let incorrect = ['Z'];
        assert_eq!(key_state('A', &guessed, &incorrect), KeyState::Correct);
        assert_eq!(key_state('Z', &guessed, &incorrect), KeyState::Incorrect);
        assert_eq!(key_state('Q', &guessed, &incorrect), KeyState::Unused);
    }

    #[test]
    fn every_letter_has_a_key() {
        let letters: BTreeSet<char> = ROWS.iter().flat_map(|r| r.chars()).collect();
        assert_eq!(letters.len(), 26);
        assert!(('A'..='Z').all(|c| letters.contains(&c)));
    }

    #[test]
    fn inactive_keys_are_dimmed() {
        assert!(key_style(KeyState::Unused, false)
            .add_modifier
            .contains(Modifier::DIM));
        assert!(!key_style(KeyState::Correct, true)
            .add_modifier
            .contains(Modifier::DIM));
    }
}
