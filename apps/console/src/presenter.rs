//! # Presentation Layer
//!
//! Styling is kept behind [`Presenter`] so the screens never emit escape
//! codes themselves. The styled presenter uses crossterm; the plain one is
//! used for `--plain`, `display.color = false`, pipes and tests.

use crossterm::cursor::MoveTo;
use crossterm::style::Stylize;
use crossterm::terminal::{Clear, ClearType};
use crossterm::Command;

/// What a piece of text is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Title,
    Accent,
    Success,
    Error,
    Muted,
}

pub trait Presenter {
    /// Escape sequence that clears the screen (empty when unsupported).
    fn clear_screen(&self) -> String;

    fn paint(&self, text: &str, tone: Tone) -> String;
}

/// ANSI colors via crossterm.
#[derive(Debug, Clone, Copy, Default)]
pub struct StyledPresenter;

impl Presenter for StyledPresenter {
    fn clear_screen(&self) -> String {
        let mut out = String::new();
        if Clear(ClearType::All).write_ansi(&mut out).is_err() || MoveTo(0, 0).write_ansi(&mut out).is_err() {
            return String::new();
        }
        out
    }

    fn paint(&self, text: &str, tone: Tone) -> String {
        match tone {
            Tone::Title => text.cyan().bold().to_string(),
            Tone::Accent => text.yellow().to_string(),
            Tone::Success => text.green().to_string(),
            Tone::Error => text.red().to_string(),
            Tone::Muted => text.dark_grey().to_string(),
        }
    }
}

/// No escape codes at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainPresenter;

impl Presenter for PlainPresenter {
    fn clear_screen(&self) -> String {
        String::new()
    }

    fn paint(&self, text: &str, _tone: Tone) -> String {
        text.to_string()
    }
}

/// Picks the presenter for this run.
pub fn presenter_for(plain: bool) -> Box<dyn Presenter> {
    if plain {
        Box::new(PlainPresenter)
    } else {
        Box::new(StyledPresenter)
    }
}

/// Centers `text` in `width` columns (left-biased, no trailing padding).
pub fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(text.chars().count()) / 2;
    format!("{}{}", " ".repeat(pad), text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_has_no_escapes() {
        let p = PlainPresenter;
        assert_eq!(p.paint("Order saved", Tone::Success), "Order saved");
        assert!(p.clear_screen().is_empty());
    }

    #[test]
    fn test_styled_wraps_text() {
        let p = StyledPresenter;
        let red = p.paint("failed", Tone::Error);
        assert!(red.contains("failed"));
        assert!(red.contains('\u{1b}'));
        assert!(p.clear_screen().starts_with('\u{1b}'));
    }

    #[test]
    fn test_center() {
        assert_eq!(center("ab", 6), "  ab");
        assert_eq!(center("abcdef", 4), "abcdef");
    }
}
