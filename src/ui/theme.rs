//! Terminal palette derived from the stored preferences.

use crate::models::Preferences;
use ansi_term::{Colour, Style};

pub struct Palette {
    accent: Colour,
    muted: Colour,
    highlight: Colour,
}

impl Palette {
    pub fn from_preferences(prefs: &Preferences) -> Self {
        let (r, g, b) = prefs.primary_rgb();
        let (muted, highlight) = if prefs.dark_theme {
            (Colour::Fixed(245), Colour::White)
        } else {
            (Colour::Fixed(240), Colour::Black)
        };

        Self {
            accent: Colour::RGB(r, g, b),
            muted,
            highlight,
        }
    }

    /// Section titles ("Summary for ...", "Calendar", ...).
    pub fn heading(&self, text: &str) -> String {
        self.accent.bold().paint(text).to_string()
    }

    pub fn accent(&self, text: &str) -> String {
        self.accent.paint(text).to_string()
    }

    pub fn muted(&self, text: &str) -> String {
        self.muted.paint(text).to_string()
    }

    pub fn strong(&self, text: &str) -> String {
        Style::new().bold().fg(self.highlight).paint(text).to_string()
    }
}
