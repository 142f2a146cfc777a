//! Presentation preferences (theme mode and accent colour).
//! They live in the same key-value store as the tracker data and are
//! written back immediately on every change.

use crate::db::store::{DARK_THEME_KEY, PRIMARY_COLOR_KEY, Storage};
use crate::errors::{AppError, AppResult};

pub const DEFAULT_PRIMARY_COLOR: &str = "#1890ff";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    pub dark_theme: bool,
    pub primary_color: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_theme: false,
            primary_color: DEFAULT_PRIMARY_COLOR.to_string(),
        }
    }
}

impl Preferences {
    /// Read preferences from the store. Malformed values fall back to the
    /// defaults instead of failing.
    pub fn load<S: Storage>(store: &S) -> AppResult<Self> {
        let dark_theme = store
            .get_item(DARK_THEME_KEY)?
            .and_then(|raw| serde_json::from_str::<bool>(&raw).ok())
            .unwrap_or(false);

        let primary_color = store
            .get_item(PRIMARY_COLOR_KEY)?
            .and_then(|raw| parse_hex_color(&raw))
            .unwrap_or_else(|| DEFAULT_PRIMARY_COLOR.to_string());

        Ok(Self {
            dark_theme,
            primary_color,
        })
    }

    pub fn set_dark_theme<S: Storage>(&mut self, store: &mut S, dark: bool) -> AppResult<()> {
        store.set_item(DARK_THEME_KEY, &dark.to_string())?;
        self.dark_theme = dark;
        Ok(())
    }

    /// Validate and persist a new accent colour. Nothing is written when the
    /// colour is rejected.
    pub fn set_primary_color<S: Storage>(&mut self, store: &mut S, color: &str) -> AppResult<()> {
        let normalized =
            parse_hex_color(color).ok_or_else(|| AppError::InvalidColor(color.to_string()))?;
        store.set_item(PRIMARY_COLOR_KEY, &normalized)?;
        self.primary_color = normalized;
        Ok(())
    }

    pub fn primary_rgb(&self) -> (u8, u8, u8) {
        hex_to_rgb(&self.primary_color).unwrap_or((0x18, 0x90, 0xff))
    }
}

/// Accepts `#rrggbb` or `rrggbb` (any case) and returns `#rrggbb` in lowercase.
pub fn parse_hex_color(s: &str) -> Option<String> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    Some(format!("#{}", hex.to_ascii_lowercase()))
}

fn hex_to_rgb(color: &str) -> Option<(u8, u8, u8)> {
    let hex = color.strip_prefix('#')?;
    let channel = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
