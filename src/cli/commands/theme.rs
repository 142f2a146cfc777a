use crate::cli::commands::{audit, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Preferences;
use crate::models::preferences::parse_hex_color;
use crate::ui::messages::{info, success};
use crate::ui::theme::Palette;

/// Show or change display preferences.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Theme { dark, light, color } = cmd {
        // reject a bad colour before touching the theme mode
        if let Some(c) = color
            && parse_hex_color(c).is_none()
        {
            return Err(AppError::InvalidColor(c.clone()));
        }

        let mut store = open_store(cfg)?;
        let mut prefs = Preferences::load(&store)?;

        let mut changed = Vec::new();

        if *dark || *light {
            prefs.set_dark_theme(&mut store, *dark)?;
            changed.push(format!("mode={}", mode_name(&prefs)));
        }

        if let Some(c) = color {
            prefs.set_primary_color(&mut store, c)?;
            changed.push(format!("color={}", prefs.primary_color));
        }

        let pal = Palette::from_preferences(&prefs);

        if changed.is_empty() {
            info(format!("Theme mode:    {}", mode_name(&prefs)));
            info(format!("Primary color: {}", pal.accent(&prefs.primary_color)));
        } else {
            success(format!("Theme updated: {}", changed.join(", ")));
            audit(&store, "theme", "preferences", &changed.join(" "));
        }
    }

    Ok(())
}

fn mode_name(prefs: &Preferences) -> &'static str {
    if prefs.dark_theme { "dark" } else { "light" }
}
