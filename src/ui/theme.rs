use std::fs;

use ratatui::style::Color;
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use tracing::warn;

#[derive(Embed)]
#[folder = "assets/themes/"]
struct ThemeAssets;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ThemeColors {
    pub bg: String,
    pub fg: String,
    pub accent: String,
    pub border: String,
    pub border_focused: String,
    pub disabled: String,
    pub focused_bg: String,
    pub focused_fg: String,
    pub expanded: String,
    pub header_bg: String,
    pub header_fg: String,
    pub status: String,
}

impl Theme {
    pub fn load(name: &str) -> Option<Self> {
        // User themes shadow bundled ones
        if let Some(config_dir) = dirs::config_dir() {
            let user_theme_path = config_dir
                .join("menutree")
                .join("themes")
                .join(format!("{name}.toml"));
            if let Ok(content) = fs::read_to_string(&user_theme_path) {
                match toml::from_str::<Theme>(&content) {
                    Ok(theme) => return Some(theme),
                    Err(err) => {
                        warn!(path = %user_theme_path.display(), error = %err, "ignoring unparsable user theme");
                    }
                }
            }
        }

        let filename = format!("{name}.toml");
        let file = ThemeAssets::get(&filename)?;
        let content = std::str::from_utf8(file.data.as_ref()).ok()?;
        toml::from_str::<Theme>(content).ok()
    }

    pub fn available_themes() -> Vec<String> {
        let mut names: Vec<String> = ThemeAssets::iter()
            .filter_map(|f| f.strip_suffix(".toml").map(|n| n.to_string()))
            .collect();
        names.sort();
        names
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::load("terminal-default").unwrap_or_else(|| Self {
            name: "default".to_string(),
            colors: ThemeColors::default(),
        })
    }
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self {
            bg: "#000000".to_string(),
            fg: "#d0d0d0".to_string(),
            accent: "#5fafff".to_string(),
            border: "#4e4e4e".to_string(),
            border_focused: "#5fafff".to_string(),
            disabled: "#626262".to_string(),
            focused_bg: "#005f87".to_string(),
            focused_fg: "#ffffff".to_string(),
            expanded: "#ffd75f".to_string(),
            header_bg: "#262626".to_string(),
            header_fg: "#d0d0d0".to_string(),
            status: "#87d787".to_string(),
        }
    }
}

impl ThemeColors {
    pub fn parse_color(hex: &str) -> Color {
        let hex = hex.trim_start_matches('#');
        if hex.len() == 6 {
            if let (Ok(r), Ok(g), Ok(b)) = (
                u8::from_str_radix(&hex[0..2], 16),
                u8::from_str_radix(&hex[2..4], 16),
                u8::from_str_radix(&hex[4..6], 16),
            ) {
                return Color::Rgb(r, g, b);
            }
        }
        Color::White
    }

    pub fn bg(&self) -> Color { Self::parse_color(&self.bg) }
    pub fn fg(&self) -> Color { Self::parse_color(&self.fg) }
    pub fn accent(&self) -> Color { Self::parse_color(&self.accent) }
    pub fn border(&self) -> Color { Self::parse_color(&self.border) }
    pub fn border_focused(&self) -> Color { Self::parse_color(&self.border_focused) }
    pub fn disabled(&self) -> Color { Self::parse_color(&self.disabled) }
    pub fn focused_bg(&self) -> Color { Self::parse_color(&self.focused_bg) }
    pub fn focused_fg(&self) -> Color { Self::parse_color(&self.focused_fg) }
    pub fn expanded(&self) -> Color { Self::parse_color(&self.expanded) }
    pub fn header_bg(&self) -> Color { Self::parse_color(&self.header_bg) }
    pub fn header_fg(&self) -> Color { Self::parse_color(&self.header_fg) }
    pub fn status(&self) -> Color { Self::parse_color(&self.status) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_themes_load() {
        let names = Theme::available_themes();
        assert!(names.contains(&"terminal-default".to_string()));
        for name in names {
            assert!(Theme::load(&name).is_some(), "theme {name} failed to parse");
        }
    }

    #[test]
    fn unknown_theme_is_none() {
        assert!(Theme::load("no-such-theme").is_none());
    }

    #[test]
    fn parse_color_hex_and_fallback() {
        assert_eq!(ThemeColors::parse_color("#ff0080"), Color::Rgb(255, 0, 128));
        assert_eq!(ThemeColors::parse_color("nope"), Color::White);
    }
}
