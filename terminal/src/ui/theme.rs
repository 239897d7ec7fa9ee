//! # GUI Theme
//!
//! Dark exchange-terminal theme for egui: near-black panels, teal accent,
//! green/red price colors. The palette is serializable so a user override
//! can be loaded from a JSON file.

use egui::{Color32, Stroke, Visuals};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Serializable theme configuration for persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Near-black background
    pub background: [u8; 3],
    /// Primary text
    pub text: [u8; 3],
    /// Teal accent (headings, selected tabs)
    pub accent: [u8; 3],
    /// Borders and separators
    pub border: [u8; 3],
    /// Secondary text
    pub gray_secondary: [u8; 3],
    /// Inactive widget fill
    pub gray_inactive: [u8; 3],
    /// Gains / success
    pub green_success: [u8; 3],
    /// Losses / errors
    pub red_error: [u8; 3],
    /// Warnings
    pub yellow_warning: [u8; 3],
    /// Informational
    pub blue_info: [u8; 3],
}

impl Default for ThemeConfig {
    fn default() -> Self {
        ThemeConfig {
            background: [10, 12, 16],
            text: [235, 238, 240],
            accent: [0, 180, 170],
            border: [45, 50, 58],
            gray_secondary: [140, 148, 158],
            gray_inactive: [24, 27, 33],
            green_success: [0, 200, 120],
            red_error: [235, 70, 70],
            yellow_warning: [255, 170, 0],
            blue_info: [100, 150, 255],
        }
    }
}

impl ThemeConfig {
    /// Load theme configuration from a JSON file, falling back to the
    /// default palette when the file does not exist.
    pub fn load_from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        let config: ThemeConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save theme configuration to a JSON file
    pub fn save_to_file(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn color(rgb: [u8; 3]) -> Color32 {
        Color32::from_rgb(rgb[0], rgb[1], rgb[2])
    }
}

/// Resolved theme colors used by the render code.
#[derive(Clone)]
pub struct Theme {
    /// Normal text color
    pub normal: Color32,
    /// Selected/highlighted items (accent)
    pub selected: Color32,
    /// Border color
    pub border: Color32,
    /// Dimmed/secondary text
    pub dim: Color32,
    /// Success/positive
    pub success: Color32,
    /// Error/negative
    pub error: Color32,
    /// Warning/attention
    pub warning: Color32,
    /// Information
    pub info: Color32,
    /// Price up
    pub price_up: Color32,
    /// Price down
    pub price_down: Color32,
    /// Background color
    pub background: Color32,
    /// Inactive widget fill
    pub inactive: Color32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_config(&ThemeConfig::default())
    }
}

impl Theme {
    pub fn from_config(config: &ThemeConfig) -> Self {
        Theme {
            normal: ThemeConfig::color(config.text),
            selected: ThemeConfig::color(config.accent),
            border: ThemeConfig::color(config.border),
            dim: ThemeConfig::color(config.gray_secondary),
            success: ThemeConfig::color(config.green_success),
            error: ThemeConfig::color(config.red_error),
            warning: ThemeConfig::color(config.yellow_warning),
            info: ThemeConfig::color(config.blue_info),
            price_up: ThemeConfig::color(config.green_success),
            price_down: ThemeConfig::color(config.red_error),
            background: ThemeConfig::color(config.background),
            inactive: ThemeConfig::color(config.gray_inactive),
        }
    }

    /// Get color for a signed change value
    pub fn price_change_color(&self, change: f64) -> Color32 {
        if change > 0.0 {
            self.price_up
        } else if change < 0.0 {
            self.price_down
        } else {
            self.dim
        }
    }

    /// Format a percentage change with its color
    pub fn format_price_change(&self, change: f64) -> (String, Color32) {
        let text = if change >= 0.0 {
            format!("+{:.2}%", change)
        } else {
            format!("{:.2}%", change)
        };
        (text, self.price_change_color(change))
    }

    /// Build egui Visuals from a theme config
    pub fn visuals_from_config(config: &ThemeConfig) -> Visuals {
        let theme = Theme::from_config(config);
        let mut visuals = Visuals::dark();

        visuals.override_text_color = Some(theme.normal);

        visuals.faint_bg_color = theme.inactive;
        visuals.extreme_bg_color = theme.background;
        visuals.panel_fill = theme.background;
        visuals.window_fill = theme.background;
        visuals.window_stroke = Stroke::new(1.0, theme.border);

        visuals.widgets.noninteractive.bg_fill = theme.inactive;
        visuals.widgets.noninteractive.bg_stroke = Stroke::new(1.0, theme.border);
        visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, theme.normal);

        visuals.widgets.inactive.bg_fill = theme.inactive;
        visuals.widgets.inactive.bg_stroke = Stroke::new(1.0, theme.border);

        visuals.widgets.hovered.bg_stroke = Stroke::new(2.0, theme.selected);
        visuals.widgets.active.bg_stroke = Stroke::new(2.0, theme.selected);
        visuals.widgets.open.bg_stroke = Stroke::new(2.0, theme.selected);

        visuals.selection.bg_fill =
            Color32::from_rgba_unmultiplied(theme.selected.r(), theme.selected.g(), theme.selected.b(), 76);
        visuals.selection.stroke = Stroke::new(2.0, theme.selected);

        visuals.hyperlink_color = theme.info;
        visuals.slider_trailing_fill = true;

        visuals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn price_change_colors() {
        let theme = Theme::default();
        assert_eq!(theme.price_change_color(1.0), theme.price_up);
        assert_eq!(theme.price_change_color(-1.0), theme.price_down);
        assert_eq!(theme.price_change_color(0.0), theme.dim);

        let (text, _) = theme.format_price_change(2.5);
        assert_eq!(text, "+2.50%");
        let (text, _) = theme.format_price_change(-0.75);
        assert_eq!(text, "-0.75%");
    }

    #[test]
    fn config_round_trips_through_json() {
        let config = ThemeConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: ThemeConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.accent, config.accent);
    }
}
