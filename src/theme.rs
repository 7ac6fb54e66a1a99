//! Color themes for the JSON viewer.
//!
//! Each theme pairs the window chrome colors with a syntax palette for the
//! parts of a line: keys, array indices, strings, numbers, literals and
//! brackets. Built-in themes: Light, Dark, Dracula, One Dark Pro.
//!
//! # Examples
//!
//! ```
//! use rjview::theme::ThemeManager;
//!
//! let manager = ThemeManager::new();
//! let dracula = manager.get_theme("Dracula").unwrap();
//! println!("Dracula strings: {:?}", dracula.colors.string);
//! ```

use egui::Color32;
use std::collections::HashMap;

/// Default theme name used when nothing is stored.
pub const DEFAULT_THEME: &str = "Dark";

/// Color palette for a theme.
#[derive(Debug, Clone)]
pub struct ThemeColors {
    // Chrome
    pub panel_background: Color32,
    pub extreme_background: Color32,
    pub text: Color32,
    pub text_dim: Color32,
    pub selection: Color32,
    pub hover: Color32,
    pub border: Color32,
    pub error: Color32,

    // Syntax
    pub key: Color32,
    pub array_index: Color32,
    pub string: Color32,
    pub number: Color32,
    pub literal: Color32,
    pub bracket: Color32,
    pub indent_guide: Color32,
}

/// A named theme.
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub description: String,
    pub colors: ThemeColors,
}

/// Registry of the built-in themes.
pub struct ThemeManager {
    themes: HashMap<String, Theme>,
}

impl ThemeManager {
    pub fn new() -> Self {
        let mut themes = HashMap::new();
        for theme in [light_theme(), dark_theme(), dracula_theme(), one_dark_pro_theme()] {
            themes.insert(theme.name.clone(), theme);
        }
        Self { themes }
    }

    pub fn get_theme(&self, name: &str) -> Option<&Theme> {
        self.themes.get(name)
    }

    /// Theme by name, falling back to the default theme.
    pub fn theme_or_default(&self, name: &str) -> &Theme {
        self.themes
            .get(name)
            .or_else(|| self.themes.get(DEFAULT_THEME))
            .unwrap_or_else(|| unreachable!("default theme is always registered"))
    }

    /// Sorted theme names.
    pub fn list_themes(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.themes.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }

    /// Applies a theme's chrome colors to egui visuals.
    pub fn apply_theme(&self, theme: &Theme, visuals: &mut egui::Visuals) {
        let colors = &theme.colors;

        visuals.panel_fill = colors.panel_background;
        visuals.extreme_bg_color = colors.extreme_background;
        visuals.faint_bg_color = colors.hover;
        visuals.override_text_color = Some(colors.text);

        visuals.selection.bg_fill = colors.selection;
        visuals.selection.stroke.color = colors.key;

        visuals.widgets.noninteractive.bg_fill = colors.panel_background;
        visuals.widgets.inactive.bg_fill = colors.hover;
        visuals.widgets.hovered.bg_fill = colors.hover;
        visuals.widgets.active.bg_fill = colors.selection;

        visuals.hyperlink_color = colors.array_index;
        visuals.error_fg_color = colors.error;
        visuals.warn_fg_color = colors.number;
    }
}

impl Default for ThemeManager {
    fn default() -> Self {
        Self::new()
    }
}

fn light_theme() -> Theme {
    Theme {
        name: "Light".to_string(),
        description: "Light theme with egui default chrome".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(248, 248, 248),
            extreme_background: Color32::from_rgb(255, 255, 255),
            text: Color32::from_rgb(0, 0, 0),
            text_dim: Color32::from_rgb(120, 120, 120),
            selection: Color32::from_rgb(180, 200, 255),
            hover: Color32::from_rgb(220, 220, 220),
            border: Color32::from_rgb(160, 160, 160),
            error: Color32::from_rgb(200, 40, 40),

            key: Color32::from_rgb(40, 100, 200),
            array_index: Color32::from_rgb(140, 60, 180),
            string: Color32::from_rgb(40, 140, 40),
            number: Color32::from_rgb(200, 100, 10),
            literal: Color32::from_rgb(200, 40, 160),
            bracket: Color32::from_rgb(90, 90, 90),
            indent_guide: Color32::from_rgb(225, 225, 225),
        },
    }
}

fn dark_theme() -> Theme {
    Theme {
        name: "Dark".to_string(),
        description: "Dark theme with egui default chrome".to_string(),
        colors: ThemeColors {
            panel_background: Color32::from_rgb(39, 39, 39),
            extreme_background: Color32::from_rgb(16, 16, 16),
            text: Color32::from_rgb(255, 255, 255),
            text_dim: Color32::from_rgb(160, 160, 160),
            selection: Color32::from_rgb(50, 80, 120),
            hover: Color32::from_rgb(70, 70, 70),
            border: Color32::from_rgb(100, 100, 100),
            error: Color32::from_rgb(231, 76, 60),

            key: Color32::from_rgb(52, 152, 219),
            array_index: Color32::from_rgb(155, 89, 182),
            string: Color32::from_rgb(46, 204, 113),
            number: Color32::from_rgb(243, 156, 18),
            literal: Color32::from_rgb(255, 121, 198),
            bracket: Color32::from_rgb(149, 165, 166),
            indent_guide: Color32::from_rgb(55, 55, 55),
        },
    }
}

/// Colors from https://draculatheme.com/spec
fn dracula_theme() -> Theme {
    Theme {
        name: "Dracula".to_string(),
        description: "Dracula color palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282a36"),
            extreme_background: hex_to_color32("#21222c"),
            text: hex_to_color32("#f8f8f2"),
            text_dim: hex_to_color32("#6272a4"),
            selection: hex_to_color32("#44475a"),
            hover: hex_to_color32("#44475a"),
            border: hex_to_color32("#6272a4"),
            error: hex_to_color32("#ff5555"),

            key: hex_to_color32("#8be9fd"),
            array_index: hex_to_color32("#bd93f9"),
            string: hex_to_color32("#f1fa8c"),
            number: hex_to_color32("#ffb86c"),
            literal: hex_to_color32("#ff79c6"),
            bracket: hex_to_color32("#f8f8f2"),
            indent_guide: hex_to_color32("#343746"),
        },
    }
}

/// Colors from https://github.com/Binaryify/OneDark-Pro
fn one_dark_pro_theme() -> Theme {
    Theme {
        name: "One Dark Pro".to_string(),
        description: "One Dark Pro color palette".to_string(),
        colors: ThemeColors {
            panel_background: hex_to_color32("#282c34"),
            extreme_background: hex_to_color32("#21252b"),
            text: hex_to_color32("#abb2bf"),
            text_dim: hex_to_color32("#5c6370"),
            selection: hex_to_color32("#4b5263"),
            hover: hex_to_color32("#4b5263"),
            border: hex_to_color32("#5c6370"),
            error: hex_to_color32("#e06c75"),

            key: hex_to_color32("#e06c75"),
            array_index: hex_to_color32("#c678dd"),
            string: hex_to_color32("#98c379"),
            number: hex_to_color32("#d19a66"),
            literal: hex_to_color32("#56b6c2"),
            bracket: hex_to_color32("#abb2bf"),
            indent_guide: hex_to_color32("#3b4048"),
        },
    }
}

/// Converts a hex color string (like "#282a36") to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0)
    }
}
