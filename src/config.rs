//! Configuration persistence for editor settings

use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::domain::Tool;

/// Serializable color representation for config storage
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShapeColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Default for ShapeColor {
    fn default() -> Self {
        // Default red color matching the first palette entry
        Self {
            r: 0.9,
            g: 0.24,
            b: 0.24,
        }
    }
}

impl ShapeColor {
    /// Fixed palette offered by host toolbars alongside a custom picker
    pub const PALETTE: [ShapeColor; 8] = [
        ShapeColor::from_rgb8(0xE5, 0x3E, 0x3E),
        ShapeColor::from_rgb8(0xDD, 0x6B, 0x20),
        ShapeColor::from_rgb8(0xD6, 0x9E, 0x2E),
        ShapeColor::from_rgb8(0x38, 0xA1, 0x69),
        ShapeColor::from_rgb8(0x31, 0x82, 0xCE),
        ShapeColor::from_rgb8(0x80, 0x5A, 0xD5),
        ShapeColor::from_rgb8(0xFF, 0xFF, 0xFF),
        ShapeColor::from_rgb8(0x1A, 0x20, 0x2C),
    ];

    /// Create a color from 0-255 channel values
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Convert to image crate RGBA format (0-255)
    pub fn to_rgba_u8(self) -> [u8; 4] {
        [
            (self.r * 255.0).round() as u8,
            (self.g * 255.0).round() as u8,
            (self.b * 255.0).round() as u8,
            255,
        ]
    }
}

/// Save location for finished screenshots (Pictures or Documents)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SaveLocation {
    #[default]
    Pictures,
    Documents,
}

/// Editor configuration persisted between sessions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Tool preselected when the annotation phase opens
    pub tool: Tool,
    /// Color for new annotations
    pub color: ShapeColor,
    /// Stroke width for shapes and freehand strokes in canvas pixels
    pub stroke_width: f32,
    /// Text annotation size in pixels
    pub text_size: f32,
    /// Where file fallbacks of the finished screenshot are written
    pub save_location: SaveLocation,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            // Rectangle is the most common "highlight this" tool
            tool: Tool::Rectangle,
            // Default red color
            color: ShapeColor::default(),
            // Stroke width matching the toolbar default
            stroke_width: 4.0,
            // Readable at typical capture resolutions
            text_size: 18.0,
            // Default to Pictures folder
            save_location: SaveLocation::Pictures,
        }
    }
}

impl EditorConfig {
    /// Directory name under the user config dir
    pub const DIR: &'static str = "redpen";

    fn file_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir()?;
        path.push(Self::DIR);
        path.push("config.json");
        Some(path)
    }

    /// Load configuration from disk, or return defaults if unavailable
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            log::warn!("No config directory available, using defaults");
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(config) => config,
                Err(err) => {
                    log::warn!("Error loading config, using defaults: {:?}", err);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save configuration to disk
    pub fn save(&self) {
        let Some(path) = Self::file_path() else {
            log::error!("No config directory available for saving");
            return;
        };
        if let Some(dir) = path.parent() {
            if let Err(err) = fs::create_dir_all(dir) {
                log::error!("Could not create config directory: {:?}", err);
                return;
            }
        }
        match serde_json::to_string_pretty(self) {
            Ok(contents) => {
                if let Err(err) = fs::write(&path, contents) {
                    log::error!("Failed to save config: {:?}", err);
                }
            }
            Err(err) => {
                log::error!("Failed to serialize config: {:?}", err);
            }
        }
    }
}
