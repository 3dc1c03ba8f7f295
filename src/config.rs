//! Render configuration for taskdoc.
//!
//! This module defines the [`RenderConfig`] struct that controls page
//! geometry and styling for the document renderer. It supports
//! forward-compatible YAML parsing (unknown fields are ignored), sensible
//! defaults for every field, and validation of config values.

use crate::error::{Result, TaskdocError};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Page geometry and styling for the document renderer.
///
/// All lengths are millimetres, font sizes are points. Unknown fields in
/// the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Page width (default: A4 portrait, 210 mm).
    pub page_width_mm: f32,

    /// Page height (default: A4 portrait, 297 mm).
    pub page_height_mm: f32,

    /// Uniform page margin (default: 20 mm).
    pub margin_mm: f32,

    /// Font size for the centered title line, in points.
    pub title_font_size: f32,

    /// Font size for body and memo text, in points.
    pub body_font_size: f32,

    /// Vertical advance per text line (default: 6 mm).
    pub line_height_mm: f32,

    /// Fill color of the decorative panel behind the body, RGB in 0..=1.
    pub panel_color: [f32; 3],

    /// Floor height for the decorative panel, used when the computed
    /// height is zero or negative (default: 10 mm).
    pub panel_min_height_mm: f32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            page_width_mm: 210.0,
            page_height_mm: 297.0,
            margin_mm: 20.0,
            title_font_size: 16.0,
            body_font_size: 12.0,
            line_height_mm: 6.0,
            panel_color: [1.0, 0.85, 0.4],
            panel_min_height_mm: 10.0,
        }
    }
}

impl RenderConfig {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward
    /// compatibility.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TaskdocError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: RenderConfig = serde_yaml::from_str(yaml)
            .map_err(|e| TaskdocError::ConfigError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    pub fn validate(&self) -> Result<()> {
        if self.page_width_mm <= 0.0 || self.page_height_mm <= 0.0 {
            return Err(TaskdocError::ConfigError(
                "page dimensions must be positive".to_string(),
            ));
        }
        if self.margin_mm < 0.0 || 2.0 * self.margin_mm >= self.page_width_mm.min(self.page_height_mm)
        {
            return Err(TaskdocError::ConfigError(format!(
                "margin of {} mm leaves no usable page area",
                self.margin_mm
            )));
        }
        if self.title_font_size <= 0.0 || self.body_font_size <= 0.0 {
            return Err(TaskdocError::ConfigError(
                "font sizes must be positive".to_string(),
            ));
        }
        if self.line_height_mm <= 0.0 {
            return Err(TaskdocError::ConfigError(
                "line height must be positive".to_string(),
            ));
        }
        if self.panel_color.iter().any(|&c| !(0.0..=1.0).contains(&c)) {
            return Err(TaskdocError::ConfigError(
                "panel color components must be within 0..=1".to_string(),
            ));
        }
        if self.panel_min_height_mm <= 0.0 {
            return Err(TaskdocError::ConfigError(
                "panel floor height must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Usable text width between the margins.
    pub fn usable_width_mm(&self) -> f32 {
        self.page_width_mm - 2.0 * self.margin_mm
    }
}
