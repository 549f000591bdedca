//! Chart configuration and visual style.

use plotters::style::RGBColor;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Chart output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Caption drawn above the chart.
    pub title: String,
    /// SVG file the chart is written to.
    pub output: PathBuf,
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Font family for the caption and labels.
    pub font_family: String,
    /// Whether to draw the volume panel under the prices.
    pub volume_panel: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: "2330 Daily Candlestick".to_string(),
            output: PathBuf::from("all_data.svg"),
            width: 1280,
            height: 720,
            font_family: "sans-serif".to_string(),
            volume_panel: true,
        }
    }
}

/// Colours used by the chart.
#[derive(Debug, Clone, Copy)]
pub struct ChartStyle {
    /// Candles that closed above their open.
    pub up: RGBColor,
    /// Candles that closed at or below their open.
    pub down: RGBColor,
    /// Canvas background.
    pub background: RGBColor,
    /// Minor grid lines.
    pub grid: RGBColor,
    /// Major grid lines.
    pub grid_bold: RGBColor,
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            up: RGBColor(0, 153, 0),
            down: RGBColor(204, 0, 0),
            background: RGBColor(255, 255, 255),
            grid: RGBColor(238, 238, 238),
            grid_bold: RGBColor(204, 204, 204),
        }
    }
}
