//! Candlestick rendering.

use plotters::coord::Shift;
use plotters::prelude::*;
use quotewire_types::SeriesTable;
use std::path::Path;
use tracing::info;

use crate::error::draw_error;
use crate::{ChartConfig, ChartError, ChartStyle};

const TITLE_SIZE: f64 = 24.0;
const LABEL_SIZE: f64 = 12.0;
const MAX_X_LABELS: usize = 8;
const PRICE_PANEL_SHARE: u32 = 70;

/// Draws the candlestick chart for `table` onto `root`.
///
/// Bars are placed by position rather than by date, so non-trading days
/// leave no gaps; the x-axis labels show the bar dates.
///
/// # Errors
///
/// Returns [`ChartError::EmptySeries`] if the table has no bars, or
/// [`ChartError::Draw`] if the backend fails.
pub fn render<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    table: &SeriesTable,
    config: &ChartConfig,
    style: &ChartStyle,
) -> Result<(), ChartError> {
    let (Some((low, high)), Some(max_volume)) = (table.price_bounds(), table.max_volume()) else {
        return Err(ChartError::EmptySeries);
    };

    root.fill(&style.background).map_err(draw_error)?;
    let titled = root
        .titled(&config.title, font(config, TITLE_SIZE))
        .map_err(draw_error)?;

    let (price_area, volume_area) = if config.volume_panel {
        let split = titled.dim_in_pixel().1 * PRICE_PANEL_SHARE / 100;
        let (upper, lower) = titled.split_vertically(split);
        (upper, Some(lower))
    } else {
        (titled, None)
    };

    let bars = table.bars();
    let x_range = -0.5..bars.len() as f64 - 0.5;
    let x_labels = bars.len().min(MAX_X_LABELS);
    let date_label = |x: &f64| {
        let idx = x.round();
        if idx < 0.0 {
            return String::new();
        }
        bars.get(idx as usize)
            .map(|bar| bar.date.format("%Y-%m-%d").to_string())
            .unwrap_or_default()
    };

    let pad = ((high - low) * 0.05).max(0.01);
    let mut price_chart = ChartBuilder::on(&price_area)
        .margin(8)
        .x_label_area_size(30)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range.clone(), (low - pad)..(high + pad))
        .map_err(draw_error)?;

    price_chart
        .configure_mesh()
        .light_line_style(style.grid)
        .bold_line_style(style.grid_bold)
        .x_labels(x_labels)
        .x_label_formatter(&date_label)
        .label_style(font(config, LABEL_SIZE))
        .draw()
        .map_err(draw_error)?;

    let plot_width = f64::from(price_area.dim_in_pixel().0);
    let candle_width = (plot_width / bars.len() as f64 * 0.6).clamp(1.0, 24.0) as u32;

    price_chart
        .draw_series(bars.iter().enumerate().map(|(i, bar)| {
            CandleStick::new(
                i as f64,
                bar.open,
                bar.high,
                bar.low,
                bar.close,
                style.up.filled(),
                style.down.filled(),
                candle_width,
            )
        }))
        .map_err(draw_error)?;

    if let Some(volume_area) = volume_area {
        let mut volume_chart = ChartBuilder::on(&volume_area)
            .margin(8)
            .x_label_area_size(30)
            .y_label_area_size(60)
            .build_cartesian_2d(x_range, 0.0..max_volume.max(1.0) * 1.1)
            .map_err(draw_error)?;

        volume_chart
            .configure_mesh()
            .light_line_style(style.grid)
            .bold_line_style(style.grid_bold)
            .x_labels(x_labels)
            .x_label_formatter(&date_label)
            .y_desc("Volume")
            .label_style(font(config, LABEL_SIZE))
            .draw()
            .map_err(draw_error)?;

        volume_chart
            .draw_series(bars.iter().enumerate().map(|(i, bar)| {
                let x = i as f64;
                let color = if bar.is_bullish() { style.up } else { style.down };
                Rectangle::new([(x - 0.3, 0.0), (x + 0.3, bar.volume)], color.mix(0.6).filled())
            }))
            .map_err(draw_error)?;
    }

    Ok(())
}

/// Renders the chart as an SVG document.
///
/// # Errors
///
/// Returns an error if the table is empty or drawing fails.
pub fn render_to_string(
    table: &SeriesTable,
    config: &ChartConfig,
    style: &ChartStyle,
) -> Result<String, ChartError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, (config.width, config.height))
            .into_drawing_area();
        render(&root, table, config, style)?;
        root.present().map_err(draw_error)?;
    }
    Ok(svg)
}

/// Renders the chart and writes it to `path` as SVG.
///
/// # Errors
///
/// Returns an error if the table is empty, drawing fails, or the file
/// cannot be written.
pub fn render_svg(
    path: &Path,
    table: &SeriesTable,
    config: &ChartConfig,
    style: &ChartStyle,
) -> Result<(), ChartError> {
    let svg = render_to_string(table, config, style)?;
    std::fs::write(path, svg)?;
    info!(path = %path.display(), bars = table.len(), "wrote chart");
    Ok(())
}

fn font(config: &ChartConfig, size: f64) -> FontDesc<'_> {
    (config.font_family.as_str(), size).into_font()
}
