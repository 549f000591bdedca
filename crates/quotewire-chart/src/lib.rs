//! Candlestick chart rendering for quotewire daily series.
//!
//! Charts are drawn with `plotters` onto any drawing backend; the helpers
//! here render SVG, either to a string or to a file.

#![doc(issue_tracker_base_url = "https://github.com/quotewire/quotewire/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod error;
mod render;

pub use config::{ChartConfig, ChartStyle};
pub use error::ChartError;
pub use render::{render, render_svg, render_to_string};
