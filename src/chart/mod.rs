//! Stacked bar charts over a date axis and their PNG export.

pub mod palette;
pub mod png;

use crate::error::Result;
use chrono::NaiveDate;
use std::path::Path;

pub use palette::{palette_color, Color, PALETTE};
pub use png::PngRenderer;

/// One series' bars, already stacked.
#[derive(Debug, Clone, PartialEq)]
pub struct BarSeries {
    pub dates: Vec<NaiveDate>,
    pub heights: Vec<u32>,
    pub bottoms: Vec<u32>,
    pub color: Color,
    pub legend: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub title: String,
    pub y_label: String,
    pub axis: Vec<NaiveDate>,
    pub labels: Vec<String>,
    /// Bar width in days.
    pub bar_width: f64,
    pub bars: Vec<BarSeries>,
}

impl ChartSpec {
    /// Height of the tallest stack.
    pub fn stack_top(&self) -> u32 {
        self.bars
            .iter()
            .flat_map(|b| b.bottoms.iter().zip(&b.heights).map(|(bottom, h)| bottom + h))
            .max()
            .unwrap_or(0)
    }
}

pub trait Renderer {
    fn render(&self, chart: &ChartSpec, path: &Path) -> Result<()>;
}
