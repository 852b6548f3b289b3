use super::{ChartSpec, Renderer};
use crate::error::{PlotError, Result};
use chrono::NaiveDate;
use plotters::coord::Shift;
use plotters::prelude::{
    BindKeyPoints, BitMapBackend, ChartBuilder, DrawingArea, DrawingAreaErrorKind,
    DrawingBackend, FontTransform, IntoDrawingArea, IntoFont, RGBColor, Rectangle,
    SeriesLabelPosition, BLACK, WHITE,
};
use plotters::style::Color as _;
use std::path::Path;

const FONT: &str = "sans-serif";
const BAR_ALPHA: f64 = 0.8;
const MAX_Y_TICKS: u32 = 8;
const Y_LABEL_AREA: u32 = 70;
const X_LABEL_AREA: u32 = 110;
const MARGIN: u32 = 20;
const LABEL_PITCH: f64 = 16.0;
const GRID: RGBColor = RGBColor(225, 225, 225);

/// Draws a [`ChartSpec`] with plotters and saves it as PNG.
#[derive(Debug, Clone, Copy)]
pub struct PngRenderer {
    pub width: u32,
    pub height: u32,
}

impl PngRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Draw into a row-major RGB buffer of `width * height` pixels.
    pub fn draw_rgb(&self, chart: &ChartSpec) -> Result<Vec<u8>> {
        let mut buffer = vec![0u8; self.width as usize * self.height as usize * 3];
        {
            let root = BitMapBackend::with_buffer(&mut buffer, (self.width, self.height))
                .into_drawing_area();
            draw_chart(&root, chart).map_err(render_error)?;
            root.present().map_err(render_error)?;
        }
        Ok(buffer)
    }
}

impl Renderer for PngRenderer {
    fn render(&self, chart: &ChartSpec, path: &Path) -> Result<()> {
        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        draw_chart(&root, chart).map_err(render_error)?;
        root.present().map_err(render_error)?;
        Ok(())
    }
}

fn render_error<E>(err: DrawingAreaErrorKind<E>) -> PlotError
where
    E: std::error::Error + Send + Sync,
{
    PlotError::Render(err.to_string())
}

/// Places the bucket dates on a continuous axis measured in days.
struct DayAxis<'a> {
    chart: &'a ChartSpec,
    first: NaiveDate,
    span: f64,
    pad: f64,
}

impl<'a> DayAxis<'a> {
    fn new(chart: &'a ChartSpec) -> Self {
        let first = chart.axis.first().copied().unwrap_or(NaiveDate::MIN);
        let last = chart.axis.last().copied().unwrap_or(first);
        let span = (last - first).num_days() as f64;
        let pad = chart.bar_width.max(span * 0.03);
        Self { chart, first, span, pad }
    }

    fn offset(&self, date: NaiveDate) -> f64 {
        (date - self.first).num_days() as f64
    }

    fn label_at(&self, offset: f64) -> String {
        self.chart
            .axis
            .iter()
            .position(|date| self.offset(*date) == offset.round())
            .and_then(|i| self.chart.labels.get(i).cloned())
            .unwrap_or_default()
    }

    /// Every bucket start, thinned so vertical labels at `plot_width` pixels don't overlap.
    fn ticks(&self, plot_width: f64) -> Vec<f64> {
        let px_per_day = plot_width / (self.span + 2.0 * self.pad);
        let min_gap = self
            .chart
            .axis
            .windows(2)
            .map(|pair| (pair[1] - pair[0]).num_days() as f64 * px_per_day)
            .fold(f64::INFINITY, f64::min);
        let stride = if min_gap.is_finite() && min_gap > 0.0 {
            (LABEL_PITCH / min_gap).ceil().max(1.0) as usize
        } else {
            1
        };

        self.chart
            .axis
            .iter()
            .step_by(stride)
            .map(|date| self.offset(*date))
            .collect()
    }
}

/// Upper bound and integer tick step of the y axis for a stack `top`.
pub fn y_scale(top: u32) -> (u32, u32) {
    let top = u64::from(top.max(1));
    let mut magnitude = 1u64;
    loop {
        for factor in [1, 2, 5] {
            let step = factor * magnitude;
            let ticks = top.div_ceil(step);
            if ticks <= u64::from(MAX_Y_TICKS) {
                let max = u32::try_from(ticks * step).unwrap_or(u32::MAX);
                return (max, u32::try_from(step).unwrap_or(u32::MAX));
            }
        }
        magnitude *= 10;
    }
}

fn draw_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    chart: &ChartSpec,
) -> std::result::Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let days = DayAxis::new(chart);
    let plot_width = f64::from(root.dim_in_pixel().0.saturating_sub(Y_LABEL_AREA + 2 * MARGIN));
    let (y_max, y_step) = y_scale(chart.stack_top());
    let y_ticks: Vec<u32> = (0..=y_max).step_by(y_step as usize).collect();

    let mut ctx = ChartBuilder::on(root)
        .caption(&chart.title, (FONT, 22))
        .margin(MARGIN)
        .x_label_area_size(X_LABEL_AREA)
        .y_label_area_size(Y_LABEL_AREA)
        .build_cartesian_2d(
            (-days.pad..days.span + days.pad).with_key_points(days.ticks(plot_width)),
            (0u32..y_max).with_key_points(y_ticks),
        )?;

    let x_label = |offset: &f64| days.label_at(*offset);
    let y_label = |value: &u32| value.to_string();
    ctx.configure_mesh()
        .disable_x_mesh()
        .bold_line_style(GRID)
        .x_label_formatter(&x_label)
        .y_label_formatter(&y_label)
        .label_style((FONT, 13))
        .x_label_style((FONT, 13).into_font().transform(FontTransform::Rotate90))
        .y_desc(chart.y_label.as_str())
        .axis_desc_style((FONT, 15))
        .draw()?;

    let half = chart.bar_width / 2.0;
    for series in &chart.bars {
        let [r, g, b] = series.color.rgb;
        let fill = RGBColor(r, g, b).mix(BAR_ALPHA).filled();
        let bars = series
            .dates
            .iter()
            .zip(&series.heights)
            .zip(&series.bottoms)
            .filter(|((_, height), _)| **height > 0)
            .map(|((date, height), bottom)| {
                let x = days.offset(*date);
                Rectangle::new([(x - half, *bottom), (x + half, bottom + height)], fill)
            });

        ctx.draw_series(bars)?
            .label(series.legend.as_str())
            .legend(move |(x, y)| Rectangle::new([(x, y - 6), (x + 20, y + 6)], fill));
    }

    if !chart.bars.is_empty() {
        ctx.configure_series_labels()
            .position(SeriesLabelPosition::UpperLeft)
            .background_style(WHITE.mix(0.9))
            .border_style(BLACK)
            .label_font((FONT, 13))
            .draw()?;
    }

    Ok(())
}
