//! Case/control scatter plot of the first two principal components.

use std::{ffi::OsString, ops::Range, path::{Path, PathBuf}};

use anyhow::{bail, Result};
use genotype::Affectation;
use genotype_matrix::Projection;
use located_error::{LocatedError, LocatedOption};
use log::{info, warn};
use plotters::{coord::Shift, prelude::*};

pub const DEFAULT_TITLE: &str = "PC1 vs. PC2 post-pruning";
pub const PLOT_EXTENSION: &str = "svg";

const CONTROL_COLOR: RGBColor = RGBColor(31, 119, 180);
const CASE_COLOR   : RGBColor = RGBColor(230, 190, 0);

#[derive(Debug, Clone)]
pub struct PlotConfig {
    pub width     : u32,
    pub height    : u32,
    pub title     : String,
    pub point_size: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {width: 800, height: 600, title: DEFAULT_TITLE.to_string(), point_size: 4}
    }
}

/// Default location of the plot: the input path, suffixed with `.svg`
///
/// # Example
/// ```
/// use std::path::{Path, PathBuf};
/// assert_eq!(pca_plot::default_output(Path::new("data/cohort.ped")), PathBuf::from("data/cohort.ped.svg"));
/// ```
#[must_use]
pub fn default_output(ped: &Path) -> PathBuf {
    let mut output = OsString::from(ped.as_os_str());
    output.push(".");
    output.push(PLOT_EXTENSION);
    PathBuf::from(output)
}

/// Draw controls and cases of `projection` on the (PC1, PC2) plane, and write the result as an SVG.
///
/// Samples which are neither cases nor controls are left out of the plot.
///
/// # Errors
/// - if `projection` does not carry two components
/// - if `output` carries no extension, or one other than `.svg`
/// - if the plot cannot be drawn or written to `output`
pub fn scatter_plot(projection: &Projection, output: &Path, config: &PlotConfig) -> Result<()> {
    if projection.coordinates.ncols() < 2 {
        bail!("Cannot plot {} principal component(s) on a 2D plane", projection.coordinates.ncols())
    }

    let extension = output.extension()
        .and_then(|ext| ext.to_str())
        .with_loc(|| format!("Missing plot file extension for {}", output.display()))?;
    if ! extension.eq_ignore_ascii_case(PLOT_EXTENSION) {
        bail!("Unsupported plot format for {}: expected a '.{PLOT_EXTENSION}' extension", output.display())
    }

    let unknown = projection.unknown_count();
    if unknown > 0 {
        warn!("{unknown} sample(s) are neither cases nor controls, and will not be plotted.");
    }

    let controls = projection.points(Affectation::Control);
    let cases    = projection.points(Affectation::Case);

    let root = SVGBackend::new(output, (config.width, config.height)).into_drawing_area();
    draw_scatter(&root, &controls, &cases, config)
        .with_loc(|| format!("Failed to draw scatter plot of {}", projection.source().display()))?;
    root.present()
        .with_loc(|| format!("Failed to write {}", output.display()))?;

    info!("Scatter plot of {} controls and {} cases written to {}", controls.len(), cases.len(), output.display());
    Ok(())
}

/// Plotting range of a set of values, padded by 10% on both sides.
fn axis_range(values: impl Iterator<Item = f64>) -> Range<f64> {
    let (min, max) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), v| (min.min(v), max.max(v)));
    if !min.is_finite() || !max.is_finite() {
        return -1.0..1.0
    }
    let padding = match max - min {
        span if span > 0.0 => span * 0.1,
        _                  => 1.0,
    };
    (min - padding)..(max + padding)
}

fn draw_scatter<DB: DrawingBackend>(
    root    : &DrawingArea<DB, Shift>,
    controls: &[(f64, f64)],
    cases   : &[(f64, f64)],
    config  : &PlotConfig,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let points = || controls.iter().chain(cases.iter());
    let x_range = axis_range(points().map(|(pc1, _)| *pc1));
    let y_range = axis_range(points().map(|(_, pc2)| *pc2));

    let mut chart = ChartBuilder::on(root)
        .caption(&config.title, ("sans-serif", 24))
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(x_range, y_range)?;

    chart.configure_mesh()
        .x_desc("PC1")
        .y_desc("PC2")
        .draw()?;

    let point_size = config.point_size;
    for (group, points, color) in [(Affectation::Control, controls, CONTROL_COLOR), (Affectation::Case, cases, CASE_COLOR)] {
        chart.draw_series(points.iter().map(|point| Circle::new(*point, point_size, color.filled())))?
            .label(group.to_string())
            .legend(move |(x, y)| Circle::new((x, y), point_size, color.filled()));
    }

    chart.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}
