//! Convergence plots rendered with egui.
//!
//! A [`PlotObserver`] collects named [`Series`] while a solver runs. Once the
//! result is known, markers (the root) and reference lines (tolerances,
//! bracket ends) can be added before the observer is turned into a
//! [`Panel`]. [`show_all`] renders any number of panels stacked in one
//! blocking window.

use eframe::egui;
use egui_plot::{HLine, Legend, Line, LineStyle, MarkerShape, Plot, PlotPoints, Points, VLine};
use numlab_core::Observer;
use numlab_solvers::{equation::Iteration, linear::Sweep};

const MARKER_RADIUS: f32 = 4.0;
const HEADING_HEIGHT: f32 = 28.0;
const MIN_PLOT_HEIGHT: f32 = 80.0;

/// How a series is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    /// Consecutive points joined by a line, for curves sampled in x order.
    Line,
    /// Unconnected circular markers, for iterates and single results.
    Points,
}

/// A named, styled sequence of `[x, y]` points.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    name: String,
    style: Style,
    points: Vec<[f64; 2]>,
}

impl Series {
    /// An empty series drawn as a line.
    pub fn line(name: impl Into<String>) -> Self {
        Self::new(name, Style::Line)
    }

    /// An empty series drawn as markers.
    pub fn points(name: impl Into<String>) -> Self {
        Self::new(name, Style::Points)
    }

    fn new(name: impl Into<String>, style: Style) -> Self {
        Self {
            name: name.into(),
            style,
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn style(&self) -> Style {
        self.style
    }

    #[must_use]
    pub fn data(&self) -> &[[f64; 2]] {
        &self.points
    }
}

/// A labelled reference line spanning the whole plot.
#[derive(Debug, Clone, PartialEq)]
pub enum Guide {
    /// `y = value`, such as a tolerance.
    Horizontal { name: String, y: f64 },
    /// `x = value`, such as a bracket end.
    Vertical { name: String, x: f64 },
}

/// Title, axis labels, and scale for one [`Panel`].
///
/// # Example
///
/// ```ignore
/// ShowConfig::new().title("Convergence").x_label("Iteration").legend().log_y()
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShowConfig {
    title: Option<String>,
    x_label: Option<String>,
    y_label: Option<String>,
    legend: bool,
    log_y: bool,
}

impl ShowConfig {
    /// No title, no labels, no legend, linear scale.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = Some(label.into());
        self
    }

    #[must_use]
    pub fn y_label(mut self, label: impl Into<String>) -> Self {
        self.y_label = Some(label.into());
        self
    }

    /// Shows a legend naming every series and guide.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Plots `log₁₀ y`. Non-positive values cannot be shown and are skipped.
    #[must_use]
    pub fn log_y(mut self) -> Self {
        self.log_y = true;
        self
    }

    fn y_axis_label(&self) -> Option<String> {
        match (&self.y_label, self.log_y) {
            (Some(label), true) => Some(format!("log₁₀ {label}")),
            (Some(label), false) => Some(label.clone()),
            (None, true) => Some("log₁₀".to_owned()),
            (None, false) => None,
        }
    }
}

/// Extracts plottable data from a solver event.
///
/// Return `None` from [`x`][Plottable::x] to skip the event, or `None` in a
/// trace slot to skip only that series.
///
/// Root finder [`Iteration`]s plot `|f(x)|` and the convergence metric
/// against the iteration number. Gauss-Seidel [`Sweep`]s plot the residual
/// and the change against the sweep index.
pub trait Plottable<const N: usize> {
    fn x(&self) -> Option<f64>;

    fn traces(&self) -> [Option<f64>; N];
}

impl Plottable<2> for Iteration {
    #[allow(clippy::cast_precision_loss)]
    fn x(&self) -> Option<f64> {
        Some(self.iter as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.fx.abs()), Some(self.metric)]
    }
}

impl Plottable<2> for Sweep<'_> {
    #[allow(clippy::cast_precision_loss)]
    fn x(&self) -> Option<f64> {
        Some(self.index as f64)
    }

    fn traces(&self) -> [Option<f64>; 2] {
        [Some(self.residual), Some(self.change)]
    }
}

/// Collects one series per trace slot while a solver runs.
///
/// Pass `&mut PlotObserver` straight to a solver whose events implement
/// [`Plottable<N>`][Plottable], or call [`record`][Self::record] from a
/// closure observer to choose the values yourself.
///
/// # Example
///
/// ```ignore
/// let mut obs = PlotObserver::new([Series::line("Residual"), Series::line("Change")]);
/// let solution = seidel::solve(&system, &config, &mut obs)?;
/// obs.hline("Tolerance", config.tolerance());
/// obs.show(ShowConfig::new().title("Gauss-Seidel").legend().log_y())?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct PlotObserver<const N: usize> {
    series: Vec<Series>,
    guides: Vec<Guide>,
}

impl<const N: usize> PlotObserver<N> {
    pub fn new(series: [Series; N]) -> Self {
        Self {
            series: series.into(),
            guides: Vec::new(),
        }
    }

    /// Appends `[x, y]` to each trace slot whose value is `Some`.
    pub fn record(&mut self, x: f64, traces: [Option<f64>; N]) {
        for (series, y) in self.series.iter_mut().zip(traces) {
            if let Some(y) = y {
                series.points.push([x, y]);
            }
        }
    }

    /// Adds a single labelled marker, such as the final root.
    pub fn mark(&mut self, name: impl Into<String>, point: [f64; 2]) {
        let mut marker = Series::points(name);
        marker.points.push(point);
        self.series.push(marker);
    }

    pub fn hline(&mut self, name: impl Into<String>, y: f64) {
        self.guides.push(Guide::Horizontal {
            name: name.into(),
            y,
        });
    }

    pub fn vline(&mut self, name: impl Into<String>, x: f64) {
        self.guides.push(Guide::Vertical {
            name: name.into(),
            x,
        });
    }

    /// The trace series followed by any markers, in insertion order.
    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn into_panel(self, config: ShowConfig) -> Panel {
        Panel {
            config,
            series: self.series,
            guides: self.guides,
        }
    }

    /// Shows this observer alone, using the panel title as the window title.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = config.title.clone().unwrap_or_default();
        show_all(&title, vec![self.into_panel(config)])
    }
}

impl<const N: usize, E, A> Observer<E, A> for PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        if let Some(x) = event.x() {
            self.record(x, event.traces());
        }
        None
    }
}

/// Lets a solver borrow the observer so it can still be shown afterwards.
impl<const N: usize, E, A> Observer<E, A> for &mut PlotObserver<N>
where
    E: Plottable<N>,
{
    fn observe(&mut self, event: &E) -> Option<A> {
        (*self).observe(event)
    }
}

/// Everything one plot area draws.
#[derive(Debug, Clone, PartialEq)]
pub struct Panel {
    config: ShowConfig,
    series: Vec<Series>,
    guides: Vec<Guide>,
}

impl Panel {
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.config.title.as_deref()
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn guides(&self) -> &[Guide] {
        &self.guides
    }

    #[must_use]
    pub fn is_log_y(&self) -> bool {
        self.config.log_y
    }

    fn ui(&self, ui: &mut egui::Ui, id: usize, height: f32) {
        let config = &self.config;
        let mut plot_height = height;
        if let Some(title) = &config.title {
            ui.heading(title);
            plot_height -= HEADING_HEIGHT;
        }

        let mut plot = Plot::new(("numlab_panel", id)).height(plot_height.max(MIN_PLOT_HEIGHT));
        if config.legend {
            plot = plot.legend(Legend::default());
        }
        if let Some(label) = &config.x_label {
            plot = plot.x_axis_label(label.as_str());
        }
        if let Some(label) = config.y_axis_label() {
            plot = plot.y_axis_label(label);
        }

        let log_y = config.log_y;
        plot.show(ui, |plot_ui| {
            for series in &self.series {
                let points: PlotPoints = scaled(&series.points, log_y).into_iter().collect();
                match series.style {
                    Style::Line => plot_ui.line(Line::new(points).name(&series.name)),
                    Style::Points => plot_ui.points(
                        Points::new(points)
                            .shape(MarkerShape::Circle)
                            .radius(MARKER_RADIUS)
                            .name(&series.name),
                    ),
                }
            }
            for guide in &self.guides {
                match guide {
                    Guide::Horizontal { name, y } => {
                        if let Some(y) = scale(*y, log_y) {
                            plot_ui.hline(HLine::new(y).name(name).style(LineStyle::dashed_loose()));
                        }
                    }
                    Guide::Vertical { name, x } => {
                        plot_ui.vline(VLine::new(*x).name(name).style(LineStyle::dashed_loose()));
                    }
                }
            }
        });
    }
}

/// Opens a blocking window with `panels` stacked top to bottom.
///
/// # Errors
///
/// Returns an error if the native window cannot be created.
pub fn show_all(title: &str, panels: Vec<Panel>) -> Result<(), eframe::Error> {
    eframe::run_native(
        title,
        eframe::NativeOptions::default(),
        Box::new(move |_cc| Ok(Box::new(PlotApp { panels }))),
    )
}

/// Maps `y` onto the plotted axis, or `None` if it cannot be shown there.
fn scale(y: f64, log_y: bool) -> Option<f64> {
    if !log_y {
        return Some(y);
    }
    (y > 0.0).then(|| y.log10())
}

fn scaled(points: &[[f64; 2]], log_y: bool) -> Vec<[f64; 2]> {
    points
        .iter()
        .filter_map(|&[x, y]| scale(y, log_y).map(|y| [x, y]))
        .collect()
}

struct PlotApp {
    panels: Vec<Panel>,
}

impl eframe::App for PlotApp {
    #[allow(clippy::cast_precision_loss)]
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let height = ui.available_height() / self.panels.len().max(1) as f32;
            for (id, panel) in self.panels.iter().enumerate() {
                panel.ui(ui, id, height);
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use ndarray::{Array2, array};
    use numlab_solvers::{
        Config,
        equation::{Action, bisection},
        linear::{LinearSystem, seidel},
    };

    fn two_series() -> PlotObserver<2> {
        PlotObserver::new([Series::line("curve"), Series::points("iterates")])
    }

    #[test]
    fn record_fills_only_present_slots() {
        let mut obs = two_series();
        obs.record(1.0, [Some(2.0), None]);
        obs.record(2.0, [None, Some(-3.0)]);
        obs.record(3.0, [Some(4.0), Some(5.0)]);

        assert_eq!(obs.series()[0].data(), [[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(obs.series()[1].data(), [[2.0, -3.0], [3.0, 5.0]]);
        assert_eq!(obs.series()[0].style(), Style::Line);
        assert_eq!(obs.series()[1].style(), Style::Points);
    }

    #[test]
    fn markers_do_not_take_trace_slots() {
        let mut obs = two_series();
        obs.mark("root", [0.5, 0.0]);
        obs.record(1.0, [Some(1.0), Some(1.0)]);

        let marker = &obs.series()[2];
        assert_eq!(marker.name(), "root");
        assert_eq!(marker.style(), Style::Points);
        assert_eq!(marker.data(), [[0.5, 0.0]]);
        assert_eq!(obs.series()[0].data().len(), 1);
    }

    #[test]
    fn panel_keeps_guides_and_scale() {
        let mut obs = two_series();
        obs.hline("tolerance", 1e-3);
        obs.vline("a", -1.0);

        let panel = obs.into_panel(ShowConfig::new().title("Convergence").log_y());
        assert_eq!(panel.title(), Some("Convergence"));
        assert!(panel.is_log_y());
        assert_eq!(
            panel.guides(),
            [
                Guide::Horizontal {
                    name: "tolerance".into(),
                    y: 1e-3
                },
                Guide::Vertical {
                    name: "a".into(),
                    x: -1.0
                },
            ]
        );
    }

    #[test]
    fn log_scale_drops_non_positive_values() {
        let points = scaled(&[[0.0, 100.0], [1.0, 0.0], [2.0, -1.0], [3.0, 1e-3]], true);
        assert_eq!(points.len(), 2);
        assert_relative_eq!(points[0][1], 2.0);
        assert_relative_eq!(points[1][1], -3.0);
        assert_eq!(scaled(&[[1.0, -1.0]], false), [[1.0, -1.0]]);
    }

    #[test]
    fn y_label_mentions_the_log_scale() {
        let config = ShowConfig::new().y_label("width");
        assert_eq!(config.y_axis_label().as_deref(), Some("width"));
        assert_eq!(config.log_y().y_axis_label().as_deref(), Some("log₁₀ width"));
        assert_eq!(ShowConfig::new().y_axis_label(), None);
    }

    #[test]
    fn never_stops_a_solver() {
        let mut obs = two_series();
        let record = Iteration {
            iter: 3,
            a: 0.0,
            b: 1.0,
            fa: -1.0,
            fb: 1.0,
            x: 0.5,
            fx: -0.25,
            metric: 1.0,
        };
        let action: Option<Action> = obs.observe(&record);

        assert!(action.is_none());
        assert_eq!(obs.series()[0].data(), [[3.0, 0.25]]);
        assert_eq!(obs.series()[1].data(), [[3.0, 1.0]]);
    }

    #[test]
    fn plots_root_finder_iterations() {
        let mut obs = PlotObserver::new([Series::points("|f(x)|"), Series::line("width")]);
        let config = Config::new(100, 1e-3).unwrap();
        let solution = bisection::solve(&|x: f64| x - 0.3, [0.0, 1.0], &config, &mut obs).unwrap();

        // The terminal record is appended after the loop and never observed.
        assert_eq!(obs.series()[1].data().len(), solution.history.len() - 1);
        assert_eq!(obs.series()[1].data()[0], [0.0, 1.0]);
        assert_relative_eq!(obs.series()[0].data()[0][1], 0.2, epsilon = 1e-12);
    }

    #[test]
    fn plots_gauss_seidel_sweeps() {
        let mut obs = PlotObserver::new([Series::line("residual"), Series::line("change")]);
        let system = LinearSystem::new(Array2::eye(2), array![2.0, 3.0]).unwrap();
        seidel::solve(&system, &Config::default(), &mut obs).unwrap();

        assert_eq!(obs.series()[0].data(), [[0.0, 0.0]]);
        assert_eq!(obs.series()[1].data(), [[0.0, 3.0]]);
    }
}
