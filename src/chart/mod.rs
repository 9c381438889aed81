//! Turns distributions and sampled curves into styled [`plotly`] charts.
//!
//! The charts follow the look of the original demos: dark background,
//! a fixed palette, dashed expected-value markers on the pmf charts and
//! a glow effect on the wave chart.

use ndarray::Array1;
use plotly::common::{DashType, Fill, Line, Marker, Mode};
use plotly::{Bar, Plot, Scatter};

use crate::distribution::{Binomial, Discrete};
use crate::statistics::Distribution;

pub mod theme;

use self::theme::Rgb;

/// A named curve for [`wave_chart`], evaluated over a shared domain.
pub struct WaveSeries {
    pub label: String,
    pub values: Array1<f64>,
    pub color: Rgb,
}

impl WaveSeries {
    pub fn new(label: impl Into<String>, values: Array1<f64>, color: Rgb) -> Self {
        WaveSeries {
            label: label.into(),
            values,
            color,
        }
    }
}

/// Evaluates the probability mass of `dist` over its full support
/// `0..=n`, returning the domain and the mass values.
pub fn pmf_points(dist: &Binomial) -> (Array1<f64>, Array1<f64>) {
    let ks = Array1::from_iter((0..=dist.n()).map(|k| k as f64));
    let mass = Array1::from_iter((0..=dist.n()).map(|k| dist.pmf(k)));
    (ks, mass)
}

/// Builds a dashed vertical marker at the expected value of `dist`,
/// spanning `y_range` and labelled `E(X)=…`.
pub fn expectation_marker(
    dist: &Binomial,
    y_range: (f64, f64),
    color: Rgb,
) -> Box<Scatter<f64, f64>> {
    // mean always exists for the binomial
    let mean = dist.mean().unwrap_or_default();
    let label = format!("E(X)={mean:.2}");
    Scatter::new(vec![mean, mean], vec![y_range.0, y_range.1])
        .mode(Mode::Lines)
        .name(label.as_str())
        .line(Line::new().color(color.solid()).dash(DashType::Dash))
}

/// Builds the pmf chart of the demos: one marker trace per distribution
/// labelled through its `Display` form, plus an expected-value marker in
/// the matching palette color, over a fixed y-range.
pub fn pmf_chart(title: &str, dists: &[Binomial], y_range: (f64, f64)) -> Plot {
    let mut plot = Plot::new();

    for (i, dist) in dists.iter().enumerate() {
        let color = theme::series_color(i);
        let (ks, mass) = pmf_points(dist);
        let label = dist.to_string();
        plot.add_trace(
            Scatter::new(ks.to_vec(), mass.to_vec())
                .mode(Mode::Markers)
                .name(label.as_str())
                .marker(Marker::new().color(color.solid())),
        );
        plot.add_trace(expectation_marker(dist, y_range, color));
    }

    plot.set_layout(
        theme::layout(title, "Number of Successes", "Probability")
            .y_axis(theme::axis("Probability").range(vec![y_range.0, y_range.1])),
    );
    plot
}

/// Builds a bar trace of observed relative frequencies, for overlaying
/// simulation results on an exact pmf.
pub fn frequency_trace(
    label: &str,
    ks: &Array1<f64>,
    freqs: &Array1<f64>,
    color: Rgb,
) -> Box<Bar<f64, f64>> {
    Bar::new(ks.to_vec(), freqs.to_vec())
        .name(label)
        .marker(Marker::new().color(color.rgba(0.5)))
}

/// Builds the wave chart of the demos: line+marker traces with stacked
/// low-alpha shadow traces for the glow and a translucent fill down to
/// zero standing in for a gradient fill.
pub fn wave_chart(title: &str, x: &Array1<f64>, series: &[WaveSeries]) -> Plot {
    let mut plot = Plot::new();
    let xs = x.to_vec();

    for s in series {
        let ys = s.values.to_vec();

        plot.add_trace(
            Scatter::new(xs.clone(), ys.clone())
                .mode(Mode::LinesMarkers)
                .name(s.label.as_str())
                .marker(Marker::new().color(s.color.solid()))
                .line(Line::new().color(s.color.solid()).width(1.0)),
        );

        for width in theme::glow_widths(1.0) {
            plot.add_trace(
                Scatter::new(xs.clone(), ys.clone())
                    .mode(Mode::Lines)
                    .show_legend(false)
                    .line(Line::new().color(s.color.rgba(theme::glow_alpha())).width(width)),
            );
        }

        plot.add_trace(
            Scatter::new(xs.clone(), ys.clone())
                .mode(Mode::Lines)
                .show_legend(false)
                .fill(Fill::ToZeroY)
                .fill_color(s.color.rgba(0.15))
                .line(Line::new().width(0.0)),
        );
    }

    plot.set_layout(theme::layout(title, "X-Axis", "Y-Axis"));
    plot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prec::assert_almost_eq;

    fn coin() -> Binomial {
        Binomial::new(0.5, 50).unwrap()
    }

    #[test]
    fn pmf_points_cover_support() {
        let (ks, mass) = pmf_points(&coin());
        assert_eq!(ks.len(), 51);
        assert_eq!(mass.len(), 51);
        assert_eq!(ks[0], 0.0);
        assert_eq!(ks[50], 50.0);
        assert_almost_eq(mass.sum(), 1.0, 1e-9);
        assert!(mass.iter().all(|&m| (0.0..=1.0).contains(&m)));
    }

    #[test]
    fn pmf_points_peak_at_mean() {
        let (_, mass) = pmf_points(&coin());
        let peak = mass
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap())
            .map(|(k, _)| k)
            .unwrap();
        assert_eq!(peak, 25);
    }

    #[test]
    fn pmf_chart_has_two_traces_per_distribution() {
        let dists = [coin(), Binomial::new(0.1, 50).unwrap()];
        let plot = pmf_chart("pmf", &dists, (0.0, 0.2));
        assert_eq!(plot.data().len(), 2 * dists.len());
    }

    #[test]
    fn wave_chart_stacks_glow_traces() {
        let x = Array1::<f64>::linspace(0.0, 50.0, 50);
        let series = [WaveSeries::new(
            "sin(x/5)",
            x.mapv(|v| (v / 5.0).sin()),
            theme::series_color(0),
        )];
        let plot = wave_chart("waves", &x, &series);
        // main trace + glow shadows + gradient fill
        assert_eq!(plot.data().len(), 1 + theme::GLOW_LINES + 1);
    }
}
