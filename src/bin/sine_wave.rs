//! Plots sin(x/5) and cos(x/5) over 50 points with the glow theme.

use anyhow::Result;
use binoplot::chart::{self, theme, WaveSeries};
use itertools_num::linspace;
use log::info;
use ndarray::Array1;

fn main() -> Result<()> {
    init_logging();

    let x: Array1<f64> = linspace(0.0, 50.0, 50).collect();
    let series = [
        WaveSeries::new(
            "sin(x/5)",
            x.mapv(|v| (v / 5.0).sin()),
            theme::series_color(0),
        ),
        WaveSeries::new(
            "cos(x/5)",
            x.mapv(|v| (v / 5.0).cos()),
            theme::series_color(1),
        ),
    ];
    info!("plotting {} waves over {} points", series.len(), x.len());

    let plot = chart::wave_chart("Sine and Cosine", &x, &series);
    plot.show();
    Ok(())
}

fn init_logging() {
    env_logger::Builder::default()
        .filter_level(log::LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("BINOPLOT_LOG", "info"))
        .init();
}
