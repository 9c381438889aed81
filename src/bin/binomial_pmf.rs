//! Plots the probability mass of B(50; p) for several success
//! probabilities, with a dashed expected-value marker per curve.

use anyhow::Result;
use binoplot::chart;
use binoplot::distribution::Binomial;
use log::info;

const N: u64 = 50;
const PS: [f64; 4] = [0.1, 0.5, 1.0 / 6.0, 0.75];
const Y_RANGE: (f64, f64) = (0.0, 0.2);

fn main() -> Result<()> {
    init_logging();

    let dists = PS
        .iter()
        .map(|&p| Binomial::new(p, N))
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        "plotting the pmf of {} distributions over k = 0..={N}",
        dists.len()
    );

    let plot = chart::pmf_chart("Binomial Distribution", &dists, Y_RANGE);
    plot.show();
    Ok(())
}

fn init_logging() {
    env_logger::Builder::default()
        .filter_level(log::LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("BINOPLOT_LOG", "info"))
        .init();
}
