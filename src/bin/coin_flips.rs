//! Plots the exact distribution of heads in 50 fair coin tosses and
//! overlays the relative frequencies observed over 10 000 simulated
//! runs.

use anyhow::Result;
use binoplot::chart::{self, theme};
use binoplot::distribution::Binomial;
use log::info;
use ndarray::Array1;
use rand::distributions::Distribution as _;

const N: u64 = 50;
const P: f64 = 0.5;
const RUNS: usize = 10_000;
const Y_RANGE: (f64, f64) = (0.0, 0.15);

fn main() -> Result<()> {
    init_logging();

    let coin = Binomial::new(P, N)?;
    info!("simulating {RUNS} runs of {N} fair coin tosses");

    let mut rng = rand::thread_rng();
    let mut counts = vec![0u64; N as usize + 1];
    for _ in 0..RUNS {
        let heads = coin.sample(&mut rng) as usize;
        counts[heads] += 1;
    }

    let ks = Array1::from_iter((0..=N).map(|k| k as f64));
    let freqs = Array1::from_iter(counts.iter().map(|&c| c as f64 / RUNS as f64));

    let mut plot = chart::pmf_chart("Heads in 50 Fair Coin Tosses", &[coin], Y_RANGE);
    plot.add_trace(chart::frequency_trace(
        "simulated",
        &ks,
        &freqs,
        theme::series_color(1),
    ));
    plot.show();
    Ok(())
}

fn init_logging() {
    env_logger::Builder::default()
        .filter_level(log::LevelFilter::Info)
        .parse_env(env_logger::Env::default().filter_or("BINOPLOT_LOG", "info"))
        .init();
}
