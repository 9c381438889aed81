//! Binomial distribution demos with charted probability mass functions.
//!
//! The crate is split into a small numerical core and a chart layer:
//!
//! - [`function`] provides the special functions (ln-gamma, ln-factorial,
//!   regularized incomplete beta) the distribution is built on
//! - [`distribution`] implements the [`Binomial`](distribution::Binomial)
//!   distribution behind the [`Discrete`](distribution::Discrete) and
//!   [`DiscreteCDF`](distribution::DiscreteCDF) traits
//! - [`statistics`] holds the summary-statistic traits (mean, variance, ...)
//! - [`chart`] turns distributions and sampled curves into styled
//!   [`plotly`] plots
//!
//! The binaries under `src/bin/` are the demos proper: fixed parameters,
//! build a chart, show it.
//!
//! # Examples
//!
//! ```
//! use binoplot::distribution::{Binomial, Discrete};
//! use binoplot::statistics::Distribution;
//!
//! let coin = Binomial::new(0.5, 50).unwrap();
//! assert_eq!(coin.mean().unwrap(), 25.0);
//! assert!((coin.pmf(25) - 0.1122751726592170).abs() < 1e-12);
//! ```

#![forbid(unsafe_code)]

#[macro_use]
extern crate approx;

pub mod chart;
pub mod distribution;
pub mod function;
pub mod prec;
pub mod statistics;
