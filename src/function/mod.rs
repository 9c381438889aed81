//! Special functions backing the distribution implementations.

pub mod beta;
pub mod factorial;
pub mod gamma;
