pub mod axis;
pub mod bucket;
pub mod chart;
pub mod cli;
pub mod error;
pub mod filter;
pub mod git;
pub mod input;
pub mod model;
pub mod plot;
pub mod prompt;
pub mod report;
pub mod week;

pub use error::{PlotError, Result};
