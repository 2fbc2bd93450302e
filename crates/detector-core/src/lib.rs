//! Platform-free core of the metal detector simulator.
//!
//! A pointer position goes into [`SignalModel::query`]; the resulting
//! [`SignalSample`] feeds the [`HeatMapGrid`], the [`CoverageGrid`] and the
//! [`SignalQualityAnalyzer`]. [`DetectorSession`] runs that pipeline once per
//! animation frame. Nothing here touches the DOM, so the same code runs in
//! host-side tests and in the WASM front-end.

pub mod analysis;
pub mod config;
pub mod constants;
pub mod coverage;
pub mod decay;
pub mod heatmap;
pub mod metal;
pub mod session;
pub mod signal;
pub mod tone;

pub use analysis::*;
pub use config::*;
pub use coverage::*;
pub use decay::*;
pub use heatmap::*;
pub use metal::*;
pub use session::*;
pub use signal::*;
pub use tone::*;
