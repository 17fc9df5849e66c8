//! namecheck library interface
//!
//! Decides whether an artist name is already taken by probing catalogs,
//! search engines, DNS and social platforms, then fusing the evidence into a
//! score and an availability status.
//!
//! Pipeline: [`batch::BatchRunner`] → [`orchestrator::NameChecker`] →
//! [`probes::ProbeRegistry`] fan-out → [`types::SourceSet`] →
//! [`scoring::ScoreCalculator`] → [`scoring::classify`] → [`types::NameResult`]

pub mod batch;
pub mod error;
pub mod names;
pub mod orchestrator;
pub mod probes;
pub mod report;
pub mod scoring;
pub mod types;

pub use crate::batch::BatchRunner;
pub use crate::error::{CheckerError, CheckerResult};
pub use crate::orchestrator::{CheckerOptions, NameChecker};
pub use crate::types::{Evidence, NameResult, ProbeOutcome, SourceId, SourceSet, Status};
