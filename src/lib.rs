//! Classification and scoring engine for legal corruption phenomena.
//!
//! Ingestion collaborators hand this crate an in-memory batch of official
//! gazette records; the crate classifies each record against the fixed
//! transfer-scenario taxonomy, derives a 0-100 intensity index with a risk
//! tier, and renders the enriched rows into a two-sheet workbook for the
//! presentation layer. The index measures theoretical intensity of an income
//! transfer, not criminal liability.

pub mod alerts;
pub mod analysis;
pub mod config;
pub mod error;
pub mod ingest;
pub mod report;
pub mod taxonomy;
pub mod telemetry;

pub use analysis::{classify, score, ClassifiedRecord, RawRecord, RiskTier, ScoreBreakdown};
pub use config::AppConfig;
pub use error::AppError;
pub use report::{BulletinReport, ReportBuilder};
pub use taxonomy::{CertaintyLevel, DecisionKind, TaxonomyEntry};
