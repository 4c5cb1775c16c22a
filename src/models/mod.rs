//! Data models for the investment registry
//!
//! The canonical record shape, the typed creation/update payloads with
//! explicit field-presence masking, and the query/summary result shapes.

pub mod patch;
pub mod project;

pub use patch::Patch;
pub use project::{
    FilterOptions, InvestmentProject, IssuePatch, NewProject, ProgressPatch, ProjectFilter,
    ProjectPage, ProjectUpdate, StatusIssue, SummaryStats, TypeInvestasi,
    DEFAULT_KLASTER_REGIONAL, DEFAULT_SATUAN_HARI, DEFAULT_TAHUN_RKAP,
};
