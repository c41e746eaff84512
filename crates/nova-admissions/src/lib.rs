//! Academic credit normalization and admission-readiness scoring for study-abroad counselling.
//!
//! Both calculators are pure: they take a structured record and return a structured result.
//! The remaining modules wire them into configuration, telemetry and an HTTP router.

pub mod config;
pub mod credits;
pub mod eligibility;
pub mod error;
pub mod router;
pub mod telemetry;

pub use router::assessment_router;
