//! Record types shared by every EstateFlow surface.
//!
//! These are immutable value records: no behavior beyond enum metadata
//! (ordering, display names, member lists). Foreign keys are opaque
//! identity strings; a reference may dangle and consumers are expected to
//! degrade to an explicit "unknown" result rather than fail.

pub mod client;
pub mod deal;
pub mod lead;
pub mod metrics;
pub mod property;
pub mod task;
pub mod user;

pub use client::{Client, Preferences};
pub use deal::{Deal, DealStage};
pub use lead::{Lead, LeadKind, LeadSource, LeadStatus};
pub use metrics::DashboardMetrics;
pub use property::{Property, PropertyKind};
pub use task::{Task, TaskKind, TaskLink, TaskStatus};
pub use user::{User, UserRole};
