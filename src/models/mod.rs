//! Export row models
//!
//! This module provides the row types that flatten API resources into
//! the flat CSV records the export commands write.

pub mod export;

pub use export::{AgentRow, AlertRow, Ec2Row, MemberRow, RuleRow, VulnRow};
