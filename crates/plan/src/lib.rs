// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod builder;
pub mod error;
pub mod explain;
pub mod id;
pub mod node;
pub mod session;

pub use builder::{ScanBuilderConfig, ScanPlanBuilder};
pub use error::PlanError;
pub use explain::{explain_plan, explain_scan};
pub use id::{PlanNodeId, PlanNodeIdAllocator};
pub use node::{Assignments, ColumnCategory, ColumnHandle, PlanNode, ScanNode};
pub use session::{Plan, PlanSession, SessionBuilder};

pub type Result<T> = std::result::Result<T, PlanError>;
