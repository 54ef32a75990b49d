// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Table-scan plan building.
//!
//! ```
//! use std::sync::Arc;
//!
//! use scanplan::{ConnectorDef, MemoryConnectorRegistry, PlanSession, Schema, Type};
//!
//! let registry = MemoryConnectorRegistry::new();
//! registry.register(ConnectorDef::hive("hive")).unwrap();
//!
//! let session = PlanSession::builder().registry(Arc::new(registry)).build();
//! let schema = Schema::empty().with_column("id", Type::Int8).with_column("amount", Type::Float8);
//! let scan = session.table_scan("orders", schema, "hive").unwrap();
//!
//! assert_eq!(scan.table().to_string(), "hive.orders");
//! assert_eq!(scan.assignments().len(), 2);
//! ```

pub use scanplan_catalog as catalog;
pub use scanplan_catalog::{
	CatalogError, ConnectorDef, ConnectorKind, ConnectorRegistry, MemoryConnectorRegistry, TableHandle, TableSet,
};
pub use scanplan_plan as plan;
pub use scanplan_plan::{
	Assignments, ColumnCategory, ColumnHandle, Plan, PlanError, PlanNode, PlanNodeId, PlanNodeIdAllocator,
	PlanSession, ScanBuilderConfig, ScanNode, ScanPlanBuilder, SessionBuilder, explain_plan, explain_scan,
};
#[cfg(feature = "sub_tracing")]
pub use scanplan_sub_tracing as sub_tracing;
pub use scanplan_type as r#type;
pub use scanplan_type::{Diagnostic, Error, IntoDiagnostic, Result, Schema, SchemaColumn, SchemaError, Type};
