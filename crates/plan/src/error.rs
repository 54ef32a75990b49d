// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use scanplan_catalog::CatalogError;
use scanplan_type::{Diagnostic, Error, IntoDiagnostic, SchemaError};

use crate::id::PlanNodeId;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlanError {
	#[error("invalid schema for table '{table}': {source}")]
	InvalidSchema {
		table: String,
		#[source]
		source: SchemaError,
	},

	#[error("table name must not be empty")]
	EmptyTableName,

	#[error("plan node id allocator exhausted")]
	AllocatorExhausted,

	#[error("plan already contains a node with id {id}")]
	DuplicateNodeId {
		id: PlanNodeId,
	},

	#[error("node id {id} was not issued by this session")]
	ForeignNodeId {
		id: PlanNodeId,
	},

	#[error("assignment for '{column}' does not match the output schema")]
	AssignmentMismatch {
		column: String,
	},

	#[error(transparent)]
	Catalog(#[from] CatalogError),
}

impl IntoDiagnostic for PlanError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			PlanError::InvalidSchema {
				table,
				source,
			} => Diagnostic {
				code: "PLAN_001".to_string(),
				message: format!("invalid output schema for scan of table '{}'", table),
				label: Some(source.to_string()),
				help: Some("output columns must have distinct, non-empty names".to_string()),
				notes: vec![],
				cause: Some(Box::new(source.into_diagnostic())),
			},
			PlanError::EmptyTableName => Diagnostic {
				code: "PLAN_002".to_string(),
				message: "table name must not be empty".to_string(),
				label: None,
				help: Some("name the table to scan".to_string()),
				notes: vec![],
				cause: None,
			},
			PlanError::AllocatorExhausted => Diagnostic {
				code: "PLAN_003".to_string(),
				message: "plan node id allocator exhausted".to_string(),
				label: None,
				help: Some("start a new plan session".to_string()),
				notes: vec!["node ids are never reused within one allocator".to_string()],
				cause: None,
			},
			PlanError::DuplicateNodeId {
				id,
			} => Diagnostic {
				code: "PLAN_004".to_string(),
				message: format!("plan already contains a node with id {}", id),
				label: None,
				help: Some("build nodes with the session's own builders".to_string()),
				notes: vec![],
				cause: None,
			},
			PlanError::ForeignNodeId {
				id,
			} => Diagnostic {
				code: "PLAN_005".to_string(),
				message: format!("node id {} was not issued by this session", id),
				label: None,
				help: Some("add nodes built from this session's scan builders".to_string()),
				notes: vec!["a session only records ids its own allocator has handed out".to_string()],
				cause: None,
			},
			PlanError::AssignmentMismatch {
				column,
			} => Diagnostic {
				code: "PLAN_006".to_string(),
				message: format!("assignment for '{}' does not match the output schema", column),
				label: None,
				help: Some("every output column needs exactly one assignment of the same type".to_string()),
				notes: vec![],
				cause: None,
			},
			PlanError::Catalog(err) => err.into_diagnostic(),
		}
	}
}

impl From<PlanError> for Error {
	fn from(err: PlanError) -> Self {
		Error::from(err.into_diagnostic())
	}
}
