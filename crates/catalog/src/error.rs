// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use scanplan_type::{Diagnostic, Error, IntoDiagnostic};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
	#[error("connector '{connector}' is not registered")]
	UnknownConnector {
		connector: String,
	},

	#[error("table '{table}' is not known to connector '{connector}'")]
	UnknownTable {
		connector: String,
		table: String,
	},

	#[error("connector '{connector}' is already registered")]
	DuplicateConnector {
		connector: String,
	},
}

impl IntoDiagnostic for CatalogError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			CatalogError::UnknownConnector {
				connector,
			} => Diagnostic {
				code: "CATALOG_001".to_string(),
				message: format!("connector '{}' is not registered", connector),
				label: Some("unknown connector".to_string()),
				help: Some("register the connector before planning scans against it".to_string()),
				notes: vec![],
				cause: None,
			},
			CatalogError::UnknownTable {
				connector,
				table,
			} => Diagnostic {
				code: "CATALOG_002".to_string(),
				message: format!("table '{}' is not known to connector '{}'", table, connector),
				label: Some("unknown table".to_string()),
				help: Some("check the table name or register the table with the connector".to_string()),
				notes: vec![],
				cause: None,
			},
			CatalogError::DuplicateConnector {
				connector,
			} => Diagnostic {
				code: "CATALOG_003".to_string(),
				message: format!("connector '{}' is already registered", connector),
				label: None,
				help: Some("connector ids must be unique within a registry".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<CatalogError> for Error {
	fn from(err: CatalogError) -> Self {
		Error::from(err.into_diagnostic())
	}
}
