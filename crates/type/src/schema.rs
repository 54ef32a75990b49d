// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

//! Ordered row schemas.
//!
//! Column order is significant: it defines the positional layout of the rows a
//! plan node produces. A [`Schema`] can be assembled from any sequence of
//! columns; [`Schema::validate`] checks the naming invariants separately so
//! that callers decide when an invalid schema becomes an error.

use std::{
	collections::HashMap,
	fmt::{self, Display, Formatter},
};

use serde::{Deserialize, Serialize};

use crate::{
	error::{Diagnostic, Error, IntoDiagnostic},
	value::r#type::Type,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SchemaColumn {
	pub name: String,
	pub ty: Type,
}

impl SchemaColumn {
	pub fn new(name: impl Into<String>, ty: Type) -> Self {
		Self {
			name: name.into(),
			ty,
		}
	}
}

impl Display for SchemaColumn {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{} {}", self.name, self.ty)
	}
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Schema {
	columns: Vec<SchemaColumn>,
}

impl Schema {
	pub fn new(columns: Vec<SchemaColumn>) -> Self {
		Self {
			columns,
		}
	}

	pub fn empty() -> Self {
		Self::default()
	}

	pub fn with_column(mut self, name: impl Into<String>, ty: Type) -> Self {
		self.columns.push(SchemaColumn::new(name, ty));
		self
	}

	pub fn columns(&self) -> &[SchemaColumn] {
		&self.columns
	}

	pub fn len(&self) -> usize {
		self.columns.len()
	}

	pub fn is_empty(&self) -> bool {
		self.columns.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = &SchemaColumn> {
		self.columns.iter()
	}

	pub fn name_of(&self, index: usize) -> Option<&str> {
		self.columns.get(index).map(|c| c.name.as_str())
	}

	pub fn type_of(&self, index: usize) -> Option<Type> {
		self.columns.get(index).map(|c| c.ty)
	}

	pub fn find(&self, name: &str) -> Option<&SchemaColumn> {
		self.columns.iter().find(|c| c.name == name)
	}

	/// Checks that every column has a non-empty name and no name repeats.
	///
	/// Reports the first violation in column order.
	pub fn validate(&self) -> Result<(), SchemaError> {
		let mut seen: HashMap<&str, usize> = HashMap::with_capacity(self.columns.len());
		for (position, column) in self.columns.iter().enumerate() {
			if column.name.is_empty() {
				return Err(SchemaError::EmptyColumnName {
					position,
				});
			}
			if let Some(&first) = seen.get(column.name.as_str()) {
				return Err(SchemaError::DuplicateColumn {
					name: column.name.clone(),
					first,
					second: position,
				});
			}
			seen.insert(column.name.as_str(), position);
		}
		Ok(())
	}
}

impl Display for Schema {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		for (i, column) in self.columns.iter().enumerate() {
			if i > 0 {
				f.write_str(", ")?;
			}
			write!(f, "{}", column)?;
		}
		Ok(())
	}
}

impl<N: Into<String>> FromIterator<(N, Type)> for Schema {
	fn from_iter<I: IntoIterator<Item = (N, Type)>>(iter: I) -> Self {
		Self {
			columns: iter.into_iter().map(|(name, ty)| SchemaColumn::new(name, ty)).collect(),
		}
	}
}

impl<'a> IntoIterator for &'a Schema {
	type Item = &'a SchemaColumn;
	type IntoIter = std::slice::Iter<'a, SchemaColumn>;

	fn into_iter(self) -> Self::IntoIter {
		self.columns.iter()
	}
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
	#[error("duplicate column name '{name}' at positions {first} and {second}")]
	DuplicateColumn {
		name: String,
		first: usize,
		second: usize,
	},

	#[error("column at position {position} has an empty name")]
	EmptyColumnName {
		position: usize,
	},
}

impl IntoDiagnostic for SchemaError {
	fn into_diagnostic(self) -> Diagnostic {
		match self {
			SchemaError::DuplicateColumn {
				name,
				first,
				second,
			} => Diagnostic {
				code: "SCHEMA_001".to_string(),
				message: format!("duplicate column name '{}'", name),
				label: Some(format!("first defined at position {}, repeated at position {}", first, second)),
				help: Some("give every output column a distinct name".to_string()),
				notes: vec!["column names identify assignments, so each must be unique".to_string()],
				cause: None,
			},
			SchemaError::EmptyColumnName {
				position,
			} => Diagnostic {
				code: "SCHEMA_002".to_string(),
				message: format!("column at position {} has an empty name", position),
				label: None,
				help: Some("name the column".to_string()),
				notes: vec![],
				cause: None,
			},
		}
	}
}

impl From<SchemaError> for Error {
	fn from(err: SchemaError) -> Self {
		Error::from(err.into_diagnostic())
	}
}
