// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;
use scanplan_type::{Schema, Type};
use serde::{Deserialize, Serialize};

/// How a scan obtains a column's values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColumnCategory {
	/// Read as-is from the stored data.
	Regular,
	/// Derived from the partition path rather than the data files.
	PartitionKey,
	/// Produced by the connector (e.g. file path, bucket).
	Synthesized,
	/// Row position within the source file.
	RowIndex,
}

impl Display for ColumnCategory {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		match self {
			ColumnCategory::Regular => f.write_str("regular"),
			ColumnCategory::PartitionKey => f.write_str("partition key"),
			ColumnCategory::Synthesized => f.write_str("synthesized"),
			ColumnCategory::RowIndex => f.write_str("row index"),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ColumnHandle {
	source: String,
	category: ColumnCategory,
	requested_type: Type,
	source_type: Type,
}

impl ColumnHandle {
	pub fn new(source: impl Into<String>, category: ColumnCategory, requested_type: Type, source_type: Type) -> Self {
		Self {
			source: source.into(),
			category,
			requested_type,
			source_type,
		}
	}

	/// A column read from storage under its own name and type.
	pub fn regular(name: impl Into<String>, ty: Type) -> Self {
		Self::new(name, ColumnCategory::Regular, ty, ty)
	}

	pub fn source(&self) -> &str {
		&self.source
	}

	pub fn category(&self) -> ColumnCategory {
		self.category
	}

	pub fn requested_type(&self) -> Type {
		self.requested_type
	}

	pub fn source_type(&self) -> Type {
		self.source_type
	}
}

/// Output column name to column handle.
///
/// Equality is map equality and ignores order; iteration yields the order the
/// assignments were made in, which for scans is schema order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignments(IndexMap<String, ColumnHandle>);

impl Assignments {
	/// One regular assignment per schema column, in schema order.
	///
	/// The schema must already be validated; a repeated name would collapse
	/// into a single entry.
	pub fn regular(schema: &Schema) -> Self {
		Self(schema.iter().map(|column| (column.name.clone(), ColumnHandle::regular(&column.name, column.ty))).collect())
	}

	pub fn get(&self, output: &str) -> Option<&ColumnHandle> {
		self.0.get(output)
	}

	pub fn contains(&self, output: &str) -> bool {
		self.0.contains_key(output)
	}

	pub fn len(&self) -> usize {
		self.0.len()
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}

	pub fn iter(&self) -> impl Iterator<Item = (&str, &ColumnHandle)> {
		self.0.iter().map(|(name, handle)| (name.as_str(), handle))
	}
}

impl FromIterator<(String, ColumnHandle)> for Assignments {
	fn from_iter<I: IntoIterator<Item = (String, ColumnHandle)>>(iter: I) -> Self {
		Self(iter.into_iter().collect())
	}
}
