// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Filters keyed by subfield path (e.g. `address.zip`), holding the filter
/// expression text.
pub type SubfieldFilters = IndexMap<String, String>;

/// Identity of a table as resolved by a connector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableHandle {
	connector: String,
	table: String,
	filter_pushdown_enabled: bool,
	subfield_filters: SubfieldFilters,
	remaining_filter: Option<String>,
}

impl TableHandle {
	/// Creates a handle with no attached filters.
	pub fn new(connector: impl Into<String>, table: impl Into<String>) -> Self {
		Self {
			connector: connector.into(),
			table: table.into(),
			filter_pushdown_enabled: true,
			subfield_filters: SubfieldFilters::new(),
			remaining_filter: None,
		}
	}

	pub fn with_filter_pushdown(mut self, enabled: bool) -> Self {
		self.filter_pushdown_enabled = enabled;
		self
	}

	pub fn connector(&self) -> &str {
		&self.connector
	}

	pub fn table(&self) -> &str {
		&self.table
	}

	pub fn filter_pushdown_enabled(&self) -> bool {
		self.filter_pushdown_enabled
	}

	pub fn subfield_filters(&self) -> &SubfieldFilters {
		&self.subfield_filters
	}

	pub fn remaining_filter(&self) -> Option<&str> {
		self.remaining_filter.as_deref()
	}

	/// True when neither subfield nor remaining filters are attached.
	pub fn has_no_filter(&self) -> bool {
		self.subfield_filters.is_empty() && self.remaining_filter.is_none()
	}
}

impl Display for TableHandle {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		write!(f, "{}.{}", self.connector, self.table)
	}
}
