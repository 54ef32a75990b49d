// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

//! Builder pattern for configuring the tracing subscriber

use tracing::{Level, level_filters::LevelFilter};
use tracing_subscriber::EnvFilter;

use crate::TracingError;

/// Environment variable consulted for filter directives before the builder's own.
pub const DEFAULT_ENV_VAR: &str = "SCANPLAN_LOG";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
	Full,
	Compact,
	Json,
}

#[derive(Debug, Clone)]
pub struct TracingBuilder {
	level: LevelFilter,
	directives: Vec<String>,
	env_var: Option<String>,
	format: Format,
	with_target: bool,
	with_thread_ids: bool,
}

impl Default for TracingBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TracingBuilder {
	/// Create a new TracingBuilder with default settings
	pub fn new() -> Self {
		Self {
			level: LevelFilter::INFO,
			directives: Vec::new(),
			env_var: Some(DEFAULT_ENV_VAR.to_string()),
			format: Format::Full,
			with_target: true,
			with_thread_ids: false,
		}
	}

	/// Set the default level for targets without a directive
	pub fn level(mut self, level: Level) -> Self {
		self.level = LevelFilter::from_level(level);
		self
	}

	/// Add a filter directive such as `scanplan_plan=trace`
	pub fn directive(mut self, directive: impl Into<String>) -> Self {
		self.directives.push(directive.into());
		self
	}

	/// Read directives from `var` instead of `SCANPLAN_LOG`
	pub fn env_var(mut self, var: impl Into<String>) -> Self {
		self.env_var = Some(var.into());
		self
	}

	/// Ignore the environment entirely
	pub fn without_env(mut self) -> Self {
		self.env_var = None;
		self
	}

	pub fn format(mut self, format: Format) -> Self {
		self.format = format;
		self
	}

	pub fn with_target(mut self, enabled: bool) -> Self {
		self.with_target = enabled;
		self
	}

	pub fn with_thread_ids(mut self, enabled: bool) -> Self {
		self.with_thread_ids = enabled;
		self
	}

	/// Build the filter, preferring a non-empty environment value
	pub fn filter(&self) -> Result<EnvFilter, TracingError> {
		let from_env = self.env_var.as_deref().and_then(|var| std::env::var(var).ok());
		self.filter_from(from_env)
	}

	fn filter_from(&self, from_env: Option<String>) -> Result<EnvFilter, TracingError> {
		let directives = match from_env.filter(|value| !value.trim().is_empty()) {
			Some(value) => value,
			None => {
				let mut all = vec![self.level.to_string().to_lowercase()];
				all.extend(self.directives.iter().cloned());
				all.join(",")
			}
		};

		EnvFilter::try_new(&directives).map_err(|err| TracingError::InvalidFilter {
			directives,
			reason: err.to_string(),
		})
	}

	/// Install the subscriber as the global default.
	///
	/// Fails if the filter does not parse or a global subscriber is already set.
	pub fn init(self) -> Result<(), TracingError> {
		let filter = self.filter()?;
		let builder = tracing_subscriber::fmt()
			.with_env_filter(filter)
			.with_target(self.with_target)
			.with_thread_ids(self.with_thread_ids);

		let result = match self.format {
			Format::Full => builder.try_init(),
			Format::Compact => builder.compact().try_init(),
			Format::Json => builder.json().try_init(),
		};
		result.map_err(|err| TracingError::Init(err.to_string()))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_level() {
		let filter = TracingBuilder::new().filter_from(None).unwrap();
		assert_eq!(filter.max_level_hint(), Some(LevelFilter::INFO));
	}

	#[test]
	fn test_level_and_directive() {
		let builder = TracingBuilder::new().level(Level::WARN).directive("scanplan_plan=trace");
		let filter = builder.filter_from(None).unwrap();
		assert_eq!(filter.max_level_hint(), Some(LevelFilter::TRACE));
	}

	#[test]
	fn test_env_value_wins() {
		let builder = TracingBuilder::new().level(Level::ERROR);
		let filter = builder.filter_from(Some("debug".to_string())).unwrap();
		assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
	}

	#[test]
	fn test_blank_env_value_ignored() {
		let builder = TracingBuilder::new().level(Level::ERROR);
		let filter = builder.filter_from(Some("  ".to_string())).unwrap();
		assert_eq!(filter.max_level_hint(), Some(LevelFilter::ERROR));
	}

	#[test]
	fn test_invalid_directive() {
		let err = TracingBuilder::new().directive("scanplan_plan=loud").filter_from(None).unwrap_err();
		assert!(matches!(err, TracingError::InvalidFilter { ref directives, .. } if directives == "info,scanplan_plan=loud"));
	}

	#[test]
	fn test_init_once() {
		let builder = TracingBuilder::new().without_env().format(Format::Compact).with_thread_ids(true);
		assert!(builder.clone().init().is_ok());
		assert!(matches!(builder.init(), Err(TracingError::Init(_))));
	}
}
