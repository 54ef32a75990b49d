// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (c) 2025 ReifyDB

#![cfg_attr(not(debug_assertions), deny(warnings))]

pub mod builder;

pub use builder::{DEFAULT_ENV_VAR, Format, TracingBuilder};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TracingError {
	#[error("invalid tracing filter '{directives}': {reason}")]
	InvalidFilter {
		directives: String,
		reason: String,
	},

	#[error("failed to install tracing subscriber: {0}")]
	Init(String),
}

/// Configuration function applied to a fresh [`TracingBuilder`]
pub type TracingConfigurator = Box<dyn FnOnce(TracingBuilder) -> TracingBuilder + Send>;

/// Install a subscriber built from the defaults, optionally adjusted by `configurator`.
pub fn init(configurator: Option<TracingConfigurator>) -> Result<(), TracingError> {
	let builder = match configurator {
		Some(configurator) => configurator(TracingBuilder::new()),
		None => TracingBuilder::default(),
	};
	builder.init()
}
