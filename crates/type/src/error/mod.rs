// SPDX-License-Identifier: MIT
// Copyright (c) 2025 ReifyDB

use std::fmt::{self, Display, Formatter};

mod diagnostic;

pub use diagnostic::Diagnostic;

/// Converts a domain error into its [`Diagnostic`].
pub trait IntoDiagnostic {
	fn into_diagnostic(self) -> Diagnostic;
}

/// Type-erased error carrying a rendered [`Diagnostic`].
///
/// Each crate keeps its own typed error enum and converts into this one at the
/// edges where callers no longer need to match on variants.
#[derive(Debug, Clone, PartialEq)]
pub struct Error(pub Box<Diagnostic>);

impl Error {
	pub fn code(&self) -> &str {
		&self.0.code
	}

	pub fn diagnostic(self) -> Diagnostic {
		*self.0
	}
}

impl Display for Error {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		Display::fmt(&self.0, f)
	}
}

impl std::error::Error for Error {}

impl From<Diagnostic> for Error {
	fn from(diagnostic: Diagnostic) -> Self {
		Error(Box::new(diagnostic))
	}
}
