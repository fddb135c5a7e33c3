//! Error type for the graph and coloring readers.

use thiserror::Error;

/// Format errors raised while reading an uploaded graph or coloring file.
///
/// Every variant carries enough of the input to point at the offending
/// line or token; the UI shows the `Display` output verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
	/// A graph line started with something other than `c`, `p` or `e`.
	#[error("unknown command: {0}")]
	UnknownCommand(String),

	/// A `p` line did not match `p edge <vertices> <edges>`.
	#[error("malformed problem line (expected 'p edge <vertices> <edges>'): {0}")]
	MalformedProblem(String),

	/// An `e` line did not match `e <u> <v>` with 1-based vertex ids.
	#[error("malformed edge line (expected 'e <u> <v>' with 1-based ids): {0}")]
	MalformedEdge(String),

	/// A coloring token was not an integer color-class id.
	#[error("invalid color class '{token}' for vertex {vertex}")]
	InvalidColorClass {
		/// The token as it appeared in the input.
		token: String,
		/// 0-based vertex position of the token.
		vertex: usize,
	},
}
