//! DIMACS-style edge-list reader.
//!
//! The accepted format is the `.col` dialect used by graph coloring
//! benchmarks:
//!
//! ```text
//! c comment, ignored
//! p edge 3 2
//! e 1 2
//! e 2 3
//! ```
//!
//! Vertex ids are 1-based in the file and 0-based in the parsed graph.

use std::collections::{BTreeMap, BTreeSet};

use super::error::ModelError;

/// An undirected graph parsed from a DIMACS-style edge list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Graph {
	/// Vertex count declared by the `p edge` header.
	pub declared_vertices: usize,
	/// Edge count declared by the `p edge` header. Informational only;
	/// never checked against the edges actually listed.
	pub declared_edges: usize,
	/// 0-based vertex index to neighbor set. Symmetric: `v ∈ adjacency[u]`
	/// exactly when `u ∈ adjacency[v]`.
	pub adjacency: BTreeMap<usize, BTreeSet<usize>>,
}

/// Parses a DIMACS-style edge list into a [`Graph`].
///
/// Comment lines (`c`) and blank lines are skipped. The `p edge V E` header
/// declares the vertex count; vertices up to that count appear in the
/// adjacency map even when no edge names them. Edge endpoints past the
/// declared count are accepted and get adjacency entries of their own.
/// Any other leading character fails with [`ModelError::UnknownCommand`]
/// carrying the offending line.
pub fn read_graph(input: &str) -> Result<Graph, ModelError> {
	let mut declared_vertices = 0;
	let mut declared_edges = 0;
	let mut adjacency: BTreeMap<usize, BTreeSet<usize>> = BTreeMap::new();

	for line in input.lines() {
		let line = line.trim();
		match line.as_bytes().first() {
			None | Some(b'c') => {}
			Some(b'p') => {
				// p edge 11 20
				let parts: Vec<&str> = line.split_whitespace().collect();
				if parts.len() < 4 {
					return Err(ModelError::MalformedProblem(line.to_string()));
				}
				declared_vertices = parse_count(parts[2], line)?;
				declared_edges = parse_count(parts[3], line)?;
			}
			Some(b'e') => {
				// e 1 2
				let parts: Vec<&str> = line.split_whitespace().collect();
				if parts.len() < 3 {
					return Err(ModelError::MalformedEdge(line.to_string()));
				}
				let start = parse_vertex(parts[1], line)?;
				let finish = parse_vertex(parts[2], line)?;

				adjacency.entry(start).or_default().insert(finish);
				adjacency.entry(finish).or_default().insert(start);
			}
			Some(_) => return Err(ModelError::UnknownCommand(line.to_string())),
		}
	}

	// Disconnected vertices still get an entry.
	for vertex in 0..declared_vertices {
		adjacency.entry(vertex).or_default();
	}

	Ok(Graph {
		declared_vertices,
		declared_edges,
		adjacency,
	})
}

fn parse_count(token: &str, line: &str) -> Result<usize, ModelError> {
	token
		.parse::<usize>()
		.map_err(|_| ModelError::MalformedProblem(line.to_string()))
}

/// Parses a 1-based vertex id and converts it to 0-based.
fn parse_vertex(token: &str, line: &str) -> Result<usize, ModelError> {
	match token.parse::<usize>() {
		Ok(id) if id >= 1 => Ok(id - 1),
		_ => Err(ModelError::MalformedEdge(line.to_string())),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn neighbors(graph: &Graph, vertex: usize) -> Vec<usize> {
		graph.adjacency[&vertex].iter().copied().collect()
	}

	#[test]
	fn parses_path_graph() {
		let graph = read_graph("p edge 3 2\ne 1 2\ne 2 3\n").unwrap();

		assert_eq!(graph.declared_vertices, 3);
		assert_eq!(graph.declared_edges, 2);
		assert_eq!(graph.adjacency.len(), 3);
		assert_eq!(neighbors(&graph, 0), vec![1]);
		assert_eq!(neighbors(&graph, 1), vec![0, 2]);
		assert_eq!(neighbors(&graph, 2), vec![1]);
	}

	#[test]
	fn adjacency_is_symmetric() {
		let graph = read_graph("p edge 5 4\ne 1 2\ne 2 3\ne 3 5\ne 1 5\n").unwrap();

		for (&u, edges) in &graph.adjacency {
			for &v in edges {
				assert!(
					graph.adjacency[&v].contains(&u),
					"edge ({u}, {v}) present but ({v}, {u}) missing"
				);
			}
		}
	}

	#[test]
	fn comments_and_blank_lines_are_skipped() {
		let graph = read_graph("c header comment\n\np edge 2 1\nc between\ne 1 2\n").unwrap();

		assert_eq!(graph.adjacency.len(), 2);
		assert_eq!(neighbors(&graph, 0), vec![1]);
	}

	#[test]
	fn declared_count_adds_isolated_vertices() {
		let graph = read_graph("p edge 5 1\ne 1 2\n").unwrap();

		assert_eq!(graph.adjacency.len(), 5);
		assert!(graph.adjacency[&2].is_empty());
		assert!(graph.adjacency[&3].is_empty());
		assert!(graph.adjacency[&4].is_empty());
	}

	#[test]
	fn edges_past_declared_count_are_kept() {
		// Declared counts are informational; the edge list wins.
		let graph = read_graph("p edge 2 2\ne 1 2\ne 3 4\n").unwrap();

		assert_eq!(graph.adjacency.len(), 4);
		assert_eq!(neighbors(&graph, 2), vec![3]);
	}

	#[test]
	fn header_without_edges_yields_empty_sets() {
		let graph = read_graph("p edge 4 0\n").unwrap();

		assert_eq!(graph.adjacency.len(), 4);
		assert!(graph.adjacency.values().all(BTreeSet::is_empty));
	}

	#[test]
	fn empty_input_yields_empty_graph() {
		let graph = read_graph("").unwrap();

		assert_eq!(graph, Graph::default());
	}

	#[test]
	fn unknown_command_is_fatal() {
		let result = read_graph("p edge 2 1\nx foo\n");

		assert_eq!(result, Err(ModelError::UnknownCommand("x foo".to_string())));
	}

	#[test]
	fn error_names_the_offending_line() {
		let message = read_graph("q 1 2\n").unwrap_err().to_string();

		assert!(message.contains("q 1 2"), "got: {message}");
	}

	#[test]
	fn short_problem_line_is_rejected() {
		let result = read_graph("p edge 3\n");

		assert_eq!(
			result,
			Err(ModelError::MalformedProblem("p edge 3".to_string()))
		);
	}

	#[test]
	fn non_numeric_edge_is_rejected() {
		let result = read_graph("p edge 3 1\ne 1 abc\n");

		assert_eq!(result, Err(ModelError::MalformedEdge("e 1 abc".to_string())));
	}

	#[test]
	fn zero_vertex_id_is_rejected() {
		// Ids are 1-based; 0 cannot be shifted down.
		let result = read_graph("p edge 3 1\ne 0 1\n");

		assert_eq!(result, Err(ModelError::MalformedEdge("e 0 1".to_string())));
	}

	#[test]
	fn short_edge_line_is_rejected() {
		let result = read_graph("p edge 3 1\ne 1\n");

		assert_eq!(result, Err(ModelError::MalformedEdge("e 1".to_string())));
	}
}
