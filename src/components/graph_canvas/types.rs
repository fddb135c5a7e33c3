//! Abstract node/edge records handed to the canvas.

use crate::model::{Coloring, Graph};

/// One vertex to draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphNode {
	/// 0-based vertex index.
	pub id: usize,
	/// Text drawn next to the dot.
	pub label: Option<String>,
	/// Display color; [`super::state::DEFAULT_NODE_COLOR`] when `None`.
	pub color: Option<String>,
}

/// One undirected edge to draw.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GraphLink {
	/// Lower endpoint.
	pub source: usize,
	/// Higher endpoint.
	pub target: usize,
}

/// Everything the canvas needs for one render pass.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphData {
	/// Vertices, in ascending id order.
	pub nodes: Vec<GraphNode>,
	/// Undirected edges, each listed once.
	pub links: Vec<GraphLink>,
}

impl GraphData {
	/// Assembles draw records from a parsed graph and an optional coloring.
	///
	/// Vertices are labelled with their index. Each undirected edge appears
	/// once, in its `source < target` orientation. Vertices without a
	/// coloring entry keep `color: None` and fall back to the default at
	/// draw time.
	pub fn from_model(graph: &Graph, coloring: Option<&Coloring>) -> Self {
		let mut nodes = Vec::with_capacity(graph.adjacency.len());
		let mut links = Vec::new();

		for (&vertex, neighbors) in &graph.adjacency {
			nodes.push(GraphNode {
				id: vertex,
				label: Some(vertex.to_string()),
				color: coloring.and_then(|c| c.get(vertex)).cloned(),
			});

			for &neighbor in neighbors.iter().filter(|&&n| vertex < n) {
				links.push(GraphLink {
					source: vertex,
					target: neighbor,
				});
			}
		}

		Self { nodes, links }
	}
}

#[cfg(test)]
mod tests {
	use rand::SeedableRng;
	use rand::rngs::StdRng;

	use crate::model::{read_coloring, read_graph};

	use super::*;

	#[test]
	fn each_edge_appears_once() {
		let graph = read_graph("p edge 3 2\ne 1 2\ne 2 3\n").unwrap();
		let data = GraphData::from_model(&graph, None);

		assert_eq!(
			data.links,
			vec![
				GraphLink {
					source: 0,
					target: 1
				},
				GraphLink {
					source: 1,
					target: 2
				},
			]
		);
	}

	#[test]
	fn nodes_are_labelled_with_their_index() {
		let graph = read_graph("p edge 2 0\n").unwrap();
		let data = GraphData::from_model(&graph, None);

		let labels: Vec<_> = data.nodes.iter().map(|n| n.label.clone()).collect();
		assert_eq!(labels, vec![Some("0".to_string()), Some("1".to_string())]);
	}

	#[test]
	fn coloring_entries_reach_their_nodes() {
		let graph = read_graph("p edge 3 2\ne 1 2\ne 2 3\n").unwrap();
		let mut rng = StdRng::seed_from_u64(7);
		let coloring = read_coloring("1 1 2", &mut rng).unwrap();
		let data = GraphData::from_model(&graph, Some(&coloring));

		assert_eq!(data.nodes[0].color, data.nodes[1].color);
		assert_ne!(data.nodes[0].color, data.nodes[2].color);
		assert!(data.nodes.iter().all(|n| n.color.is_some()));
	}

	#[test]
	fn missing_coloring_leaves_nodes_uncolored() {
		let graph = read_graph("p edge 3 0\n").unwrap();
		let short = vec!["#102030".to_string()];
		let data = GraphData::from_model(&graph, Some(&short));

		assert_eq!(data.nodes[0].color.as_deref(), Some("#102030"));
		assert_eq!(data.nodes[1].color, None);
		assert_eq!(data.nodes[2].color, None);
	}

	#[test]
	fn isolated_vertices_still_become_nodes() {
		let graph = read_graph("p edge 4 1\ne 1 2\n").unwrap();
		let data = GraphData::from_model(&graph, None);

		assert_eq!(data.nodes.len(), 4);
		assert_eq!(data.links.len(), 1);
	}
}
