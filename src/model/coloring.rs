//! Coloring reader: whitespace-separated color-class ids, one per vertex.
//!
//! Each distinct class id is assigned a random 24-bit RGB color the first
//! time it appears; every later vertex of the same class reuses the cached
//! color. Freshly drawn colors are re-drawn until they differ from all
//! previously accepted ones, so distinct classes never share a color.

use std::collections::{BTreeMap, HashSet};

use rand::Rng;

use super::error::ModelError;

/// Display colors indexed by vertex, produced by [`read_coloring`].
pub type Coloring = Vec<String>;

/// Expands a whitespace-separated list of color-class ids into per-vertex
/// hex colors.
///
/// Token position is the vertex index. Class ids are arbitrary integers
/// (negative ids are fine); a non-integer token fails with
/// [`ModelError::InvalidColorClass`].
pub fn read_coloring<R: Rng>(input: &str, rng: &mut R) -> Result<Coloring, ModelError> {
	let mut class_colors: BTreeMap<i64, String> = BTreeMap::new();
	let mut used = HashSet::new();
	let mut coloring = Vec::new();

	for (vertex, token) in input.split_whitespace().enumerate() {
		let class_id: i64 = token
			.parse()
			.map_err(|_| ModelError::InvalidColorClass {
				token: token.to_string(),
				vertex,
			})?;

		let color = class_colors.entry(class_id).or_insert_with(|| {
			let mut fresh = random_color(rng);
			while !used.insert(fresh.clone()) {
				fresh = random_color(rng);
			}
			fresh
		});
		coloring.push(color.clone());
	}

	Ok(coloring)
}

/// Draws a random `#RRGGBB` color, one byte per channel.
fn random_color<R: Rng>(rng: &mut R) -> String {
	format!(
		"#{:02X}{:02X}{:02X}",
		rng.gen_range(0..=0xFFu8),
		rng.gen_range(0..=0xFFu8),
		rng.gen_range(0..=0xFFu8)
	)
}
