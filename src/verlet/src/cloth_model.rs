use crate::arena::Id;
use crate::error::PhysicsError;
use crate::solver::PhysicSolver;
use crate::V2;

/// Cloth grid assembly: structural links to the left and top neighbors,
/// shear links on both diagonals, bend links two apart, pinned top row.
/// Rows closer to the pinned edge carry more stress, so their links get a
/// wider elongation tolerance.
pub struct ClothModel {
	pub width: usize,
	pub height: usize,
	pub spacing: f32,
	pub origin: V2,
	pub group: Option<u32>,
}

impl ClothModel {
	pub fn new(width: usize, height: usize) -> Self {
		Self {
			width,
			height,
			spacing: 20.0,
			origin: V2::zeros(),
			group: None,
		}
	}

	pub fn with_spacing(mut self, spacing: f32) -> Self {
		self.spacing = spacing;
		self
	}

	pub fn with_origin(mut self, origin: V2) -> Self {
		self.origin = origin;
		self
	}

	pub fn with_group(mut self, group: u32) -> Self {
		self.group = Some(group);
		self
	}

	/// Elongation tolerance for a row, loosest at the pinned top.
	pub fn row_elongation(&self, row: usize) -> f32 {
		1.2 * (2.0 - row as f32 / self.height as f32)
	}

	/// Build the cloth into the solver, returning particle handles row-major.
	pub fn add_to(
		&self,
		solver: &mut PhysicSolver,
	) -> Result<Vec<Id>, PhysicsError> {
		if self.width < 2 || self.height < 2 {
			return Err(PhysicsError::InvalidGridDimensions {
				width: self.width,
				height: self.height,
			});
		}
		eprintln!(
			"INFO: add cloth: {}x{} spacing {}",
			self.width, self.height, self.spacing
		);
		let w = self.width;
		let mut ids = Vec::with_capacity(w * self.height);
		for y in 0..self.height {
			let max_elongation = self.row_elongation(y);
			for x in 0..w {
				let pos = self.origin
					+ V2::new(x as f32 * self.spacing, y as f32 * self.spacing);
				let id = solver.add_particle(pos, self.group);
				let i = ids.len();
				ids.push(id);
				if x > 0 {
					solver.add_link(ids[i - 1], id, max_elongation * 0.9, 1.0)?;
				}
				if y > 0 {
					solver.add_link(ids[i - w], id, max_elongation, 1.0)?;
				} else {
					solver.get_particle_mut(id)?.moving = false;
				}
				// shear
				if x > 0 && y > 0 {
					solver.add_link(ids[i - w - 1], id, max_elongation, 0.5)?;
				}
				if x + 1 < w && y > 0 {
					solver.add_link(ids[i - w + 1], id, max_elongation, 0.5)?;
				}
				// bend
				if y > 1 {
					solver.add_link(ids[i - 2 * w], id, max_elongation, 0.1)?;
				}
				if x > 1 {
					solver.add_link(ids[i - 2], id, max_elongation, 0.1)?;
				}
			}
		}
		Ok(ids)
	}
}
