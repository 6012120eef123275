use crate::arena::Id;
use crate::V2;

/// Point mass with the previous-position state Verlet needs.
#[derive(Clone)]
pub struct Particle {
	pub id: Id,
	pub mass: f32,
	/// false = pinned, ignores forces and displacement
	pub moving: bool,
	pub group: Option<u32>,
	pub position: V2,
	pub position_old: V2,
	pub velocity: V2,
	pub forces: V2,
}

impl Particle {
	pub fn new(position: V2) -> Self {
		Self {
			id: 0,
			mass: 1.0,
			moving: true,
			group: None,
			position,
			position_old: position,
			velocity: V2::zeros(),
			forces: V2::zeros(),
		}
	}

	pub fn with_group(mut self, group: Option<u32>) -> Self {
		self.group = group;
		self
	}

	pub fn inv_mass(&self) -> f32 {
		if self.moving {
			1.0 / self.mass
		} else {
			0.0
		}
	}

	/// Semi-implicit step: forces push velocity, velocity pushes position.
	pub fn integrate(&mut self, dt: f32) {
		if !self.moving {
			return;
		}
		self.position_old = self.position;
		self.velocity += (self.forces / self.mass) * dt;
		self.position += self.velocity * dt;
	}

	/// Rebuild velocity from the position delta after constraint solving,
	/// so positional corrections become velocity for free, then drop the
	/// accumulated forces.
	pub fn update_derivatives(&mut self, dt: f32) {
		self.velocity = (self.position - self.position_old) / dt;
		self.forces = V2::zeros();
	}

	/// Hard wall at `bound_x`: clamp and reflect with energy loss.
	pub fn resolve_boundary(&mut self, bound_x: f32, restitution: f32) {
		if self.position[0] > bound_x {
			self.position[0] = bound_x;
			self.velocity[0] = -restitution * self.velocity[0];
		}
	}

	/// Pinned-aware displacement, used by constraint relaxation.
	pub fn shift(&mut self, dp: V2) {
		if !self.moving {
			return;
		}
		self.position += dp;
	}
}
