use crate::V2;

/// All simulation tuning in one place, no literals buried in the pipeline.
pub struct SolverConfig {
	/// relaxation passes over all constraints per sub-step
	pub iterations: usize,
	/// equal time slices per `update` call
	pub sub_steps: usize,
	pub gravity: V2,
	/// linear drag, force -= velocity * air_friction
	pub air_friction: f32,
	/// hard wall x coordinate
	pub boundary_x: f32,
	/// kept fraction of x-velocity on wall reflection
	pub boundary_restitution: f32,
	/// rest length = capture distance * rest_scale
	pub rest_scale: f32,
	/// vertical band for the group proximity scan
	pub collision_band: f32,
	/// x-velocity kick per counted neighbor
	pub collision_impulse: f32,
	/// the two group tags the proximity scan pits against each other
	pub collision_groups: [u32; 2],
}

impl Default for SolverConfig {
	fn default() -> Self {
		Self {
			iterations: 1,
			sub_steps: 16,
			gravity: V2::new(0.0, 1500.0),
			air_friction: 0.5,
			boundary_x: 1760.0,
			boundary_restitution: 0.5,
			rest_scale: 1.0,
			collision_band: 20.0,
			collision_impulse: 10.0,
			collision_groups: [1, 2],
		}
	}
}

impl SolverConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_iterations(mut self, iterations: usize) -> Self {
		self.iterations = iterations;
		self
	}

	pub fn with_sub_steps(mut self, sub_steps: usize) -> Self {
		self.sub_steps = sub_steps.max(1);
		self
	}

	pub fn with_gravity(mut self, gravity: V2) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_air_friction(mut self, air_friction: f32) -> Self {
		self.air_friction = air_friction;
		self
	}

	pub fn with_boundary_x(mut self, boundary_x: f32) -> Self {
		self.boundary_x = boundary_x;
		self
	}

	pub fn with_boundary_restitution(mut self, restitution: f32) -> Self {
		self.boundary_restitution = restitution;
		self
	}

	pub fn with_rest_scale(mut self, rest_scale: f32) -> Self {
		self.rest_scale = rest_scale;
		self
	}

	pub fn with_collision_band(mut self, band: f32) -> Self {
		self.collision_band = band;
		self
	}

	pub fn with_collision_impulse(mut self, impulse: f32) -> Self {
		self.collision_impulse = impulse;
		self
	}

	pub fn with_collision_groups(mut self, groups: [u32; 2]) -> Self {
		self.collision_groups = groups;
		self
	}
}
