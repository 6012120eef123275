use verlet::solver::PhysicSolver;
use verlet::V2;

/// A rectangular gust sweeping rightward across the world, pushing every
/// particle inside it. Wraps back past the left edge once it leaves the
/// world.
pub struct Wind {
	pub size: V2,
	pub pos: V2,
	pub force: V2,
}

impl Wind {
	pub fn new(size: V2, pos: V2, force: V2) -> Self {
		Self { size, pos, force }
	}

	fn contains(&self, p: V2) -> bool {
		p[0] >= self.pos[0]
			&& p[0] <= self.pos[0] + self.size[0]
			&& p[1] >= self.pos[1]
			&& p[1] <= self.pos[1] + self.size[1]
	}

	fn apply(&self, solver: &mut PhysicSolver) {
		solver.map(|p| {
			if self.contains(p.position) {
				p.forces += self.force;
			}
		});
	}

	pub fn update(&mut self, solver: &mut PhysicSolver, dt: f32, world_width: f32) {
		self.pos[0] += self.force[0] * dt;
		if self.pos[0] > world_width {
			self.pos[0] = -self.size[0];
		}
		self.apply(solver);
	}
}

#[derive(Default)]
pub struct WindManager {
	pub world_width: f32,
	pub winds: Vec<Wind>,
}

impl WindManager {
	pub fn new(world_width: f32) -> Self {
		Self {
			world_width,
			winds: Vec::new(),
		}
	}

	pub fn update(&mut self, solver: &mut PhysicSolver, dt: f32) {
		for wind in self.winds.iter_mut() {
			wind.update(solver, dt, self.world_width);
		}
	}
}
