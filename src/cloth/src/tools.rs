use verlet::solver::PhysicSolver;
use verlet::V2;

/// Mouse-drag style force injection: every particle within `radius` of
/// `center` gets `force` added to its accumulator.
pub fn apply_force_in_radius(
	solver: &mut PhysicSolver,
	center: V2,
	radius: f32,
	force: V2,
) {
	let r2 = radius * radius;
	solver.map(|p| {
		if (p.position - center).magnitude_squared() <= r2 {
			p.forces += force;
		}
	});
}

/// Eraser tool: drop every particle within `radius` of `center`. Links
/// left dangling are pruned by the solver on the next frame.
pub fn erase_in_radius(solver: &mut PhysicSolver, center: V2, radius: f32) {
	let r2 = radius * radius;
	solver.remove_particles_if(|p| (p.position - center).magnitude_squared() <= r2);
}
