use std::time::SystemTime;

use cloth::wind::{Wind, WindManager};
use verlet::cloth_model::ClothModel;
use verlet::solver::PhysicSolver;
use verlet::V2;

const WORLD_WIDTH: f32 = 1920.0;
const WORLD_HEIGHT: f32 = 1080.0;

fn main() {
	let mut solver = PhysicSolver::default();
	let spacing = 20.0;

	ClothModel::new(25, 25)
		.with_spacing(spacing)
		.with_origin(V2::new((WORLD_WIDTH - 24.0 * spacing) * 0.5, 0.0))
		.with_group(2)
		.add_to(&mut solver)
		.unwrap();
	ClothModel::new(25, 25)
		.with_spacing(spacing)
		.with_origin(V2::new((WORLD_WIDTH - 74.0 * spacing) * 0.5, 0.0))
		.with_group(1)
		.add_to(&mut solver)
		.unwrap();

	// pinned post near the boundary
	let post_top = solver.add_particle(V2::new(1860.0, 0.0), None);
	let post_bottom = solver.add_particle(V2::new(1860.0, 1000.0), None);
	solver.add_link(post_top, post_bottom, 1.5, 1.0).unwrap();
	solver.get_particle_mut(post_top).unwrap().moving = false;
	solver.get_particle_mut(post_bottom).unwrap().moving = false;

	let mut wind = WindManager::new(WORLD_WIDTH);
	wind.winds.push(Wind::new(
		V2::new(100.0, WORLD_HEIGHT),
		V2::zeros(),
		V2::new(1000.0, 0.0),
	));
	wind.winds.push(Wind::new(
		V2::new(20.0, WORLD_HEIGHT),
		V2::zeros(),
		V2::new(3000.0, 0.0),
	));

	let dt = 1.0 / 40.0;
	let frames = 400;
	let start = SystemTime::now();
	for _ in 0..frames {
		wind.update(&mut solver, dt);
		solver.update(dt);
	}
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	eprintln!(
		"INFO: {} frames, {} particles, {} links, {:.1} ms",
		frames,
		solver.particles().len(),
		solver.constraints().len(),
		duration as f32 / 1e3
	);
}
