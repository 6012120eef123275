use std::time::SystemTime;

use verlet::cloth_model::ClothModel;
use verlet::solver::PhysicSolver;
use verlet::V2;

fn main() {
	let mut solver = PhysicSolver::default();
	ClothModel::new(75, 51)
		.with_origin(V2::new(220.0, 0.0))
		.add_to(&mut solver)
		.unwrap();
	let dt = 1.0 / 40.0;
	let rframes = 100;
	let start = SystemTime::now();
	for _ in 0..rframes {
		solver.update(dt);
	}
	let duration = SystemTime::now().duration_since(start).unwrap().as_micros();
	let time = rframes as f32 * dt;
	eprintln!("{:.3}%", duration as f32 / time / 1e4);
}
