use fnv::FnvHashMap;

use crate::arena::{Arena, Id};
use crate::config::SolverConfig;
use crate::constraint::LinkConstraint;
use crate::error::PhysicsError;
use crate::particle::Particle;
use crate::V2;

/// Owns the particle and constraint stores and runs the frame pipeline.
///
/// `update` runs to completion on the calling thread; callers mutate the
/// stores only between frames.
pub struct PhysicSolver {
	pub config: SolverConfig,
	particles: Arena<Particle>,
	constraints: Arena<LinkConstraint>,
}

impl Default for PhysicSolver {
	fn default() -> Self {
		Self::new(SolverConfig::default())
	}
}

impl PhysicSolver {
	pub fn new(config: SolverConfig) -> Self {
		Self {
			config,
			particles: Arena::default(),
			constraints: Arena::default(),
		}
	}

	pub fn particles(&self) -> &Arena<Particle> {
		&self.particles
	}

	pub fn constraints(&self) -> &Arena<LinkConstraint> {
		&self.constraints
	}

	pub fn get_particle(&self, id: Id) -> Result<&Particle, PhysicsError> {
		self.particles.get(id)
	}

	pub fn get_particle_mut(
		&mut self,
		id: Id,
	) -> Result<&mut Particle, PhysicsError> {
		self.particles.get_mut(id)
	}

	pub fn add_particle(&mut self, position: V2, group: Option<u32>) -> Id {
		let id = self.particles.insert(Particle::new(position).with_group(group));
		if let Ok(p) = self.particles.get_mut(id) {
			p.id = id;
		}
		id
	}

	/// Link two particles with a rest length captured from their current
	/// distance. Stale handles are rejected rather than silently ignored,
	/// a dropped link would desynchronize the cloth topology.
	pub fn add_link(
		&mut self,
		p1: Id,
		p2: Id,
		max_elongation_ratio: f32,
		strength: f32,
	) -> Result<Id, PhysicsError> {
		if p1 == p2 {
			return Err(PhysicsError::DegenerateLink);
		}
		let a = self.particles.get(p1)?;
		let b = self.particles.get(p2)?;
		let rest = (a.position - b.position).magnitude() * self.config.rest_scale;
		let id = self.constraints.insert(
			LinkConstraint::new(p1, p2, rest)
				.with_max_elongation_ratio(max_elongation_ratio)
				.with_strength(strength),
		);
		if let Ok(c) = self.constraints.get_mut(id) {
			c.id = id;
		}
		Ok(id)
	}

	/// Apply a callback to every live particle, for external force injection.
	pub fn map<F: FnMut(&mut Particle)>(&mut self, mut f: F) {
		for p in self.particles.iter_mut() {
			f(p);
		}
	}

	/// Remove every particle matching the predicate. Links referencing a
	/// removed particle stop resolving and are pruned next frame.
	pub fn remove_particles_if<F: FnMut(&Particle) -> bool>(&mut self, f: F) {
		self.particles.remove_if(f);
	}

	/// Advance one frame: prune broken links once, then run the sub-step
	/// pipeline in fixed order. The ordering is the contract, forces must
	/// land before integration and derivatives after relaxation.
	pub fn update(&mut self, dt: f32) {
		let sub_dt = dt / self.config.sub_steps as f32;
		self.remove_broken_links();
		for _ in 0..self.config.sub_steps {
			self.apply_gravity();
			self.apply_air_friction();
			self.solve_group_collisions();
			self.update_positions(sub_dt);
			self.solve_constraints();
			self.update_derivatives(sub_dt);
			self.solve_boundary();
		}
	}

	fn apply_gravity(&mut self) {
		let gravity = self.config.gravity;
		for p in self.particles.iter_mut() {
			p.forces += gravity * p.mass;
		}
	}

	fn apply_air_friction(&mut self) {
		let friction = self.config.air_friction;
		for p in self.particles.iter_mut() {
			p.forces -= p.velocity * friction;
		}
	}

	fn update_positions(&mut self, dt: f32) {
		for p in self.particles.iter_mut() {
			p.integrate(dt);
		}
	}

	fn solve_constraints(&mut self) {
		for _ in 0..self.config.iterations {
			// arena order, deterministic between removals
			for c in self.constraints.iter_mut() {
				c.solve(&mut self.particles);
			}
		}
	}

	fn update_derivatives(&mut self, dt: f32) {
		for p in self.particles.iter_mut() {
			p.update_derivatives(dt);
		}
	}

	fn solve_boundary(&mut self) {
		let bound_x = self.config.boundary_x;
		let restitution = self.config.boundary_restitution;
		for p in self.particles.iter_mut() {
			p.resolve_boundary(bound_x, restitution);
		}
	}

	fn remove_broken_links(&mut self) {
		let particles = &self.particles;
		self.constraints.remove_if(|c| !c.is_valid(particles));
	}

	/// Proximity scan between the two configured groups: a particle gets a
	/// horizontal kick away from every opposing particle sharing its
	/// vertical band on the pushing side. Positions are snapshotted first
	/// so the counts do not depend on iteration order. O(n*m), fine at
	/// cloth-demo scale.
	fn solve_group_collisions(&mut self) {
		let [tag_1, tag_2] = self.config.collision_groups;
		let band = self.config.collision_band;
		let impulse = self.config.collision_impulse;
		let mut buckets: FnvHashMap<u32, Vec<(Id, V2)>> = FnvHashMap::default();
		for p in self.particles.iter() {
			if let Some(tag) = p.group {
				buckets.entry(tag).or_default().push((p.id, p.position));
			}
		}
		let empty = Vec::new();
		let group_1 = buckets.get(&tag_1).unwrap_or(&empty);
		let group_2 = buckets.get(&tag_2).unwrap_or(&empty);
		let mut kicks: Vec<(Id, f32)> = Vec::new();
		for (id, pos) in group_1 {
			let num = group_2
				.iter()
				.filter(|(_, q)| (pos[1] - q[1]).abs() < band && q[0] > pos[0])
				.count();
			if num > 0 {
				kicks.push((*id, -impulse * num as f32));
			}
		}
		for (id, pos) in group_2 {
			let num = group_1
				.iter()
				.filter(|(_, q)| (pos[1] - q[1]).abs() < band && q[0] < pos[0])
				.count();
			if num > 0 {
				kicks.push((*id, impulse * num as f32));
			}
		}
		for (id, dv) in kicks {
			if let Ok(p) = self.particles.get_mut(id) {
				p.velocity[0] += dv;
			}
		}
	}
}
