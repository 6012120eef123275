use crate::arena::{Arena, Id};
use crate::particle::Particle;

/// Elastic distance constraint between two particle handles.
///
/// The endpoints are relations, not owners: each access resolves through
/// the particle arena, and a handle that stops resolving breaks the link.
#[derive(Clone)]
pub struct LinkConstraint {
	pub id: Id,
	pub particles: [Id; 2],
	pub rest_length: f32,
	pub strength: f32,
	pub max_elongation_ratio: f32,
	broken: bool,
}

impl LinkConstraint {
	pub fn new(p1: Id, p2: Id, rest_length: f32) -> Self {
		Self {
			id: 0,
			particles: [p1, p2],
			rest_length,
			strength: 1.0,
			max_elongation_ratio: 1.5,
			broken: false,
		}
	}

	pub fn with_strength(mut self, strength: f32) -> Self {
		self.strength = strength;
		self
	}

	pub fn with_max_elongation_ratio(mut self, ratio: f32) -> Self {
		self.max_elongation_ratio = ratio;
		self
	}

	pub fn is_broken(&self) -> bool {
		self.broken
	}

	/// A link holds while both endpoints resolve and the current length
	/// stays under `rest_length * max_elongation_ratio`. Once `solve` has
	/// observed an over-stretch the link stays broken for good.
	pub fn is_valid(&self, particles: &Arena<Particle>) -> bool {
		if self.broken {
			return false;
		}
		match (
			particles.get(self.particles[0]),
			particles.get(self.particles[1]),
		) {
			(Ok(p1), Ok(p2)) => {
				let dist = (p1.position - p2.position).magnitude();
				dist <= self.rest_length * self.max_elongation_ratio
			}
			_ => false,
		}
	}

	/// One Gauss-Seidel relaxation pass: pull both endpoints along the link
	/// axis toward the rest length, each by its inverse-mass share. Pinned
	/// endpoints take no displacement.
	pub fn solve(&mut self, particles: &mut Arena<Particle>) {
		if self.broken {
			return;
		}
		let (p1, p2) =
			match particles.get_pair_mut(self.particles[0], self.particles[1]) {
				Ok(pair) => pair,
				Err(_) => {
					self.broken = true;
					return;
				}
			};
		let dp = p1.position - p2.position;
		let dist = dp.magnitude();
		if dist <= f32::EPSILON {
			// coincident endpoints, no defined axis
			eprintln!("WARN: degenerate link {}", self.id);
			return;
		}
		let w1 = p1.inv_mass();
		let w2 = p2.inv_mass();
		let w = w1 + w2;
		if w > 0.0 {
			let c = self.strength * (dist - self.rest_length) / dist;
			p1.shift(-dp * (c * w1 / w));
			p2.shift(dp * (c * w2 / w));
		}
		if dist > self.rest_length * self.max_elongation_ratio {
			self.broken = true;
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::V2;

	fn pair(a: V2, b: V2) -> (Arena<Particle>, Id, Id) {
		let mut particles = Arena::default();
		let p1 = particles.insert(Particle::new(a));
		let p2 = particles.insert(Particle::new(b));
		(particles, p1, p2)
	}

	#[test]
	fn solve_restores_rest_length() {
		let (mut particles, p1, p2) =
			pair(V2::new(0.0, 0.0), V2::new(12.0, 0.0));
		let mut link = LinkConstraint::new(p1, p2, 10.0)
			.with_max_elongation_ratio(2.0);
		link.solve(&mut particles);
		let d = particles.get(p1).unwrap().position
			- particles.get(p2).unwrap().position;
		assert!((d.magnitude() - 10.0).abs() < 1e-4, "got {}", d.magnitude());
		assert!(!link.is_broken());
	}

	#[test]
	fn pinned_endpoint_takes_no_displacement() {
		let (mut particles, p1, p2) =
			pair(V2::new(0.0, 0.0), V2::new(12.0, 0.0));
		particles.get_mut(p1).unwrap().moving = false;
		let mut link = LinkConstraint::new(p1, p2, 10.0)
			.with_max_elongation_ratio(2.0);
		link.solve(&mut particles);
		assert_eq!(particles.get(p1).unwrap().position, V2::new(0.0, 0.0));
		assert!(
			(particles.get(p2).unwrap().position[0] - 10.0).abs() < 1e-4
		);
	}

	#[test]
	fn heavier_endpoint_moves_less() {
		let (mut particles, p1, p2) =
			pair(V2::new(0.0, 0.0), V2::new(20.0, 0.0));
		particles.get_mut(p1).unwrap().mass = 10.0;
		let mut link = LinkConstraint::new(p1, p2, 10.0)
			.with_max_elongation_ratio(3.0);
		link.solve(&mut particles);
		let moved_1 = particles.get(p1).unwrap().position[0];
		let moved_2 = 20.0 - particles.get(p2).unwrap().position[0];
		assert!(moved_1 > 0.0 && moved_2 > 0.0);
		assert!(moved_1 < moved_2);
	}

	#[test]
	fn coincident_endpoints_are_a_no_op() {
		let (mut particles, p1, p2) =
			pair(V2::new(5.0, 5.0), V2::new(5.0, 5.0));
		let mut link = LinkConstraint::new(p1, p2, 0.0);
		link.solve(&mut particles);
		let pos = particles.get(p1).unwrap().position;
		assert!(pos[0].is_finite() && pos[1].is_finite());
		assert_eq!(pos, V2::new(5.0, 5.0));
	}

	#[test]
	fn over_stretch_breaks_permanently() {
		let (mut particles, p1, p2) =
			pair(V2::new(0.0, 0.0), V2::new(20.0, 0.0));
		let mut link = LinkConstraint::new(p1, p2, 10.0)
			.with_max_elongation_ratio(1.5);
		assert!(!link.is_valid(&particles));
		link.solve(&mut particles);
		assert!(link.is_broken());
		// pulling the endpoints back together does not reinstate it
		particles.get_mut(p2).unwrap().position = V2::new(10.0, 0.0);
		assert!(!link.is_valid(&particles));
	}

	#[test]
	fn missing_endpoint_invalidates() {
		let (mut particles, p1, p2) =
			pair(V2::new(0.0, 0.0), V2::new(10.0, 0.0));
		let link = LinkConstraint::new(p1, p2, 10.0);
		particles.remove_if(|p| p.position[0] > 5.0);
		assert!(particles.contains(p1));
		assert!(!link.is_valid(&particles));
	}
}
