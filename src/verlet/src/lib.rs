pub mod arena;
pub mod cloth_model;
pub mod config;
pub mod constraint;
pub mod error;
pub mod particle;
pub mod solver;

pub use arena::{Arena, Id};
pub use cloth_model::ClothModel;
pub use config::SolverConfig;
pub use constraint::LinkConstraint;
pub use error::PhysicsError;
pub use particle::Particle;
pub use solver::PhysicSolver;

pub type V2 = nalgebra::Vector2<f32>;
