use std::fmt;

/// Errors for handle misuse and bad scene parameters.
///
/// Expected simulation events (pinned particles, broken links) are not
/// errors; broken links are pruned silently each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhysicsError {
	/// A handle no longer resolves to a live element.
	InvalidHandle { id: usize },
	/// A link between a particle and itself.
	DegenerateLink,
	/// Cloth grids need at least 2x2 particles.
	InvalidGridDimensions { width: usize, height: usize },
}

impl fmt::Display for PhysicsError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::InvalidHandle { id } => {
				write!(f, "handle {} does not resolve to a live element", id)
			}
			Self::DegenerateLink => {
				write!(f, "link endpoints must be two distinct particles")
			}
			Self::InvalidGridDimensions { width, height } => {
				write!(f, "cloth grid {}x{} is below the 2x2 minimum", width, height)
			}
		}
	}
}

impl std::error::Error for PhysicsError {}
