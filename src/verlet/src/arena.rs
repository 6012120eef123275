use crate::error::PhysicsError;

pub type Id = usize;

/// Dense storage with stable handles.
///
/// Elements live in a contiguous backing vector; an id -> slot table keeps
/// handles valid across removals (removal swap-pops the dense slot and
/// patches the table entry of the moved element). Freed ids are recycled
/// for later insertions, so a handle is only unique for its element's
/// lifetime. Iteration order is the dense order and changes on removal.
pub struct Arena<T> {
	data: Vec<T>,
	ids: Vec<Id>,
	slots: Vec<Option<usize>>,
	free: Vec<Id>,
}

impl<T> Default for Arena<T> {
	fn default() -> Self {
		Self {
			data: Vec::new(),
			ids: Vec::new(),
			slots: Vec::new(),
			free: Vec::new(),
		}
	}
}

impl<T> Arena<T> {
	pub fn len(&self) -> usize {
		self.data.len()
	}

	pub fn is_empty(&self) -> bool {
		self.data.is_empty()
	}

	pub fn insert(&mut self, value: T) -> Id {
		let id = match self.free.pop() {
			Some(id) => id,
			None => {
				self.slots.push(None);
				self.slots.len() - 1
			}
		};
		self.slots[id] = Some(self.data.len());
		self.data.push(value);
		self.ids.push(id);
		id
	}

	pub fn contains(&self, id: Id) -> bool {
		matches!(self.slots.get(id), Some(Some(_)))
	}

	fn slot_of(&self, id: Id) -> Result<usize, PhysicsError> {
		self.slots
			.get(id)
			.copied()
			.flatten()
			.ok_or(PhysicsError::InvalidHandle { id })
	}

	pub fn get(&self, id: Id) -> Result<&T, PhysicsError> {
		self.slot_of(id).map(|slot| &self.data[slot])
	}

	pub fn get_mut(&mut self, id: Id) -> Result<&mut T, PhysicsError> {
		let slot = self.slot_of(id)?;
		Ok(&mut self.data[slot])
	}

	/// Resolve two distinct handles at once.
	pub fn get_pair_mut(
		&mut self,
		a: Id,
		b: Id,
	) -> Result<(&mut T, &mut T), PhysicsError> {
		if a == b {
			return Err(PhysicsError::DegenerateLink);
		}
		let sa = self.slot_of(a)?;
		let sb = self.slot_of(b)?;
		if sa < sb {
			let (left, right) = self.data.split_at_mut(sb);
			Ok((&mut left[sa], &mut right[0]))
		} else {
			let (left, right) = self.data.split_at_mut(sa);
			Ok((&mut right[0], &mut left[sb]))
		}
	}

	/// Remove every element matching the predicate, invalidating its handle.
	pub fn remove_if<F: FnMut(&T) -> bool>(&mut self, mut f: F) {
		let mut i = 0;
		while i < self.data.len() {
			if f(&self.data[i]) {
				let id = self.ids[i];
				self.data.swap_remove(i);
				self.ids.swap_remove(i);
				self.slots[id] = None;
				self.free.push(id);
				if i < self.ids.len() {
					let moved = self.ids[i];
					self.slots[moved] = Some(i);
				}
			} else {
				i += 1;
			}
		}
	}

	pub fn iter(&self) -> impl Iterator<Item = &T> {
		self.data.iter()
	}

	pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
		self.data.iter_mut()
	}
}
