use crate::bodies::{Body, BodyIndex};
use crate::error::SimulationError;
use crate::Result;

/// Ordered storage for the simulated bodies.
///
/// Indices are stable for the lifetime of the store: bodies are only ever
/// appended while the simulation is being set up, never removed.
#[derive(Debug, Clone, Default)]
pub struct BodyStore {
    items: Vec<Body>,
}

impl BodyStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Creates an empty store with room for `capacity` bodies
    pub fn with_capacity(capacity: usize) -> Self {
        Self { items: Vec::with_capacity(capacity) }
    }

    /// Appends a body and returns its index
    pub fn add(&mut self, body: Body) -> BodyIndex {
        self.items.push(body);
        self.items.len() - 1
    }

    /// Gets a reference to a body by index
    pub fn get(&self, index: BodyIndex) -> Option<&Body> {
        self.items.get(index)
    }

    /// Gets a mutable reference to a body by index
    pub fn get_mut(&mut self, index: BodyIndex) -> Option<&mut Body> {
        self.items.get_mut(index)
    }

    /// Gets a body by index, returning an error if not found
    pub fn get_body(&self, index: BodyIndex) -> Result<&Body> {
        self.get(index)
            .ok_or_else(|| SimulationError::ResourceNotFound(format!("Body with index {} not found", index)))
    }

    /// Gets a mutable reference to a body by index, returning an error if not found
    pub fn get_body_mut(&mut self, index: BodyIndex) -> Result<&mut Body> {
        self.get_mut(index)
            .ok_or_else(|| SimulationError::ResourceNotFound(format!("Body with index {} not found", index)))
    }

    /// Borrows two distinct bodies mutably at once, in the order requested.
    ///
    /// Returns `None` if `a == b` or either index is out of range.
    pub fn pair_mut(&mut self, a: BodyIndex, b: BodyIndex) -> Option<(&mut Body, &mut Body)> {
        if a == b || a >= self.items.len() || b >= self.items.len() {
            return None;
        }

        if a < b {
            let (head, tail) = self.items.split_at_mut(b);
            Some((&mut head[a], &mut tail[0]))
        } else {
            let (head, tail) = self.items.split_at_mut(a);
            Some((&mut tail[0], &mut head[b]))
        }
    }

    /// Returns the number of bodies in the store
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether the store is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the bodies as a slice, in index order
    pub fn as_slice(&self) -> &[Body] {
        &self.items
    }

    /// Returns an iterator over all bodies with their indices
    pub fn iter(&self) -> impl Iterator<Item = (BodyIndex, &Body)> + '_ {
        self.items.iter().enumerate()
    }

    /// Returns a mutable iterator over all bodies with their indices
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BodyIndex, &mut Body)> + '_ {
        self.items.iter_mut().enumerate()
    }
}

impl FromIterator<Body> for BodyStore {
    fn from_iter<I: IntoIterator<Item = Body>>(iter: I) -> Self {
        Self { items: iter.into_iter().collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Vector2;

    fn store_of(n: usize) -> BodyStore {
        (0..n)
            .map(|i| Body::at_rest(Vector2::new(i as f32 * 10.0, 0.0), 1.0).unwrap())
            .collect()
    }

    #[test]
    fn pair_mut_preserves_requested_order() {
        let mut store = store_of(3);
        let (a, b) = store.pair_mut(2, 0).unwrap();
        assert_eq!(a.get_center().x, 20.0);
        assert_eq!(b.get_center().x, 0.0);
    }

    #[test]
    fn pair_mut_rejects_aliasing_and_out_of_range() {
        let mut store = store_of(2);
        assert!(store.pair_mut(1, 1).is_none());
        assert!(store.pair_mut(0, 2).is_none());
    }

    #[test]
    fn missing_body_is_an_error() {
        let store = store_of(1);
        assert!(store.get_body(0).is_ok());
        assert!(store.get_body(1).is_err());
    }

    #[test]
    fn get_body_mut_edits_in_place() {
        let mut store = store_of(2);
        store.get_body_mut(1).unwrap().set_velocity(Vector2::new(3.0, -1.0));
        assert_eq!(store.get(1).unwrap().get_velocity(), Vector2::new(3.0, -1.0));
        assert!(store.get_body_mut(2).is_err());
    }
}
