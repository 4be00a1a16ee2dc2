use crate::bodies::BodyIndex;

/// An unordered pair of bodies, stored lower index first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CollisionPair {
    /// The lower-indexed body, the one scanning for collisions
    pub body_a: BodyIndex,

    /// The higher-indexed body
    pub body_b: BodyIndex,
}

impl CollisionPair {
    /// Creates a new collision pair
    pub fn new(body_a: BodyIndex, body_b: BodyIndex) -> Self {
        // Always sort the indices to ensure consistent ordering
        if body_a <= body_b {
            Self { body_a, body_b }
        } else {
            Self { body_a: body_b, body_b: body_a }
        }
    }

    /// Checks if this collision pair contains the specified body
    pub fn contains(&self, body: BodyIndex) -> bool {
        self.body_a == body || self.body_b == body
    }

    /// Returns the other body in the pair
    pub fn other(&self, body: BodyIndex) -> Option<BodyIndex> {
        if self.body_a == body {
            Some(self.body_b)
        } else if self.body_b == body {
            Some(self.body_a)
        } else {
            None
        }
    }
}

/// Every pair `(i, j)` with `i < j < count`, in the order the step resolves them
pub fn scan_order(count: usize) -> impl Iterator<Item = CollisionPair> {
    (0..count).flat_map(move |i| ((i + 1)..count).map(move |j| CollisionPair { body_a: i, body_b: j }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_sorts_indices() {
        assert_eq!(CollisionPair::new(4, 1), CollisionPair::new(1, 4));
        assert_eq!(CollisionPair::new(4, 1).body_a, 1);
    }

    #[test]
    fn scan_order_is_ascending() {
        let pairs: Vec<(usize, usize)> = scan_order(3).map(|p| (p.body_a, p.body_b)).collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 2)]);
    }

    #[test]
    fn other_returns_the_partner() {
        let pair = CollisionPair::new(3, 7);
        assert!(pair.contains(7));
        assert_eq!(pair.other(3), Some(7));
        assert_eq!(pair.other(7), Some(3));
        assert_eq!(pair.other(5), None);
    }
}
