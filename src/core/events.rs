use crate::bodies::BodyIndex;
use crate::collision::{Contact, WallContact};
use std::collections::VecDeque;

/// Something that happened while resolving a tick
#[derive(Debug, Clone, PartialEq)]
pub enum CollisionEvent {
    /// Two bodies overlapped and were separated
    Pair(Contact),

    /// A body hit one or more viewport walls
    Wall {
        /// The body that was clamped
        body: BodyIndex,

        /// Which walls it touched
        sides: WallContact,
    },
}

/// Events recorded during the most recent tick, in resolution order
#[derive(Debug, Default)]
pub struct EventQueue {
    events: VecDeque<CollisionEvent>,
}

impl EventQueue {
    /// Creates a new empty event queue
    pub fn new() -> Self {
        Self {
            events: VecDeque::new(),
        }
    }

    /// Adds an event to the back of the queue
    pub fn push(&mut self, event: CollisionEvent) {
        self.events.push_back(event);
    }

    /// Takes the oldest event from the queue
    pub fn next_event(&mut self) -> Option<CollisionEvent> {
        self.events.pop_front()
    }

    /// Returns whether the queue is empty
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns the number of queued events
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Clears all events from the queue
    pub fn clear(&mut self) {
        self.events.clear();
    }

    /// Iterates over the queued events without consuming them
    pub fn iter(&self) -> impl Iterator<Item = &CollisionEvent> {
        self.events.iter()
    }

    /// Returns the pair contacts in the order they were resolved
    pub fn contacts(&self) -> Vec<&Contact> {
        self.events
            .iter()
            .filter_map(|e| match e {
                CollisionEvent::Pair(contact) => Some(contact),
                _ => None,
            })
            .collect()
    }

    /// Gets all events involving a specific body
    pub fn events_for_body(&self, body: BodyIndex) -> Vec<&CollisionEvent> {
        self.events
            .iter()
            .filter(|e| match e {
                CollisionEvent::Pair(contact) => contact.pair.contains(body),
                CollisionEvent::Wall { body: b, .. } => *b == body,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collision::CollisionPair;
    use crate::math::Vector2;

    fn contact(a: BodyIndex, b: BodyIndex) -> CollisionEvent {
        CollisionEvent::Pair(Contact {
            pair: CollisionPair::new(a, b),
            normal: Vector2::unit_x(),
            penetration: 1.0,
            degenerate: false,
        })
    }

    #[test]
    fn filters_events_by_body() {
        let mut queue = EventQueue::new();
        queue.push(contact(0, 1));
        queue.push(contact(1, 2));
        queue.push(CollisionEvent::Wall { body: 2, sides: WallContact::LEFT });

        assert_eq!(queue.events_for_body(0).len(), 1);
        assert_eq!(queue.events_for_body(1).len(), 2);
        assert_eq!(queue.events_for_body(2).len(), 2);
        assert!(queue.events_for_body(3).is_empty());
        assert_eq!(queue.contacts().len(), 2);
    }

    #[test]
    fn drains_in_push_order() {
        let mut queue = EventQueue::new();
        queue.push(contact(0, 1));
        queue.push(CollisionEvent::Wall { body: 0, sides: WallContact::TOP });

        assert_eq!(queue.next_event(), Some(contact(0, 1)));
        assert_eq!(queue.len(), 1);
        assert!(matches!(queue.next_event(), Some(CollisionEvent::Wall { body: 0, .. })));
        assert_eq!(queue.next_event(), None);
        assert!(queue.is_empty());
    }
}
