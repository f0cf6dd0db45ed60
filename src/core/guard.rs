//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether a transition
//! may execute. The board uses them to keep the robot from stepping
//! over an edge.

use std::marker::PhantomData;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use toy_robot::core::{Guard, Position};
///
/// let below_top = Guard::new(|p: &Position| p.y < 5);
///
/// assert!(below_top.check(&Position::new(1, 4)));
/// assert!(!below_top.check(&Position::new(1, 5)));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
    _phantom: PhantomData<T>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
            _phantom: PhantomData,
        }
    }

    /// Check if the guard allows a transition from `value`.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}
