//! Greedy alignment of two sequences with no assumed order
//!
//! Items are paired through a caller supplied equality predicate, which is usually an
//! identity check ("same declared name and kind") rather than full content equality.
//! The matching is greedy and single-lookahead: it resolves moved items well but does
//! not attempt a globally minimal edit script.
//!
//! ## Algorithm
//!
//! Each round looks at the current heads of both lists:
//!
//! 1. If the heads are equal they are emitted as `Unmodified` and both are consumed.
//! 2. Otherwise the left head is consumed and the right list *without its head* is
//!    scanned for a match (`Unmodified`), falling back to `Removed`.
//! 3. Then the right head is consumed and the *whole remaining* left list is scanned
//!    for a match (`Unmodified`), falling back to `Added`.
//!
//! The predicate is never invoked with an absent item.

use crate::artifacts::compare::change::Change;
use std::collections::VecDeque;

pub struct UnorderedAlignment<T, F> {
    left: VecDeque<T>,
    right: VecDeque<T>,
    pending: VecDeque<Change<T>>,
    equal: F,
}

/// Lazily align two unordered sequences
pub fn align<T, F>(left: Vec<T>, right: Vec<T>, equal: F) -> UnorderedAlignment<T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    UnorderedAlignment {
        left: left.into(),
        right: right.into(),
        pending: VecDeque::with_capacity(2),
        equal,
    }
}

impl<T, F> UnorderedAlignment<T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    fn heads_match(&mut self) -> bool {
        match (self.left.front(), self.right.front()) {
            (Some(left), Some(right)) => (self.equal)(left, right),
            _ => false,
        }
    }

    fn rescue_left_head(&mut self) {
        let Some(left) = self.left.pop_front() else {
            return;
        };

        // the right head was already compared against this item
        let position = self
            .right
            .iter()
            .skip(1)
            .position(|right| (self.equal)(&left, right))
            .map(|position| position + 1);

        let change = match position.and_then(|position| self.right.remove(position)) {
            Some(right) => Change::unmodified(left, right),
            None => Change::removed(left),
        };
        self.pending.push_back(change);
    }

    fn rescue_right_head(&mut self) {
        let Some(right) = self.right.pop_front() else {
            return;
        };

        let position = self
            .left
            .iter()
            .position(|left| (self.equal)(left, &right));

        let change = match position.and_then(|position| self.left.remove(position)) {
            Some(left) => Change::unmodified(left, right),
            None => Change::added(right),
        };
        self.pending.push_back(change);
    }
}

impl<T, F> Iterator for UnorderedAlignment<T, F>
where
    F: FnMut(&T, &T) -> bool,
{
    type Item = Change<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(change) = self.pending.pop_front() {
            return Some(change);
        }

        if self.left.is_empty() && self.right.is_empty() {
            return None;
        }

        if self.heads_match() {
            let left = self.left.pop_front()?;
            let right = self.right.pop_front()?;
            return Some(Change::unmodified(left, right));
        }

        self.rescue_left_head();
        self.rescue_right_head();

        self.pending.pop_front()
    }
}
