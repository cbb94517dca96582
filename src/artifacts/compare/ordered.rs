//! Merge-style alignment of two sorted sequences
//!
//! Both inputs must be sorted ascending under the same comparison that is passed in.
//! An unsorted input does not panic, it merely yields a wrong alignment.
//!
//! ## Algorithm
//!
//! Two cursors walk the sequences in a single pass (O(n + m)). A cursor past the
//! end of its sequence behaves as a value greater than any present one:
//!
//! - equal heads yield `Unmodified` and advance both cursors
//! - a smaller left head (or an exhausted right side) yields `Removed`
//! - anything else yields `Added`

use crate::artifacts::compare::change::Change;
use std::cmp::Ordering;
use std::iter::Peekable;

pub struct OrderedAlignment<T, F> {
    left: Peekable<std::vec::IntoIter<T>>,
    right: Peekable<std::vec::IntoIter<T>>,
    compare: F,
}

/// Lazily align two sorted sequences
pub fn align<T, F>(left: Vec<T>, right: Vec<T>, compare: F) -> OrderedAlignment<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    OrderedAlignment {
        left: left.into_iter().peekable(),
        right: right.into_iter().peekable(),
        compare,
    }
}

impl<T, F> Iterator for OrderedAlignment<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    type Item = Change<T>;

    fn next(&mut self) -> Option<Self::Item> {
        let ordering = match (self.left.peek(), self.right.peek()) {
            (None, None) => return None,
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (Some(left), Some(right)) => (self.compare)(left, right),
        };

        match ordering {
            Ordering::Equal => {
                let left = self.left.next()?;
                let right = self.right.next()?;
                Some(Change::unmodified(left, right))
            }
            Ordering::Less => self.left.next().map(Change::removed),
            Ordering::Greater => self.right.next().map(Change::added),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (left, _) = self.left.size_hint();
        let (right, _) = self.right.size_hint();
        (left.max(right), Some(left + right))
    }
}
