mod cursor;
mod sequence;
#[cfg(feature = "serde")]
mod serde_impl;
mod stack;

pub use cursor::Cursor;
pub use sequence::{nullable_eq, OrderedSequence, Present};
pub use stack::{IntoIter, Iter, LinkedStack, Stack, StackCursor};

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::ptr;
use thiserror::Error;

// How a null element is rendered by `Collection::render`.
pub const NULL_MARKER: &str = "null";

// Separator appended after every rendered element.
pub const RENDER_SEPARATOR: &str = " ,";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollectionError {
    #[error("a required argument was absent")]
    NullArgument,
    #[error("illegal argument: {0}")]
    IllegalArgument(&'static str),
    #[error("`{0}` is not supported by this structure")]
    Unsupported(&'static str),
    #[error("cursor has no next element")]
    Exhausted,
    #[error("cursor has no element to remove")]
    IllegalState,
}

pub type CollectionResult<T> = Result<T, CollectionError>;

/// A mutable collection built from three primitives: `len` and `iterator`
/// (through [`OrderedSequence`]) and [`add`](Collection::add), plus a
/// [`Cursor`] for removal. Every other operation has a default written only in
/// terms of those, which concrete structures may override or refuse.
///
/// Elements are nullable: a slot is `Option<Item>`, and membership and
/// equality use [`nullable_eq`].
pub trait Collection: OrderedSequence {
    type Cursor<'c>: Cursor<Item = Self::Item>
    where
        Self: 'c;

    fn cursor(&mut self) -> Self::Cursor<'_>;

    // Returns whether the structure changed. Structures with constraints on
    // their elements fail with `Unsupported`, `IllegalArgument` or
    // `IllegalState`.
    fn add(&mut self, element: Option<Self::Item>) -> CollectionResult<bool>;

    fn size(&self) -> usize {
        self.len()
    }

    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    // Multiset check: duplicates in `source` are each looked up on their own.
    fn contains_all<S>(&self, source: Option<&S>) -> CollectionResult<bool>
    where
        S: OrderedSequence<Item = Self::Item> + ?Sized,
        Self::Item: PartialEq,
    {
        let source = source.ok_or(CollectionError::NullArgument)?;
        Ok(source.iterator().all(|element| self.contains(element)))
    }

    /// Adds every slot of `source`, in its iteration order, through
    /// [`add`](Collection::add). Returns whether `source` had any slot. A
    /// failing `add` stops the run and leaves earlier additions in place.
    ///
    /// A collection can never be appended to itself: the borrow checker
    /// refuses to lend it both ways at once.
    ///
    /// ```compile_fail
    /// use linked_collections::{Collection, LinkedStack};
    ///
    /// let mut stack = LinkedStack::new();
    /// stack.push(1);
    /// stack.add_all(Some(&stack)).unwrap();
    /// ```
    fn add_all<S>(&mut self, source: Option<&S>) -> CollectionResult<bool>
    where
        S: OrderedSequence<Item = Self::Item> + ?Sized,
        Self::Item: Clone,
    {
        let source = source.ok_or(CollectionError::NullArgument)?;
        let mut modified = false;
        for element in source.iterator() {
            self.add(element.cloned())?;
            modified = true;
        }
        Ok(modified)
    }

    // Removes the first slot matching `element`.
    fn remove(&mut self, element: Option<&Self::Item>) -> CollectionResult<bool>
    where
        Self::Item: PartialEq,
    {
        let mut cursor = self.cursor();
        while cursor.has_next() {
            if nullable_eq(cursor.next()?, element) {
                cursor.remove()?;
                return Ok(true);
            }
        }
        Ok(false)
    }

    // Set difference: drops every slot that `source` contains.
    fn remove_all<S>(&mut self, source: Option<&S>) -> CollectionResult<bool>
    where
        S: OrderedSequence<Item = Self::Item> + ?Sized,
        Self::Item: PartialEq,
    {
        let source = source.ok_or(CollectionError::NullArgument)?;
        let mut modified = false;
        let mut cursor = self.cursor();
        while cursor.has_next() {
            if source.contains(cursor.next()?) {
                cursor.remove()?;
                modified = true;
            }
        }
        Ok(modified)
    }

    /// Set intersection: drops every slot that `source` does not contain.
    ///
    /// Intersecting a collection with itself would change nothing, and the
    /// borrow checker rejects it outright:
    ///
    /// ```compile_fail
    /// use linked_collections::{Collection, LinkedStack};
    ///
    /// let mut stack: LinkedStack<i32> = LinkedStack::new();
    /// stack.retain_all(Some(&stack)).unwrap();
    /// ```
    fn retain_all<S>(&mut self, source: Option<&S>) -> CollectionResult<bool>
    where
        S: OrderedSequence<Item = Self::Item> + ?Sized,
        Self::Item: PartialEq,
    {
        let source = source.ok_or(CollectionError::NullArgument)?;
        let mut modified = false;
        let mut cursor = self.cursor();
        while cursor.has_next() {
            if !source.contains(cursor.next()?) {
                cursor.remove()?;
                modified = true;
            }
        }
        Ok(modified)
    }

    fn clear(&mut self) -> CollectionResult<()> {
        let mut cursor = self.cursor();
        while cursor.has_next() {
            cursor.next()?;
            cursor.remove()?;
        }
        Ok(())
    }

    // Positional equality: same length and matching slots in iteration order.
    fn equals<S>(&self, other: &S) -> bool
    where
        S: OrderedSequence<Item = Self::Item> + ?Sized,
        Self::Item: PartialEq,
    {
        if ptr::addr_eq(self as *const Self, other as *const S) {
            return true;
        }
        if self.size() != other.len() {
            return false;
        }
        self.iterator()
            .zip(other.iterator())
            .all(|(left, right)| nullable_eq(left, right))
    }

    // Wrapping sum of the hashes of the present elements. The sum ignores
    // order while `equals` does not, so reorderings of one multiset collide.
    fn hash_code(&self) -> u64
    where
        Self::Item: Hash,
    {
        self.iterator().flatten().fold(0u64, |sum, element| {
            let mut hasher = DefaultHasher::new();
            element.hash(&mut hasher);
            sum.wrapping_add(hasher.finish())
        })
    }

    fn to_array(&self) -> Vec<Option<Self::Item>>
    where
        Self::Item: Clone,
    {
        let mut snapshot = Vec::with_capacity(self.size());
        snapshot.extend(self.iterator().map(|element| element.cloned()));
        snapshot
    }

    // Fills `target` when it is long enough, writing a null terminator right
    // after the last element and leaving any later slots untouched. A short
    // target is replaced by a vector sized exactly to the collection.
    fn to_array_into(
        &self,
        target: Option<Vec<Option<Self::Item>>>,
    ) -> CollectionResult<Vec<Option<Self::Item>>>
    where
        Self::Item: Clone,
    {
        let mut target = target.ok_or(CollectionError::NullArgument)?;
        if self.is_empty() {
            return Ok(target);
        }

        let size = self.size();
        if target.len() < size {
            return Ok(self.to_array());
        }

        for (slot, element) in target.iter_mut().zip(self.iterator()) {
            *slot = element.cloned();
        }
        if let Some(terminator) = target.get_mut(size) {
            *terminator = None;
        }
        Ok(target)
    }

    fn render(&self) -> String
    where
        Self::Item: std::fmt::Display,
    {
        self.iterator()
            .map(|element| match element {
                Some(element) => format!("{element}{RENDER_SEPARATOR}"),
                None => format!("{NULL_MARKER}{RENDER_SEPARATOR}"),
            })
            .collect()
    }
}
