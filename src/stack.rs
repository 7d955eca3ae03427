use crate::{Collection, CollectionError, CollectionResult, Cursor, OrderedSequence};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FusedIterator;

// Last-in-first-out contract. `pop` and `peek` answer `None` on an empty
// stack; a stored null element answers `None` as well, so callers that keep
// nulls check `is_empty` to tell the two apart.
pub trait Stack: Collection {
    fn push(&mut self, element: Option<Self::Item>);

    fn pop(&mut self) -> Option<Self::Item>;

    fn peek(&self) -> Option<&Self::Item>;
}

struct Node<E> {
    // Older neighbour, i.e. the node pushed right before this one.
    next: Option<Box<Node<E>>>,
    element: Option<E>,
}

/// A stack of nullable elements built from singly-linked nodes.
///
/// Iteration runs from the top down, so it visits elements in the order
/// `pop` would return them. Removal at arbitrary positions is refused:
/// [`Collection::remove`], [`Collection::remove_all`] and
/// [`Collection::retain_all`] fail with [`CollectionError::Unsupported`].
///
/// ```
/// use linked_collections::{Collection, LinkedStack};
///
/// let mut stack = LinkedStack::new();
/// stack.add_all(Some(&[1, 2, 3])).unwrap();
/// stack.push(None);
///
/// assert_eq!(stack.len(), 4);
/// assert_eq!(stack.render(), "null ,3 ,2 ,1 ,");
/// assert_eq!(stack.pop(), None);
/// assert_eq!(stack.pop(), Some(3));
/// ```
pub struct LinkedStack<E> {
    head: Option<Box<Node<E>>>,
    len: usize,
}

impl<E> LinkedStack<E> {
    pub const fn new() -> Self {
        Self { head: None, len: 0 }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, element: impl Into<Option<E>>) {
        let node = Box::new(Node {
            next: self.head.take(),
            element: element.into(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    pub fn pop(&mut self) -> Option<E> {
        self.pop_slot().flatten()
    }

    pub fn peek(&self) -> Option<&E> {
        self.head.as_ref()?.element.as_ref()
    }

    // Resets the stack to its freshly constructed state.
    pub fn clear(&mut self) {
        let chain = self.head.take();
        self.len = 0;
        unlink(chain);
    }

    pub fn iter(&self) -> Iter<'_, E> {
        Iter {
            next: self.head.as_deref(),
            remaining: self.len,
        }
    }

    // Outer `None` means the stack was empty, inner `None` a null element.
    fn pop_slot(&mut self) -> Option<Option<E>> {
        let node = self.head.take()?;
        let Node { next, element } = *node;
        self.head = next;
        self.len -= 1;
        Some(element)
    }
}

// Drops a chain node by node; letting `Box` recurse would overflow the call
// stack on long chains.
fn unlink<E>(mut link: Option<Box<Node<E>>>) {
    while let Some(mut node) = link {
        link = node.next.take();
    }
}

impl<E> Drop for LinkedStack<E> {
    fn drop(&mut self) {
        unlink(self.head.take());
    }
}

impl<E> Default for LinkedStack<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> Clone for LinkedStack<E>
where
    E: Clone,
{
    fn clone(&self) -> Self {
        let slots: Vec<Option<&E>> = self.iter().collect();
        slots.into_iter().rev().map(|slot| slot.cloned()).collect()
    }
}

impl<E> fmt::Debug for LinkedStack<E>
where
    E: fmt::Debug,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.debug_list().entries(self.iter()).finish()
    }
}

impl<E> fmt::Display for LinkedStack<E>
where
    E: fmt::Display,
{
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        fmt.write_str(&self.render())
    }
}

impl<E> PartialEq for LinkedStack<E>
where
    E: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl<E> Eq for LinkedStack<E> where E: Eq {}

impl<E> Hash for LinkedStack<E>
where
    E: Hash,
{
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.hash_code());
    }
}

// Pushes in iteration order, so the last item ends up on top.
impl<E> Extend<Option<E>> for LinkedStack<E> {
    fn extend<I: IntoIterator<Item = Option<E>>>(&mut self, iter: I) {
        for element in iter {
            self.push(element);
        }
    }
}

impl<E> FromIterator<Option<E>> for LinkedStack<E> {
    fn from_iter<I: IntoIterator<Item = Option<E>>>(iter: I) -> Self {
        let mut stack = Self::new();
        stack.extend(iter);
        stack
    }
}

impl<E> OrderedSequence for LinkedStack<E> {
    type Item = E;

    type Iter<'seq> = Iter<'seq, E> where Self: 'seq;

    fn iterator(&self) -> Self::Iter<'_> {
        self.iter()
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.len
    }
}

impl<E> Collection for LinkedStack<E> {
    type Cursor<'c> = StackCursor<'c, E> where Self: 'c;

    fn cursor(&mut self) -> Self::Cursor<'_> {
        StackCursor {
            next: self.head.as_deref(),
        }
    }

    fn add(&mut self, element: Option<E>) -> CollectionResult<bool> {
        LinkedStack::push(self, element);
        Ok(true)
    }

    fn clear(&mut self) -> CollectionResult<()> {
        LinkedStack::clear(self);
        Ok(())
    }

    fn remove(&mut self, _element: Option<&E>) -> CollectionResult<bool>
    where
        E: PartialEq,
    {
        Err(CollectionError::Unsupported("LinkedStack::remove"))
    }

    fn remove_all<S>(&mut self, _source: Option<&S>) -> CollectionResult<bool>
    where
        S: OrderedSequence<Item = E> + ?Sized,
        E: PartialEq,
    {
        Err(CollectionError::Unsupported("LinkedStack::remove_all"))
    }

    fn retain_all<S>(&mut self, _source: Option<&S>) -> CollectionResult<bool>
    where
        S: OrderedSequence<Item = E> + ?Sized,
        E: PartialEq,
    {
        Err(CollectionError::Unsupported("LinkedStack::retain_all"))
    }
}

impl<E> Stack for LinkedStack<E> {
    fn push(&mut self, element: Option<E>) {
        LinkedStack::push(self, element);
    }

    fn pop(&mut self) -> Option<E> {
        LinkedStack::pop(self)
    }

    fn peek(&self) -> Option<&E> {
        LinkedStack::peek(self)
    }
}

// Top-down traversal over borrowed nodes.
pub struct Iter<'a, E> {
    next: Option<&'a Node<E>>,
    remaining: usize,
}

impl<'a, E> Iterator for Iter<'a, E> {
    type Item = Option<&'a E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            self.remaining -= 1;
            node.element.as_ref()
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<E> ExactSizeIterator for Iter<'_, E> {}

impl<E> FusedIterator for Iter<'_, E> {}

impl<E> Clone for Iter<'_, E> {
    fn clone(&self) -> Self {
        Self {
            next: self.next,
            remaining: self.remaining,
        }
    }
}

impl<'a, E> IntoIterator for &'a LinkedStack<E> {
    type Item = Option<&'a E>;
    type IntoIter = Iter<'a, E>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// Drains the stack in pop order.
pub struct IntoIter<E>(LinkedStack<E>);

impl<E> Iterator for IntoIter<E> {
    type Item = Option<E>;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.pop_slot()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.0.len, Some(self.0.len))
    }
}

impl<E> ExactSizeIterator for IntoIter<E> {}

impl<E> FusedIterator for IntoIter<E> {}

impl<E> IntoIterator for LinkedStack<E> {
    type Item = Option<E>;
    type IntoIter = IntoIter<E>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self)
    }
}

// Cursor over a stack. It walks the same top-down path as `Iter` but cannot
// remove: taking an element out of the middle would break the LIFO order.
pub struct StackCursor<'c, E> {
    next: Option<&'c Node<E>>,
}

impl<E> Cursor for StackCursor<'_, E> {
    type Item = E;

    fn has_next(&self) -> bool {
        self.next.is_some()
    }

    fn next(&mut self) -> CollectionResult<Option<&E>> {
        let node = self.next.ok_or(CollectionError::Exhausted)?;
        self.next = node.next.as_deref();
        Ok(node.element.as_ref())
    }

    fn remove(&mut self) -> CollectionResult<()> {
        Err(CollectionError::Unsupported("StackCursor::remove"))
    }
}
