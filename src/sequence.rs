use std::collections::{BTreeSet, HashSet, VecDeque};
use std::hash::{BuildHasher, Hash};

// Null-aware equality: two absent elements match, an absent element never
// matches a present one, and present elements compare with `PartialEq`.
pub fn nullable_eq<E>(left: Option<&E>, right: Option<&E>) -> bool
where
    E: PartialEq + ?Sized,
{
    match (left, right) {
        (None, None) => true,
        (Some(left), Some(right)) => left == right,
        _ => false,
    }
}

// The iteration capability shared by collections and by every source a bulk
// operation accepts. Slots are yielded as `Option<&Item>`, `None` standing for
// a null element.
pub trait OrderedSequence {
    type Item;

    type Iter<'seq>: Iterator<Item = Option<&'seq Self::Item>>
    where
        Self: 'seq;

    fn iterator(&self) -> Self::Iter<'_>;

    fn len(&self) -> usize;

    // Linear scan; sources with a faster membership test override it.
    fn contains(&self, element: Option<&Self::Item>) -> bool
    where
        Self::Item: PartialEq,
    {
        self.iterator()
            .any(|candidate| nullable_eq(candidate, element))
    }
}

// Adapts an iterator over references into one over present (non-null) slots.
#[derive(Debug, Clone)]
pub struct Present<I>(I);

impl<'seq, T, I> Iterator for Present<I>
where
    T: 'seq,
    I: Iterator<Item = &'seq T>,
{
    type Item = Option<&'seq T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(Some)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> OrderedSequence for [T] {
    type Item = T;

    type Iter<'seq> = Present<std::slice::Iter<'seq, T>> where Self: 'seq;

    fn iterator(&self) -> Self::Iter<'_> {
        Present(self.iter())
    }

    #[inline(always)]
    fn len(&self) -> usize {
        <[T]>::len(self)
    }
}

impl<T, const N: usize> OrderedSequence for [T; N] {
    type Item = T;

    type Iter<'seq> = Present<std::slice::Iter<'seq, T>> where Self: 'seq;

    fn iterator(&self) -> Self::Iter<'_> {
        Present(self.iter())
    }

    #[inline(always)]
    fn len(&self) -> usize {
        N
    }
}

impl<T> OrderedSequence for Vec<T> {
    type Item = T;

    type Iter<'seq> = Present<std::slice::Iter<'seq, T>> where Self: 'seq;

    fn iterator(&self) -> Self::Iter<'_> {
        Present(self.iter())
    }

    #[inline(always)]
    fn len(&self) -> usize {
        Vec::len(self)
    }
}

impl<T> OrderedSequence for VecDeque<T> {
    type Item = T;

    type Iter<'seq> = Present<std::collections::vec_deque::Iter<'seq, T>> where Self: 'seq;

    fn iterator(&self) -> Self::Iter<'_> {
        Present(self.iter())
    }

    #[inline(always)]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }
}

impl<T, S> OrderedSequence for HashSet<T, S>
where
    T: Hash + Eq,
    S: BuildHasher,
{
    type Item = T;

    type Iter<'seq> = Present<std::collections::hash_set::Iter<'seq, T>> where Self: 'seq;

    fn iterator(&self) -> Self::Iter<'_> {
        Present(self.iter())
    }

    #[inline(always)]
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    // A set never holds a null element.
    fn contains(&self, element: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        element.is_some_and(|element| HashSet::contains(self, element))
    }
}

impl<T> OrderedSequence for BTreeSet<T>
where
    T: Ord,
{
    type Item = T;

    type Iter<'seq> = Present<std::collections::btree_set::Iter<'seq, T>> where Self: 'seq;

    fn iterator(&self) -> Self::Iter<'_> {
        Present(self.iter())
    }

    #[inline(always)]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }

    fn contains(&self, element: Option<&T>) -> bool
    where
        T: PartialEq,
    {
        element.is_some_and(|element| BTreeSet::contains(self, element))
    }
}
