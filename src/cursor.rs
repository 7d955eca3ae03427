use crate::{CollectionError, CollectionResult};

// A cursor walks a collection's slots and may remove the slot it produced
// last. Only one cursor may mutate a collection at a time; the mutable borrow
// it holds enforces that.
pub trait Cursor {
    type Item;

    fn has_next(&self) -> bool;

    // Yields the next slot and advances. Past the last slot this fails with
    // `Exhausted` rather than returning a sentinel, since `None` already
    // stands for a null element.
    fn next(&mut self) -> CollectionResult<Option<&Self::Item>>;

    // Removes the slot returned by the preceding `next`, shrinking the
    // collection. Cursors over structures that forbid positional removal
    // keep this default.
    fn remove(&mut self) -> CollectionResult<()> {
        Err(CollectionError::Unsupported("Cursor::remove"))
    }
}
