//! Sources feeding actors into a batch export.

use crate::actor::ActorData;

/// A stream of actors to export, consumed one at a time.
pub trait ActorSource: Send {
    /// Returns `None` when the source is exhausted.
    fn next(&mut self) -> Option<ActorData>;

    /// Total number of actors, when known (for progress reporting).
    fn size_hint(&self) -> Option<usize> {
        None
    }
}

/// Wraps any iterator of actors.
pub struct IteratorActorSource<I>
where
    I: Iterator<Item = ActorData> + Send,
{
    inner: I,
}

impl<I> IteratorActorSource<I>
where
    I: Iterator<Item = ActorData> + Send,
{
    pub fn new(inner: I) -> Self {
        Self { inner }
    }
}

impl<I> ActorSource for IteratorActorSource<I>
where
    I: Iterator<Item = ActorData> + Send,
{
    fn next(&mut self) -> Option<ActorData> {
        self.inner.next()
    }

    fn size_hint(&self) -> Option<usize> {
        match self.inner.size_hint() {
            (lower, Some(upper)) if lower == upper => Some(lower),
            _ => None,
        }
    }
}

/// Actors held in memory, yielded in order.
pub struct VecActorSource {
    actors: std::vec::IntoIter<ActorData>,
    total: usize,
}

impl VecActorSource {
    pub fn new(actors: Vec<ActorData>) -> Self {
        Self {
            total: actors.len(),
            actors: actors.into_iter(),
        }
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn remaining(&self) -> usize {
        self.actors.len()
    }
}

impl ActorSource for VecActorSource {
    fn next(&mut self) -> Option<ActorData> {
        self.actors.next()
    }

    fn size_hint(&self) -> Option<usize> {
        Some(self.total)
    }
}

impl ActorSource for Box<dyn ActorSource> {
    fn next(&mut self) -> Option<ActorData> {
        (**self).next()
    }

    fn size_hint(&self) -> Option<usize> {
        (**self).size_hint()
    }
}
