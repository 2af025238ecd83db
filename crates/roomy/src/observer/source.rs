//! Host size-observation seam.

use super::element::Element;
use super::ResizeEntry;

/// The host primitive that watches elements for size changes.
///
/// Implementations forward the host's notification batches to
/// [`ResponsiveObserver::on_resize`](super::ResponsiveObserver::on_resize).
/// One source serves every container registered with an observer.
pub trait ResizeSource<E: Element> {
    /// Starts watching `target`.
    fn observe(&mut self, target: &E);

    /// Stops watching `target`.
    fn unobserve(&mut self, target: &E);

    /// Stops watching everything. Must tolerate repeated calls.
    fn disconnect(&mut self);
}

/// A source that only records what it watches.
///
/// Notifications are simulated with [`MemoryResizeSource::entries`], which
/// builds a batch for the watched elements only, as a host would.
#[derive(Debug)]
pub struct MemoryResizeSource<E: Element> {
    observed: Vec<E>,
    disconnects: usize,
}

impl<E: Element + Clone> MemoryResizeSource<E> {
    pub fn new() -> Self {
        Self {
            observed: Vec::new(),
            disconnects: 0,
        }
    }

    /// Returns true if `target` is being watched.
    pub fn is_observing(&self, target: &E) -> bool {
        self.observed.iter().any(|el| el.id() == target.id())
    }

    /// Number of watched elements.
    pub fn observed_count(&self) -> usize {
        self.observed.len()
    }

    /// Number of times [`ResizeSource::disconnect`] was called.
    pub fn disconnect_count(&self) -> usize {
        self.disconnects
    }

    /// Builds a notification batch from `(element, content width)` pairs,
    /// dropping elements that are not watched.
    pub fn entries<'a, I>(&self, updates: I) -> Vec<ResizeEntry<E>>
    where
        I: IntoIterator<Item = (&'a E, f64)>,
        E: 'a,
    {
        updates
            .into_iter()
            .filter(|(el, _)| self.is_observing(el))
            .map(|(el, width)| ResizeEntry::new(el.clone(), width))
            .collect()
    }
}

impl<E: Element + Clone> Default for MemoryResizeSource<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Element + Clone> ResizeSource<E> for MemoryResizeSource<E> {
    fn observe(&mut self, target: &E) {
        if !self.is_observing(target) {
            self.observed.push(target.clone());
        }
    }

    fn unobserve(&mut self, target: &E) {
        self.observed.retain(|el| el.id() != target.id());
    }

    fn disconnect(&mut self) {
        self.observed.clear();
        self.disconnects += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::MemoryElement;

    #[test]
    fn test_memory_source_tracks_observed() {
        let a = MemoryElement::new();
        let b = MemoryElement::new();
        let mut source = MemoryResizeSource::new();

        source.observe(&a);
        source.observe(&a);
        source.observe(&b);
        assert_eq!(source.observed_count(), 2);

        source.unobserve(&a);
        assert!(!source.is_observing(&a));
        assert!(source.is_observing(&b));
    }

    #[test]
    fn test_memory_source_entries_skip_unobserved() {
        let watched = MemoryElement::new();
        let other = MemoryElement::new();
        let mut source = MemoryResizeSource::new();
        source.observe(&watched);

        let batch = source.entries([(&watched, 10.0), (&other, 20.0)]);
        assert_eq!(batch.len(), 1);
        assert_eq!(batch[0].target.id(), watched.id());
        assert_eq!(batch[0].content_width, 10.0);
    }

    #[test]
    fn test_memory_source_disconnect() {
        let a = MemoryElement::new();
        let mut source = MemoryResizeSource::new();
        source.observe(&a);
        source.disconnect();
        source.disconnect();
        assert_eq!(source.observed_count(), 0);
        assert_eq!(source.disconnect_count(), 2);
    }
}
