//! Observation-to-classification bridge.
//!
//! A single [`ResponsiveObserver`] watches every responsive container through
//! one host [`ResizeSource`]. On each notification batch it reconciles every
//! reported container's marker classes with the tiers its width satisfies.
//! Styles generated for those markers then apply through the cascade alone.
//!
//! ```rust
//! use roomy::{Element, MemoryElement, MemoryResizeSource, ResponsiveObserver};
//!
//! let mut observer = ResponsiveObserver::new(MemoryResizeSource::new());
//! let container = MemoryElement::new();
//! observer.register(container.clone());
//!
//! let batch = observer.source().entries([(&container, 400.0)]);
//! observer.on_resize(&batch);
//! assert_eq!(container.classes(), vec!["XS", "SM"]);
//! ```

mod element;
mod source;

pub use element::{Element, MemoryElement};
pub use source::{MemoryResizeSource, ResizeSource};

use rustc_hash::FxHashMap;
use tracing::{debug, trace};

use crate::breakpoint::Breakpoints;

/// One container's size change, as delivered by the host.
#[derive(Debug, Clone)]
pub struct ResizeEntry<E> {
    pub target: E,
    /// Width of the content box, in pixels.
    pub content_width: f64,
}

impl<E> ResizeEntry<E> {
    pub fn new(target: E, content_width: f64) -> Self {
        Self {
            target,
            content_width,
        }
    }
}

/// The shared observer for all responsive containers of one scope.
///
/// Construct it once, pass it by reference to the places that mount
/// containers, and dispose it at teardown (dropping it disposes too).
/// It is the only writer of marker state.
pub struct ResponsiveObserver<E: Element, S: ResizeSource<E>> {
    breakpoints: Breakpoints,
    source: S,
    containers: FxHashMap<E::Id, E>,
}

impl<E: Element, S: ResizeSource<E>> ResponsiveObserver<E, S> {
    /// Creates an observer using the default breakpoint table.
    pub fn new(source: S) -> Self {
        Self::with_breakpoints(source, Breakpoints::default())
    }

    /// Creates an observer classifying against `breakpoints`.
    pub fn with_breakpoints(source: S, breakpoints: Breakpoints) -> Self {
        Self {
            breakpoints,
            source,
            containers: FxHashMap::default(),
        }
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    /// The underlying host source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Begins watching `container`.
    ///
    /// Registering a container that is already registered does nothing and
    /// returns `false`; it is never observed twice.
    pub fn register(&mut self, container: E) -> bool {
        let id = container.id();
        if self.containers.contains_key(&id) {
            trace!(?id, "container already registered");
            return false;
        }
        self.source.observe(&container);
        self.containers.insert(id, container);
        debug!(?id, total = self.containers.len(), "registered container");
        true
    }

    /// Stops watching `container`.
    ///
    /// Returns `false` if it was not registered. Notifications delivered
    /// afterwards for this container are ignored.
    pub fn unregister(&mut self, container: &E) -> bool {
        let id = container.id();
        match self.containers.remove(&id) {
            Some(registered) => {
                self.source.unobserve(&registered);
                debug!(?id, total = self.containers.len(), "unregistered container");
                true
            }
            None => {
                trace!(?id, "unregister of unknown container ignored");
                false
            }
        }
    }

    /// Stops watching every container and disconnects the source.
    pub fn dispose_all(&mut self) {
        let released = self.containers.len();
        self.containers.clear();
        self.source.disconnect();
        debug!(released, "disposed responsive observer");
    }

    pub fn is_registered(&self, container: &E) -> bool {
        self.containers.contains_key(&container.id())
    }

    /// Number of registered containers.
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Handles one notification batch from the source.
    ///
    /// Entries for containers that are not registered are skipped. Returns
    /// the number of markers added or removed.
    pub fn on_resize(&mut self, entries: &[ResizeEntry<E>]) -> usize {
        entries
            .iter()
            .map(|entry| {
                let id = entry.target.id();
                match self.containers.get(&id) {
                    Some(container) => {
                        reconcile_markers(&self.breakpoints, container, entry.content_width)
                    }
                    None => {
                        trace!(?id, "resize for unregistered container ignored");
                        0
                    }
                }
            })
            .sum()
    }
}

impl<E: Element, S: ResizeSource<E>> Drop for ResponsiveObserver<E, S> {
    fn drop(&mut self) {
        self.dispose_all();
    }
}

/// Makes `element`'s marker classes match the tiers satisfied by `width`.
///
/// Markers already in the desired state are left alone, so applying the
/// same width twice mutates nothing the second time. Returns the number of
/// markers added or removed.
pub fn reconcile_markers<E: Element>(breakpoints: &Breakpoints, element: &E, width: f64) -> usize {
    let mut changed = 0;
    for (bp, _) in breakpoints.iter() {
        let marker = bp.class_name();
        let wanted = breakpoints.is_satisfied(bp, width);
        if wanted == element.has_marker(marker) {
            continue;
        }
        if wanted {
            element.add_marker(marker);
        } else {
            element.remove_marker(marker);
        }
        trace!(id = ?element.id(), marker, active = wanted, width, "marker toggled");
        changed += 1;
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::breakpoint::Breakpoint;

    type Observer = ResponsiveObserver<MemoryElement, MemoryResizeSource<MemoryElement>>;

    fn observer() -> Observer {
        ResponsiveObserver::new(MemoryResizeSource::new())
    }

    fn resize(observer: &mut Observer, el: &MemoryElement, width: f64) -> usize {
        let batch = observer.source().entries([(el, width)]);
        observer.on_resize(&batch)
    }

    #[test]
    fn test_width_sequence_scenario() {
        let mut observer = observer();
        let el = MemoryElement::new();
        observer.register(el.clone());

        resize(&mut observer, &el, 0.0);
        assert_eq!(el.classes(), vec!["XS"]);
        resize(&mut observer, &el, 400.0);
        assert_eq!(el.classes(), vec!["XS", "SM"]);
        resize(&mut observer, &el, 700.0);
        assert_eq!(el.classes(), vec!["XS", "SM", "MD"]);
        resize(&mut observer, &el, 500.0);
        assert_eq!(el.classes(), vec!["XS", "SM"]);
    }

    #[test]
    fn test_same_width_is_idempotent() {
        let mut observer = observer();
        let el = MemoryElement::new();
        observer.register(el.clone());

        assert_eq!(resize(&mut observer, &el, 800.0), 4);
        assert_eq!(resize(&mut observer, &el, 800.0), 0);
        assert_eq!(el.classes(), vec!["XS", "SM", "MD", "LG"]);
    }

    #[test]
    fn test_markers_leave_other_classes_alone() {
        let mut observer = observer();
        let el = MemoryElement::with_classes(["css-1", "card"]);
        observer.register(el.clone());

        resize(&mut observer, &el, 1000.0);
        resize(&mut observer, &el, 10.0);
        assert_eq!(el.classes(), vec!["css-1", "card", "XS"]);
    }

    #[test]
    fn test_batch_updates_each_container() {
        let mut observer = observer();
        let narrow = MemoryElement::new();
        let wide = MemoryElement::new();
        observer.register(narrow.clone());
        observer.register(wide.clone());

        let batch = observer.source().entries([(&wide, 960.0), (&narrow, 383.0)]);
        observer.on_resize(&batch);
        assert_eq!(narrow.classes(), vec!["XS"]);
        assert_eq!(wide.classes(), vec!["XS", "SM", "MD", "LG", "XL"]);
    }

    #[test]
    fn test_register_twice_is_noop() {
        let mut observer = observer();
        let el = MemoryElement::new();
        assert!(observer.register(el.clone()));
        assert!(!observer.register(el.clone()));
        assert_eq!(observer.len(), 1);
        assert_eq!(observer.source().observed_count(), 1);
    }

    #[test]
    fn test_unregister_stops_classification() {
        let mut observer = observer();
        let el = MemoryElement::new();
        observer.register(el.clone());
        resize(&mut observer, &el, 600.0);

        assert!(observer.unregister(&el));
        assert!(!observer.source().is_observing(&el));

        // a stale entry delivered after unregistering must be ignored
        let stale = [ResizeEntry::new(el.clone(), 0.0)];
        assert_eq!(observer.on_resize(&stale), 0);
        assert_eq!(el.classes(), vec!["XS", "SM", "MD"]);
    }

    #[test]
    fn test_unregister_unknown_is_ignored() {
        let mut observer = observer();
        let stranger = MemoryElement::new();
        assert!(!observer.unregister(&stranger));
        assert!(observer.is_empty());
    }

    #[test]
    fn test_dispose_all_releases_everything() {
        let mut observer = observer();
        let a = MemoryElement::new();
        let b = MemoryElement::new();
        observer.register(a.clone());
        observer.register(b.clone());

        observer.dispose_all();
        assert!(observer.is_empty());
        assert!(!observer.is_registered(&a));
        assert_eq!(observer.source().observed_count(), 0);
        assert_eq!(observer.source().disconnect_count(), 1);

        // the observer stays usable after disposal
        assert!(observer.register(a.clone()));
        assert!(observer.source().is_observing(&a));
    }

    #[test]
    fn test_custom_breakpoints() {
        let table = Breakpoints::new([0, 100, 200, 300, 400]).unwrap();
        let mut observer = ResponsiveObserver::with_breakpoints(MemoryResizeSource::new(), table);
        let el = MemoryElement::new();
        observer.register(el.clone());

        let batch = observer.source().entries([(&el, 250.0)]);
        observer.on_resize(&batch);
        assert_eq!(el.classes(), vec!["XS", "SM", "MD"]);
        assert_eq!(observer.breakpoints().min_width(Breakpoint::Md), 200);
    }

    #[test]
    fn test_reconcile_removes_stale_markers() {
        let el = MemoryElement::with_classes(["XS", "SM", "MD", "LG", "XL"]);
        let changed = reconcile_markers(&Breakpoints::default(), &el, 384.0);
        assert_eq!(changed, 3);
        assert_eq!(el.classes(), vec!["XS", "SM"]);
    }
}
