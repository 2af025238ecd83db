//! Host element seam and an in-memory element.

use std::cell::RefCell;
use std::fmt;
use std::hash::Hash;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use indexmap::IndexSet;

/// A layout element whose marker classes the observer maintains.
///
/// Handles are cheap references into the host tree, so marker mutation
/// goes through `&self`. Two handles with the same [`Element::id`] must
/// refer to the same element.
pub trait Element {
    /// Stable identity of the element.
    type Id: Copy + Eq + Hash + fmt::Debug;

    fn id(&self) -> Self::Id;

    fn has_marker(&self, marker: &str) -> bool;

    fn add_marker(&self, marker: &str);

    fn remove_marker(&self, marker: &str);
}

static NEXT_ELEMENT_ID: AtomicU64 = AtomicU64::new(1);

/// An element backed by a shared, ordered class list.
///
/// Clones share the same class list, like handles into a DOM tree.
///
/// # Example
///
/// ```rust
/// use roomy::{Element, MemoryElement};
///
/// let el = MemoryElement::with_classes(["css-1"]);
/// let handle = el.clone();
/// handle.add_marker("SM");
/// assert_eq!(el.classes(), vec!["css-1", "SM"]);
/// ```
#[derive(Clone)]
pub struct MemoryElement {
    id: u64,
    classes: Rc<RefCell<IndexSet<String>>>,
}

impl MemoryElement {
    /// Creates an element with no classes.
    pub fn new() -> Self {
        Self {
            id: NEXT_ELEMENT_ID.fetch_add(1, Ordering::Relaxed),
            classes: Rc::default(),
        }
    }

    /// Creates an element carrying the given classes.
    pub fn with_classes<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let el = Self::new();
        el.classes
            .borrow_mut()
            .extend(classes.into_iter().map(Into::into));
        el
    }

    /// Current classes, in insertion order.
    pub fn classes(&self) -> Vec<String> {
        self.classes.borrow().iter().cloned().collect()
    }

    /// The `class` attribute value.
    pub fn class_attr(&self) -> String {
        self.classes().join(" ")
    }
}

impl Default for MemoryElement {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryElement")
            .field("id", &self.id)
            .field("classes", &self.class_attr())
            .finish()
    }
}

impl Element for MemoryElement {
    type Id = u64;

    fn id(&self) -> u64 {
        self.id
    }

    fn has_marker(&self, marker: &str) -> bool {
        self.classes.borrow().contains(marker)
    }

    fn add_marker(&self, marker: &str) {
        self.classes.borrow_mut().insert(marker.to_string());
    }

    fn remove_marker(&self, marker: &str) {
        self.classes.borrow_mut().shift_remove(marker);
    }
}
