//! Shared nodes and copy-on-update lenses.
//!
//! A structure whose nested records are held in [`Shared`] pointers can be
//! updated through a lens without copying anything off the focused path:
//! cloning a record copies its own fields, and its `Shared` children are
//! copied as pointers. [`copy_with`] performs that shallow copy and the
//! [`shared_lens!`](crate::shared_lens) macro builds lenses on top of it.
//!
//! # Example
//!
//! ```
//! use structural_lens::optics::{Lens, Shared};
//! use structural_lens::shared_lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Meta { created: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Document { title: String, meta: Shared<Meta> }
//!
//! let document = Shared::new(Document {
//!     title: "draft".to_string(),
//!     meta: Shared::new(Meta { created: "2023-01-01".to_string() }),
//! });
//!
//! let title_lens = shared_lens!(Document, title);
//! let renamed = title_lens.set(Shared::clone(&document), "final".to_string());
//!
//! assert_eq!(renamed.title, "final");
//! assert_eq!(document.title, "draft");
//! assert!(!Shared::ptr_eq(&renamed, &document));
//! assert!(Shared::ptr_eq(&renamed.meta, &document.meta));
//! ```

/// Reference-counted pointer for shared nodes.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(feature = "arc")]
pub type Shared<T> = std::sync::Arc<T>;

/// Reference-counted pointer for shared nodes.
///
/// When the `arc` feature is enabled, this is `std::sync::Arc`,
/// which is thread-safe but has slightly higher overhead.
///
/// When the `arc` feature is disabled (default), this is `std::rc::Rc`,
/// which is faster but not thread-safe.
#[cfg(not(feature = "arc"))]
pub type Shared<T> = std::rc::Rc<T>;

#[cfg(feature = "arc")]
static_assertions::assert_impl_all!(Shared<String>: Send, Sync);

#[cfg(not(feature = "arc"))]
static_assertions::assert_not_impl_any!(Shared<String>: Send, Sync);

/// Returns a new node holding a shallow copy of `node` with `edit` applied.
///
/// The original node is never modified, even when `node` is its only
/// handle, and the result is always a distinct allocation.
///
/// # Example
///
/// ```
/// use structural_lens::optics::{Shared, copy_with};
///
/// #[derive(Clone)]
/// struct Counter { hits: u32 }
///
/// let counter = Shared::new(Counter { hits: 1 });
/// let bumped = copy_with(&counter, |counter| counter.hits += 1);
///
/// assert_eq!(counter.hits, 1);
/// assert_eq!(bumped.hits, 2);
/// ```
#[must_use]
pub fn copy_with<T, F>(node: &Shared<T>, edit: F) -> Shared<T>
where
    T: Clone,
    F: FnOnce(&mut T),
{
    let mut copy = T::clone(node);
    edit(&mut copy);
    Shared::new(copy)
}

/// Creates a lens for a field of a struct held in a [`Shared`] node.
///
/// The lens views `Shared<StructType>` and its setter returns a fresh node
/// built with [`copy_with`]. The struct must implement `Clone`.
///
/// # Syntax
///
/// ```text
/// shared_lens!(NodeType, field_name)
/// ```
///
/// `NodeType` is the struct held in the node, written as any type path.
///
/// # Example
///
/// ```
/// use structural_lens::optics::{Lens, Shared};
/// use structural_lens::shared_lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = shared_lens!(Point, x);
/// let point = Shared::new(Point { x: 10, y: 20 });
///
/// let moved = x_lens.set(Shared::clone(&point), 100);
/// assert_eq!(*moved, Point { x: 100, y: 20 });
/// assert_eq!(point.x, 10);
/// ```
#[macro_export]
macro_rules! shared_lens {
    ($node:ty, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$crate::optics::Shared<$node>| &source.$field,
            |source: $crate::optics::Shared<$node>, value| {
                $crate::optics::copy_with(&source, move |node: &mut $node| node.$field = value)
            },
        )
    };
}
