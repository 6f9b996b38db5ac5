//! Derive macro for structural-lens.
//!
//! This crate provides `#[derive(Lenses)]`, which generates lens
//! constructors for every named field of a struct. Adding
//! `#[lenses(shared)]` also generates lenses over `Shared` nodes.
//!
//! # Example
//!
//! ```rust,ignore
//! use structural_lens::optics::{Lens, Shared};
//! use structural_lens_derive::Lenses;
//!
//! #[derive(Clone, Lenses)]
//! #[lenses(shared)]
//! struct Point {
//!     x: i32,
//!     y: i32,
//! }
//!
//! // Generated methods:
//! // - Point::x_lens() -> impl Lens<Point, i32>
//! // - Point::x_shared_lens() -> impl Lens<Shared<Point>, i32>
//! // - Point::y_lens() / Point::y_shared_lens()
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(*Point::x_lens().view(&point), 10);
//!
//! let shared = Shared::new(point);
//! let moved = Point::x_shared_lens().set(Shared::clone(&shared), 5);
//! assert_eq!(moved.x, 5);
//! assert_eq!(shared.x, 10);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod lenses;

use proc_macro::TokenStream;

/// Derive macro for generating lenses for struct fields.
///
/// For each field `foo` of type `T`, generates:
///
/// ```rust,ignore
/// impl StructName {
///     pub fn foo_lens() -> impl Lens<StructName, T> + Clone { ... }
///
///     // Only with `#[lenses(shared)]`:
///     pub fn foo_shared_lens() -> impl Lens<Shared<StructName>, T> + Clone { ... }
/// }
/// ```
///
/// `foo_lens` moves the struct and overwrites the field. `foo_shared_lens`
/// views a `Shared<StructName>` node and returns a fresh node on every set,
/// so fields held in `Shared` pointers stay shared with the original.
///
/// # Attributes
///
/// - `#[lenses(shared)]`: also generate the `_shared_lens` methods
///
/// # Requirements
///
/// - The struct must have named fields (not a tuple or unit struct)
/// - With `#[lenses(shared)]` the struct must implement `Clone`; for generic
///   structs the `_shared_lens` methods are only callable when the
///   instantiation is `Clone`
///
/// # Example
///
/// ```rust,ignore
/// use structural_lens::optics::{Lens, Shared};
/// use structural_lens_derive::Lenses;
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// #[lenses(shared)]
/// struct Address {
///     city: String,
///     zip: String,
/// }
///
/// #[derive(Clone, Debug, PartialEq, Lenses)]
/// #[lenses(shared)]
/// struct User {
///     name: String,
///     address: Shared<Address>,
/// }
///
/// let city_lens = User::address_shared_lens().compose(Address::city_shared_lens());
/// ```
///
/// # Generics
///
/// Generic structs are supported; call the constructor on the concrete type:
///
/// ```rust,ignore
/// #[derive(Clone, Lenses)]
/// struct Container<T> {
///     value: T,
/// }
///
/// let container = Container { value: 42 };
/// let lens = Container::<i32>::value_lens();
/// assert_eq!(*lens.view(&container), 42);
/// ```
#[proc_macro_derive(Lenses, attributes(lenses))]
pub fn derive_lenses(input: TokenStream) -> TokenStream {
    lenses::derive_lenses_impl(input)
}
