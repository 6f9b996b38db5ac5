//! Lens optics for focusing on struct fields.
//!
//! A Lens pairs a getter with a setter for one field of a larger structure.
//! Lenses are composable, allowing access to deeply nested fields.
//!
//! # Laws
//!
//! Every Lens must satisfy three laws. They are the caller's obligation and
//! are not checked at runtime.
//!
//! 1. **PutGet Law**: Setting then viewing yields the set value.
//!    ```text
//!    lens.view(&lens.set(source, value)) == &value
//!    ```
//!
//! 2. **GetPut Law**: Viewing and setting back yields the original.
//!    ```text
//!    lens.set(source, lens.view(&source).clone()) == source
//!    ```
//!
//! 3. **PutPut Law**: Two consecutive sets is equivalent to the last set.
//!    ```text
//!    lens.set(lens.set(source, v1), v2) == lens.set(source, v2)
//!    ```
//!
//! # Examples
//!
//! ```
//! use structural_lens::optics::{Lens, make_lens, over, set, view};
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Point { x: i32, y: i32 }
//!
//! let x_lens = make_lens(
//!     |point: &Point| &point.x,
//!     |point: Point, x: i32| Point { x, ..point },
//! );
//!
//! let point = Point { x: 10, y: 20 };
//! assert_eq!(*view(&x_lens, &point), 10);
//!
//! let moved = set(&x_lens, 100, point.clone());
//! assert_eq!(moved, Point { x: 100, y: 20 });
//!
//! let doubled = over(&x_lens, |x| x * 2, point);
//! assert_eq!(doubled.x, 20);
//! ```

use std::marker::PhantomData;

/// A Lens focuses on a single field within a larger structure.
///
/// # Type Parameters
///
/// - `S`: The source type (the whole structure)
/// - `A`: The target type (the focused field)
pub trait Lens<S, A> {
    /// Borrows the focused field.
    fn view<'a>(&self, source: &'a S) -> &'a A;

    /// Replaces the focused field, returning a new source.
    ///
    /// The source handle is consumed. For lenses over shared nodes the
    /// returned root is always a fresh node, even when `value` equals the
    /// current one.
    fn set(&self, source: S, value: A) -> S;

    /// Applies `function` to a copy of the focused field and writes the result back.
    ///
    /// Equivalent to `self.set(source, function(self.view(&source).clone()))`.
    ///
    /// # Example
    ///
    /// ```
    /// use structural_lens::optics::Lens;
    /// use structural_lens::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = lens!(Point, x);
    /// let point = Point { x: 10, y: 20 };
    /// let doubled = x_lens.over(point, |x| x * 2);
    /// assert_eq!(doubled.x, 20);
    /// ```
    fn over<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(A) -> A,
        A: Clone,
    {
        let current = self.view(&source).clone();
        self.set(source, function(current))
    }

    /// Applies `function` to a borrow of the focused field and writes the result back.
    ///
    /// Useful when the new value can be computed without owning the old one.
    ///
    /// # Example
    ///
    /// ```
    /// use structural_lens::optics::Lens;
    /// use structural_lens::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Person { name: String, age: u32 }
    ///
    /// let name_lens = lens!(Person, name);
    /// let person = Person { name: "alice".to_string(), age: 30 };
    /// let upper = name_lens.over_ref(person, |name| name.to_uppercase());
    /// assert_eq!(upper.name, "ALICE");
    /// ```
    fn over_ref<F>(&self, source: S, function: F) -> S
    where
        F: FnOnce(&A) -> A,
    {
        let new_value = function(self.view(&source));
        self.set(source, new_value)
    }

    /// Composes this lens with a lens on its target, focusing on a nested field.
    ///
    /// The composed setter views the intermediate structure through `self`,
    /// updates it through `inner`, and writes it back through `self`. Each
    /// level copies only the node it touches.
    ///
    /// # Example
    ///
    /// ```
    /// use structural_lens::optics::Lens;
    /// use structural_lens::lens;
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Address { city: String, zip: String }
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct User { name: String, address: Address }
    ///
    /// let city_lens = lens!(User, address).compose(lens!(Address, city));
    ///
    /// let user = User {
    ///     name: "Alice".to_string(),
    ///     address: Address {
    ///         city: "Wonderland".to_string(),
    ///         zip: "12345".to_string(),
    ///     },
    /// };
    ///
    /// assert_eq!(*city_lens.view(&user), "Wonderland");
    /// ```
    fn compose<B, L>(self, inner: L) -> ComposedLens<Self, L, A>
    where
        Self: Sized,
        L: Lens<A, B>,
    {
        ComposedLens::new(self, inner)
    }
}

/// A lens built from a getter and a setter function.
///
/// This is the most common way to create a lens. [`make_lens`], the
/// [`lens!`](crate::lens) and [`shared_lens!`](crate::shared_lens) macros and
/// `#[derive(Lenses)]` all produce a `FunctionLens`.
///
/// # Type Parameters
///
/// - `S`: The source type
/// - `A`: The target type
/// - `G`: The getter function type
/// - `St`: The setter function type
pub struct FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    getter: G,
    setter: St,
    _marker: PhantomData<(S, A)>,
}

impl<S, A, G, St> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    /// Creates a new `FunctionLens` from a getter and setter.
    ///
    /// # Example
    ///
    /// ```
    /// use structural_lens::optics::{Lens, FunctionLens};
    ///
    /// #[derive(Clone, PartialEq, Debug)]
    /// struct Point { x: i32, y: i32 }
    ///
    /// let x_lens = FunctionLens::new(
    ///     |point: &Point| &point.x,
    ///     |point: Point, x: i32| Point { x, ..point },
    /// );
    /// assert_eq!(*x_lens.view(&Point { x: 1, y: 2 }), 1);
    /// ```
    #[must_use]
    pub const fn new(getter: G, setter: St) -> Self {
        Self {
            getter,
            setter,
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> Lens<S, A> for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn view<'a>(&self, source: &'a S) -> &'a A {
        (self.getter)(source)
    }

    fn set(&self, source: S, value: A) -> S {
        (self.setter)(source, value)
    }
}

impl<S, A, G, St> Clone for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A + Clone,
    St: Fn(S, A) -> S + Clone,
{
    fn clone(&self) -> Self {
        Self {
            getter: self.getter.clone(),
            setter: self.setter.clone(),
            _marker: PhantomData,
        }
    }
}

impl<S, A, G, St> std::fmt::Debug for FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("FunctionLens")
            .field("source", &std::any::type_name::<S>())
            .field("target", &std::any::type_name::<A>())
            .finish_non_exhaustive()
    }
}

/// A lens composed of two lenses.
///
/// # Type Parameters
///
/// - `L1`: The outer lens
/// - `L2`: The inner lens
/// - `A`: The intermediate type (target of `L1`, source of `L2`)
pub struct ComposedLens<L1, L2, A> {
    outer: L1,
    inner: L2,
    _marker: PhantomData<A>,
}

impl<L1, L2, A> ComposedLens<L1, L2, A> {
    /// Creates a new composed lens from an outer and an inner lens.
    #[must_use]
    pub const fn new(outer: L1, inner: L2) -> Self {
        Self {
            outer,
            inner,
            _marker: PhantomData,
        }
    }
}

impl<S, A, B, L1, L2> Lens<S, B> for ComposedLens<L1, L2, A>
where
    L1: Lens<S, A>,
    L2: Lens<A, B>,
    A: Clone + 'static,
{
    fn view<'a>(&self, source: &'a S) -> &'a B {
        self.inner.view(self.outer.view(source))
    }

    fn set(&self, source: S, value: B) -> S {
        // For shared nodes this clone is a pointer copy.
        let intermediate = self.outer.view(&source).clone();
        let updated = self.inner.set(intermediate, value);
        self.outer.set(source, updated)
    }
}

impl<L1: Clone, L2: Clone, A> Clone for ComposedLens<L1, L2, A> {
    fn clone(&self) -> Self {
        Self {
            outer: self.outer.clone(),
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<L1: std::fmt::Debug, L2: std::fmt::Debug, A> std::fmt::Debug for ComposedLens<L1, L2, A> {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ComposedLens")
            .field("outer", &self.outer)
            .field("through", &std::any::type_name::<A>())
            .field("inner", &self.inner)
            .finish()
    }
}

/// Creates a lens from a getter and a setter.
///
/// Same as [`FunctionLens::new`]. The lens laws are not checked.
#[must_use]
pub const fn make_lens<S, A, G, St>(getter: G, setter: St) -> FunctionLens<S, A, G, St>
where
    G: Fn(&S) -> &A,
    St: Fn(S, A) -> S,
{
    FunctionLens::new(getter, setter)
}

/// Reads the focused value of `source` through `lens`.
pub fn view<'a, S, A, L>(lens: &L, source: &'a S) -> &'a A
where
    L: Lens<S, A>,
{
    lens.view(source)
}

/// Returns a new `source` with the focused value replaced by `value`.
pub fn set<S, A, L>(lens: &L, value: A, source: S) -> S
where
    L: Lens<S, A>,
{
    lens.set(source, value)
}

/// Returns a new `source` with `function` applied to the focused value.
///
/// Equivalent to `set(lens, function(view(lens, &source).clone()), source)`.
pub fn over<S, A, L, F>(lens: &L, function: F, source: S) -> S
where
    L: Lens<S, A>,
    F: FnOnce(A) -> A,
    A: Clone,
{
    lens.over(source, function)
}

/// Like [`over`], but `function` borrows the focused value.
pub fn over_ref<S, A, L, F>(lens: &L, function: F, source: S) -> S
where
    L: Lens<S, A>,
    F: FnOnce(&A) -> A,
{
    lens.over_ref(source, function)
}

/// Creates a lens for a struct field.
///
/// The generated setter moves the source, overwrites the field and returns
/// it. Use [`shared_lens!`](crate::shared_lens) when the source is a shared
/// node that must not be touched.
///
/// # Syntax
///
/// ```text
/// lens!(SourceType, field_name)
/// ```
///
/// `SourceType` is any type path, including generic instantiations such as
/// `Container<i32>` or qualified paths such as `geometry::Point`.
///
/// # Example
///
/// ```
/// use structural_lens::optics::Lens;
/// use structural_lens::lens;
///
/// #[derive(Clone, PartialEq, Debug)]
/// struct Point { x: i32, y: i32 }
///
/// let x_lens = lens!(Point, x);
///
/// let point = Point { x: 10, y: 20 };
/// assert_eq!(*x_lens.view(&point), 10);
///
/// let moved = x_lens.set(point, 100);
/// assert_eq!(moved, Point { x: 100, y: 20 });
/// ```
#[macro_export]
macro_rules! lens {
    ($source:ty, $field:ident) => {
        $crate::optics::FunctionLens::new(
            |source: &$source| &source.$field,
            |mut source: $source, value| {
                source.$field = value;
                source
            },
        )
    };
}
