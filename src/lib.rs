//! # structural-lens
//!
//! Composable lenses for reading and updating nested fields of immutable
//! data, with structural sharing on update.
//!
//! ## Overview
//!
//! - **Lens**: a getter/setter pair focused on one field ([`optics::Lens`])
//! - **Operations**: [`optics::view`], [`optics::set`], [`optics::over`]
//! - **Composition**: [`optics::Lens::compose`] focuses through intermediate structures
//! - **Structural sharing**: [`optics::Shared`] nodes updated with [`optics::copy_with`]
//!   copy only the path to the focused field
//!
//! ## Feature Flags
//!
//! - `derive` (default): `#[derive(Lenses)]` for structs with named fields
//! - `arc`: use `Arc` instead of `Rc` for shared nodes (thread-safe)
//!
//! ## Example
//!
//! ```rust
//! use structural_lens::prelude::*;
//! use structural_lens::shared_lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { city: String, zip: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { name: String, address: Shared<Address> }
//!
//! let city_lens = shared_lens!(User, address).compose(shared_lens!(Address, city));
//!
//! let user = Shared::new(User {
//!     name: "Alice".to_string(),
//!     address: Shared::new(Address {
//!         city: "Wonderland".to_string(),
//!         zip: "12345".to_string(),
//!     }),
//! });
//!
//! assert_eq!(view(&city_lens, &user), "Wonderland");
//!
//! let moved = set(&city_lens, "Oz".to_string(), Shared::clone(&user));
//! assert_eq!(moved.address.city, "Oz");
//! assert_eq!(user.address.city, "Wonderland");
//! assert!(!Shared::ptr_eq(&moved, &user));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use structural_lens::prelude::*;
/// ```
pub mod prelude {
    pub use crate::optics::*;
}

pub mod optics;
