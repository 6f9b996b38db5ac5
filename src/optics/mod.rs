//! Optics for immutable data manipulation.
//!
//! This module provides lenses: composable accessors that read and
//! non-destructively update a field nested inside an immutable structure.
//!
//! # Available Optics
//!
//! - [`Lens`]: Focus on a single field (view/set/over access)
//! - [`FunctionLens`]: A lens built from a getter and a setter
//! - [`ComposedLens`]: A lens focusing through an intermediate structure
//! - [`Shared`] with [`copy_with`]: nodes updated by shallow copy, so that
//!   only the path to the focused field is duplicated
//!
//! # Example with plain values
//!
//! ```
//! use structural_lens::optics::{Lens, over, set, view};
//! use structural_lens::lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { city: String, zip: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { name: String, address: Address }
//!
//! let name_lens = lens!(User, name);
//! let city_lens = lens!(User, address).compose(lens!(Address, city));
//!
//! let user = User {
//!     name: "Alice".to_string(),
//!     address: Address { city: "Wonderland".to_string(), zip: "12345".to_string() },
//! };
//!
//! assert_eq!(view(&name_lens, &user), "Alice");
//! assert_eq!(view(&city_lens, &user), "Wonderland");
//!
//! let renamed = set(&name_lens, "Gerald".to_string(), user.clone());
//! assert_eq!(renamed.name, "Gerald");
//!
//! let shouted = over(&name_lens, |name| name.to_uppercase(), user);
//! assert_eq!(shouted.name, "ALICE");
//! ```
//!
//! # Example with structural sharing
//!
//! ```
//! use structural_lens::optics::{Lens, Shared, set};
//! use structural_lens::shared_lens;
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Address { city: String, zip: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct User { name: String, address: Shared<Address> }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct Meta { created: String, modified: String }
//!
//! #[derive(Clone, PartialEq, Debug)]
//! struct State { user: Shared<User>, meta: Shared<Meta> }
//!
//! let deep_city_lens = shared_lens!(State, user)
//!     .compose(shared_lens!(User, address))
//!     .compose(shared_lens!(Address, city));
//!
//! let state = Shared::new(State {
//!     user: Shared::new(User {
//!         name: "Alice".to_string(),
//!         address: Shared::new(Address {
//!             city: "Wonderland".to_string(),
//!             zip: "12345".to_string(),
//!         }),
//!     }),
//!     meta: Shared::new(Meta {
//!         created: "2023-01-01".to_string(),
//!         modified: "2024-01-01".to_string(),
//!     }),
//! });
//!
//! let updated = set(&deep_city_lens, "Oz".to_string(), Shared::clone(&state));
//!
//! assert_eq!(updated.user.address.city, "Oz");
//! assert!(!Shared::ptr_eq(&updated.user, &state.user));
//! assert!(!Shared::ptr_eq(&updated.user.address, &state.user.address));
//! assert!(Shared::ptr_eq(&updated.meta, &state.meta));
//! ```
//!
//! # Lens Laws
//!
//! Every Lens must satisfy three laws:
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
//! The laws are not checked at runtime.

mod lens;
mod shared;

pub use lens::ComposedLens;
pub use lens::FunctionLens;
pub use lens::Lens;
pub use lens::make_lens;
pub use lens::over;
pub use lens::over_ref;
pub use lens::set;
pub use lens::view;

pub use shared::Shared;
pub use shared::copy_with;

#[cfg(feature = "derive")]
pub use structural_lens_derive::Lenses;
