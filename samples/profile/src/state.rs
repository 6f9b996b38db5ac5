//! Profile state built from shared nodes.

use structural_lens::optics::{Lens, Shared};
use structural_lens_derive::Lenses;

/// Postal address of a user.
#[derive(Clone, PartialEq, Eq, Debug, Lenses)]
#[lenses(shared)]
pub struct Address {
    /// City name.
    pub city: String,
    /// Postal code.
    pub zip: String,
}

/// A user with a shared address.
#[derive(Clone, PartialEq, Eq, Debug, Lenses)]
#[lenses(shared)]
pub struct User {
    /// Display name.
    pub name: String,
    /// Postal address.
    pub address: Shared<Address>,
}

/// Bookkeeping dates of the profile.
#[derive(Clone, PartialEq, Eq, Debug, Lenses)]
pub struct Meta {
    /// Creation date.
    pub created: String,
    /// Last modification date.
    pub modified: String,
}

/// Root of the profile state.
#[derive(Clone, PartialEq, Eq, Debug, Lenses)]
#[lenses(shared)]
pub struct ProfileState {
    /// The profile owner.
    pub user: Shared<User>,
    /// Bookkeeping dates.
    pub meta: Shared<Meta>,
}

impl User {
    /// Alice, living in Wonderland.
    #[must_use]
    pub fn alice() -> Shared<Self> {
        Shared::new(Self {
            name: "Alice".to_string(),
            address: Shared::new(Address {
                city: "Wonderland".to_string(),
                zip: "12345".to_string(),
            }),
        })
    }
}

impl ProfileState {
    /// Alice's profile with its bookkeeping dates.
    #[must_use]
    pub fn sample() -> Shared<Self> {
        Shared::new(Self {
            user: User::alice(),
            meta: Shared::new(Meta {
                created: "2023-01-01".to_string(),
                modified: "2024-01-01".to_string(),
            }),
        })
    }
}

/// Lens from a user node to its city.
pub fn user_city_lens() -> impl Lens<Shared<User>, String> + Clone {
    User::address_shared_lens().compose(Address::city_shared_lens())
}

/// Lens from the profile root to the user's city.
pub fn profile_city_lens() -> impl Lens<Shared<ProfileState>, String> + Clone {
    ProfileState::user_shared_lens().compose(user_city_lens())
}
