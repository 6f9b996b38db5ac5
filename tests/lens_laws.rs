//! Property-based tests for Lens laws.
//!
//! - **PutGet Law**: `lens.view(&lens.set(source, value)) == &value`
//! - **GetPut Law**: `lens.set(source, lens.view(&source).clone()) == source`
//! - **PutPut Law**: `lens.set(lens.set(source, v1), v2) == lens.set(source, v2)`
//!
//! The laws are checked for plain lenses, shared-node lenses and their
//! compositions, together with the sharing properties of shared-node updates.

use proptest::prelude::*;
use structural_lens::optics::{Lens, Shared, over, set, view};
use structural_lens::{lens, shared_lens};

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Point {
    x: i32,
    y: i32,
}

#[derive(Clone, PartialEq, Debug)]
struct Address {
    city: String,
    zip: String,
}

#[derive(Clone, PartialEq, Debug)]
struct User {
    name: String,
    address: Shared<Address>,
}

#[derive(Clone, PartialEq, Debug)]
struct Meta {
    created: String,
    modified: String,
}

#[derive(Clone, PartialEq, Debug)]
struct DeepState {
    user: Shared<User>,
    meta: Shared<Meta>,
}

fn deep_state(name: String, city: String, zip: String, created: String) -> Shared<DeepState> {
    Shared::new(DeepState {
        user: Shared::new(User {
            name,
            address: Shared::new(Address { city, zip }),
        }),
        meta: Shared::new(Meta {
            created,
            modified: "2024-01-01".to_string(),
        }),
    })
}

fn deep_city_lens() -> impl Lens<Shared<DeepState>, String> + Clone {
    shared_lens!(DeepState, user)
        .compose(shared_lens!(User, address))
        .compose(shared_lens!(Address, city))
}

// =============================================================================
// Plain lens laws
// =============================================================================

proptest! {
    /// PutGet Law for Point.x
    #[test]
    fn prop_point_x_put_get_law(x in any::<i32>(), y in any::<i32>(), new_value in any::<i32>()) {
        let x_lens = lens!(Point, x);
        let updated = set(&x_lens, new_value, Point { x, y });
        prop_assert_eq!(*view(&x_lens, &updated), new_value);
    }

    /// GetPut Law for Point.x
    #[test]
    fn prop_point_x_get_put_law(x in any::<i32>(), y in any::<i32>()) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        let value = *view(&x_lens, &point);
        prop_assert_eq!(set(&x_lens, value, point.clone()), point);
    }

    /// PutPut Law for Point.x
    #[test]
    fn prop_point_x_put_put_law(
        x in any::<i32>(),
        y in any::<i32>(),
        value1 in any::<i32>(),
        value2 in any::<i32>()
    ) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };
        let left = set(&x_lens, value2, set(&x_lens, value1, point.clone()));
        let right = set(&x_lens, value2, point);
        prop_assert_eq!(left, right);
    }

    /// over composes: over(f) then over(g) equals over(g . f)
    #[test]
    fn prop_over_composition(x in any::<i32>(), y in any::<i32>()) {
        let x_lens = lens!(Point, x);
        let point = Point { x, y };

        let function1 = |n: i32| n.wrapping_add(1);
        let function2 = |n: i32| n.wrapping_mul(2);

        let left = over(&x_lens, function2, over(&x_lens, function1, point.clone()));
        let right = over(&x_lens, |value| function2(function1(value)), point);

        prop_assert_eq!(left, right);
    }
}

// =============================================================================
// Shared-node lens laws
// =============================================================================

proptest! {
    /// PutGet Law for a shared-node lens
    #[test]
    fn prop_shared_name_put_get_law(name in ".*", city in ".*", new_name in ".*") {
        let name_lens = shared_lens!(User, name);
        let user = Shared::new(User {
            name,
            address: Shared::new(Address { city, zip: "12345".to_string() }),
        });
        let updated = set(&name_lens, new_name.clone(), user);
        prop_assert_eq!(view(&name_lens, &updated), &new_name);
    }

    /// GetPut Law for a shared-node lens
    #[test]
    fn prop_shared_name_get_put_law(name in ".*", city in ".*") {
        let name_lens = shared_lens!(User, name);
        let user = Shared::new(User {
            name,
            address: Shared::new(Address { city, zip: "12345".to_string() }),
        });
        let value = view(&name_lens, &user).clone();
        prop_assert_eq!(set(&name_lens, value, Shared::clone(&user)), user);
    }

    /// Every set yields a fresh root, whatever the value
    #[test]
    fn prop_shared_set_always_returns_new_root(name in ".*", new_name in ".*") {
        let name_lens = shared_lens!(User, name);
        let user = Shared::new(User {
            name,
            address: Shared::new(Address { city: "Wonderland".to_string(), zip: "12345".to_string() }),
        });
        let updated = set(&name_lens, new_name, Shared::clone(&user));
        prop_assert!(!Shared::ptr_eq(&updated, &user));
        prop_assert!(Shared::ptr_eq(&updated.address, &user.address));
    }
}

// =============================================================================
// Composed shared-node lens laws
// =============================================================================

proptest! {
    /// PutGet Law through three levels of shared nodes
    #[test]
    fn prop_deep_city_put_get_law(
        name in "[a-z]{1,10}",
        city in "[a-z]{1,10}",
        zip in "[0-9]{5}",
        new_city in "[a-z]{1,10}"
    ) {
        let lens = deep_city_lens();
        let state = deep_state(name, city, zip, "2023-01-01".to_string());
        let updated = set(&lens, new_city.clone(), state);
        prop_assert_eq!(view(&lens, &updated), &new_city);
    }

    /// GetPut Law through three levels of shared nodes
    #[test]
    fn prop_deep_city_get_put_law(
        name in "[a-z]{1,10}",
        city in "[a-z]{1,10}",
        zip in "[0-9]{5}"
    ) {
        let lens = deep_city_lens();
        let state = deep_state(name, city, zip, "2023-01-01".to_string());
        let value = view(&lens, &state).clone();
        prop_assert_eq!(set(&lens, value, Shared::clone(&state)), state);
    }

    /// PutPut Law through three levels of shared nodes
    #[test]
    fn prop_deep_city_put_put_law(
        name in "[a-z]{1,10}",
        city in "[a-z]{1,10}",
        zip in "[0-9]{5}",
        city1 in "[a-z]{1,10}",
        city2 in "[a-z]{1,10}"
    ) {
        let lens = deep_city_lens();
        let state = deep_state(name, city, zip, "2023-01-01".to_string());
        let left = set(&lens, city2.clone(), set(&lens, city1, Shared::clone(&state)));
        let right = set(&lens, city2, state);
        prop_assert_eq!(left, right);
    }

    /// Nodes on the focused path are copied and the sibling keeps its identity
    #[test]
    fn prop_deep_city_set_shares_off_path_nodes(
        name in "[a-z]{1,10}",
        city in "[a-z]{1,10}",
        created in "[0-9]{4}-[0-9]{2}-[0-9]{2}",
        new_city in "[a-z]{1,10}"
    ) {
        let lens = deep_city_lens();
        let state = deep_state(name, city, "12345".to_string(), created);
        let updated = over(&lens, |_| new_city, Shared::clone(&state));

        prop_assert!(!Shared::ptr_eq(&updated, &state));
        prop_assert!(!Shared::ptr_eq(&updated.user, &state.user));
        prop_assert!(!Shared::ptr_eq(&updated.user.address, &state.user.address));
        prop_assert!(Shared::ptr_eq(&updated.meta, &state.meta));
    }
}
