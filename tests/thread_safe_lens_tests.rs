//! Integration tests for lenses over `Arc`-backed shared nodes.
//!
//! With the `arc` feature, `Shared` is `Arc`, so shared structures and the
//! lenses built over them can be used from several threads at once.

#![cfg(feature = "arc")]

use rstest::rstest;
use static_assertions::assert_impl_all;
use std::thread;
use structural_lens::optics::{Lens, Shared, over, set, view};
use structural_lens::shared_lens;

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

assert_impl_all!(Shared<DeepState>: Send, Sync);
assert_impl_all!(Shared<User>: Send, Sync);

fn assert_send_sync<T: Send + Sync>(_: &T) {}

fn deep_state() -> Shared<DeepState> {
    Shared::new(DeepState {
        user: Shared::new(User {
            name: "Alice".to_string(),
            address: Shared::new(Address {
                city: "Wonderland".to_string(),
                zip: "12345".to_string(),
            }),
        }),
        meta: Shared::new(Meta {
            created: "2023-01-01".to_string(),
            modified: "2024-01-01".to_string(),
        }),
    })
}

fn deep_city_lens() -> impl Lens<Shared<DeepState>, String> + Clone + Send + Sync {
    shared_lens!(DeepState, user)
        .compose(shared_lens!(User, address))
        .compose(shared_lens!(Address, city))
}

#[rstest]
fn test_composed_shared_lens_is_send_and_sync() {
    assert_send_sync(&deep_city_lens());
}

#[rstest]
fn test_cross_thread_updates_share_untouched_nodes() {
    let original = deep_state();
    let lens = deep_city_lens();

    let handles: Vec<_> = ["Oz", "Narnia", "Lilliput", "Avalon"]
        .into_iter()
        .map(|city| {
            let state = Shared::clone(&original);
            let lens = lens.clone();
            thread::spawn(move || set(&lens, city.to_string(), state))
        })
        .collect();

    let results: Vec<_> = handles
        .into_iter()
        .map(|handle| handle.join().expect("Thread panicked"))
        .collect();

    for (updated, city) in results.iter().zip(["Oz", "Narnia", "Lilliput", "Avalon"]) {
        assert_eq!(view(&lens, updated), city);
        assert!(Shared::ptr_eq(&updated.meta, &original.meta));
        assert!(!Shared::ptr_eq(&updated.user, &original.user));
    }

    assert_eq!(original.user.address.city, "Wonderland");
}

#[rstest]
fn test_cross_thread_over_shares_meta() {
    let original = deep_state();

    let handle = {
        let state = Shared::clone(&original);
        thread::spawn(move || over(&deep_city_lens(), |city| city.to_uppercase(), state))
    };
    let updated = handle.join().expect("Thread panicked");

    assert_eq!(updated.user.address.city, "WONDERLAND");
    assert!(Shared::ptr_eq(&updated.meta, &original.meta));
}
