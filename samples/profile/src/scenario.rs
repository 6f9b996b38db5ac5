//! Lens scenarios over the profile state.
//!
//! Each scenario views or updates the state through a lens and checks the
//! resulting values and node identities.

use structural_lens::optics::{Shared, over, set, view};

use crate::error::{ProfileError, ProfileResult};
use crate::state::{ProfileState, User, profile_city_lens, user_city_lens};

/// Outcome of a successful scenario.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScenarioReport {
    /// Scenario name.
    pub name: &'static str,
    /// Value observed through the lens after the scenario ran.
    pub focused: String,
}

fn expect_value(scenario: &'static str, expected: &str, actual: &str) -> ProfileResult<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(ProfileError::UnexpectedValue {
            scenario,
            expected: expected.to_string(),
            actual: actual.to_string(),
        })
    }
}

fn expect_copied<T>(
    scenario: &'static str,
    node: &'static str,
    updated: &Shared<T>,
    original: &Shared<T>,
) -> ProfileResult<()> {
    if Shared::ptr_eq(updated, original) {
        Err(ProfileError::NodeNotCopied { scenario, node })
    } else {
        Ok(())
    }
}

fn expect_shared<T>(
    scenario: &'static str,
    node: &'static str,
    updated: &Shared<T>,
    original: &Shared<T>,
) -> ProfileResult<()> {
    if Shared::ptr_eq(updated, original) {
        Ok(())
    } else {
        Err(ProfileError::NodeNotShared { scenario, node })
    }
}

/// Reads the user's name.
///
/// # Errors
///
/// Returns an error if the name is not `"Alice"`.
pub fn view_name(user: &Shared<User>) -> ProfileResult<ScenarioReport> {
    const NAME: &str = "view_name";
    let name = view(&User::name_shared_lens(), user);
    tracing::debug!(scenario = NAME, %name, "viewed name");
    expect_value(NAME, "Alice", name)?;
    Ok(ScenarioReport {
        name: NAME,
        focused: name.clone(),
    })
}

/// Reads the user's city through a composed lens.
///
/// # Errors
///
/// Returns an error if the city is not `"Wonderland"`.
pub fn view_city(user: &Shared<User>) -> ProfileResult<ScenarioReport> {
    const NAME: &str = "view_city";
    let city = view(&user_city_lens(), user);
    tracing::debug!(scenario = NAME, %city, "viewed city");
    expect_value(NAME, "Wonderland", city)?;
    Ok(ScenarioReport {
        name: NAME,
        focused: city.clone(),
    })
}

/// Renames the user and checks the address stays shared.
///
/// # Errors
///
/// Returns an error if the name was not replaced, the user node was reused,
/// or the address node was copied.
pub fn set_name(user: &Shared<User>) -> ProfileResult<ScenarioReport> {
    const NAME: &str = "set_name";
    let updated = set(&User::name_shared_lens(), "Gerald".to_string(), Shared::clone(user));
    tracing::debug!(scenario = NAME, name = %updated.name, "renamed user");
    expect_value(NAME, "Gerald", &updated.name)?;
    expect_copied(NAME, "user", &updated, user)?;
    expect_shared(NAME, "user.address", &updated.address, &user.address)?;
    Ok(ScenarioReport {
        name: NAME,
        focused: updated.name.clone(),
    })
}

/// Upper-cases the user's name.
///
/// # Errors
///
/// Returns an error if the name is not `"ALICE"` or the user node was reused.
pub fn shout_name(user: &Shared<User>) -> ProfileResult<ScenarioReport> {
    const NAME: &str = "shout_name";
    let updated = over(
        &User::name_shared_lens(),
        |name| name.to_uppercase(),
        Shared::clone(user),
    );
    tracing::debug!(scenario = NAME, name = %updated.name, "upper-cased name");
    expect_value(NAME, "ALICE", &updated.name)?;
    expect_copied(NAME, "user", &updated, user)?;
    Ok(ScenarioReport {
        name: NAME,
        focused: updated.name.clone(),
    })
}

fn check_deep_update(
    scenario: &'static str,
    expected_city: &str,
    updated: &Shared<ProfileState>,
    original: &Shared<ProfileState>,
) -> ProfileResult<ScenarioReport> {
    let city = view(&profile_city_lens(), updated);
    tracing::debug!(
        scenario,
        %city,
        meta_shared = Shared::ptr_eq(&updated.meta, &original.meta),
        "updated city through profile root"
    );
    expect_value(scenario, expected_city, city)?;
    expect_copied(scenario, "root", updated, original)?;
    expect_copied(scenario, "user", &updated.user, &original.user)?;
    expect_copied(scenario, "user.address", &updated.user.address, &original.user.address)?;
    expect_shared(scenario, "meta", &updated.meta, &original.meta)?;
    Ok(ScenarioReport {
        name: scenario,
        focused: city.clone(),
    })
}

/// Moves the user to Oz through the profile root.
///
/// # Errors
///
/// Returns an error if the city was not replaced or node sharing is wrong.
pub fn move_to_oz(state: &Shared<ProfileState>) -> ProfileResult<ScenarioReport> {
    let updated = set(&profile_city_lens(), "Oz".to_string(), Shared::clone(state));
    check_deep_update("move_to_oz", "Oz", &updated, state)
}

/// Upper-cases the user's city through the profile root.
///
/// # Errors
///
/// Returns an error if the city was not transformed or node sharing is wrong.
pub fn shout_city(state: &Shared<ProfileState>) -> ProfileResult<ScenarioReport> {
    let updated = over(
        &profile_city_lens(),
        |city| city.to_uppercase(),
        Shared::clone(state),
    );
    check_deep_update("shout_city", "WONDERLAND", &updated, state)
}

/// Runs every scenario against fresh sample data, stopping at the first failure.
///
/// # Errors
///
/// Returns the first failing check.
pub fn run_all() -> ProfileResult<Vec<ScenarioReport>> {
    let user = User::alice();
    let state = ProfileState::sample();

    let reports = vec![
        view_name(&user)?,
        view_city(&user)?,
        set_name(&user)?,
        shout_name(&user)?,
        move_to_oz(&state)?,
        shout_city(&state)?,
    ];

    for report in &reports {
        tracing::info!(scenario = report.name, focused = %report.focused, "scenario passed");
    }

    Ok(reports)
}
