//! Then steps for action discovery BDD scenarios.

use super::world::DiscoveryWorld;
use actuary::action::{ports::ReflectionError, services::ActionRegistryError};
use rstest_bdd_macros::then;

fn registration_attempt(
    world: &DiscoveryWorld,
    attempt: usize,
) -> Result<&Result<(), ActionRegistryError>, eyre::Report> {
    attempt
        .checked_sub(1)
        .and_then(|index| world.register_results.get(index))
        .ok_or_else(|| eyre::eyre!("no registration attempt {attempt} in scenario world"))
}

#[then(r#"the registered actions are "{name}""#)]
fn registered_actions_are(world: &mut DiscoveryWorld, name: String) -> Result<(), eyre::Report> {
    let registered: Vec<String> = world
        .registry()?
        .registered()
        .into_iter()
        .map(String::from)
        .collect();
    if registered != [name.clone()] {
        return Err(eyre::eyre!(
            "expected only '{name}' to be registered, found {registered:?}"
        ));
    }
    Ok(())
}

#[then("no actions are registered")]
fn no_actions_registered(world: &mut DiscoveryWorld) -> Result<(), eyre::Report> {
    let registered = world.registry()?.registered();
    if !registered.is_empty() {
        return Err(eyre::eyre!("expected no registered actions, found {registered:?}"));
    }
    Ok(())
}

#[then(r#"the hook for "{name}" ran {count:usize} times"#)]
fn hook_ran(world: &DiscoveryWorld, name: String, count: usize) -> Result<(), eyre::Report> {
    let hook = world
        .hooks
        .get(&name)
        .ok_or_else(|| eyre::eyre!("no hook defined for '{name}'"))?;
    if hook.calls() != count {
        return Err(eyre::eyre!(
            "expected hook for '{name}' to run {count} times, ran {}",
            hook.calls()
        ));
    }
    Ok(())
}

#[then("registration attempt {attempt:usize} failed in the hook")]
fn attempt_failed_in_hook(world: &DiscoveryWorld, attempt: usize) -> Result<(), eyre::Report> {
    let result = registration_attempt(world, attempt)?;
    if !matches!(result, Err(ActionRegistryError::Hook(_))) {
        return Err(eyre::eyre!("expected hook failure, got {result:?}"));
    }
    Ok(())
}

#[then("registration attempt {attempt:usize} failed with a reflection error")]
fn attempt_failed_with_reflection_error(
    world: &DiscoveryWorld,
    attempt: usize,
) -> Result<(), eyre::Report> {
    let result = registration_attempt(world, attempt)?;
    if !matches!(
        result,
        Err(ActionRegistryError::Reflection(ReflectionError::UnknownType(_)))
    ) {
        return Err(eyre::eyre!("expected unknown type error, got {result:?}"));
    }
    Ok(())
}

#[then("registration attempt {attempt:usize} succeeded")]
fn attempt_succeeded(world: &DiscoveryWorld, attempt: usize) -> Result<(), eyre::Report> {
    let result = registration_attempt(world, attempt)?;
    if let Err(err) = result {
        return Err(eyre::eyre!("expected registration to succeed, got {err}"));
    }
    Ok(())
}
