//! Given steps for action discovery BDD scenarios.

use super::world::{CountingHook, DiscoveryWorld};
use actuary::action::domain::ActionIdentifier;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"an application with source file "{path}""#)]
fn application_with_source_file(
    world: &mut DiscoveryWorld,
    path: String,
) -> Result<(), eyre::Report> {
    world
        .write_source_file(&path)
        .wrap_err_with(|| format!("create source file {path}"))
}

#[given(r#"the type "{name}" is a concrete action"#)]
fn concrete_action(world: &mut DiscoveryWorld, name: String) -> Result<(), eyre::Report> {
    world.define_action(&name, CountingHook::default())
}

#[given(r#"the type "{name}" is an action whose hook fails once"#)]
fn action_failing_once(world: &mut DiscoveryWorld, name: String) -> Result<(), eyre::Report> {
    world.define_action(&name, CountingHook::failing(1))
}

#[given(r#"the type "{name}" is an abstract action"#)]
fn abstract_action(world: &mut DiscoveryWorld, name: String) -> Result<(), eyre::Report> {
    world
        .catalog
        .define_abstract_action(ActionIdentifier::new(name)?)
        .wrap_err("define abstract action")
}

#[given(r#"the type "{name}" is not an action"#)]
fn plain_type(world: &mut DiscoveryWorld, name: String) -> Result<(), eyre::Report> {
    world
        .catalog
        .define_plain_type(ActionIdentifier::new(name)?)
        .wrap_err("define plain type")
}

#[given("auto registration is disabled")]
fn auto_registration_disabled(world: &mut DiscoveryWorld) -> Result<(), eyre::Report> {
    world.registry()?.disable_auto_registration();
    Ok(())
}
