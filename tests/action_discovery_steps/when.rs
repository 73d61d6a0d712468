//! When steps for action discovery BDD scenarios.

use super::world::DiscoveryWorld;
use rstest_bdd_macros::when;

#[when("all discovered actions are registered")]
fn register_all_discovered(world: &mut DiscoveryWorld) -> Result<(), eyre::Report> {
    world
        .registry()?
        .register_all_discovered()
        .map_err(|err| eyre::eyre!("discovery failed: {err}"))
}

#[when(r#"the action "{name}" is registered"#)]
fn register_action(world: &mut DiscoveryWorld, name: String) -> Result<(), eyre::Report> {
    let result = world.registry()?.register(name.as_str());
    world.register_results.push(result);
    Ok(())
}
