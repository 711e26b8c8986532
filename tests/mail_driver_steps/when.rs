//! When steps for mail driver BDD scenarios.

use super::world::MailWorld;
use eyre::WrapErr;
use mailroom::mail::services::build_view;
use rstest_bdd_macros::when;

#[when("the settings view is built")]
fn settings_view_built(world: &mut MailWorld) {
    world.view = Some(build_view(&world.registry, &world.settings));
}

#[when("the mail settings are shown")]
fn mail_settings_shown(world: &mut MailWorld) -> Result<(), eyre::Report> {
    let shown = world.service().show().wrap_err("show mail settings")?;
    world.shown = Some(shown);
    Ok(())
}

#[when("the mail transport is resolved")]
fn mail_transport_resolved(world: &mut MailWorld) -> Result<(), eyre::Report> {
    let transport = world.service().transport().wrap_err("resolve transport")?;
    world.transport = Some(transport);
    Ok(())
}
