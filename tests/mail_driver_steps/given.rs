//! Given steps for mail driver BDD scenarios.

use super::world::MailWorld;
use crate::test_helpers::CustomDriver;
use eyre::WrapErr;
use mailroom::{
    mail::services::{MailDriverRegistry, MailExtender},
    settings::{domain::SettingKey, ports::SettingsRepository},
};
use rstest_bdd_macros::given;

#[given("the built-in mail drivers")]
fn builtin_drivers(world: &mut MailWorld) {
    world.registry = MailDriverRegistry::with_builtin_drivers();
}

#[given(r#"an extension registers the custom driver as "{name}""#)]
fn extension_registers_custom(world: &mut MailWorld, name: String) -> Result<(), eyre::Report> {
    MailExtender::new()
        .driver(name, CustomDriver)
        .apply(&mut world.registry)
        .wrap_err("apply extension")
}

#[given(r#"the setting "{key}" is "{value}""#)]
fn setting_is(world: &mut MailWorld, key: String, value: String) -> Result<(), eyre::Report> {
    let setting_key = SettingKey::new(key).wrap_err("parse setting key")?;
    world
        .settings
        .set(&setting_key, value)
        .wrap_err("store setting")
}
