//! Then steps for mail driver BDD scenarios.

use super::world::MailWorld;
use eyre::eyre;
use mailroom::mail::domain::MailTransport;
use rstest_bdd_macros::then;

#[then("the view lists {count:usize} drivers")]
fn view_lists(world: &MailWorld, count: usize) -> Result<(), eyre::Report> {
    let view = world
        .view
        .as_ref()
        .ok_or_else(|| eyre!("settings view has not been built"))?;
    if !view.is_complete() {
        return Err(eyre!("view has faults: {:?}", view.faults()));
    }
    if view.len() != count {
        return Err(eyre!("expected {count} drivers, found {}", view.len()));
    }
    Ok(())
}

#[then(r#"driver "{driver}" has {count:usize} fields"#)]
fn driver_has_fields(world: &MailWorld, driver: String, count: usize) -> Result<(), eyre::Report> {
    let fields = world.driver_fields(&driver)?;
    if fields.len() != count {
        return Err(eyre!(
            "expected {count} fields for '{driver}', found {}",
            fields.len()
        ));
    }
    Ok(())
}

#[then(r#"every field of driver "{driver}" is empty"#)]
fn every_field_empty(world: &MailWorld, driver: String) -> Result<(), eyre::Report> {
    let fields = world.driver_fields(&driver)?;
    if let Some((field, value)) = fields.iter().find(|(_, value)| !value.is_empty()) {
        return Err(eyre!("field '{field}' of '{driver}' holds '{value}'"));
    }
    Ok(())
}

#[then(r#"driver "{driver}" declares field "{field}""#)]
fn driver_declares_field(
    world: &MailWorld,
    driver: String,
    field: String,
) -> Result<(), eyre::Report> {
    let fields = world.driver_fields(&driver)?;
    if fields.get(&field).is_none() {
        return Err(eyre!("driver '{driver}' does not declare '{field}'"));
    }
    Ok(())
}

#[then(r#"field "{field}" of driver "{driver}" is "{expected}""#)]
fn field_value_is(
    world: &MailWorld,
    field: String,
    driver: String,
    expected: String,
) -> Result<(), eyre::Report> {
    let actual = world.driver_fields(&driver)?.get(&field);
    if actual != Some(expected.as_str()) {
        return Err(eyre!(
            "expected '{field}' of '{driver}' to be '{expected}', got {actual:?}"
        ));
    }
    Ok(())
}

#[then("mail is being sent")]
fn mail_is_sent(world: &MailWorld) -> Result<(), eyre::Report> {
    if !world.shown()?.sending() {
        return Err(eyre!("expected mail to be sent"));
    }
    Ok(())
}

#[then("mail is not being sent")]
fn mail_is_not_sent(world: &MailWorld) -> Result<(), eyre::Report> {
    if world.shown()?.sending() {
        return Err(eyre!("expected mail not to be sent"));
    }
    Ok(())
}

#[then("there are no validation errors")]
fn no_validation_errors(world: &MailWorld) -> Result<(), eyre::Report> {
    let errors = world.shown()?.errors();
    if !errors.is_empty() {
        return Err(eyre!("unexpected validation errors: {errors:?}"));
    }
    Ok(())
}

#[then(r#"field "{field}" has a validation error"#)]
fn field_has_error(world: &MailWorld, field: String) -> Result<(), eyre::Report> {
    if !world.shown()?.errors().has(&field) {
        return Err(eyre!("expected a validation error for '{field}'"));
    }
    Ok(())
}

#[then("the transport discards mail")]
fn transport_discards(world: &MailWorld) -> Result<(), eyre::Report> {
    match &world.transport {
        Some(MailTransport::Null) => Ok(()),
        other => Err(eyre!("expected null transport, got {other:?}")),
    }
}
