//! Integration tests for extensions registering mail drivers.
//!
//! Each test boots the built-in drivers, applies an extension and reads the
//! mail settings document the way an administration client would.

mod test_helpers;

use std::sync::Arc;

use eyre::{Result, eyre};
use mailroom::{
    mail::{
        services::{MailDriverRegistry, MailExtender, MailSettingsService},
        validation::RuleValidator,
    },
    settings::adapters::memory::InMemorySettingsRepository,
};
use rstest::rstest;
use serde_json::{Value, json};
use test_helpers::CustomDriver;

fn boot(extender: Option<MailExtender>) -> Result<Value> {
    let mut registry = MailDriverRegistry::with_builtin_drivers();
    if let Some(extension) = extender {
        extension.apply(&mut registry)?;
    }
    let service = MailSettingsService::new(
        Arc::new(registry),
        Arc::new(InMemorySettingsRepository::new()),
        Arc::new(RuleValidator::new()),
    );
    Ok(service.document()?.to_value()?)
}

fn fields(document: &Value) -> Result<&Value> {
    document
        .pointer("/data/attributes/fields")
        .ok_or_else(|| eyre!("document has no fields: {document}"))
}

#[rstest]
fn drivers_are_unchanged_by_default() -> Result<()> {
    let document = boot(None)?;

    assert_eq!(
        fields(&document)?,
        &json!({
            "smtp": {
                "mail_host": "",
                "mail_port": "",
                "mail_encryption": "",
                "mail_username": "",
                "mail_password": "",
            },
        })
    );
    assert_eq!(document.pointer("/data/type"), Some(&json!("mail-settings")));
    Ok(())
}

#[rstest]
fn added_driver_appears_in_fields() -> Result<()> {
    let document = boot(Some(MailExtender::new().driver("custom", CustomDriver)))?;
    let all = fields(&document)?;

    assert_eq!(all.get("custom"), Some(&json!({"customSetting1": ""})));
    assert!(all.get("smtp").is_some());
    Ok(())
}

#[rstest]
fn driver_with_existing_name_overrides_it() -> Result<()> {
    let document = boot(Some(MailExtender::new().driver("smtp", CustomDriver)))?;

    assert_eq!(
        fields(&document)?,
        &json!({"smtp": {"customSetting1": ""}})
    );
    Ok(())
}

#[rstest]
fn extension_with_invalid_name_is_rejected() {
    let mut registry = MailDriverRegistry::with_builtin_drivers();

    let result = MailExtender::new()
        .driver("custom driver", CustomDriver)
        .apply(&mut registry);

    assert!(result.is_err());
    assert_eq!(registry.len(), 1);
}
