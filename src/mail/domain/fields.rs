//! Settings fields declared by mail drivers.

use super::MailDomainError;
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};

/// A single configurable field declared by a driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingField {
    name: String,
    default: String,
}

impl SettingField {
    /// Creates a field whose default representation is the empty string.
    ///
    /// # Errors
    ///
    /// Returns [`MailDomainError::EmptyFieldName`] when `name` is blank.
    pub fn new(name: impl Into<String>) -> Result<Self, MailDomainError> {
        let normalized = name.into().trim().to_owned();
        if normalized.is_empty() {
            return Err(MailDomainError::EmptyFieldName);
        }
        Ok(Self {
            name: normalized,
            default: String::new(),
        })
    }

    /// Sets the value reported when the settings store holds nothing.
    #[must_use]
    pub fn with_default(mut self, default: impl Into<String>) -> Self {
        self.default = default.into();
        self
    }

    /// Returns the field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the default value.
    #[must_use]
    pub fn default_value(&self) -> &str {
        &self.default
    }
}

/// The ordered set of fields a driver recognises.
///
/// Field names are unique within one driver. Declaration order is kept so
/// that settings screens list fields the way the driver author wrote them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AvailableSettings {
    fields: Vec<SettingField>,
}

impl AvailableSettings {
    /// Creates an empty field set, for drivers that need no configuration.
    #[must_use]
    pub const fn none() -> Self {
        Self { fields: Vec::new() }
    }

    /// Creates a field set from field names, each defaulting to `""`.
    ///
    /// # Errors
    ///
    /// Returns [`MailDomainError::EmptyFieldName`] for blank names or
    /// [`MailDomainError::DuplicateField`] when a name repeats.
    pub fn from_names<I, S>(names: I) -> Result<Self, MailDomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        names
            .into_iter()
            .try_fold(Self::none(), |settings, name| {
                settings.with_field(SettingField::new(name)?)
            })
    }

    /// Appends a field.
    ///
    /// # Errors
    ///
    /// Returns [`MailDomainError::DuplicateField`] when a field with the same
    /// name was already declared.
    pub fn with_field(mut self, field: SettingField) -> Result<Self, MailDomainError> {
        if self.contains(field.name()) {
            return Err(MailDomainError::DuplicateField(field.name().to_owned()));
        }
        self.fields.push(field);
        Ok(self)
    }

    /// Returns whether a field with `name` is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.iter().any(|field| field.name() == name)
    }

    /// Iterates over fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &SettingField> {
        self.fields.iter()
    }

    /// Returns the number of declared fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` when the driver declares no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl<'a> IntoIterator for &'a AvailableSettings {
    type Item = &'a SettingField;
    type IntoIter = std::slice::Iter<'a, SettingField>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

/// Resolved field values of one driver: field name to current value.
///
/// Values keep the order in which they were inserted, which for a resolved
/// driver is its declaration order. Serialises as a JSON object in that
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DriverFields(Vec<(String, String)>);

impl DriverFields {
    /// Creates an empty set of resolved values.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Records the resolved value for `field`.
    ///
    /// A field inserted twice keeps its first position and takes the latest
    /// value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<String>) {
        let name = field.into();
        let resolved = value.into();
        if let Some(entry) = self.0.iter_mut().find(|(existing, _)| *existing == name) {
            entry.1 = resolved;
            return;
        }
        self.0.push((name, resolved));
    }

    /// Returns the resolved value for `field`.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, value)| value.as_str())
    }

    /// Iterates over field names and values in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Returns the number of resolved fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` when no field was resolved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for DriverFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<K, V> FromIterator<(K, V)> for DriverFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (key, value) in iter {
            fields.insert(key, value);
        }
        fields
    }
}
