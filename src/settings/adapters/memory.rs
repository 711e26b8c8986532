//! In-memory settings store.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use crate::settings::{
    domain::SettingKey,
    ports::{SettingsRepository, SettingsRepositoryError, SettingsResult},
};

/// Thread-safe in-memory settings store.
///
/// Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct InMemorySettingsRepository {
    state: Arc<RwLock<HashMap<SettingKey, String>>>,
}

impl InMemorySettingsRepository {
    /// Creates an empty settings store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `values`.
    #[must_use]
    pub fn with_values(values: impl IntoIterator<Item = (SettingKey, String)>) -> Self {
        Self {
            state: Arc::new(RwLock::new(values.into_iter().collect())),
        }
    }
}

fn poisoned(err: impl ToString) -> SettingsRepositoryError {
    SettingsRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

impl SettingsRepository for InMemorySettingsRepository {
    fn get(&self, key: &SettingKey) -> SettingsResult<Option<String>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.get(key).cloned())
    }

    fn set(&self, key: &SettingKey, value: String) -> SettingsResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.insert(key.clone(), value);
        Ok(())
    }

    fn delete(&self, key: &SettingKey) -> SettingsResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        state.remove(key);
        Ok(())
    }

    fn all(&self) -> SettingsResult<BTreeMap<SettingKey, String>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::InMemorySettingsRepository;
    use crate::settings::{domain::SettingKey, ports::SettingsRepository};
    use rstest::{fixture, rstest};

    #[fixture]
    fn host_key() -> SettingKey {
        SettingKey::new("smtp.mail_host").expect("valid key")
    }

    #[rstest]
    fn missing_key_reads_as_none(host_key: SettingKey) {
        let repo = InMemorySettingsRepository::new();
        assert_eq!(repo.get(&host_key).expect("read"), None);
    }

    #[rstest]
    fn set_then_get_returns_latest_value(host_key: SettingKey) {
        let repo = InMemorySettingsRepository::new();
        repo.set(&host_key, "smtp.example.com".to_owned())
            .expect("write");
        repo.set(&host_key, "mx.example.com".to_owned()).expect("write");

        assert_eq!(
            repo.get(&host_key).expect("read").as_deref(),
            Some("mx.example.com")
        );
    }

    #[rstest]
    fn delete_removes_value_and_tolerates_absent_keys(host_key: SettingKey) {
        let repo = InMemorySettingsRepository::with_values([(host_key.clone(), "a".to_owned())]);
        repo.delete(&host_key).expect("delete");
        repo.delete(&host_key).expect("second delete is a no-op");

        assert!(repo.get(&host_key).expect("read").is_none());
    }

    #[rstest]
    fn clones_share_state(host_key: SettingKey) {
        let repo = InMemorySettingsRepository::new();
        let clone = repo.clone();
        clone.set(&host_key, "shared".to_owned()).expect("write");

        assert_eq!(repo.get(&host_key).expect("read").as_deref(), Some("shared"));
    }

    #[rstest]
    fn all_is_ordered_by_key() {
        let repo = InMemorySettingsRepository::with_values([
            (SettingKey::new("b").expect("key"), "2".to_owned()),
            (SettingKey::new("a").expect("key"), "1".to_owned()),
        ]);

        let keys: Vec<String> = repo
            .all()
            .expect("read")
            .into_keys()
            .map(|key| key.as_str().to_owned())
            .collect();
        assert_eq!(keys, vec!["a".to_owned(), "b".to_owned()]);
    }
}
