//! Persisted preferences record and the theme store built on it

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use super::storage::{JsonStore, StorageError, PREFS_KEY};
use super::types::Theme;

/// Preferences bag. Only `theme` is interpreted; other keys are carried through.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "lenient_theme")]
    pub theme: Option<Theme>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Live theme plus its persisted copy
#[derive(Clone)]
pub struct ThemeStore {
    store: JsonStore,
    active: Arc<RwLock<Theme>>,
}

impl ThemeStore {
    /// Load the persisted theme; light when nothing usable is stored.
    pub fn load(store: JsonStore) -> Self {
        let prefs: Preferences = store.read_json(PREFS_KEY, Preferences::default());
        let theme = prefs.theme.unwrap_or_default();
        tracing::debug!(theme = theme.label(), "Theme loaded");
        Self {
            store,
            active: Arc::new(RwLock::new(theme)),
        }
    }

    pub async fn current(&self) -> Theme {
        *self.active.read().await
    }

    /// Flip the live theme and persist it.
    ///
    /// The live theme changes even when the write fails; the error is returned
    /// for logging.
    pub async fn toggle(&self) -> Result<Theme, StorageError> {
        let mut active = self.active.write().await;
        let next = active.toggled();
        *active = next;

        let mut prefs: Preferences = self.store.read_json(PREFS_KEY, Preferences::default());
        prefs.theme = Some(next);
        self.store.write_json(PREFS_KEY, &prefs)?;

        tracing::info!(theme = next.label(), "Theme toggled");
        Ok(next)
    }
}

fn lenient_theme<'de, D>(deserializer: D) -> Result<Option<Theme>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}
