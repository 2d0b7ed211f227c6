//! Serialization and deserialization implementations for TodoStore
//!
//! A store serializes as `todos = [...]` and deserializes through
//! `TodoStore::from_seed`, so a seed file gets the same checks as any
//! other seed collection.

use super::todo::Todo;
use super::todo_store::TodoStore;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Deserialize)]
struct TodoStoreHelper {
    #[serde(default)]
    todos: Vec<Todo>,
}

#[derive(Serialize)]
struct TodoStoreRef<'a> {
    todos: &'a [Todo],
}

impl Serialize for TodoStore {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        TodoStoreRef {
            todos: self.todos(),
        }
        .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TodoStore {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let helper = TodoStoreHelper::deserialize(deserializer)?;
        TodoStore::from_seed(helper.todos).map_err(serde::de::Error::custom)
    }
}

/// Priority field codec: the empty string (or a missing key) means unset
pub(crate) mod priority_key {
    use crate::todo::priority::Priority;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Priority>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            None => Ok(None),
            Some(raw) if raw.trim().is_empty() => Ok(None),
            Some(raw) => raw.parse().map(Some).map_err(serde::de::Error::custom),
        }
    }
}
