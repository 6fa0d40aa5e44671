//! # Catalog records
//!
//! The backend keeps each record as whatever JSON object the record form
//! sent, plus an `id` and `arquivo_nome` it fills in itself. A [`Document`]
//! holds that object unchanged: the id is matched by JSON equality on delete
//! and edit, so a numeric `7` must go back as `7` and not as `"7"`.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::display_value;

static NULL: Value = Value::Null;

/// A catalog record as returned by `GET /ver_dados`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Document(Map<String, Value>);

impl Document {
    pub const ID_KEY: &'static str = "id";
    pub const FILE_NAME_KEY: &'static str = "arquivo_nome";
    pub const USER_KEY: &'static str = "usuario";

    /// Keys the backend or the upload step own. The edit form leaves them alone.
    pub const RESERVED_KEYS: [&'static str; 3] = [Self::ID_KEY, Self::FILE_NAME_KEY, Self::USER_KEY];

    /// The stored id exactly as the backend sent it, `null` when absent.
    pub fn id(&self) -> &Value {
        self.0.get(Self::ID_KEY).unwrap_or(&NULL)
    }

    pub fn id_text(&self) -> String {
        display_value(self.id())
    }

    /// A field rendered as text; missing fields are empty.
    pub fn text(&self, key: &str) -> String {
        self.0.get(key).map(display_value).unwrap_or_default()
    }

    /// Table cells in display order: id, title, author, date.
    pub fn cells(&self) -> [String; 4] {
        [
            self.id_text(),
            self.text("titulo"),
            self.text("autor"),
            self.text("data"),
        ]
    }

    /// Fields the edit form shows, as text, in key order.
    pub fn editable_fields(&self) -> Vec<(String, String)> {
        self.0
            .iter()
            .filter(|(key, _)| !Self::RESERVED_KEYS.contains(&key.as_str()))
            .map(|(key, value)| (key.clone(), display_value(value)))
            .collect()
    }

    /// Copy of this record with `edits` applied as string values.
    ///
    /// Reserved keys in `edits` are ignored, so the id and attachment of the
    /// original always survive an edit.
    pub fn with_edits(&self, edits: impl IntoIterator<Item = (String, String)>) -> Self {
        let mut fields = self.0.clone();
        for (key, value) in edits {
            if Self::RESERVED_KEYS.contains(&key.as_str()) {
                continue;
            }
            fields.insert(key, Value::String(value));
        }
        Self(fields)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Document {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
