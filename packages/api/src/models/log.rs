use serde::{Deserialize, Serialize};

use super::opaque_text;

/// One audit row from `GET /ver_logs`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    #[serde(default, deserialize_with = "opaque_text")]
    pub id: String,
    #[serde(default, deserialize_with = "opaque_text")]
    pub usuario: String,
    #[serde(default, deserialize_with = "opaque_text")]
    pub acao: String,
    #[serde(default, deserialize_with = "opaque_text")]
    pub detalhes: String,
    #[serde(default, deserialize_with = "opaque_text")]
    pub timestamp: String,
}
