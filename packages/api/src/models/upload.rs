use serde::{Deserialize, Serialize};

use super::opaque_text;

/// One file in the backend's upload folder, from `GET /listar_uploads`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub nome: String,
    /// Size in bytes.
    #[serde(default)]
    pub tamanho: u64,
    #[serde(default, deserialize_with = "opaque_text")]
    pub data_modificacao: String,
}

impl UploadedFile {
    /// Size for display: bytes below 1 KB, then KB and MB with one decimal.
    pub fn size_label(&self) -> String {
        const KB: u64 = 1024;
        const MB: u64 = 1024 * KB;
        match self.tamanho {
            n if n < KB => format!("{n} B"),
            n if n < MB => format!("{:.1} KB", n as f64 / KB as f64),
            n => format!("{:.1} MB", n as f64 / MB as f64),
        }
    }
}
