//! # Document exports
//!
//! `POST /exportar_excel` and `POST /exportar_word` take the documents as the
//! JSON body and answer with the generated file. The backend also keeps a
//! history of every export, listed by `GET /ver_exportacoes`.

use serde::{Deserialize, Serialize};

use super::opaque_text;

/// Export file type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Excel,
    Word,
}

impl ExportFormat {
    pub const ALL: [ExportFormat; 2] = [ExportFormat::Excel, ExportFormat::Word];

    pub fn path(self) -> &'static str {
        match self {
            ExportFormat::Excel => "/exportar_excel",
            ExportFormat::Word => "/exportar_word",
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Excel => ".xlsx",
            ExportFormat::Word => ".docx",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ExportFormat::Excel => "Excel",
            ExportFormat::Word => "Word",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Excel => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Word => {
                "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
            }
        }
    }

    /// Name the backend will store the export under: `name` with the
    /// extension appended unless it already ends with it (case-insensitive).
    /// A blank name yields `None` and the backend picks a timestamped one.
    pub fn file_name(self, name: &str) -> Option<String> {
        let name = name.trim();
        if name.is_empty() {
            return None;
        }
        if name.to_lowercase().ends_with(self.extension()) {
            Some(name.to_string())
        } else {
            Some(format!("{name}{}", self.extension()))
        }
    }
}

/// A generated export, ready to hand to the browser as a download.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// One entry of `GET /ver_exportacoes`. The exported rows (`dados`) are not
/// kept.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportRecord {
    #[serde(default, deserialize_with = "opaque_text")]
    pub id: String,
    #[serde(default, deserialize_with = "opaque_text")]
    pub nome_arquivo: String,
    #[serde(default, deserialize_with = "opaque_text")]
    pub tipo: String,
    #[serde(default, deserialize_with = "opaque_text")]
    pub usuario: String,
    #[serde(default, deserialize_with = "opaque_text")]
    pub timestamp: String,
    #[serde(default)]
    pub quantidade_documentos: u64,
}
