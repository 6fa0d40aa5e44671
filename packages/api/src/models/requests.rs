//! JSON request bodies. Field names follow the backend's Portuguese keys.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::Document;

/// `POST /login`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub usuario: String,
    pub senha: String,
}

/// `POST /cadastrar_usuario`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub usuario: String,
    pub senha: String,
    pub tipo: String,
    /// Who is registering the account, for the backend's audit log.
    pub usuario_admin: String,
}

/// `POST /excluir_usuario`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUserRequest {
    /// Account to delete.
    pub usuario: String,
    /// Role of the acting user; the backend refuses anything but admin/editor.
    pub tipo_usuario: String,
    pub usuario_admin: String,
}

/// `POST /excluir_documento`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeleteDocumentRequest {
    /// The record's id exactly as stored; the backend compares JSON values.
    pub id: Value,
    pub tipo_usuario: String,
    /// Acting user.
    pub usuario: String,
}

/// `POST /editar_documento`: the backend replaces the record whose id matches
/// `original.id` with `atualizado`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EditDocumentRequest {
    pub original: Document,
    pub atualizado: Document,
    pub tipo_usuario: String,
    pub usuario: String,
}

/// `POST /excluir_upload`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteUploadRequest {
    pub filename: String,
    pub usuario: String,
    pub tipo_usuario: String,
}

/// `POST /salvar_dados`: the record form's fields as a flat string map.
///
/// `arquivo_nome` and `usuario` are ordinary keys of the map, so a form field
/// with the same name is overwritten by [`with_file_name`](Self::with_file_name)
/// and [`with_user`](Self::with_user).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordPayload(BTreeMap<String, String>);

impl RecordPayload {
    pub const FILE_NAME_KEY: &'static str = "arquivo_nome";
    pub const USER_KEY: &'static str = "usuario";

    pub fn new(fields: impl IntoIterator<Item = (String, String)>) -> Self {
        Self(fields.into_iter().collect())
    }

    /// Attach the name of a previously uploaded file. Blank names are ignored.
    pub fn with_file_name(mut self, file_name: Option<&str>) -> Self {
        if let Some(name) = file_name.map(str::trim).filter(|n| !n.is_empty()) {
            self.0.insert(Self::FILE_NAME_KEY.to_string(), name.to_string());
        }
        self
    }

    pub fn with_user(mut self, usuario: &str) -> Self {
        self.0.insert(Self::USER_KEY.to_string(), usuario.to_string());
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.0
    }
}
