use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// The `{status, mensagem?, ...}` envelope every POST endpoint answers with.
///
/// Endpoint-specific extras (`tipo` from login, `nome_arquivo` from upload)
/// are optional fields here instead of separate types.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mensagem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tipo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nome_arquivo: Option<String>,
}

impl Reply {
    pub const OK: &'static str = "ok";

    pub fn is_ok(&self) -> bool {
        self.status == Self::OK
    }

    /// `Ok(self)` when `status == "ok"`, [`ApiError::Rejected`] otherwise.
    pub fn into_result(self) -> Result<Self, ApiError> {
        if self.is_ok() {
            Ok(self)
        } else {
            Err(ApiError::Rejected(self.mensagem))
        }
    }
}
