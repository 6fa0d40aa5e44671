//! # HTTP implementation of [`ArchiveApi`]
//!
//! [`HttpArchive`] talks to the backend with `reqwest`. On `wasm32` reqwest
//! delegates to the browser's `fetch`, so the same code serves the web build
//! and native tests.
//!
//! Every call is a single attempt. There is no retry, no timeout beyond the
//! platform default, and no de-duplication of concurrent calls.
//!
//! Turning a status and body into a result is done by the pure functions
//! [`reply_from`], [`json_from`] and [`export_from`]; the async methods only
//! move bytes.

use reqwest::header::CONTENT_DISPOSITION;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::models::{
    DeleteDocumentRequest, DeleteUploadRequest, DeleteUserRequest, Document, EditDocumentRequest,
    ExportFile, ExportFormat, ExportRecord, LogEntry, LoginRequest, RecordPayload,
    RegisterRequest, Reply, UploadedFile, UserAccount,
};
use crate::ArchiveApi;

/// Backend client bound to one origin. Cheap to clone.
#[derive(Clone, Debug)]
pub struct HttpArchive {
    client: reqwest::Client,
    base_url: String,
}

impl HttpArchive {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    pub fn from_config(config: &store::ClientConfig) -> Self {
        Self::new(config.api.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path such as `"/ver_dados"`.
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Link that serves an uploaded file inline (`GET /uploads/<name>`).
    pub fn upload_url(&self, name: &str) -> String {
        self.url(&format!("/uploads/{name}"))
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let url = self.url(path);
        tracing::debug!("GET {url}");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        json_from(status, &body)
    }

    async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<Reply, ApiError> {
        let url = self.url(path);
        tracing::debug!("POST {url}");
        let resp = self.client.post(&url).json(body).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        reply_from(status, &body)
    }
}

/// The error for a non-2xx response: the backend's `mensagem` when the body
/// is a reply envelope carrying one, the bare status otherwise.
fn failure_from(status: StatusCode, body: &[u8]) -> ApiError {
    match serde_json::from_slice::<Reply>(body) {
        Ok(reply) if reply.mensagem.is_some() => ApiError::Rejected(reply.mensagem),
        _ => ApiError::Status(status.as_u16()),
    }
}

/// Interpret a POST response. Success needs a 2xx status and `status == "ok"`.
pub fn reply_from(status: StatusCode, body: &str) -> Result<Reply, ApiError> {
    if !status.is_success() {
        return Err(failure_from(status, body.as_bytes()));
    }
    serde_json::from_str::<Reply>(body)?.into_result()
}

/// Interpret a GET response carrying a JSON document.
pub fn json_from<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T, ApiError> {
    if !status.is_success() {
        return Err(failure_from(status, body.as_bytes()));
    }
    Ok(serde_json::from_str(body)?)
}

/// Interpret an export response. The file name comes from
/// `Content-Disposition` when the browser exposes it, `fallback` otherwise.
pub fn export_from(
    status: StatusCode,
    content_disposition: Option<&str>,
    fallback: &str,
    body: Vec<u8>,
) -> Result<ExportFile, ApiError> {
    if !status.is_success() {
        return Err(failure_from(status, &body));
    }
    let file_name = content_disposition
        .and_then(disposition_file_name)
        .unwrap_or_else(|| fallback.to_string());
    Ok(ExportFile {
        file_name,
        bytes: body,
    })
}

/// `filename` parameter of a `Content-Disposition` value.
fn disposition_file_name(header: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|param| param.trim().strip_prefix("filename="))
        .map(|name| name.trim().trim_matches('"').to_string())
        .find(|name| !name.is_empty())
}

impl ArchiveApi for HttpArchive {
    async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
        self.get_json("/ver_dados").await
    }

    async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
        let reply = self.post_json("/login", request).await?;
        Ok(reply.tipo.unwrap_or_default())
    }

    async fn register_user(&self, request: &RegisterRequest) -> Result<(), ApiError> {
        self.post_json("/cadastrar_usuario", request).await.map(drop)
    }

    async fn save_record(&self, record: &RecordPayload) -> Result<(), ApiError> {
        self.post_json("/salvar_dados", record).await.map(drop)
    }

    async fn list_users(&self) -> Result<Vec<UserAccount>, ApiError> {
        self.get_json("/ver_usuarios").await
    }

    async fn delete_user(&self, request: &DeleteUserRequest) -> Result<(), ApiError> {
        self.post_json("/excluir_usuario", request).await.map(drop)
    }

    async fn delete_document(&self, request: &DeleteDocumentRequest) -> Result<(), ApiError> {
        self.post_json("/excluir_documento", request).await.map(drop)
    }

    async fn edit_document(&self, request: &EditDocumentRequest) -> Result<Reply, ApiError> {
        self.post_json("/editar_documento", request).await
    }

    async fn upload_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        usuario: &str,
    ) -> Result<String, ApiError> {
        let url = self.url("/upload_arquivo");
        tracing::debug!("POST {url} ({} bytes)", bytes.len());
        let part = reqwest::multipart::Part::bytes(bytes).file_name(file_name.to_string());
        let form = reqwest::multipart::Form::new()
            .part("arquivo", part)
            .text("usuario", usuario.to_string());
        let resp = self.client.post(&url).multipart(form).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        let reply = reply_from(status, &body)?;
        Ok(reply
            .nome_arquivo
            .filter(|n| !n.is_empty())
            .unwrap_or_else(|| file_name.to_string()))
    }

    async fn list_uploads(&self) -> Result<Vec<UploadedFile>, ApiError> {
        self.get_json("/listar_uploads").await
    }

    async fn delete_upload(&self, request: &DeleteUploadRequest) -> Result<(), ApiError> {
        self.post_json("/excluir_upload", request).await.map(drop)
    }

    async fn export_documents(
        &self,
        format: ExportFormat,
        name: &str,
        usuario: &str,
        documents: &[Document],
    ) -> Result<ExportFile, ApiError> {
        let url = self.url(format.path());
        tracing::debug!("POST {url} ({} documents)", documents.len());
        let file_name = format.file_name(name);
        let mut query = vec![("usuario", usuario.to_string())];
        if let Some(file_name) = &file_name {
            query.push(("nome", file_name.clone()));
        }
        let resp = self
            .client
            .post(&url)
            .query(&query)
            .json(documents)
            .send()
            .await?;
        let status = resp.status();
        let disposition = resp
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.bytes().await?.to_vec();
        let fallback = file_name.unwrap_or_else(|| format!("export{}", format.extension()));
        export_from(status, disposition.as_deref(), &fallback, body)
    }

    async fn list_exports(&self) -> Result<Vec<ExportRecord>, ApiError> {
        self.get_json("/ver_exportacoes").await
    }

    async fn list_logs(&self) -> Result<Vec<LogEntry>, ApiError> {
        self.get_json("/ver_logs").await
    }
}
