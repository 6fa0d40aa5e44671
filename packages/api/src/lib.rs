//! # API crate — HTTP client for the Arquivo backend
//!
//! This crate is everything the front end knows about the archive backend: the
//! JSON shapes it exchanges, the error type every call returns, and the
//! [`ArchiveApi`] trait the page controller is written against.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`models`] | Wire types: documents, user accounts, roles, uploads, exports, audit log rows, request bodies and the `{status, mensagem}` reply envelope |
//! | [`error`] | [`ApiError`], the transport / HTTP status / decode / rejection split |
//! | [`client`] | [`HttpArchive`], the `reqwest` implementation used in the browser |
//!
//! ## Endpoints
//!
//! | Method | Path | Trait method |
//! |--------|------|--------------|
//! | GET | `/ver_dados` | [`ArchiveApi::list_documents`] |
//! | POST | `/login` | [`ArchiveApi::login`] |
//! | POST | `/cadastrar_usuario` | [`ArchiveApi::register_user`] |
//! | POST | `/salvar_dados` | [`ArchiveApi::save_record`] |
//! | GET | `/ver_usuarios` | [`ArchiveApi::list_users`] |
//! | POST | `/excluir_usuario` | [`ArchiveApi::delete_user`] |
//! | POST | `/excluir_documento` | [`ArchiveApi::delete_document`] |
//! | POST | `/editar_documento` | [`ArchiveApi::edit_document`] |
//! | POST | `/upload_arquivo` | [`ArchiveApi::upload_file`] |
//! | GET | `/listar_uploads` | [`ArchiveApi::list_uploads`] |
//! | POST | `/excluir_upload` | [`ArchiveApi::delete_upload`] |
//! | POST | `/exportar_excel`, `/exportar_word` | [`ArchiveApi::export_documents`] |
//! | GET | `/ver_exportacoes` | [`ArchiveApi::list_exports`] |
//! | GET | `/ver_logs` | [`ArchiveApi::list_logs`] |
//!
//! A call succeeds only when the HTTP status is 2xx and, for the POST
//! endpoints that answer JSON, the reply's `status` field is `"ok"`.
//! Uploaded files themselves are plain links built by
//! [`HttpArchive::upload_url`].

use std::future::Future;

pub mod client;
pub mod error;
pub mod models;

pub use client::HttpArchive;
pub use error::ApiError;
pub use models::{
    DeleteDocumentRequest, DeleteUploadRequest, DeleteUserRequest, Document,
    EditDocumentRequest, ExportFile, ExportFormat, ExportRecord, LogEntry, LoginRequest,
    RecordPayload, RegisterRequest, Reply, Role, UploadedFile, UserAccount,
};

/// Every backend call the front end makes.
///
/// Futures are not `Send`: the browser runs everything on one thread.
pub trait ArchiveApi {
    fn list_documents(&self) -> impl Future<Output = Result<Vec<Document>, ApiError>>;

    /// Authenticate and return the role string the backend reports.
    fn login(&self, request: &LoginRequest) -> impl Future<Output = Result<String, ApiError>>;

    fn register_user(
        &self,
        request: &RegisterRequest,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn save_record(&self, record: &RecordPayload) -> impl Future<Output = Result<(), ApiError>>;

    fn list_users(&self) -> impl Future<Output = Result<Vec<UserAccount>, ApiError>>;

    fn delete_user(
        &self,
        request: &DeleteUserRequest,
    ) -> impl Future<Output = Result<(), ApiError>>;

    fn delete_document(
        &self,
        request: &DeleteDocumentRequest,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// Replace a record. The reply's `mensagem` is the backend's confirmation.
    fn edit_document(
        &self,
        request: &EditDocumentRequest,
    ) -> impl Future<Output = Result<Reply, ApiError>>;

    /// Upload a file and return the name the backend stored it under.
    fn upload_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        usuario: &str,
    ) -> impl Future<Output = Result<String, ApiError>>;

    fn list_uploads(&self) -> impl Future<Output = Result<Vec<UploadedFile>, ApiError>>;

    fn delete_upload(
        &self,
        request: &DeleteUploadRequest,
    ) -> impl Future<Output = Result<(), ApiError>>;

    /// Generate an export of `documents`. A blank `name` lets the backend
    /// pick a timestamped file name.
    fn export_documents(
        &self,
        format: ExportFormat,
        name: &str,
        usuario: &str,
        documents: &[Document],
    ) -> impl Future<Output = Result<ExportFile, ApiError>>;

    fn list_exports(&self) -> impl Future<Output = Result<Vec<ExportRecord>, ApiError>>;

    fn list_logs(&self) -> impl Future<Output = Result<Vec<LogEntry>, ApiError>>;
}
