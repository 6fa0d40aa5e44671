//! # Page controller actions
//!
//! One async function per user action. Each takes its collaborators
//! explicitly (the [`ArchiveApi`], the [`SessionStore`], the [`Dialogs`]) and
//! returns what the component must do next: new rows to render, a page to go
//! to, or whether to reset a form. The components in this crate are thin
//! bindings around these functions.
//!
//! Every action is a single attempt. Failures end the action with an alert;
//! nothing is retried or rolled back.

use api::{
    ArchiveApi, DeleteDocumentRequest, DeleteUploadRequest, DeleteUserRequest, Document,
    EditDocumentRequest, ExportFile, ExportFormat, ExportRecord, LogEntry, LoginRequest,
    RecordPayload, RegisterRequest, Role, UploadedFile, UserAccount,
};
use store::{KeyValueStore, SessionStore, Theme};

use crate::dialogs::Dialogs;
use crate::pages::Page;

pub const MSG_LOAD_DOCUMENTS_FAILED: &str = "Erro ao carregar documentos.";
pub const MSG_LOGIN_FAILED: &str = "Usuário ou senha inválidos.";
pub const MSG_COMMUNICATION: &str = "Erro de comunicação com o servidor.";
pub const MSG_FILL_ALL_FIELDS: &str = "Preencha todos os campos.";
pub const MSG_USER_REGISTERED: &str = "Usuário cadastrado com sucesso!";
pub const MSG_REGISTER_FAILED: &str = "Erro ao cadastrar usuário.";
pub const MSG_RECORD_SAVED: &str = "Dados salvos com sucesso!";
pub const MSG_SAVE_FAILED: &str = "Erro ao salvar dados.";
pub const MSG_LOAD_USERS_FAILED: &str = "Erro ao carregar usuários.";
pub const MSG_DELETE_USER_FAILED: &str = "Erro ao excluir usuário.";
pub const MSG_DELETE_DOCUMENT_FAILED: &str = "Erro ao excluir documento.";
pub const MSG_CONFIRM_DELETE_DOCUMENT: &str = "Tem certeza que deseja excluir este documento?";
pub const MSG_UPLOAD_FAILED: &str = "Erro ao enviar arquivo.";
pub const MSG_LOAD_LOGS_FAILED: &str = "Erro ao carregar registros de atividade.";
pub const MSG_DOCUMENT_UPDATED: &str = "Documento atualizado com sucesso.";
pub const MSG_EDIT_DOCUMENT_FAILED: &str = "Erro ao editar documento.";
pub const MSG_LOAD_UPLOADS_FAILED: &str = "Erro ao carregar arquivos.";
pub const MSG_DELETE_UPLOAD_FAILED: &str = "Erro ao excluir arquivo.";
pub const MSG_EXPORT_FAILED: &str = "Erro ao exportar documentos.";
pub const MSG_LOAD_EXPORTS_FAILED: &str = "Erro ao carregar exportações.";

/// Acting identity used when registering users without a session.
pub const DEFAULT_ADMIN: &str = "admin";
/// Acting identity used when saving records without a session.
pub const DEFAULT_USER: &str = "usuario";

/// Fetch the documents table. `None` means the fetch failed, the user was
/// alerted, and the caller should keep showing the previous rows.
pub async fn load_documents<A, D>(api: &A, dialogs: &D) -> Option<Vec<Document>>
where
    A: ArchiveApi,
    D: Dialogs,
{
    match api.list_documents().await {
        Ok(documents) => {
            tracing::info!("Loaded {} documents", documents.len());
            Some(documents)
        }
        Err(e) => {
            tracing::error!("Failed to load documents: {e}");
            dialogs.alert(MSG_LOAD_DOCUMENTS_FAILED);
            None
        }
    }
}

/// Authenticate. On success the session is persisted and the role's landing
/// page is returned; on failure storage is left untouched.
pub async fn login<A, S, D>(
    api: &A,
    sessions: &SessionStore<S>,
    dialogs: &D,
    username: &str,
    password: &str,
) -> Option<Page>
where
    A: ArchiveApi,
    S: KeyValueStore,
    D: Dialogs,
{
    let request = LoginRequest {
        usuario: username.to_string(),
        senha: password.to_string(),
    };
    tracing::debug!("Logging in as {username}");
    match api.login(&request).await {
        Ok(role) => {
            sessions.save_session(username, &role);
            let page = Page::landing(Some(&role));
            tracing::info!("Logged in as {username} ({role})");
            Some(page)
        }
        Err(e @ api::ApiError::Rejected(_)) => {
            tracing::warn!("Login rejected for {username}: {e}");
            dialogs.alert(&e.user_message(MSG_LOGIN_FAILED));
            None
        }
        Err(e) => {
            tracing::error!("Login failed: {e}");
            dialogs.alert(MSG_COMMUNICATION);
            None
        }
    }
}

/// Contents of the user registration form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registration {
    pub username: String,
    pub password: String,
    pub role: String,
}

impl Registration {
    /// All three fields are required. Whitespace alone counts as empty.
    pub fn is_complete(&self) -> bool {
        [&self.username, &self.password, &self.role]
            .iter()
            .all(|v| !v.trim().is_empty())
    }
}

/// Register a new account. Returns `true` when the form should be reset.
pub async fn register_user<A, S, D>(
    api: &A,
    sessions: &SessionStore<S>,
    dialogs: &D,
    form: &Registration,
) -> bool
where
    A: ArchiveApi,
    S: KeyValueStore,
    D: Dialogs,
{
    if !form.is_complete() {
        dialogs.alert(MSG_FILL_ALL_FIELDS);
        return false;
    }

    let session = sessions.session();
    let request = RegisterRequest {
        usuario: form.username.trim().to_string(),
        senha: form.password.clone(),
        tipo: form.role.trim().to_string(),
        usuario_admin: session.username_or(DEFAULT_ADMIN).to_string(),
    };
    match api.register_user(&request).await {
        Ok(()) => {
            tracing::info!("Registered user {} as {}", request.usuario, request.tipo);
            dialogs.alert(MSG_USER_REGISTERED);
            true
        }
        Err(e) => {
            tracing::warn!("Failed to register {}: {e}", request.usuario);
            dialogs.alert(&e.user_message(MSG_REGISTER_FAILED));
            false
        }
    }
}

/// Save the record form. `fields` are the form's named inputs, `file_name`
/// the name returned by an earlier upload. Returns `true` when the form and
/// the file-name field should be cleared.
pub async fn save_record<A, S, D>(
    api: &A,
    sessions: &SessionStore<S>,
    dialogs: &D,
    fields: impl IntoIterator<Item = (String, String)>,
    file_name: Option<&str>,
) -> bool
where
    A: ArchiveApi,
    S: KeyValueStore,
    D: Dialogs,
{
    let session = sessions.session();
    let record = RecordPayload::new(fields)
        .with_file_name(file_name)
        .with_user(session.username_or(DEFAULT_USER));
    match api.save_record(&record).await {
        Ok(()) => {
            tracing::info!("Saved record with {} fields", record.fields().len());
            dialogs.alert(MSG_RECORD_SAVED);
            true
        }
        Err(e) => {
            tracing::warn!("Failed to save record: {e}");
            dialogs.alert(&e.user_message(MSG_SAVE_FAILED));
            false
        }
    }
}

/// Fetch the users table. `None` after a failure.
pub async fn load_users<A, D>(api: &A, dialogs: &D) -> Option<Vec<UserAccount>>
where
    A: ArchiveApi,
    D: Dialogs,
{
    match api.list_users().await {
        Ok(users) => Some(users),
        Err(e) => {
            tracing::error!("Failed to load users: {e}");
            dialogs.alert(MSG_LOAD_USERS_FAILED);
            None
        }
    }
}

/// Confirmation prompt for deleting `username`.
pub fn confirm_delete_user_message(username: &str) -> String {
    format!("Tem certeza que deseja excluir o usuário \"{username}\"?")
}

/// Delete an account after confirmation. Returns `true` when the page should
/// reload.
pub async fn delete_user<A, S, D>(
    api: &A,
    sessions: &SessionStore<S>,
    dialogs: &D,
    username: &str,
) -> bool
where
    A: ArchiveApi,
    S: KeyValueStore,
    D: Dialogs,
{
    if !dialogs.confirm(&confirm_delete_user_message(username)) {
        return false;
    }

    let session = sessions.session();
    let request = DeleteUserRequest {
        usuario: username.to_string(),
        tipo_usuario: session.role_or("").to_string(),
        usuario_admin: session.username_or(DEFAULT_ADMIN).to_string(),
    };
    match api.delete_user(&request).await {
        Ok(()) => {
            tracing::info!("Deleted user {username}");
            true
        }
        Err(e) => {
            tracing::warn!("Failed to delete user {username}: {e}");
            dialogs.alert(&e.user_message(MSG_DELETE_USER_FAILED));
            false
        }
    }
}

/// Whether the logged-in role may edit and delete records and uploads.
/// The backend enforces the same rule; this only hides the buttons.
pub fn can_modify<S: KeyValueStore>(sessions: &SessionStore<S>) -> bool {
    sessions
        .session()
        .role
        .as_deref()
        .and_then(Role::parse)
        .is_some_and(Role::can_modify)
}

/// Delete a document after confirmation. Returns `true` when the documents
/// table should be refetched.
pub async fn delete_document<A, S, D>(
    api: &A,
    sessions: &SessionStore<S>,
    dialogs: &D,
    document: &Document,
) -> bool
where
    A: ArchiveApi,
    S: KeyValueStore,
    D: Dialogs,
{
    if !dialogs.confirm(MSG_CONFIRM_DELETE_DOCUMENT) {
        return false;
    }

    let session = sessions.session();
    let id = document.id_text();
    let request = DeleteDocumentRequest {
        id: document.id().clone(),
        tipo_usuario: session.role_or("").to_string(),
        usuario: session.username_or(DEFAULT_USER).to_string(),
    };
    match api.delete_document(&request).await {
        Ok(()) => {
            tracing::info!("Deleted document {id}");
            true
        }
        Err(e) => {
            tracing::warn!("Failed to delete document {id}: {e}");
            dialogs.alert(&e.user_message(MSG_DELETE_DOCUMENT_FAILED));
            false
        }
    }
}

/// Replace `original` with a copy carrying `edits`. Returns `true` when the
/// edit form should close and the table be refetched.
pub async fn edit_document<A, S, D>(
    api: &A,
    sessions: &SessionStore<S>,
    dialogs: &D,
    original: &Document,
    edits: impl IntoIterator<Item = (String, String)>,
) -> bool
where
    A: ArchiveApi,
    S: KeyValueStore,
    D: Dialogs,
{
    let session = sessions.session();
    let request = EditDocumentRequest {
        original: original.clone(),
        atualizado: original.with_edits(edits),
        tipo_usuario: session.role_or("").to_string(),
        usuario: session.username_or(DEFAULT_USER).to_string(),
    };
    let id = original.id_text();
    match api.edit_document(&request).await {
        Ok(reply) => {
            tracing::info!("Edited document {id}");
            let message = reply
                .mensagem
                .filter(|m| !m.trim().is_empty())
                .unwrap_or_else(|| MSG_DOCUMENT_UPDATED.to_string());
            dialogs.alert(&message);
            true
        }
        Err(e) => {
            tracing::warn!("Failed to edit document {id}: {e}");
            dialogs.alert(&e.user_message(MSG_EDIT_DOCUMENT_FAILED));
            false
        }
    }
}

/// Upload an attachment. Returns the stored file name for the record form.
pub async fn upload_file<A, S, D>(
    api: &A,
    sessions: &SessionStore<S>,
    dialogs: &D,
    file_name: &str,
    bytes: Vec<u8>,
) -> Option<String>
where
    A: ArchiveApi,
    S: KeyValueStore,
    D: Dialogs,
{
    let session = sessions.session();
    match api
        .upload_file(file_name, bytes, session.username_or(DEFAULT_USER))
        .await
    {
        Ok(stored) => {
            tracing::info!("Uploaded {file_name} as {stored}");
            Some(stored)
        }
        Err(e) => {
            tracing::warn!("Failed to upload {file_name}: {e}");
            dialogs.alert(&e.user_message(MSG_UPLOAD_FAILED));
            None
        }
    }
}

/// Fetch the list of uploaded files. `None` after a failure.
pub async fn load_uploads<A, D>(api: &A, dialogs: &D) -> Option<Vec<UploadedFile>>
where
    A: ArchiveApi,
    D: Dialogs,
{
    match api.list_uploads().await {
        Ok(files) => Some(files),
        Err(e) => {
            tracing::error!("Failed to load uploads: {e}");
            dialogs.alert(MSG_LOAD_UPLOADS_FAILED);
            None
        }
    }
}

/// Confirmation prompt for deleting an uploaded file.
pub fn confirm_delete_upload_message(file_name: &str) -> String {
    format!("Tem certeza que deseja excluir o arquivo \"{file_name}\"?")
}

/// Delete an uploaded file after confirmation. Returns `true` when the list
/// should be refetched.
pub async fn delete_upload<A, S, D>(
    api: &A,
    sessions: &SessionStore<S>,
    dialogs: &D,
    file_name: &str,
) -> bool
where
    A: ArchiveApi,
    S: KeyValueStore,
    D: Dialogs,
{
    if !dialogs.confirm(&confirm_delete_upload_message(file_name)) {
        return false;
    }

    let session = sessions.session();
    let request = DeleteUploadRequest {
        filename: file_name.to_string(),
        usuario: session.username_or(DEFAULT_USER).to_string(),
        tipo_usuario: session.role_or("").to_string(),
    };
    match api.delete_upload(&request).await {
        Ok(()) => {
            tracing::info!("Deleted upload {file_name}");
            true
        }
        Err(e) => {
            tracing::warn!("Failed to delete upload {file_name}: {e}");
            dialogs.alert(&e.user_message(MSG_DELETE_UPLOAD_FAILED));
            false
        }
    }
}

/// Export the given rows. Returns the generated file for the caller to
/// offer as a download.
pub async fn export_documents<A, S, D>(
    api: &A,
    sessions: &SessionStore<S>,
    dialogs: &D,
    format: ExportFormat,
    name: &str,
    documents: &[Document],
) -> Option<ExportFile>
where
    A: ArchiveApi,
    S: KeyValueStore,
    D: Dialogs,
{
    let session = sessions.session();
    let usuario = session.username_or(DEFAULT_USER);
    match api.export_documents(format, name, usuario, documents).await {
        Ok(file) => {
            tracing::info!(
                "Exported {} documents to {} ({} bytes)",
                documents.len(),
                file.file_name,
                file.bytes.len()
            );
            Some(file)
        }
        Err(e) => {
            tracing::warn!("Failed to export to {}: {e}", format.label());
            dialogs.alert(&e.user_message(MSG_EXPORT_FAILED));
            None
        }
    }
}

/// Fetch the export history. `None` after a failure.
pub async fn load_exports<A, D>(api: &A, dialogs: &D) -> Option<Vec<ExportRecord>>
where
    A: ArchiveApi,
    D: Dialogs,
{
    match api.list_exports().await {
        Ok(rows) => Some(rows),
        Err(e) => {
            tracing::error!("Failed to load export history: {e}");
            dialogs.alert(MSG_LOAD_EXPORTS_FAILED);
            None
        }
    }
}

/// Fetch the backend's audit log. `None` after a failure.
pub async fn load_logs<A, D>(api: &A, dialogs: &D) -> Option<Vec<LogEntry>>
where
    A: ArchiveApi,
    D: Dialogs,
{
    match api.list_logs().await {
        Ok(entries) => Some(entries),
        Err(e) => {
            tracing::error!("Failed to load activity log: {e}");
            dialogs.alert(MSG_LOAD_LOGS_FAILED);
            None
        }
    }
}

/// Forget the session and theme; the caller navigates to the returned page.
pub fn logout<S: KeyValueStore>(sessions: &SessionStore<S>) -> Page {
    sessions.clear();
    tracing::info!("Logged out");
    Page::Index
}

/// Target of the back button: the session role's landing page.
pub fn back_destination<S: KeyValueStore>(sessions: &SessionStore<S>) -> Page {
    Page::landing(sessions.session().role.as_deref())
}

/// Theme to apply on page load. Stores the default when nothing valid is stored.
pub fn init_theme<S: KeyValueStore>(sessions: &SessionStore<S>) -> Theme {
    sessions.init_theme()
}

/// Flip and persist the theme. The caller applies the returned value.
pub fn toggle_theme<S: KeyValueStore>(sessions: &SessionStore<S>) -> Theme {
    let theme = sessions.toggle_theme();
    tracing::debug!("Theme is now {}", theme.as_str());
    theme
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use api::{ApiError, Reply};
    use serde_json::{json, Value};
    use store::MemoryStore;

    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    enum Call {
        ListDocuments,
        Login(LoginRequest),
        Register(RegisterRequest),
        Save(RecordPayload),
        ListUsers,
        DeleteUser(DeleteUserRequest),
        DeleteDocument(DeleteDocumentRequest),
        EditDocument(EditDocumentRequest),
        Upload(String, usize, String),
        ListUploads,
        DeleteUpload(DeleteUploadRequest),
        Export(ExportFormat, String, String, usize),
        ListExports,
        ListLogs,
    }

    /// Records every call and answers with canned data, or `fail` when set.
    #[derive(Default)]
    struct FakeApi {
        fail: Option<ApiError>,
        role: String,
        documents: Vec<Document>,
        users: Vec<UserAccount>,
        uploads: Vec<UploadedFile>,
        edit_message: Option<String>,
        calls: RefCell<Vec<Call>>,
    }

    impl FakeApi {
        fn failing(error: ApiError) -> Self {
            Self {
                fail: Some(error),
                ..Self::default()
            }
        }

        fn answer<T>(&self, call: Call, value: T) -> Result<T, ApiError> {
            self.calls.borrow_mut().push(call);
            match &self.fail {
                Some(e) => Err(e.clone()),
                None => Ok(value),
            }
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.borrow().clone()
        }
    }

    impl ArchiveApi for FakeApi {
        async fn list_documents(&self) -> Result<Vec<Document>, ApiError> {
            self.answer(Call::ListDocuments, self.documents.clone())
        }

        async fn login(&self, request: &LoginRequest) -> Result<String, ApiError> {
            self.answer(Call::Login(request.clone()), self.role.clone())
        }

        async fn register_user(&self, request: &RegisterRequest) -> Result<(), ApiError> {
            self.answer(Call::Register(request.clone()), ())
        }

        async fn save_record(&self, record: &RecordPayload) -> Result<(), ApiError> {
            self.answer(Call::Save(record.clone()), ())
        }

        async fn list_users(&self) -> Result<Vec<UserAccount>, ApiError> {
            self.answer(Call::ListUsers, self.users.clone())
        }

        async fn delete_user(&self, request: &DeleteUserRequest) -> Result<(), ApiError> {
            self.answer(Call::DeleteUser(request.clone()), ())
        }

        async fn delete_document(&self, request: &DeleteDocumentRequest) -> Result<(), ApiError> {
            self.answer(Call::DeleteDocument(request.clone()), ())
        }

        async fn edit_document(&self, request: &EditDocumentRequest) -> Result<Reply, ApiError> {
            let reply = Reply {
                status: Reply::OK.to_string(),
                mensagem: self.edit_message.clone(),
                ..Reply::default()
            };
            self.answer(Call::EditDocument(request.clone()), reply)
        }

        async fn upload_file(
            &self,
            file_name: &str,
            bytes: Vec<u8>,
            usuario: &str,
        ) -> Result<String, ApiError> {
            let call = Call::Upload(file_name.to_string(), bytes.len(), usuario.to_string());
            self.answer(call, format!("stored_{file_name}"))
        }

        async fn list_uploads(&self) -> Result<Vec<UploadedFile>, ApiError> {
            self.answer(Call::ListUploads, self.uploads.clone())
        }

        async fn delete_upload(&self, request: &DeleteUploadRequest) -> Result<(), ApiError> {
            self.answer(Call::DeleteUpload(request.clone()), ())
        }

        async fn export_documents(
            &self,
            format: ExportFormat,
            name: &str,
            usuario: &str,
            documents: &[Document],
        ) -> Result<ExportFile, ApiError> {
            let call = Call::Export(format, name.to_string(), usuario.to_string(), documents.len());
            let file = ExportFile {
                file_name: format.file_name(name).unwrap_or_else(|| format!("export{}", format.extension())),
                bytes: vec![0x50, 0x4b],
            };
            self.answer(call, file)
        }

        async fn list_exports(&self) -> Result<Vec<ExportRecord>, ApiError> {
            self.answer(Call::ListExports, Vec::new())
        }

        async fn list_logs(&self) -> Result<Vec<LogEntry>, ApiError> {
            self.answer(Call::ListLogs, Vec::new())
        }
    }

    /// Collects alerts and answers every confirmation with `accept`.
    #[derive(Default)]
    struct FakeDialogs {
        accept: bool,
        alerts: RefCell<Vec<String>>,
        confirms: Cell<usize>,
    }

    impl FakeDialogs {
        fn accepting() -> Self {
            Self {
                accept: true,
                ..Self::default()
            }
        }

        fn alerts(&self) -> Vec<String> {
            self.alerts.borrow().clone()
        }
    }

    impl Dialogs for FakeDialogs {
        fn alert(&self, message: &str) {
            self.alerts.borrow_mut().push(message.to_string());
        }

        fn confirm(&self, _message: &str) -> bool {
            self.confirms.set(self.confirms.get() + 1);
            self.accept
        }
    }

    fn sessions() -> (MemoryStore, SessionStore<MemoryStore>) {
        let store = MemoryStore::new();
        (store.clone(), SessionStore::new(store))
    }

    fn doc(id: impl Into<Value>, titulo: &str) -> Document {
        Document::from_iter([
            ("id", id.into()),
            ("titulo", Value::from(titulo)),
            ("autor", Value::from("Ana")),
            ("data", Value::from("2024-03-01")),
        ])
    }

    fn rejected(message: &str) -> ApiError {
        Reply {
            status: "erro".to_string(),
            mensagem: Some(message.to_string()),
            ..Reply::default()
        }
        .into_result()
        .unwrap_err()
    }

    // =============================================================
    // Documents
    // =============================================================

    #[tokio::test]
    async fn test_load_documents_returns_every_row() {
        let api = FakeApi {
            documents: vec![doc("1", "Ata"), doc("2", "Ofício"), doc("3", "Memorando")],
            ..FakeApi::default()
        };
        let dialogs = FakeDialogs::default();

        let rows = load_documents(&api, &dialogs).await.unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].cells(), ["2", "Ofício", "Ana", "2024-03-01"]);
        assert!(dialogs.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_load_documents_failure_alerts_and_keeps_rows() {
        let api = FakeApi::failing(ApiError::Status(500));
        let dialogs = FakeDialogs::default();
        let mut rows = vec![doc("1", "Ata")];

        if let Some(fresh) = load_documents(&api, &dialogs).await {
            rows = fresh;
        }

        assert_eq!(rows, vec![doc("1", "Ata")]);
        assert_eq!(dialogs.alerts(), vec![MSG_LOAD_DOCUMENTS_FAILED]);
    }

    // =============================================================
    // Login
    // =============================================================

    #[tokio::test]
    async fn test_login_routes_by_role() {
        for (role, path) in [
            ("administrador", "admin.html"),
            ("editor", "editor.html"),
            ("codificador", "codificador.html"),
            ("visitante", "index.html"),
        ] {
            let api = FakeApi {
                role: role.to_string(),
                ..FakeApi::default()
            };
            let (store, sessions) = sessions();
            let dialogs = FakeDialogs::default();

            let page = login(&api, &sessions, &dialogs, "ana", "segredo").await;

            assert_eq!(page.map(Page::path), Some(path));
            assert_eq!(store.get("usuarioLogado").as_deref(), Some("ana"));
            assert_eq!(store.get("tipoUsuario").as_deref(), Some(role));
            assert!(dialogs.alerts().is_empty());
        }
    }

    #[tokio::test]
    async fn test_login_sends_credentials() {
        let api = FakeApi {
            role: "editor".to_string(),
            ..FakeApi::default()
        };
        let (_, sessions) = sessions();
        login(&api, &sessions, &FakeDialogs::default(), "ana", "segredo").await;

        assert_eq!(
            api.calls(),
            vec![Call::Login(LoginRequest {
                usuario: "ana".into(),
                senha: "segredo".into(),
            })]
        );
    }

    #[tokio::test]
    async fn test_rejected_login_shows_server_message_and_keeps_storage() {
        let api = FakeApi::failing(rejected("Senha incorreta"));
        let (store, sessions) = sessions();
        store.set("theme", "dark");
        let dialogs = FakeDialogs::default();

        let page = login(&api, &sessions, &dialogs, "ana", "errada").await;

        assert!(page.is_none());
        assert_eq!(dialogs.alerts(), vec!["Senha incorreta"]);
        assert_eq!(store.len(), 1);
        assert!(store.get("usuarioLogado").is_none());
    }

    #[tokio::test]
    async fn test_rejected_login_without_message_uses_default() {
        let api = FakeApi::failing(ApiError::Rejected(None));
        let (store, sessions) = sessions();
        let dialogs = FakeDialogs::default();

        assert!(login(&api, &sessions, &dialogs, "ana", "x").await.is_none());
        assert_eq!(dialogs.alerts(), vec![MSG_LOGIN_FAILED]);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_login_transport_failure_shows_communication_error() {
        let api = FakeApi::failing(ApiError::Transport("connection refused".into()));
        let (store, sessions) = sessions();
        let dialogs = FakeDialogs::default();

        assert!(login(&api, &sessions, &dialogs, "ana", "x").await.is_none());
        assert_eq!(dialogs.alerts(), vec![MSG_COMMUNICATION]);
        assert!(store.is_empty());
    }

    // =============================================================
    // Registration
    // =============================================================

    fn registration(username: &str, password: &str, role: &str) -> Registration {
        Registration {
            username: username.to_string(),
            password: password.to_string(),
            role: role.to_string(),
        }
    }

    #[tokio::test]
    async fn test_register_requires_all_fields() {
        for form in [
            registration("", "senha", "editor"),
            registration("beto", "", "editor"),
            registration("beto", "senha", ""),
            registration("   ", "senha", "editor"),
        ] {
            let api = FakeApi::default();
            let (_, sessions) = sessions();
            let dialogs = FakeDialogs::default();

            assert!(!register_user(&api, &sessions, &dialogs, &form).await);
            assert!(api.calls().is_empty());
            assert_eq!(dialogs.alerts(), vec![MSG_FILL_ALL_FIELDS]);
        }
    }

    #[tokio::test]
    async fn test_register_attributes_acting_admin() {
        let api = FakeApi::default();
        let (_, sessions) = sessions();
        sessions.save_session("ana", "administrador");
        let dialogs = FakeDialogs::default();

        let reset = register_user(&api, &sessions, &dialogs, &registration("beto", "s3nha", "editor")).await;

        assert!(reset);
        assert_eq!(dialogs.alerts(), vec![MSG_USER_REGISTERED]);
        assert_eq!(
            api.calls(),
            vec![Call::Register(RegisterRequest {
                usuario: "beto".into(),
                senha: "s3nha".into(),
                tipo: "editor".into(),
                usuario_admin: "ana".into(),
            })]
        );
    }

    #[tokio::test]
    async fn test_register_defaults_admin_identity() {
        let api = FakeApi::default();
        let (_, sessions) = sessions();

        register_user(&api, &sessions, &FakeDialogs::default(), &registration("beto", "x", "codificador")).await;

        match &api.calls()[0] {
            Call::Register(request) => assert_eq!(request.usuario_admin, "admin"),
            other => panic!("unexpected call {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_register_failure_keeps_form() {
        let api = FakeApi::failing(rejected("Usuário já existe"));
        let (_, sessions) = sessions();
        let dialogs = FakeDialogs::default();

        let reset = register_user(&api, &sessions, &dialogs, &registration("beto", "x", "editor")).await;

        assert!(!reset);
        assert_eq!(dialogs.alerts(), vec!["Usuário já existe"]);
    }

    // =============================================================
    // Records
    // =============================================================

    fn fields() -> Vec<(String, String)> {
        vec![
            ("titulo".to_string(), "Ata".to_string()),
            ("autor".to_string(), "Ana".to_string()),
        ]
    }

    #[tokio::test]
    async fn test_save_record_attaches_file_and_user() {
        let api = FakeApi::default();
        let (_, sessions) = sessions();
        sessions.save_session("ana", "codificador");
        let dialogs = FakeDialogs::default();

        assert!(save_record(&api, &sessions, &dialogs, fields(), Some("ata.pdf")).await);

        let calls = api.calls();
        let Call::Save(record) = &calls[0] else {
            panic!("expected a save call");
        };
        assert_eq!(record.get("titulo"), Some("Ata"));
        assert_eq!(record.get("arquivo_nome"), Some("ata.pdf"));
        assert_eq!(record.get("usuario"), Some("ana"));
    }

    #[tokio::test]
    async fn test_save_record_without_file_or_session() {
        let api = FakeApi::default();
        let (_, sessions) = sessions();

        save_record(&api, &sessions, &FakeDialogs::default(), fields(), None).await;

        let calls = api.calls();
        let Call::Save(record) = &calls[0] else {
            panic!("expected a save call");
        };
        assert_eq!(record.get("arquivo_nome"), None);
        assert_eq!(record.get("usuario"), Some("usuario"));
    }

    #[tokio::test]
    async fn test_save_record_failure_alerts() {
        let api = FakeApi::failing(ApiError::Transport("offline".into()));
        let (_, sessions) = sessions();
        let dialogs = FakeDialogs::default();

        assert!(!save_record(&api, &sessions, &dialogs, fields(), None).await);
        assert_eq!(dialogs.alerts(), vec![MSG_SAVE_FAILED]);
    }

    // =============================================================
    // Users
    // =============================================================

    #[tokio::test]
    async fn test_declined_delete_issues_no_request() {
        let api = FakeApi::default();
        let (_, sessions) = sessions();
        let dialogs = FakeDialogs::default();

        assert!(!delete_user(&api, &sessions, &dialogs, "beto").await);
        assert_eq!(dialogs.confirms.get(), 1);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_accepted_delete_posts_once() {
        let api = FakeApi::default();
        let (_, sessions) = sessions();
        sessions.save_session("ana", "administrador");
        let dialogs = FakeDialogs::accepting();

        assert!(delete_user(&api, &sessions, &dialogs, "beto").await);
        assert_eq!(
            api.calls(),
            vec![Call::DeleteUser(DeleteUserRequest {
                usuario: "beto".into(),
                tipo_usuario: "administrador".into(),
                usuario_admin: "ana".into(),
            })]
        );
        assert!(dialogs.alerts().is_empty());
    }

    #[tokio::test]
    async fn test_failed_delete_does_not_reload() {
        let api = FakeApi::failing(rejected("Permissão negada para excluir usuário"));
        let (_, sessions) = sessions();
        let dialogs = FakeDialogs::accepting();

        assert!(!delete_user(&api, &sessions, &dialogs, "beto").await);
        assert_eq!(api.calls().len(), 1);
        assert_eq!(dialogs.alerts(), vec!["Permissão negada para excluir usuário"]);
    }

    #[tokio::test]
    async fn test_load_users_failure() {
        let api = FakeApi::failing(ApiError::Decode("expected array".into()));
        let dialogs = FakeDialogs::default();

        assert!(load_users(&api, &dialogs).await.is_none());
        assert_eq!(dialogs.alerts(), vec![MSG_LOAD_USERS_FAILED]);
    }

    #[test]
    fn test_confirm_message_names_user() {
        assert!(confirm_delete_user_message("beto").contains("\"beto\""));
    }

    // =============================================================
    // Documents: delete, edit, upload, audit log
    // =============================================================

    #[tokio::test]
    async fn test_delete_document_sends_role_and_user() {
        let api = FakeApi::default();
        let (_, sessions) = sessions();
        sessions.save_session("ana", "editor");

        assert!(delete_document(&api, &sessions, &FakeDialogs::accepting(), &doc("42", "Ata")).await);
        assert_eq!(
            api.calls(),
            vec![Call::DeleteDocument(DeleteDocumentRequest {
                id: json!("42"),
                tipo_usuario: "editor".into(),
                usuario: "ana".into(),
            })]
        );
    }

    #[tokio::test]
    async fn test_delete_document_keeps_numeric_id() {
        let api = FakeApi {
            documents: serde_json::from_value(json!([{"id": 7, "titulo": "Ofício"}])).unwrap(),
            ..FakeApi::default()
        };
        let (_, sessions) = sessions();
        sessions.save_session("ana", "administrador");
        let dialogs = FakeDialogs::accepting();

        let rows = load_documents(&api, &dialogs).await.unwrap();
        assert!(delete_document(&api, &sessions, &dialogs, &rows[0]).await);

        let calls = api.calls();
        let Call::DeleteDocument(request) = &calls[1] else {
            panic!("expected a delete call");
        };
        assert_eq!(request.id, json!(7));
        assert_eq!(serde_json::to_value(request).unwrap()["id"], json!(7));
    }

    #[tokio::test]
    async fn test_delete_document_declined() {
        let api = FakeApi::default();
        let (_, sessions) = sessions();

        assert!(!delete_document(&api, &sessions, &FakeDialogs::default(), &doc("42", "Ata")).await);
        assert!(api.calls().is_empty());
    }

    #[test]
    fn test_can_modify_follows_session_role() {
        let (_, sessions) = sessions();
        assert!(!can_modify(&sessions));

        for (role, allowed) in [
            ("administrador", true),
            ("editor", true),
            ("codificador", false),
            ("Editor", false),
        ] {
            sessions.save_session("ana", role);
            assert_eq!(can_modify(&sessions), allowed, "{role}");
        }
    }

    #[tokio::test]
    async fn test_edit_document_sends_original_and_update() {
        let api = FakeApi {
            edit_message: Some("Documento atualizado com sucesso".to_string()),
            ..FakeApi::default()
        };
        let (_, sessions) = sessions();
        sessions.save_session("ana", "editor");
        let dialogs = FakeDialogs::default();
        let original = doc(7, "Ata");

        let edits = [("titulo".to_string(), "Ata revisada".to_string())];
        assert!(edit_document(&api, &sessions, &dialogs, &original, edits).await);

        assert_eq!(
            api.calls(),
            vec![Call::EditDocument(EditDocumentRequest {
                original: original.clone(),
                atualizado: doc(7, "Ata revisada"),
                tipo_usuario: "editor".into(),
                usuario: "ana".into(),
            })]
        );
        assert_eq!(dialogs.alerts(), vec!["Documento atualizado com sucesso"]);
    }

    #[tokio::test]
    async fn test_edit_document_default_confirmation() {
        let api = FakeApi::default();
        let (_, sessions) = sessions();
        let dialogs = FakeDialogs::default();

        assert!(edit_document(&api, &sessions, &dialogs, &doc("1", "Ata"), Vec::new()).await);
        assert_eq!(dialogs.alerts(), vec![MSG_DOCUMENT_UPDATED]);
    }

    #[tokio::test]
    async fn test_edit_document_rejected_keeps_form_open() {
        let api = FakeApi::failing(rejected("Documento original não encontrado"));
        let (_, sessions) = sessions();
        let dialogs = FakeDialogs::default();

        assert!(!edit_document(&api, &sessions, &dialogs, &doc("1", "Ata"), Vec::new()).await);
        assert_eq!(dialogs.alerts(), vec!["Documento original não encontrado"]);
    }

    #[tokio::test]
    async fn test_upload_returns_stored_name() {
        let api = FakeApi::default();
        let (_, sessions) = sessions();
        sessions.save_session("ana", "codificador");

        let stored = upload_file(&api, &sessions, &FakeDialogs::default(), "ata.pdf", vec![1, 2, 3]).await;

        assert_eq!(stored.as_deref(), Some("stored_ata.pdf"));
        assert_eq!(api.calls(), vec![Call::Upload("ata.pdf".into(), 3, "ana".into())]);
    }

    #[tokio::test]
    async fn test_upload_failure_alerts() {
        let api = FakeApi::failing(rejected("Extensão de arquivo não permitida"));
        let (_, sessions) = sessions();
        let dialogs = FakeDialogs::default();

        assert!(upload_file(&api, &sessions, &dialogs, "a.exe", vec![0]).await.is_none());
        assert_eq!(dialogs.alerts(), vec!["Extensão de arquivo não permitida"]);
    }

    // =============================================================
    // Uploaded files and exports
    // =============================================================

    #[tokio::test]
    async fn test_load_uploads() {
        let api = FakeApi {
            uploads: vec![UploadedFile {
                nome: "ata.pdf".into(),
                tamanho: 2048,
                data_modificacao: "2024-05-02 10:11:12".into(),
            }],
            ..FakeApi::default()
        };
        let files = load_uploads(&api, &FakeDialogs::default()).await.unwrap();
        assert_eq!(files[0].nome, "ata.pdf");
    }

    #[tokio::test]
    async fn test_load_uploads_failure() {
        let api = FakeApi::failing(ApiError::Decode("expected array".into()));
        let dialogs = FakeDialogs::default();

        assert!(load_uploads(&api, &dialogs).await.is_none());
        assert_eq!(dialogs.alerts(), vec![MSG_LOAD_UPLOADS_FAILED]);
    }

    #[tokio::test]
    async fn test_delete_upload_declined() {
        let api = FakeApi::default();
        let (_, sessions) = sessions();
        let dialogs = FakeDialogs::default();

        assert!(!delete_upload(&api, &sessions, &dialogs, "ata.pdf").await);
        assert_eq!(dialogs.confirms.get(), 1);
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_delete_upload_sends_role_and_user() {
        let api = FakeApi::default();
        let (_, sessions) = sessions();
        sessions.save_session("ana", "administrador");

        assert!(delete_upload(&api, &sessions, &FakeDialogs::accepting(), "ata.pdf").await);
        assert_eq!(
            api.calls(),
            vec![Call::DeleteUpload(DeleteUploadRequest {
                filename: "ata.pdf".into(),
                usuario: "ana".into(),
                tipo_usuario: "administrador".into(),
            })]
        );
    }

    #[tokio::test]
    async fn test_delete_upload_failure_alerts() {
        let api = FakeApi::failing(rejected("Permissão negada"));
        let (_, sessions) = sessions();
        let dialogs = FakeDialogs::accepting();

        assert!(!delete_upload(&api, &sessions, &dialogs, "ata.pdf").await);
        assert_eq!(dialogs.alerts(), vec!["Permissão negada"]);
    }

    #[tokio::test]
    async fn test_export_sends_rows_and_user() {
        let api = FakeApi::default();
        let (_, sessions) = sessions();
        sessions.save_session("ana", "editor");
        let rows = vec![doc("1", "Ata"), doc("2", "Ofício")];

        let file = export_documents(
            &api,
            &sessions,
            &FakeDialogs::default(),
            ExportFormat::Excel,
            "acervo",
            &rows,
        )
        .await
        .unwrap();

        assert_eq!(file.file_name, "acervo.xlsx");
        assert_eq!(
            api.calls(),
            vec![Call::Export(ExportFormat::Excel, "acervo".into(), "ana".into(), 2)]
        );
    }

    #[tokio::test]
    async fn test_export_failure_alerts() {
        let api = FakeApi::failing(ApiError::Status(500));
        let (_, sessions) = sessions();
        let dialogs = FakeDialogs::default();

        let file = export_documents(&api, &sessions, &dialogs, ExportFormat::Word, "", &[]).await;

        assert!(file.is_none());
        assert_eq!(dialogs.alerts(), vec![MSG_EXPORT_FAILED]);
    }

    #[tokio::test]
    async fn test_load_exports() {
        let api = FakeApi::default();
        assert_eq!(load_exports(&api, &FakeDialogs::default()).await, Some(Vec::new()));
        assert_eq!(api.calls(), vec![Call::ListExports]);
    }

    #[tokio::test]
    async fn test_load_logs() {
        let api = FakeApi::default();
        assert_eq!(load_logs(&api, &FakeDialogs::default()).await, Some(Vec::new()));
        assert_eq!(api.calls(), vec![Call::ListLogs]);
    }

    // =============================================================
    // Session, navigation and theme
    // =============================================================

    #[test]
    fn test_logout_clears_storage() {
        let (store, sessions) = sessions();
        sessions.save_session("ana", "editor");
        sessions.set_theme(Theme::Dark);

        assert_eq!(logout(&sessions), Page::Index);
        assert!(store.is_empty());
    }

    #[test]
    fn test_back_destination_follows_role() {
        let (_, sessions) = sessions();
        assert_eq!(back_destination(&sessions), Page::Index);

        sessions.save_session("ana", "administrador");
        assert_eq!(back_destination(&sessions), Page::Admin);

        sessions.save_session("caio", "codificador");
        assert_eq!(back_destination(&sessions), Page::Coder);
    }

    #[test]
    fn test_toggle_theme_round_trip() {
        let (store, sessions) = sessions();
        let original = init_theme(&sessions);
        let stored = store.get("theme");

        let once = toggle_theme(&sessions);
        assert_ne!(once, original);
        assert_ne!(once.glyph(), original.glyph());

        let twice = toggle_theme(&sessions);
        assert_eq!(twice, original);
        assert_eq!(store.get("theme"), stored);
    }
}
