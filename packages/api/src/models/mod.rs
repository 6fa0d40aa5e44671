//! Wire models for the archive backend.

mod document;
mod export;
mod log;
mod reply;
mod requests;
mod upload;
mod user;

pub use document::Document;
pub use export::{ExportFile, ExportFormat, ExportRecord};
pub use log::LogEntry;
pub use reply::Reply;
pub use requests::{
    DeleteDocumentRequest, DeleteUploadRequest, DeleteUserRequest, EditDocumentRequest,
    LoginRequest, RecordPayload, RegisterRequest,
};
pub use upload::UploadedFile;
pub use user::{Role, UserAccount};

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a stored JSON value as table text. Null is empty, strings are
/// unquoted, everything else uses its JSON form.
pub(crate) fn display_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Accept a JSON string, number, bool or null and render it as text.
///
/// The backend stores whatever the forms sent, so ids and dates show up as
/// strings in new rows and as numbers in rows imported from older exports.
pub(crate) fn opaque_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().map(display_value).unwrap_or_default())
}
