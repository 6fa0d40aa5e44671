//! This crate contains the page controller and all shared UI for the workspace.

pub mod actions;
pub mod browser;
pub mod dialogs;
pub mod pages;

pub use dialogs::{BrowserDialogs, Dialogs};
pub use pages::Page;

mod auth;
pub use auth::{
    use_app, use_theme, AppContext, ArchiveProvider, BackButton, LogoutButton, PlatformStore,
    ThemeSignal,
};

mod navbar;
pub use navbar::Navbar;

mod theme_toggle;
pub use theme_toggle::ThemeToggle;

mod login_form;
pub use login_form::LoginForm;

mod register_form;
pub use register_form::RegisterUserForm;

mod record_form;
pub use record_form::RecordForm;

mod document_table;
pub use document_table::{DocumentTable, DOCUMENT_COLUMNS};

mod edit_document_form;
mod export_bar;

mod export_history;
pub use export_history::ExportHistory;

mod upload_list;
pub use upload_list::UploadList;

mod user_table;
pub use user_table::UserTable;

pub mod activity_log;
pub use activity_log::ActivityLog;
