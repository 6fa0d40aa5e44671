mod home;
pub use home::Home;

mod admin;
pub use admin::Admin;

mod editor;
pub use editor::Editor;

mod codificador;
pub use codificador::Codificador;

mod usuarios;
pub use usuarios::Usuarios;
