//! The fixed pages of the site and the role → landing page table.

/// A top-level page. Navigation between pages is a full page load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Page {
    Index,
    Admin,
    Editor,
    Coder,
    Users,
}

/// Where each role lands after login. Roles not listed land on [`Page::Index`].
pub const LANDING_PAGES: &[(&str, Page)] = &[
    ("administrador", Page::Admin),
    ("editor", Page::Editor),
    ("codificador", Page::Coder),
];

impl Page {
    /// File name of the page, as the backend-era links spell it.
    pub fn path(self) -> &'static str {
        match self {
            Page::Index => "index.html",
            Page::Admin => "admin.html",
            Page::Editor => "editor.html",
            Page::Coder => "codificador.html",
            Page::Users => "usuarios.html",
        }
    }

    /// Absolute href for `window.location`.
    pub fn href(self) -> String {
        format!("/{}", self.path())
    }

    /// Landing page for a role string; unknown or missing roles go home.
    pub fn landing(role: Option<&str>) -> Page {
        role.and_then(|role| {
            LANDING_PAGES
                .iter()
                .find(|(name, _)| *name == role)
                .map(|(_, page)| *page)
        })
        .unwrap_or(Page::Index)
    }
}
