//! Cursor behavior

/// How the pointer behaves while it is over the window.
///
/// Write-only through the window contract; there is deliberately no getter,
/// the application is expected to track the mode it last set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CursorMode {
    /// Visible, free to leave the window.
    #[default]
    Normal,
    /// Invisible while over the window, free to leave.
    Hidden,
    /// Invisible and confined to the window.
    Captured,
}
