//! Seams between the workflow components and the hosting layer.
//!
//! The components expose named handler methods and never touch a UI toolkit
//! directly; the host implements these one-method traits and binds the
//! handlers to its own event system.

/// Application routes the components can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Bills,
    NewBill,
}

impl Route {
    pub fn path(&self) -> &'static str {
        match self {
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
        }
    }
}

/// Replaces the current view with the given route.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);
}

/// Displays a receipt image in a proof-viewing overlay.
pub trait ProofViewer: Send + Sync {
    fn show(&self, file_url: &str);
}

/// Surfaces a blocking user-facing message (file-type rejection only).
pub trait Alert: Send + Sync {
    fn alert(&self, message: &str);
}
