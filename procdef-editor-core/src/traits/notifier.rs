//! User-facing side effects: banner and navigation

use crate::error::EditorResult;

/// The page's global success/failure banner.
pub trait Notifier {
    fn notify(&self, success: bool, message: &str);
}

/// Browser navigation.
pub trait Navigator {
    /// Go to `location` replacing the current history entry.
    fn replace(&self, location: &str) -> EditorResult<()>;
}
