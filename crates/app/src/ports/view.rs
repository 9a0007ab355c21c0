//! View port — applies [`Patch`]es to the page.

use crate::error::ViewError;
use crate::patch::Patch;

/// The page the dashboard renders into.
pub trait View {
    /// Apply one patch and return how many elements it changed.
    ///
    /// A target that matches no element, or whose elements all fail the
    /// guard, is not an error: it changes zero elements.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError`] when the document rejects the lookup or the
    /// mutation.
    fn apply(&self, patch: &Patch) -> Result<usize, ViewError>;
}

impl<T: View> View for std::rc::Rc<T> {
    fn apply(&self, patch: &Patch) -> Result<usize, ViewError> {
        (**self).apply(patch)
    }
}
