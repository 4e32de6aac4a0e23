//! Exclusive-choice-with-null selection primitive.

/// A single-valued selection where picking the current value again
/// unselects it.
///
/// Every enumerated field of the draft (platform, content type, layout,
/// output type, newspaper) shares this toggle-select behavior, so it is
/// implemented once here instead of per field.
///
/// # Examples
///
/// ```
/// use aino_core::{Choice, Platform};
///
/// let mut choice = Choice::default();
/// choice.toggle(Platform::Facebook);
/// assert_eq!(choice.selected(), Some(Platform::Facebook));
///
/// // Toggling the same value unselects it.
/// choice.toggle(Platform::Facebook);
/// assert_eq!(choice.selected(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Choice<T>(Option<T>);

impl<T> Default for Choice<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T: Copy + PartialEq> Choice<T> {
    /// An unset choice.
    pub const fn unset() -> Self {
        Self(None)
    }

    /// Select `value`, or unselect if `value` is already selected.
    ///
    /// Returns `true` when the choice is selected after the call.
    pub fn toggle(&mut self, value: T) -> bool {
        if self.0 == Some(value) {
            self.0 = None;
            false
        } else {
            self.0 = Some(value);
            true
        }
    }

    /// Force-select `value`.
    pub fn set(&mut self, value: T) {
        self.0 = Some(value);
    }

    /// Unselect.
    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// The selected value, if any.
    pub fn selected(&self) -> Option<T> {
        self.0
    }

    /// Whether `value` is the selected value.
    pub fn is(&self, value: T) -> bool {
        self.0 == Some(value)
    }

    /// Whether anything is selected.
    pub fn is_set(&self) -> bool {
        self.0.is_some()
    }
}
