//! Capability trait linking UI elements to help entries.
//!
//! The registry never depends on a widget hierarchy. Anything that can
//! remember a stable string identifier can carry contextual help.

/// A UI element that can carry a contextual-help identifier.
///
/// The identifier is assigned lazily by the registry the first time help
/// is registered for the target, and must be stored verbatim. Once
/// assigned it never changes.
pub trait HelpTarget {
    /// Returns the help identifier, if one has been assigned.
    fn help_id(&self) -> Option<&str>;

    /// Stores the assigned help identifier.
    ///
    /// Called at most once per target; implementations should keep the
    /// first assigned value.
    fn assign_help_id(&mut self, id: String);
}

/// A minimal [`HelpTarget`] for hosts without their own widget types.
///
/// Useful as a stand-in handle for a field the host framework tracks by
/// other means, and as a test double.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldHandle {
    id: Option<String>,
}

impl FieldHandle {
    /// Creates a handle with no identifier assigned yet.
    #[must_use]
    pub const fn new() -> Self {
        Self { id: None }
    }

    /// Creates a handle with a pre-assigned identifier.
    #[must_use]
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

impl HelpTarget for FieldHandle {
    fn help_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn assign_help_id(&mut self, id: String) {
        if self.id.is_none() {
            self.id = Some(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_assignment_is_sticky() {
        let mut field = FieldHandle::new();
        assert_eq!(field.help_id(), None);

        field.assign_help_id("help_0".to_string());
        assert_eq!(field.help_id(), Some("help_0"));

        // A second assignment must not overwrite the identifier.
        field.assign_help_id("help_9".to_string());
        assert_eq!(field.help_id(), Some("help_0"));
    }

    #[test]
    fn test_with_id() {
        let field = FieldHandle::with_id("login-form");
        assert_eq!(field.help_id(), Some("login-form"));
    }
}
