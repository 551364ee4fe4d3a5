//! Result of an operation addressed to a record by id

/// What happened to an id-addressed update or removal
///
/// An unknown id is not an error: nothing changes and the caller decides
/// whether to care.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    /// The record was found and the change applied; carries the record after the change
    Applied(T),
    /// No record has that id; nothing changed
    NotFound,
}

impl<T> Outcome<T> {
    /// Whether the id was unknown
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }

    /// The affected record, if any
    pub fn applied(self) -> Option<T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::NotFound => None,
        }
    }

    /// Borrow the affected record, if any
    pub const fn as_applied(&self) -> Option<&T> {
        match self {
            Self::Applied(value) => Some(value),
            Self::NotFound => None,
        }
    }
}

impl<T> From<Option<T>> for Outcome<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Applied)
    }
}
