//! Validated action identifier type.

use super::ActionDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Separator between the segments of a fully-qualified identifier.
pub const SEGMENT_SEPARATOR: &str = "::";

/// Fully-qualified type name uniquely identifying an action type.
///
/// Identifiers are `::`-separated segments, each of the form
/// `[A-Za-z_][A-Za-z0-9_]*` (e.g. `app::actions::SendEmail`). The identifier
/// is the sole key the registry uses for deduplication, so two candidates
/// that resolve to the same string are the same action.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ActionIdentifier(String);

impl ActionIdentifier {
    /// Creates a validated identifier.
    ///
    /// The input is taken verbatim; no trimming or case folding is applied.
    ///
    /// # Errors
    ///
    /// Returns [`ActionDomainError::EmptyIdentifier`] for an empty string,
    /// [`ActionDomainError::EmptySegment`] when two separators are adjacent or
    /// the value starts or ends with one, and
    /// [`ActionDomainError::InvalidSegment`] when a segment is not a valid
    /// identifier.
    pub fn new(value: impl Into<String>) -> Result<Self, ActionDomainError> {
        let raw = value.into();
        if raw.is_empty() {
            return Err(ActionDomainError::EmptyIdentifier);
        }

        for segment in raw.split(SEGMENT_SEPARATOR) {
            if segment.is_empty() {
                return Err(ActionDomainError::EmptySegment(raw));
            }
            if !is_identifier_segment(segment) {
                let offending = segment.to_owned();
                return Err(ActionDomainError::InvalidSegment {
                    identifier: raw,
                    segment: offending,
                });
            }
        }

        Ok(Self(raw))
    }

    /// Joins segments with [`SEGMENT_SEPARATOR`] and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`ActionDomainError`] under the same rules as [`Self::new`].
    pub fn from_segments<I, S>(segments: I) -> Result<Self, ActionDomainError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = segments
            .into_iter()
            .map(|segment| segment.as_ref().to_owned())
            .collect::<Vec<_>>()
            .join(SEGMENT_SEPARATOR);
        Self::new(joined)
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Iterates over the identifier's segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split(SEGMENT_SEPARATOR)
    }

    /// Returns the last segment, i.e. the unqualified type name.
    #[must_use]
    pub fn name(&self) -> &str {
        self.0
            .rsplit(SEGMENT_SEPARATOR)
            .next()
            .unwrap_or(self.0.as_str())
    }
}

/// Reports whether `segment` is of the form `[A-Za-z_][A-Za-z0-9_]*`.
pub(crate) fn is_identifier_segment(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl FromStr for ActionIdentifier {
    type Err = ActionDomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for ActionIdentifier {
    type Error = ActionDomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ActionIdentifier> for String {
    fn from(identifier: ActionIdentifier) -> Self {
        identifier.0
    }
}

impl AsRef<str> for ActionIdentifier {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ActionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
