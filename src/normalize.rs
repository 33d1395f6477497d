//! Shared normalisation helpers and non-fatal advisories.
//!
//! Normalising operations never fail because of letter case or a deprecated
//! form: they fix the input and record an [`Advisory`]. The `*_checked`
//! entry points hand those advisories back in a [`Checked`]; the plain entry
//! points log them through `tracing` and return the bare value.

use std::fmt;

/// Category of a non-fatal advisory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdvisoryKind {
    Deprecation,
    Case,
}

impl fmt::Display for AdvisoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AdvisoryKind::Deprecation => write!(f, "deprecation"),
            AdvisoryKind::Case => write!(f, "case"),
        }
    }
}

/// A problem with the input that was corrected rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Advisory {
    /// A predicate written with an opening single quote.
    DeprecatedSingleQuote { text: String },
    /// Text that had to be forced to lower case.
    Lowercased { original: String, normalised: String },
}

impl Advisory {
    pub fn kind(&self) -> AdvisoryKind {
        match self {
            Advisory::DeprecatedSingleQuote { .. } => AdvisoryKind::Deprecation,
            Advisory::Lowercased { .. } => AdvisoryKind::Case,
        }
    }

    /// Log the advisory at warn level.
    pub fn emit(&self) {
        tracing::warn!(kind = %self.kind(), "{}", self);
    }
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::DeprecatedSingleQuote { text } => write!(
                f,
                "predicates with opening single-quote have been deprecated: {:?}",
                text
            ),
            Advisory::Lowercased {
                original,
                normalised,
            } => write!(
                f,
                "labels must be lower-case: {:?} normalised to {:?}",
                original, normalised
            ),
        }
    }
}

/// A normalised value together with the advisories raised producing it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checked<T> {
    pub value: T,
    pub advisories: Vec<Advisory>,
}

impl<T> Checked<T> {
    pub fn new(value: T, advisories: Vec<Advisory>) -> Self {
        Checked { value, advisories }
    }

    /// True when nothing had to be corrected.
    pub fn is_clean(&self) -> bool {
        self.advisories.is_empty()
    }

    pub fn has(&self, kind: AdvisoryKind) -> bool {
        self.advisories.iter().any(|a| a.kind() == kind)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Checked<U> {
        Checked {
            value: f(self.value),
            advisories: self.advisories,
        }
    }

    /// Log every advisory and return the value.
    pub fn into_value(self) -> T {
        for advisory in &self.advisories {
            advisory.emit();
        }
        self.value
    }
}

/// Lower-case `text`, recording an advisory if anything changed.
///
/// Text without cased characters (`"?"`, `"3"`) is already lower case.
pub fn lowercase(text: &str, advisories: &mut Vec<Advisory>) -> String {
    let lowered = text.to_lowercase();
    if lowered != text {
        advisories.push(Advisory::Lowercased {
            original: text.to_string(),
            normalised: lowered.clone(),
        });
    }
    lowered
}
