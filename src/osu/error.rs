//! Errors and warnings reported while decoding a beatmap.

use thiserror::Error;

use super::{command::mixin::SourceRangeMixin, parse::Section};

/// A value failed to decode.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueError {
    /// Not an integer, or out of range of the field.
    #[error("expected integer but found {0:?}")]
    Integer(String),
    /// Not a decimal number.
    #[error("expected decimal but found {0:?}")]
    Decimal(String),
    /// Not `0` or `1`.
    #[error("expected `0` or `1` but found {0:?}")]
    Boolean(String),
    /// Not an `r,g,b` triplet.
    #[error("expected `r,g,b` colour but found {0:?}")]
    Rgb(String),
    /// An enumerated field has an unknown value.
    #[error("unknown {kind} {value:?}")]
    UnknownVariant {
        /// The name of the field kind.
        kind: String,
        /// The value found.
        value: String,
    },
}

/// An error that aborts decoding the whole beatmap.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseError {
    /// The source does not start with `osu file format v<version>`.
    #[error("malformed header: expected `osu file format v<version>`")]
    MalformedHeader,
    /// The format version is not 14.
    #[error("unsupported format version `{0}`, only v14 is supported")]
    UnsupportedVersion(String),
    /// Nothing but the header line was found.
    #[error("beatmap has no sections")]
    EmptyBeatmap,
    /// A content line appeared before the first section header.
    #[error("content found before any section header")]
    ContentOutsideSection,
    /// The section header is not one of the known eight.
    #[error("unknown section header `{0}`")]
    UnknownSection(String),
    /// No key matched in a key-value section, or its value failed to decode.
    #[error("invalid line in [{section}]: {reason}")]
    InvalidKeyValueLine {
        /// The section the line belongs to.
        section: Section,
        /// What went wrong.
        reason: String,
    },
    /// A comma-separated record has wrong arity or a field failed to decode.
    #[error("invalid record in [{section}]: {reason}")]
    InvalidRecordLine {
        /// The section the line belongs to.
        section: Section,
        /// What went wrong.
        reason: String,
    },
    /// The type bitfield or the type-specific part of a hit object is invalid.
    #[error("invalid hit object: {0}")]
    InvalidHitObjectPayload(String),
    /// A record list could not grow.
    #[error("failed to allocate records for [{0}]")]
    AllocationFailure(Section),
}

impl ParseError {
    /// Returns `true` if the error comes from the content of a single line, so that decoding can
    /// go on past it. Resource failures such as [`Self::AllocationFailure`] are not.
    #[must_use]
    pub const fn is_line_content_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidKeyValueLine { .. }
                | Self::InvalidRecordLine { .. }
                | Self::InvalidHitObjectPayload(_)
        )
    }

    pub(crate) fn key_value(section: Section, reason: impl ToString) -> Self {
        Self::InvalidKeyValueLine {
            section,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn record(section: Section, reason: impl ToString) -> Self {
        Self::InvalidRecordLine {
            section,
            reason: reason.to_string(),
        }
    }

    pub(crate) fn hit_object(reason: impl ToString) -> Self {
        Self::InvalidHitObjectPayload(reason.to_string())
    }
}

/// A [`ParseError`] with the byte range of the line it occurred at.
pub type ParseErrorWithRange = SourceRangeMixin<ParseError>;

/// A problem that did not abort decoding.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParseWarning {
    /// An `[Events]` line was not a background, video or break, or failed to decode.
    /// Storyboard commands land here.
    #[error("skipped event line: {0}")]
    SkippedEvent(String),
}

/// A [`ParseWarning`] with the byte range of the line it occurred at.
pub type ParseWarningWithRange = SourceRangeMixin<ParseWarning>;

/// An error from decoding a beatmap out of a reader.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ReadError {
    /// Reading failed, including invalid UTF-8.
    #[error("failed to read beatmap: {0}")]
    Io(#[from] std::io::Error),
    /// The text was read but failed to decode.
    #[error(transparent)]
    Parse(#[from] ParseErrorWithRange),
}

/// Type alias of `core::result::Result<T, ParseError>`
pub(crate) type Result<T> = core::result::Result<T, ParseError>;
