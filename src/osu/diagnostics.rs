//! Fancy diagnostics support using `ariadne`.
//!
//! Errors and warnings carry the byte range of their line through
//! [`SourceRangeMixin`](super::command::mixin::SourceRangeMixin), so ariadne works out rows and
//! columns by itself.
//!
//! # Usage Example
//!
//! ```rust
//! use osu_rs::osu::{diagnostics::emit_osu_warnings, parse_osu};
//!
//! let source = "osu file format v14\n[Events]\nSprite,Foreground,Centre,\"x.png\",0,0\n";
//! let output = parse_osu(source).unwrap();
//!
//! // Output all warnings
//! emit_osu_warnings("map.osu", source, &output.warnings);
//! ```

use std::ops::Range;

use ariadne::{Color, Label, Report, ReportKind, Source};

use super::error::{ParseErrorWithRange, ParseWarningWithRange};

/// Simple source container that holds the filename and source text.
///
/// ```rust
/// use osu_rs::osu::diagnostics::SimpleSource;
///
/// let source = SimpleSource::new("map.osu", "osu file format v14\n");
/// assert_eq!(source.name(), "map.osu");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct SimpleSource<'a> {
    /// Name of the source file.
    name: &'a str,
    /// Source text content.
    text: &'a str,
}

impl<'a> SimpleSource<'a> {
    /// Create a new source container instance.
    #[must_use]
    pub const fn new(name: &'a str, text: &'a str) -> Self {
        Self { name, text }
    }

    /// Get source text content.
    #[must_use]
    pub const fn text(&self) -> &'a str {
        self.text
    }

    /// Get source file name.
    #[must_use]
    pub const fn name(&self) -> &'a str {
        self.name
    }
}

/// Report type produced by [`ToAriadne`].
pub type OsuReport<'a> = Report<'a, (String, Range<usize>)>;

/// Trait for converting positioned errors to `ariadne::Report`.
pub trait ToAriadne {
    /// Convert error to ariadne Report.
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> OsuReport<'a>;
}

fn build_report<'a>(
    src: &SimpleSource<'a>,
    kind: ReportKind<'a>,
    range: Range<usize>,
    message: impl ToString,
    color: Color,
) -> OsuReport<'a> {
    let filename = src.name().to_string();
    Report::build(kind, (filename.clone(), range.clone()))
        .with_message(message.to_string())
        .with_label(Label::new((filename, range)).with_color(color))
        .finish()
}

impl ToAriadne for ParseErrorWithRange {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> OsuReport<'a> {
        build_report(src, ReportKind::Error, self.range(), self.content(), Color::Red)
    }
}

impl ToAriadne for ParseWarningWithRange {
    fn to_report<'a>(&self, src: &SimpleSource<'a>) -> OsuReport<'a> {
        build_report(src, ReportKind::Warning, self.range(), self.content(), Color::Cyan)
    }
}

/// Convenience method: render every warning to stderr.
pub fn emit_osu_warnings<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a ParseWarningWithRange>,
) {
    let simple = SimpleSource::new(name, source);
    let ariadne_source = Source::from(source);
    for warning in warnings {
        let _ = warning
            .to_report(&simple)
            .eprint((name.to_string(), ariadne_source.clone()));
    }
}

/// Convenience method: render a decoding error to stderr.
pub fn emit_osu_error(name: &str, source: &str, error: &ParseErrorWithRange) {
    let simple = SimpleSource::new(name, source);
    let _ = error
        .to_report(&simple)
        .eprint((name.to_string(), Source::from(source)));
}

/// Collect `ariadne::Report` instances for a list of warnings without printing.
///
/// Useful in tests to check reports can be generated while keeping the output clean.
#[must_use]
pub fn collect_osu_reports<'a>(
    name: &'a str,
    source: &'a str,
    warnings: impl IntoIterator<Item = &'a ParseWarningWithRange>,
) -> Vec<OsuReport<'a>> {
    let simple = SimpleSource::new(name, source);
    warnings
        .into_iter()
        .map(|warning| warning.to_report(&simple))
        .collect()
}
