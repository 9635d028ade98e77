//! CSV options

/// Options for writing CSV files
#[derive(Debug, Clone)]
pub struct CsvWriteOptions {
    /// Field delimiter (default: comma)
    pub delimiter: u8,
    /// Quote character (default: double quote)
    pub quote: u8,
    /// When fields get quoted
    pub quote_style: QuoteStyle,
    /// Line terminator
    pub line_terminator: LineTerminator,
    /// Reject records whose field count differs from the first record
    pub strict_width: bool,
}

impl Default for CsvWriteOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            quote_style: QuoteStyle::Necessary,
            line_terminator: LineTerminator::CRLF,
            strict_width: false,
        }
    }
}

/// Line terminator type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineTerminator {
    /// Unix-style (LF)
    LF,
    /// Windows-style (CRLF)
    CRLF,
    /// Mac classic (CR)
    CR,
}

/// Quoting policy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteStyle {
    /// Quote every field
    Always,
    /// Quote only fields containing delimiters, quotes or line breaks
    Necessary,
    /// Quote every field that does not parse as a number
    NonNumeric,
}

impl LineTerminator {
    pub(crate) fn to_csv(self) -> csv::Terminator {
        match self {
            LineTerminator::LF => csv::Terminator::Any(b'\n'),
            LineTerminator::CRLF => csv::Terminator::CRLF,
            LineTerminator::CR => csv::Terminator::Any(b'\r'),
        }
    }
}

impl QuoteStyle {
    pub(crate) fn to_csv(self) -> csv::QuoteStyle {
        match self {
            QuoteStyle::Always => csv::QuoteStyle::Always,
            QuoteStyle::Necessary => csv::QuoteStyle::Necessary,
            QuoteStyle::NonNumeric => csv::QuoteStyle::NonNumeric,
        }
    }
}
