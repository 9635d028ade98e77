//! Spreadsheet identifiers from sharing links

use lazy_regex::regex_captures;
use thiserror::Error;
use url::Url;

/// Host that serves spreadsheet links
pub const SPREADSHEETS_HOST: &str = "docs.google.com";

/// Errors from [`spreadsheet_id`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// Empty link
    #[error("spreadsheet id: link is empty")]
    Empty,

    /// Link is not a URL
    #[error("spreadsheet id: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// Link points somewhere else
    #[error("spreadsheet id: '{0}' not a google docs hostname")]
    InvalidHost(String),

    /// No `spreadsheets/d/<id>` segment
    #[error("spreadsheet id not found")]
    NotFound,
}

/// Extract the spreadsheet id from a sharing link
///
/// ```
/// use sheetcopy::spreadsheet_id;
///
/// let id = spreadsheet_id("https://docs.google.com/spreadsheets/d/1aB-c_9/edit#gid=0").unwrap();
/// assert_eq!(id, "1aB-c_9");
/// ```
pub fn spreadsheet_id(link: &str) -> Result<String, IdError> {
    if link.is_empty() {
        return Err(IdError::Empty);
    }

    let url = Url::parse(link)?;
    let host = url.host_str().unwrap_or_default();
    if host != SPREADSHEETS_HOST {
        return Err(IdError::InvalidHost(host.to_string()));
    }

    match regex_captures!(r"spreadsheets/d/([a-zA-Z0-9_-]+)", link) {
        Some((_, id)) => Ok(id.to_string()),
        None => Err(IdError::NotFound),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spreadsheet_id() {
        assert_eq!(
            spreadsheet_id("https://docs.google.com/spreadsheets/d/232jfks").unwrap(),
            "232jfks"
        );
        assert_eq!(
            spreadsheet_id("https://docs.google.com/spreadsheets/d/1x-Y_z/edit?usp=sharing")
                .unwrap(),
            "1x-Y_z"
        );
    }

    #[test]
    fn test_spreadsheet_id_errors() {
        assert_eq!(spreadsheet_id(""), Err(IdError::Empty));
        assert!(matches!(
            spreadsheet_id("fhejk"),
            Err(IdError::InvalidUrl(_))
        ));
        assert_eq!(
            spreadsheet_id("https://docs.yahoo.com/spreadsheets/d/23sksfjh"),
            Err(IdError::InvalidHost("docs.yahoo.com".into()))
        );
        assert_eq!(
            spreadsheet_id("https://docs.google.com/document/d/23sksfjh"),
            Err(IdError::NotFound)
        );
    }
}
