use thiserror::Error;

/// Main error type for the review report.
/// Aggregates errors from the standard library, dependencies, and internal modules.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("{0}")]
    WithContextError(String),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    ParseIntError(#[from] std::num::ParseIntError),

    // Third-party library errors
    #[error("{0}")]
    HttpError(#[from] reqwest::Error),

    #[error("{0}")]
    JsonError(#[from] serde_json::Error),

    #[error("{0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("{0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("{0}")]
    XmlEncodingError(#[from] quick_xml::encoding::EncodingError),

    #[error("{0}")]
    XmlAttributeError(#[from] quick_xml::events::attributes::AttrError),

    // Helper module errors
    #[error("{0}")]
    XmlHelperError(#[from] crate::helpers::xml::XmlError),

    #[error("{0}")]
    UnifiedReaderError(#[from] crate::helpers::reader::UnifiedReaderError),

    // Domain module errors
    #[error("{0}")]
    SpreadsheetError(#[from] crate::spreadsheet::SpreadsheetError),

    #[error("{0}")]
    FilterError(#[from] crate::table::filter::FilterError),
}

pub trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, ReportError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| ReportError::WithContextError(format!("{}: {}", message, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn with_prefix_wraps_message() {
        let result: Result<(), ReportError> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        )
        .into());
        let error = result.with_prefix("Error reading the Excel file").unwrap_err();
        assert_eq!(error.to_string(), "Error reading the Excel file: no such file");
    }

    #[test]
    fn with_prefix_keeps_success() {
        let result: Result<u8, ReportError> = Ok(7);
        assert_eq!(result.with_prefix("ignored").unwrap(), 7);
    }
}
