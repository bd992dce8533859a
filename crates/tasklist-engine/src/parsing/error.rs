use thiserror::Error;

const UNKNOWN_MARKUP: &str = "unknown markup";
const ITEM_BEFORE_HEADING: &str = "item before first heading";
const CHECKED_MESSAGE: &str = "only the following allowed for checked: ' x'";
const PRIORITY_MESSAGE: &str = "only the following allowed for priority: ' abc'";

/// A fatal defect found while parsing a document.
///
/// Line numbers are 0-based; `Display` reports them 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{} (line {})", UNKNOWN_MARKUP, human_line(.line))]
    UnknownMarkup { line: usize },

    #[error("{} (line {})", ITEM_BEFORE_HEADING, human_line(.line))]
    ItemBeforeHeading { line: usize },

    #[error("{} (line {})", CHECKED_MESSAGE, human_line(.line))]
    InvalidCheckedValue { line: usize },

    #[error("{} (line {})", PRIORITY_MESSAGE, human_line(.line))]
    InvalidPriorityValue { line: usize },

    #[error("headings appear multiple times: {}", quote_all(.headings))]
    DuplicateHeadings { headings: Vec<String> },
}

impl ParseError {
    /// The 0-based source line, absent for whole-document errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            ParseError::UnknownMarkup { line }
            | ParseError::ItemBeforeHeading { line }
            | ParseError::InvalidCheckedValue { line }
            | ParseError::InvalidPriorityValue { line } => Some(*line),
            ParseError::DuplicateHeadings { .. } => None,
        }
    }

    /// The message without the line suffix.
    pub fn message(&self) -> String {
        match self {
            ParseError::UnknownMarkup { .. } => UNKNOWN_MARKUP.to_string(),
            ParseError::ItemBeforeHeading { .. } => ITEM_BEFORE_HEADING.to_string(),
            ParseError::InvalidCheckedValue { .. } => CHECKED_MESSAGE.to_string(),
            ParseError::InvalidPriorityValue { .. } => PRIORITY_MESSAGE.to_string(),
            ParseError::DuplicateHeadings { .. } => self.to_string(),
        }
    }
}

/// Failure while parsing from a reader: either the read or the markup failed.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

fn human_line(line: &usize) -> usize {
    line + 1
}

fn quote_all(headings: &[String]) -> String {
    headings
        .iter()
        .map(|h| format!("'{h}'"))
        .collect::<Vec<_>>()
        .join(", ")
}
