use crate::models::{Heading, Item, Priority};

use super::{classify::LineClass, error::ParseError};

/// A decoded, non-blank line ready for block construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Heading(Heading),
    Item(Item),
    /// A line that matched neither the heading nor the item shape.
    Unknown,
}

/// Decodes a classified line. Blank lines yield `None`.
///
/// Only bracket tokens can fail here; structural problems are left to the
/// block builder.
pub fn decode(line_no: usize, class: LineClass<'_>) -> Result<Option<Value>, ParseError> {
    let value = match class {
        LineClass::Blank => return Ok(None),
        LineClass::Heading { level, text } => Value::Heading(Heading {
            text: text.to_string(),
            level,
        }),
        LineClass::Item {
            checked,
            priority,
            text,
        } => Value::Item(Item {
            text: text.to_string(),
            checked: decode_checked(line_no, checked.unwrap_or_default())?,
            priority: decode_priority(line_no, priority.unwrap_or_default())?,
        }),
        LineClass::Invalid => Value::Unknown,
    };
    Ok(Some(value))
}

fn decode_checked(line_no: usize, token: &str) -> Result<bool, ParseError> {
    match token.to_lowercase().as_str() {
        "" => Ok(false),
        "x" => Ok(true),
        _ => Err(ParseError::InvalidCheckedValue { line: line_no }),
    }
}

fn decode_priority(line_no: usize, token: &str) -> Result<Priority, ParseError> {
    Priority::from_token(token).ok_or(ParseError::InvalidPriorityValue { line: line_no })
}
