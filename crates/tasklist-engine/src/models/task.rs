use std::cmp::Ordering;
use std::fmt;

/// Marker character repeated `level` times at the start of a heading line.
pub const HEADING_MARKER: char = '#';

/// A block heading. Uniqueness within a document is decided by `text` alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Heading {
    pub text: String,
    /// Count of leading `#` characters; always at least 1.
    pub level: usize,
}

impl Heading {
    pub fn new(text: impl Into<String>, level: usize) -> Self {
        Self {
            text: text.into(),
            level: level.max(1),
        }
    }
}

impl fmt::Display for Heading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for _ in 0..self.level.max(1) {
            write!(f, "{HEADING_MARKER}")?;
        }
        write!(f, " {}", self.text)
    }
}

/// Item urgency. `None` means no priority marker was given.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Priority {
    #[default]
    None,
    High,
    Medium,
    Low,
}

impl Priority {
    /// Decodes a priority token, ignoring case. The empty token is `None`.
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "" => Some(Priority::None),
            "a" => Some(Priority::High),
            "b" => Some(Priority::Medium),
            "c" => Some(Priority::Low),
            _ => None,
        }
    }

    /// The canonical token written between parentheses, if any.
    pub fn token(self) -> Option<char> {
        match self {
            Priority::None => None,
            Priority::High => Some('a'),
            Priority::Medium => Some('b'),
            Priority::Low => Some('c'),
        }
    }

    fn rank(self) -> u8 {
        match self {
            Priority::None => 0,
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }
}

impl Ord for Priority {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Priority {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A single checkable task line.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Item {
    pub text: String,
    pub checked: bool,
    pub priority: Priority,
}

impl Item {
    pub fn new(text: impl Into<String>, checked: bool, priority: Priority) -> Self {
        Self {
            text: text.into(),
            checked,
            priority,
        }
    }
}

/// Renders the canonical line.
///
/// Text starting with a bracket is shielded so it reads back as text: an
/// empty group goes in front of an opening bracket, and the last group's token
/// is padded when the text starts with that group's closing bracket.
impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self.text.as_str();
        let priority = self.priority.token();

        f.write_str("- ")?;
        if self.checked {
            if priority.is_none() && text.starts_with(']') {
                f.write_str("[ x ] ")?;
            } else {
                f.write_str("[x] ")?;
            }
        } else if priority.is_none() && text.starts_with('[') {
            f.write_str("[ ] ")?;
        }
        match priority {
            Some(token) if text.starts_with(')') => write!(f, "( {token} ) ")?,
            Some(token) => write!(f, "({token}) ")?,
            None if text.starts_with('(') => f.write_str("() ")?,
            None => {}
        }
        f.write_str(text)
    }
}

/// A heading together with the items listed under it, in document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub heading: Heading,
    pub items: Vec<Item>,
}

impl Block {
    pub fn new(heading: Heading, items: Vec<Item>) -> Self {
        Self { heading, items }
    }

    /// An empty level-1 block, the shape collaborators create on demand.
    pub fn named(text: impl Into<String>) -> Self {
        Self::new(Heading::new(text, 1), Vec::new())
    }

    pub fn name(&self) -> &str {
        &self.heading.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", Some(Priority::None))]
    #[case("a", Some(Priority::High))]
    #[case("A", Some(Priority::High))]
    #[case("b", Some(Priority::Medium))]
    #[case("C", Some(Priority::Low))]
    #[case("d", None)]
    #[case("ab", None)]
    fn priority_from_token(#[case] token: &str, #[case] expected: Option<Priority>) {
        assert_eq!(Priority::from_token(token), expected);
    }

    #[test]
    fn priority_orders_high_first() {
        let mut priorities = vec![
            Priority::Low,
            Priority::None,
            Priority::High,
            Priority::Medium,
        ];
        priorities.sort_by(|a, b| b.cmp(a));
        assert_eq!(
            priorities,
            vec![
                Priority::High,
                Priority::Medium,
                Priority::Low,
                Priority::None
            ]
        );
    }

    #[test]
    fn heading_display_repeats_marker() {
        assert_eq!(Heading::new("three", 3).to_string(), "### three");
    }

    #[test]
    fn heading_level_is_at_least_one() {
        assert_eq!(Heading::new("zero", 0).level, 1);
    }

    #[rstest]
    #[case(Item::new("plain", false, Priority::None), "- plain")]
    #[case(Item::new("done", true, Priority::None), "- [x] done")]
    #[case(Item::new("urgent", false, Priority::High), "- (a) urgent")]
    #[case(Item::new("both", true, Priority::Medium), "- [x] (b) both")]
    #[case(Item::new("[zz] foo", false, Priority::None), "- [ ] [zz] foo")]
    #[case(Item::new("(later) call", false, Priority::None), "- () (later) call")]
    #[case(Item::new("(later) call", true, Priority::None), "- [x] () (later) call")]
    #[case(Item::new("[zz] foo", false, Priority::Low), "- (c) [zz] foo")]
    #[case(Item::new("] foo", true, Priority::None), "- [ x ] ] foo")]
    #[case(Item::new(") foo", false, Priority::High), "- ( a ) ) foo")]
    #[case(Item::new("] foo", false, Priority::None), "- ] foo")]
    fn item_display_is_canonical(#[case] item: Item, #[case] expected: &str) {
        assert_eq!(item.to_string(), expected);
    }
}
