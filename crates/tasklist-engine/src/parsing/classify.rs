use super::cursor::Cursor;

/// Classification of a single line, borrowing its text.
///
/// Bracket tokens are reported raw: `None` when the group is absent and
/// `Some("")` when it is present but empty. Their validity is decided by the
/// decoders, not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Empty or whitespace-only.
    Blank,
    /// `#`-prefixed heading; `level` is the number of `#` characters.
    Heading { level: usize, text: &'a str },
    /// `-` or `*` bullet with optional `[checked]` and `(priority)` groups.
    Item {
        checked: Option<&'a str>,
        priority: Option<&'a str>,
        text: &'a str,
    },
    /// Anything else that is not blank.
    Invalid,
}

/// Classifies one line. A trailing line terminator is ignored.
pub fn classify(line: &str) -> LineClass<'_> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return LineClass::Blank;
    }

    heading_shape(line)
        .or_else(|| item_shape(line))
        .unwrap_or(LineClass::Invalid)
}

fn heading_shape(line: &str) -> Option<LineClass<'_>> {
    let mut cur = Cursor::new(line);
    let level = cur.eat_while(|c| c == '#').len();
    if level == 0 || cur.eat_while(char::is_whitespace).is_empty() {
        return None;
    }

    Some(LineClass::Heading {
        level,
        text: cur.rest(),
    })
}

fn item_shape(line: &str) -> Option<LineClass<'_>> {
    let mut cur = Cursor::new(line);
    if !(cur.eat('-') || cur.eat('*')) {
        return None;
    }
    if cur.eat_while(char::is_whitespace).is_empty() {
        return None;
    }

    let checked = bracket_group(&mut cur, '[', ']');
    let priority = bracket_group(&mut cur, '(', ')');

    Some(LineClass::Item {
        checked,
        priority,
        text: cur.rest(),
    })
}

/// Matches `open ws* token? ws* close ws*` and returns the token.
///
/// The token is a run of non-whitespace and may itself contain `close`. When
/// the run is not followed by `close`, the group ends at the last `close`
/// inside the run instead. If neither applies, the cursor is left untouched
/// and the group counts as absent.
fn bracket_group<'a>(cur: &mut Cursor<'a>, open: char, close: char) -> Option<&'a str> {
    let saved = cur.clone();
    if !cur.eat(open) {
        return None;
    }

    cur.eat_while(char::is_whitespace);
    let start = cur.i;
    let run = cur.eat_while(|c| !c.is_whitespace());
    cur.eat_while(char::is_whitespace);

    let token = if cur.eat(close) {
        run
    } else if let Some(end) = run.rfind(close) {
        cur.i = start + end + close.len_utf8();
        &run[..end]
    } else {
        *cur = saved;
        return None;
    };
    cur.eat_while(char::is_whitespace);
    Some(token)
}
