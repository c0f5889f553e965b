use crate::config::{PieConfig, PieConfigOverrides, resolve};
use crate::db::PieDb;
use crate::preprocess::preprocess;
use crate::{Error, Result};

/// A parsed pie diagram: the populated section store plus the config
/// snapshot resolved from defaults, site overrides and `%%{init: ...}%%`
/// directives.
#[derive(Debug, Clone)]
pub struct PieDiagram {
    pub db: PieDb,
    pub config: PieConfig,
}

pub fn parse(text: &str) -> Result<PieDiagram> {
    parse_with_overrides(text, &PieConfigOverrides::default())
}

/// Parses with an extra site-level override layer below any directives found
/// in the text itself.
pub fn parse_with_overrides(text: &str, site: &PieConfigOverrides) -> Result<PieDiagram> {
    let pre = preprocess(text)?;

    let mut overrides = site.clone();
    overrides.merge(pre.overrides);
    let config = resolve(&PieConfig::default(), &overrides);

    let mut db = PieDb::new();
    parse_statements(&pre.code, &mut db)?;
    Ok(PieDiagram { db, config })
}

fn parse_statements(code: &str, db: &mut PieDb) -> Result<()> {
    let mut lines = code.lines();

    let mut header = None;
    for line in lines.by_ref() {
        let t = strip_comment(line).trim();
        if !t.is_empty() {
            header = Some(t);
            break;
        }
    }
    let Some(header) = header else {
        return Err(Error::MissingPieKeyword);
    };
    parse_header(header, db)?;

    while let Some(line) = lines.next() {
        let t = strip_comment(line).trim();
        if t.is_empty() {
            continue;
        }
        if let Some(rest) = keyword(t, "title") {
            db.set_diagram_title(rest);
        } else if let Some(rest) = key_value(t, "accTitle") {
            db.set_acc_title(rest);
        } else if let Some(rest) = key_value(t, "accDescr") {
            db.set_acc_description(rest);
        } else if is_acc_descr_block_start(t) {
            let description = read_acc_descr_block(&mut lines);
            db.set_acc_description(&description);
        } else if let Some((label, value)) = section(t)? {
            db.add_section(&label, value);
        } else {
            return Err(Error::UnexpectedStatement {
                statement: t.to_string(),
            });
        }
    }
    Ok(())
}

/// The first meaningful line: the `pie` keyword, optionally followed by
/// `showData` and/or an inline `title` (which swallows the rest of the line).
fn parse_header(header: &str, db: &mut PieDb) -> Result<()> {
    let Some(mut rest) = keyword(header, "pie") else {
        return Err(Error::MissingPieKeyword);
    };
    while !rest.is_empty() {
        if let Some(after) = keyword(rest, "showData") {
            db.set_show_data(true);
            rest = after;
        } else if let Some(title) = keyword(rest, "title") {
            db.set_diagram_title(title);
            rest = "";
        } else {
            let token = rest.split_whitespace().next().unwrap_or(rest);
            return Err(Error::UnexpectedHeaderToken {
                token: token.to_string(),
            });
        }
    }
    Ok(())
}

/// Everything after `%%` on a line is a comment. Directives (`%%{...}%%`)
/// are removed before this parser runs.
fn strip_comment(line: &str) -> &str {
    match line.find("%%") {
        Some(idx) => &line[..idx],
        None => line,
    }
}

/// Matches `key` at the start of `line` on a word boundary and returns the
/// trimmed remainder.
fn keyword<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(key)?;
    match rest.chars().next() {
        None => Some(""),
        Some(c) if c.is_whitespace() => Some(rest.trim_start()),
        Some(_) => None,
    }
}

/// Matches a `key: value` statement and returns the trimmed value.
fn key_value<'a>(line: &'a str, key: &str) -> Option<&'a str> {
    let rest = line.strip_prefix(key)?.trim_start();
    let rest = rest.strip_prefix(':')?;
    Some(rest.trim_start())
}

fn is_acc_descr_block_start(line: &str) -> bool {
    line.strip_prefix("accDescr")
        .map(|rest| rest.trim_start().starts_with('{'))
        .unwrap_or(false)
}

/// Collects the lines of an `accDescr { ... }` block up to the closing brace.
fn read_acc_descr_block(lines: &mut std::str::Lines<'_>) -> String {
    let mut parts: Vec<String> = Vec::new();
    for line in lines {
        let s = strip_comment(line);
        if let Some((before, _)) = s.split_once('}') {
            let before = before.trim();
            if !before.is_empty() {
                parts.push(before.to_string());
            }
            break;
        }
        let t = s.trim();
        if !t.is_empty() {
            parts.push(t.to_string());
        }
    }
    parts.join("\n")
}

/// A `"label" : value` statement. Returns `Ok(None)` when the line is not
/// shaped like a section at all; rejects negative values.
fn section(line: &str) -> Result<Option<(String, f64)>> {
    let Some((label, rest)) = quoted_label(line) else {
        return Ok(None);
    };
    let Some(rest) = rest.trim_start().strip_prefix(':') else {
        return Ok(None);
    };
    let number: String = rest
        .trim_start()
        .chars()
        .take_while(|c| c.is_ascii_digit() || *c == '-' || *c == '.')
        .collect();
    let Ok(value) = number.parse::<f64>() else {
        return Ok(None);
    };
    if value < 0.0 {
        return Err(Error::NegativeSectionValue { label, value });
    }
    Ok(Some((label, value)))
}

/// Parses a leading single- or double-quoted string, honoring backslash
/// escapes, and returns the label together with the remainder of the line.
fn quoted_label(input: &str) -> Option<(String, &str)> {
    let mut chars = input.char_indices();
    let (_, quote) = chars.next()?;
    if quote != '"' && quote != '\'' {
        return None;
    }
    let mut label = String::new();
    let mut escaped = false;
    for (idx, c) in chars {
        if escaped {
            label.push(c);
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == quote {
            return Some((label, &input[idx + c.len_utf8()..]));
        } else {
            label.push(c);
        }
    }
    None
}
