//! Sass variable source.
//!
//! Reads colour maps and single colour variables out of `.scss` files:
//!
//! ```scss
//! $theme-colors: (
//!   "primary": #0d6efd,
//!   "overlay": rgba(0, 0, 0, .5),
//! ) !default;
//!
//! $brand: #ff5722;
//! ```
//!
//! Map pairs become one entry each, scalars become one entry named after
//! the variable. Values are taken verbatim; nothing is evaluated.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Result, SwatchError};
use crate::resolver::{slugify, title};
use crate::types::ColourEntry;

/// Load colour entries from candidate Sass files in `dir`.
///
/// Missing files are skipped. Files are read in the order given and each
/// requested variable is looked up in each file.
pub fn load_sass(dir: &Path, files: &[String], variables: &[String]) -> Result<Vec<ColourEntry>> {
    let mut entries = Vec::new();

    for file in files {
        let path = dir.join(file);
        let source = match fs::read_to_string(&path) {
            Ok(source) => source,
            Err(e) if e.kind() == ErrorKind::NotFound => continue,
            Err(e) => {
                return Err(SwatchError::Io {
                    path,
                    message: format!("Failed to read Sass file: {}", e),
                })
            }
        };

        entries.extend(parse_sass(&source, variables));
    }

    Ok(entries)
}

/// Extract colour entries for the requested variables from Sass source.
pub fn parse_sass(source: &str, variables: &[String]) -> Vec<ColourEntry> {
    let source = strip_comments(source);
    let declarations = parse_declarations(&source);

    let mut entries = Vec::new();
    for variable in variables {
        let name = variable.trim().trim_start_matches('$');
        if name.is_empty() {
            continue;
        }

        let Some(value) = lookup(&declarations, name) else {
            continue;
        };

        match map_body(value) {
            Some(body) => {
                for (key, colour) in parse_map(body) {
                    entries.push(ColourEntry::new(title(&key, None, None), slugify(&key), colour));
                }
            }
            None => entries.push(ColourEntry::new(title(name, None, None), slugify(name), value)),
        }
    }

    entries
}

/// A top-level `$name: value` declaration.
#[derive(Debug, Clone, PartialEq)]
struct Declaration<'a> {
    name: &'a str,
    value: &'a str,
    is_default: bool,
}

/// Resolve a variable the way Sass does: plain assignments overwrite,
/// `!default` assignments only apply while the variable is unset.
fn lookup<'a>(declarations: &[Declaration<'a>], name: &str) -> Option<&'a str> {
    let mut current = None;
    for decl in declarations.iter().filter(|d| d.name == name) {
        if decl.is_default && current.is_some() {
            continue;
        }
        current = Some(decl.value);
    }
    current
}

/// Split source into top-level variable declarations.
fn parse_declarations(source: &str) -> Vec<Declaration<'_>> {
    let mut declarations = Vec::new();

    for statement in split_top_level(source, ';') {
        let statement = after_blocks(statement.trim()).trim();
        let Some(rest) = statement.strip_prefix('$') else {
            continue;
        };
        let Some(colon) = rest.find(':') else {
            continue;
        };

        let name = rest[..colon].trim();
        if name.is_empty() || !name.chars().all(|c| c.is_alphanumeric() || c == '-' || c == '_') {
            continue;
        }

        let (value, flags) = strip_flags(rest[colon + 1..].trim());
        if value.is_empty() {
            continue;
        }

        declarations.push(Declaration {
            name,
            value,
            is_default: flags.contains(&"default"),
        });
    }

    declarations
}

/// Skip past rule blocks (`.a { ... }`) that precede a declaration with no
/// `;` in between.
fn after_blocks(statement: &str) -> &str {
    if statement.starts_with('$') {
        return statement;
    }

    let mut scanner = Scanner::default();
    let mut cut = 0;
    for (i, c) in statement.char_indices() {
        scanner.step(c);
        if c == '}' && scanner.at_top_level() {
            cut = i + 1;
        }
    }
    &statement[cut..]
}

/// Remove trailing `!default` / `!global` flags, returning them.
fn strip_flags(mut value: &str) -> (&str, Vec<&str>) {
    let mut flags = Vec::new();
    while let Some(bang) = value.rfind('!') {
        let flag = value[bang + 1..].trim();
        if flag != "default" && flag != "global" {
            break;
        }
        flags.push(flag);
        value = value[..bang].trim_end();
    }
    (value, flags)
}

/// The inside of a parenthesised map value, if the value is one.
fn map_body(value: &str) -> Option<&str> {
    let inner = value.strip_prefix('(')?.strip_suffix(')')?;
    // `(a) + (b)` starts and ends with parens but is not one group
    if split_top_level(inner, ')').len() > 1 {
        return None;
    }
    Some(inner)
}

/// Parse `key: value, key: value` pairs. Items without a colon are skipped.
fn parse_map(body: &str) -> Vec<(String, String)> {
    split_top_level(body, ',')
        .into_iter()
        .filter_map(|item| {
            let item = item.trim();
            let colon = find_top_level(item, ':')?;
            let key = unquote(item[..colon].trim());
            let value = item[colon + 1..].trim();
            if key.is_empty() || value.is_empty() {
                return None;
            }
            Some((key.to_string(), value.to_string()))
        })
        .collect()
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|s| s.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}

/// Split on `sep` wherever it is outside brackets and quotes.
fn split_top_level(s: &str, sep: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut scanner = Scanner::default();

    for (i, c) in s.char_indices() {
        if c == sep && scanner.at_top_level() {
            parts.push(&s[start..i]);
            start = i + c.len_utf8();
        }
        scanner.step(c);
    }
    parts.push(&s[start..]);
    parts
}

/// Byte offset of the first top-level `needle`.
fn find_top_level(s: &str, needle: char) -> Option<usize> {
    let mut scanner = Scanner::default();
    for (i, c) in s.char_indices() {
        if c == needle && scanner.at_top_level() {
            return Some(i);
        }
        scanner.step(c);
    }
    None
}

/// Tracks bracket depth and quoting while walking Sass text.
#[derive(Debug, Default)]
struct Scanner {
    depth: usize,
    quote: Option<char>,
}

impl Scanner {
    fn at_top_level(&self) -> bool {
        self.depth == 0 && self.quote.is_none()
    }

    fn step(&mut self, c: char) {
        match (self.quote, c) {
            (Some(q), c) if c == q => self.quote = None,
            (Some(_), _) => {}
            (None, '"' | '\'') => self.quote = Some(c),
            (None, '(' | '[' | '{') => self.depth += 1,
            (None, ')' | ']' | '}') => self.depth = self.depth.saturating_sub(1),
            _ => {}
        }
    }
}

/// Drop `// line` and `/* block */` comments outside of strings.
fn strip_comments(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut chars = source.chars().peekable();
    let mut quote: Option<char> = None;

    while let Some(c) = chars.next() {
        if let Some(q) = quote {
            out.push(c);
            if c == q {
                quote = None;
            }
            continue;
        }

        match (c, chars.peek()) {
            ('"' | '\'', _) => {
                quote = Some(c);
                out.push(c);
            }
            ('/', Some('/')) => {
                for c in chars.by_ref() {
                    if c == '\n' {
                        out.push('\n');
                        break;
                    }
                }
            }
            ('/', Some('*')) => {
                chars.next();
                let mut prev = '\0';
                for c in chars.by_ref() {
                    if prev == '*' && c == '/' {
                        break;
                    }
                    prev = c;
                }
            }
            _ => out.push(c),
        }
    }

    out
}
