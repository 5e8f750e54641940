//! Frontmatter splitting.
//!
//! A post may start with a YAML block delimited by `---` lines:
//!
//! ```text
//! ---
//! title: Hello
//! date: 2024-01-15
//! ---
//! Body starts here.
//! ```

/// A post source split into its frontmatter and body.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frontmatter<'a> {
    /// YAML between the delimiters, `None` when the post has no frontmatter.
    pub yaml: Option<&'a str>,
    /// Everything after the closing delimiter line.
    pub body: &'a str,
}

impl<'a> Frontmatter<'a> {
    /// Split `source` into frontmatter and body.
    ///
    /// The opening `---` must be the first line. Without a closing `---` line
    /// the whole source is treated as body.
    #[must_use]
    pub fn split(source: &'a str) -> Self {
        let text = source.strip_prefix('\u{feff}').unwrap_or(source);

        let Some(rest) = after_delimiter(text) else {
            return Self::body_only(source);
        };

        let mut offset = 0;
        for line in rest.split_inclusive('\n') {
            if is_delimiter(line) {
                return Self {
                    yaml: Some(&rest[..offset]),
                    body: &rest[offset + line.len()..],
                };
            }
            offset += line.len();
        }

        Self::body_only(source)
    }

    fn body_only(source: &'a str) -> Self {
        Self {
            yaml: None,
            body: source,
        }
    }
}

/// Text after the first line, if that line is a delimiter.
fn after_delimiter(text: &str) -> Option<&str> {
    let end = text.find('\n')?;
    is_delimiter(&text[..end]).then(|| &text[end + 1..])
}

fn is_delimiter(line: &str) -> bool {
    line.trim_end() == "---"
}
