//! Balanced delimiter scanning.
//!
//! Wiki markup nests templates in templates, tables in tables and links in image captions.
//! A regular expression stops at the first closing delimiter and leaks the rest of the
//! construct into the text, so regions are matched here with a depth counter instead.
//!
//! Example: with [TEMPLATE] and a predicate that always returns `true`,
//! ```text
//! a{{Infobox|flag={{flag|中国}}|name=中国}}b
//! ```
//! becomes `ab`.
use std::fmt;

/// Deepest nesting accepted before giving up on a region.
pub const MAX_DEPTH: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A region opened at `offset` is never closed.
    Unterminated { open: &'static str, offset: usize },
    /// A region opened at `offset` nests deeper than the allowed depth.
    TooDeep { open: &'static str, offset: usize },
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScanError::Unterminated { open, offset } => {
                write!(f, "unterminated {} at byte {}", open, offset)
            }
            ScanError::TooDeep { open, offset } => {
                write!(f, "{} nested too deep at byte {}", open, offset)
            }
        }
    }
}

impl std::error::Error for ScanError {}

/// An opening/closing delimiter pair. Both must be ASCII.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delimiters {
    pub open: &'static str,
    pub close: &'static str,
}

pub const TEMPLATE: Delimiters = Delimiters {
    open: "{{",
    close: "}}",
};

pub const TABLE: Delimiters = Delimiters {
    open: "{|",
    close: "|}",
};

pub const LINK: Delimiters = Delimiters {
    open: "[[",
    close: "]]",
};

impl Delimiters {
    /// Removes every outermost region whose inner content satisfies `remove`.
    ///
    /// Regions that are kept are copied verbatim, including whatever they contain.
    /// Unmatched closing delimiters are kept as text.
    pub fn strip_regions<F>(&self, text: &str, max_depth: usize, remove: F) -> Result<String, ScanError>
    where
        F: Fn(&str) -> bool,
    {
        let bytes = text.as_bytes();
        let open = self.open.as_bytes();

        let mut out = String::with_capacity(text.len());
        let mut kept_from = 0;
        let mut i = 0;

        while i < bytes.len() {
            if bytes[i..].starts_with(open) {
                let end = self.region_end(bytes, i, max_depth)?;

                // delimiters are ASCII, so these are char boundaries
                let inner = &text[i + self.open.len()..end - self.close.len()];
                if remove(inner) {
                    out.push_str(&text[kept_from..i]);
                    kept_from = end;
                }
                i = end;
            } else {
                i += 1;
            }
        }

        out.push_str(&text[kept_from..]);
        Ok(out)
    }

    /// Returns the index right after the delimiter closing the region opened at `start`.
    fn region_end(&self, bytes: &[u8], start: usize, max_depth: usize) -> Result<usize, ScanError> {
        let open = self.open.as_bytes();
        let close = self.close.as_bytes();

        let mut depth = 0usize;
        let mut j = start;
        while j < bytes.len() {
            if bytes[j..].starts_with(open) {
                depth += 1;
                if depth > max_depth {
                    return Err(ScanError::TooDeep {
                        open: self.open,
                        offset: start,
                    });
                }
                j += open.len();
            } else if bytes[j..].starts_with(close) {
                depth -= 1;
                j += close.len();
                if depth == 0 {
                    return Ok(j);
                }
            } else {
                j += 1;
            }
        }

        Err(ScanError::Unterminated {
            open: self.open,
            offset: start,
        })
    }
}
