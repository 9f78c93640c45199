//! Layout intermediate representation.
//!
//! A tree is lowered into [`Token`]s once per rendered side. Tokens carry
//! the final text of every bracket and separator, so summarization and
//! printing never consult the value tree again.

use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Token {
    /// One side of an embedded diff. `None` when the value does not exist
    /// on the side being rendered.
    Diff(Option<Box<Token>>),
    /// A filtered-out value. Prints nothing and is counted by summaries.
    Filtered,
    /// Bracketed children, laid out inline or one per line.
    Group {
        prefix: String,
        children: Vec<Token>,
        suffix: String,
    },
    /// A label or key joined to a value.
    Pair {
        first: Option<Box<Token>>,
        separator: String,
        second: Box<Token>,
    },
    /// Text printed as is.
    Value(String),
}

impl Token {
    pub fn group(prefix: String, children: Vec<Token>, suffix: String) -> Self {
        Self::Group {
            prefix,
            children,
            suffix,
        }
    }

    pub fn pair(first: Option<Token>, separator: impl Into<String>, second: Token) -> Self {
        Self::Pair {
            first: first.map(Box::new),
            separator: separator.into(),
            second: Box::new(second),
        }
    }

    pub fn contains_diff(&self) -> bool {
        match self {
            Self::Diff(_) => true,
            Self::Filtered | Self::Value(_) => false,
            Self::Group { children, .. } => children.iter().any(Token::contains_diff),
            Self::Pair { first, second, .. } => {
                first.as_deref().is_some_and(Token::contains_diff) || second.contains_diff()
            }
        }
    }

    /// Absent on the rendered side. Deleted children print nothing, not
    /// even their separator.
    pub fn is_deleted(&self) -> bool {
        match self {
            Self::Diff(side) => side.is_none(),
            Self::Pair { second, .. } => second.is_deleted(),
            Self::Filtered | Self::Group { .. } | Self::Value(_) => false,
        }
    }

    pub fn is_filtered(&self) -> bool {
        match self {
            Self::Filtered => true,
            Self::Diff(side) => side.as_deref().is_some_and(Token::is_filtered),
            Self::Pair { second, .. } => second.is_filtered(),
            Self::Group { .. } | Self::Value(_) => false,
        }
    }

    /// Display width when printed on a single line.
    pub fn width(&self, separator_width: usize) -> usize {
        match self {
            Self::Diff(side) => side.as_deref().map_or(0, |t| t.width(separator_width)),
            Self::Filtered => 0,
            Self::Group {
                prefix,
                children,
                suffix,
            } => {
                prefix.width()
                    + children.iter().map(|c| c.width(separator_width)).sum::<usize>()
                    + children.len().saturating_sub(1) * separator_width
                    + suffix.width()
            }
            Self::Pair {
                first,
                separator,
                second,
            } => {
                first.as_deref().map_or(0, |t| t.width(separator_width))
                    + separator.width()
                    + second.width(separator_width)
            }
            Self::Value(text) => text.width(),
        }
    }

    /// Whether the token fits on a line with `available` columns left.
    ///
    /// Groups stop measuring as soon as the running width overflows.
    pub fn fits(&self, available: usize, separator_width: usize) -> bool {
        match self {
            Self::Diff(Some(side)) => side.fits(available, separator_width),
            Self::Group {
                prefix,
                children,
                suffix,
            } => {
                let mut accumulated = prefix.width() + suffix.width();
                if accumulated > available {
                    return false;
                }
                let last = children.len().saturating_sub(1);
                for (index, child) in children.iter().enumerate() {
                    accumulated += child.width(separator_width);
                    if index < last {
                        accumulated += separator_width;
                    }
                    if accumulated > available {
                        return false;
                    }
                }
                true
            }
            Self::Diff(None) | Self::Filtered | Self::Pair { .. } | Self::Value(_) => {
                self.width(separator_width) < available
            }
        }
    }
}
