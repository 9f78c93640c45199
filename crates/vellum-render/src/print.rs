//! Line layout of a token tree.

use unicode_width::UnicodeWidthStr;
use vellum_types::ensure_sufficient_stack;

use crate::config::{RenderConfig, Symbols};
use crate::token::Token;

pub struct Printer<'a> {
    symbols: &'a Symbols,
    max_line_width: usize,
    separator_width: usize,
}

impl<'a> Printer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            symbols: &config.symbols,
            max_line_width: config.max_line_width,
            separator_width: config.symbols.element_separator.width(),
        }
    }

    /// Lay out `token` as text without a trailing newline.
    pub fn print(&self, token: &Token) -> String {
        let mut out = String::new();
        let mut line = String::new();
        self.write(token, 0, &mut line, &mut out);
        out.push_str(&line);
        out
    }

    /// `line` holds the unfinished current line; completed lines go to
    /// `out`.
    fn write(&self, token: &Token, depth: usize, line: &mut String, out: &mut String) {
        ensure_sufficient_stack(|| match token {
            Token::Diff(None) | Token::Filtered => {}
            Token::Diff(Some(side)) => self.write(side, depth, line, out),

            Token::Group {
                prefix,
                children,
                suffix,
            } => {
                // Separators follow the position among all children, deleted
                // ones included, so lines shared by both sides of a diff
                // print identically.
                let last = children.len().saturating_sub(1);
                let visible = children
                    .iter()
                    .enumerate()
                    .filter(|(_, child)| !child.is_deleted());

                if self.single_line(token, line) {
                    line.push_str(prefix);
                    for (index, child) in visible {
                        self.write(child, depth + 1, line, out);
                        if index < last {
                            line.push_str(&self.symbols.element_separator);
                        }
                    }
                    line.push_str(suffix);
                } else {
                    out.push_str(line);
                    out.push_str(prefix);
                    out.push('\n');
                    let separator = self.symbols.element_separator.trim();
                    for (index, child) in visible {
                        *line = self.symbols.indentation.repeat(depth + 1);
                        self.write(child, depth + 1, line, out);
                        if index < last {
                            line.push_str(separator);
                        }
                        out.push_str(line);
                        out.push('\n');
                    }
                    *line = self.symbols.indentation.repeat(depth);
                    line.push_str(suffix);
                }
            }

            Token::Pair {
                first,
                separator,
                second,
            } => {
                if let Some(first) = first {
                    self.write(first, depth, line, out);
                }
                line.push_str(separator);
                self.write(second, depth, line, out);
            }

            Token::Value(text) => line.push_str(text),
        })
    }

    fn single_line(&self, group: &Token, line: &str) -> bool {
        if matches!(group, Token::Group { children, .. } if children.is_empty()) {
            return true;
        }
        if self.max_line_width == 0 {
            return false;
        }
        self.max_line_width
            .checked_sub(line.width())
            .is_some_and(|available| group.fits(available, self.separator_width))
    }
}
