//! Run-length summarization of group children.
//!
//! Without diff content a group keeps a head and tail window of
//! `max_items` children and collapses the middle into "N more". With diff
//! content every run of unchanged children collapses into "N unchanged"
//! instead. Filtered children join whichever run they sit in and are
//! reported alongside it.

use tracing::trace;
use vellum_types::ensure_sufficient_stack;

use crate::config::{RenderConfig, Symbols};
use crate::template::fill;
use crate::token::Token;

pub struct Summarizer<'a> {
    symbols: &'a Symbols,
    max_items: usize,
}

impl<'a> Summarizer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            symbols: &config.symbols,
            max_items: config.max_items,
        }
    }

    /// Summarize every group in `token`. A filtered root becomes a summary
    /// of its own.
    pub fn process(&self, token: Token) -> Token {
        match token {
            Token::Filtered => self.summary(1, 1, false),
            other => self.process_nested(other),
        }
    }

    fn process_nested(&self, token: Token) -> Token {
        ensure_sufficient_stack(|| match token {
            Token::Diff(Some(side)) => Token::Diff(Some(Box::new(self.process_nested(*side)))),
            Token::Group {
                prefix,
                children,
                suffix,
            } => {
                let children = self
                    .summarize(children)
                    .into_iter()
                    .map(|child| self.process_nested(child))
                    .collect();
                Token::group(prefix, children, suffix)
            }
            Token::Pair {
                first,
                separator,
                second,
            } => Token::Pair {
                first: first.map(|f| Box::new(self.process_nested(*f))),
                separator,
                second: Box::new(self.process_nested(*second)),
            },
            other => other,
        })
    }

    fn summarize(&self, children: Vec<Token>) -> Vec<Token> {
        let count = children.len();
        let head = self.max_items / 2 + self.max_items % 2;
        let tail_start = count.saturating_sub(self.max_items / 2);
        let has_diff = children.iter().any(Token::contains_diff);

        let mut out = Vec::with_capacity(count);
        let mut run = Run::default();
        for (index, child) in children.into_iter().enumerate() {
            let filtered = child.is_filtered();
            let collapsible = filtered
                || if has_diff {
                    !child.contains_diff()
                } else {
                    index >= head && index < tail_start
                };
            if collapsible {
                run.len += 1;
                run.filtered += usize::from(filtered);
                continue;
            }
            self.flush(&mut run, has_diff, &mut out);
            out.push(child);
        }
        self.flush(&mut run, has_diff, &mut out);
        out
    }

    fn flush(&self, run: &mut Run, has_diff: bool, out: &mut Vec<Token>) {
        if run.len == 0 {
            return;
        }
        trace!(collapsed = run.len, filtered = run.filtered, has_diff, "summarized run");
        out.push(self.summary(run.len, run.filtered, has_diff));
        *run = Run::default();
    }

    /// `len` counts every collapsed child, `filtered` the filtered ones
    /// among them.
    fn summary(&self, len: usize, filtered: usize, has_diff: bool) -> Token {
        let count_entry = |template: &str, count: usize| {
            let count = count.to_string();
            fill(template, &[("count", count.as_str())])
        };
        let primary = if has_diff {
            &self.symbols.summary_unchanged
        } else {
            &self.symbols.summary_skipped
        };

        let text = if filtered == len {
            let entry = count_entry(&self.symbols.summary_filtered, filtered);
            fill(&self.symbols.summary_single, &[("entry", entry.as_str())])
        } else if filtered == 0 {
            let entry = count_entry(primary, len);
            fill(&self.symbols.summary_single, &[("entry", entry.as_str())])
        } else {
            let first = count_entry(primary, len);
            let second = count_entry(&self.symbols.summary_filtered, filtered);
            fill(
                &self.symbols.summary_dual,
                &[("first", first.as_str()), ("second", second.as_str())],
            )
        };
        Token::Value(text)
    }
}

#[derive(Default)]
struct Run {
    len: usize,
    filtered: usize,
}
