//! Lowering of value trees into layout tokens.

use vellum_types::{ensure_sufficient_stack, Keyed, Labeled, Node, OmittedReason, UndiffDirection};

use crate::config::{RenderConfig, Symbols};
use crate::names::NameFormatter;
use crate::template::fill;
use crate::token::Token;

/// Lowers one side of a tree into tokens.
pub struct Tokenizer<'a> {
    symbols: &'a Symbols,
    index_min_items: usize,
    names: &'a dyn NameFormatter,
    side: UndiffDirection,
}

impl<'a> Tokenizer<'a> {
    pub fn new(config: &'a RenderConfig, names: &'a dyn NameFormatter, side: UndiffDirection) -> Self {
        Self {
            symbols: &config.symbols,
            index_min_items: config.collection_index_min_items,
            names,
            side,
        }
    }

    pub fn tokenize(&self, node: &Node) -> Token {
        self.token(node, true)
    }

    // `root` stays set through wrappers and diffs so that a variant at the
    // top of the tree keeps its type name.
    fn token(&self, node: &Node, root: bool) -> Token {
        ensure_sufficient_stack(|| match node {
            Node::Record { name, fields } => {
                let name = self.names.format_name(name);
                let args = [("name", name.as_str())];
                self.labeled_group(
                    fill(&self.symbols.record_prefix, &args),
                    fields,
                    fill(&self.symbols.record_suffix, &args),
                )
            }

            Node::Tuple(elements) => self.labeled_group(
                self.symbols.tuple_prefix.clone(),
                elements,
                self.symbols.tuple_suffix.clone(),
            ),

            Node::Sequence(elements) => {
                let (prefix, suffix) = (&self.symbols.sequence_prefix, &self.symbols.sequence_suffix);
                if let Some(symbol) = self.truncation(elements) {
                    return Token::Value(format!("{prefix}{symbol}{suffix}"));
                }
                let children = if elements.len() <= self.index_min_items {
                    elements.iter().map(|e| self.token(e, false)).collect()
                } else {
                    self.indexed(elements)
                };
                Token::group(prefix.clone(), children, suffix.clone())
            }

            Node::Set(elements) => {
                let (prefix, suffix) = (&self.symbols.set_prefix, &self.symbols.set_suffix);
                if let Some(symbol) = self.truncation(elements) {
                    return Token::Value(format!("{prefix}{symbol}{suffix}"));
                }
                let children = elements.iter().map(|e| self.token(e, false)).collect();
                Token::group(prefix.clone(), children, suffix.clone())
            }

            Node::Mapping(entries) => self.mapping(entries),

            Node::Variant {
                name,
                case,
                payload,
            } => {
                let name = if root {
                    self.names.format_name(name)
                } else {
                    String::new()
                };
                let args = [("name", name.as_str()), ("case", case.as_str())];
                let Some(payload) = payload else {
                    return Token::Value(fill(&self.symbols.variant, &args));
                };
                let prefix = fill(&self.symbols.variant_payload_prefix, &args);
                let suffix = fill(&self.symbols.variant_payload_suffix, &args);
                match &**payload {
                    Node::Tuple(elements) => self.labeled_group(prefix, elements, suffix),
                    single => match self.truncation_symbol(single) {
                        Some(symbol) => Token::Value(format!("{prefix}{symbol}{suffix}")),
                        None => Token::group(prefix, vec![self.token(single, false)], suffix),
                    },
                }
            }

            Node::Wrapped(Some(value)) => self.token(value, root),
            Node::Wrapped(None) => Token::Value(self.symbols.nil.clone()),

            Node::Leaf(description) => Token::Value(description.clone()),

            Node::Omitted(OmittedReason::Filtered) => Token::Filtered,
            Node::Omitted(OmittedReason::Unresolved) => {
                Token::Value(self.symbols.omitted_unresolved.clone())
            }
            Node::Omitted(OmittedReason::DepthExceeded) => {
                Token::Value(self.symbols.omitted_depth_exceeded.clone())
            }
            Node::Omitted(OmittedReason::CycleDetected) => {
                Token::Value(self.symbols.omitted_cycle_detected.clone())
            }

            Node::Diff { .. } => Token::Diff(
                node.side(self.side)
                    .map(|side| Box::new(self.token(side, root))),
            ),
        })
    }

    fn labeled_group(&self, prefix: String, fields: &[Labeled], suffix: String) -> Token {
        if let [only] = fields {
            if let Some(symbol) = self.truncation_symbol(&only.value) {
                return Token::Value(format!("{prefix}{symbol}{suffix}"));
            }
        }
        let children = fields
            .iter()
            .map(|field| {
                let label = fill(&self.symbols.label, &[("label", field.label.as_str())]);
                Token::pair(
                    Some(Token::Value(label)),
                    self.symbols.name_value_separator.as_str(),
                    self.token(&field.value, false),
                )
            })
            .collect();
        Token::group(prefix, children, suffix)
    }

    /// Index labels count only elements present on the rendered side.
    fn indexed(&self, elements: &[Node]) -> Vec<Token> {
        let mut index = 0usize;
        elements
            .iter()
            .map(|element| {
                let token = self.token(element, false);
                if token.is_deleted() {
                    return Token::pair(None, "", token);
                }
                let position = index.to_string();
                let label = fill(&self.symbols.sequence_index, &[("index", position.as_str())]);
                index += 1;
                Token::pair(
                    Some(Token::Value(label)),
                    self.symbols.name_value_separator.as_str(),
                    token,
                )
            })
            .collect()
    }

    fn mapping(&self, entries: &[Keyed]) -> Token {
        if entries.is_empty() {
            return Token::Value(self.symbols.mapping_empty.clone());
        }
        let (prefix, suffix) = (&self.symbols.mapping_prefix, &self.symbols.mapping_suffix);
        let separator = &self.symbols.name_value_separator;
        if let [only] = entries {
            if let Some(symbol) = self.truncation_symbol(&only.key) {
                if only.key == only.value {
                    return Token::Value(format!("{prefix}{symbol}{separator}{symbol}{suffix}"));
                }
            }
        }
        let children = entries
            .iter()
            .map(|entry| {
                Token::pair(
                    Some(self.token(&entry.key, false)),
                    separator.as_str(),
                    self.token(&entry.value, false),
                )
            })
            .collect();
        Token::group(prefix.clone(), children, suffix.clone())
    }

    /// A container whose only child is a truncation sentinel renders as one
    /// atom.
    fn truncation(&self, elements: &[Node]) -> Option<&'a str> {
        match elements {
            [only] => self.truncation_symbol(only),
            _ => None,
        }
    }

    fn truncation_symbol(&self, node: &Node) -> Option<&'a str> {
        match node {
            Node::Omitted(OmittedReason::DepthExceeded) => {
                Some(self.symbols.omitted_depth_exceeded.as_str())
            }
            Node::Omitted(OmittedReason::CycleDetected) => {
                Some(self.symbols.omitted_cycle_detected.as_str())
            }
            _ => None,
        }
    }
}
