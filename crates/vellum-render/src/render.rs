//! Render entry points.

use std::fmt;

use tracing::debug;
use vellum_types::{Node, UndiffDirection};

use crate::config::RenderConfig;
use crate::error::RenderResult;
use crate::names::{IdentityNames, NameFormatter};
use crate::print::Printer;
use crate::summarize::Summarizer;
use crate::tokenize::Tokenizer;
use crate::unified::unified;

/// Renders trees with a fixed configuration and name formatter.
///
/// A tree containing diff nodes is rendered once per side and shown as a
/// unified line diff; any other tree is rendered directly.
pub struct Renderer<'a> {
    config: &'a RenderConfig,
    names: &'a dyn NameFormatter,
}

impl<'a> Renderer<'a> {
    pub fn new(config: &'a RenderConfig) -> Self {
        Self {
            config,
            names: &IdentityNames,
        }
    }

    pub fn with_names(mut self, names: &'a dyn NameFormatter) -> Self {
        self.names = names;
        self
    }

    pub fn render(&self, node: &Node) -> String {
        if node.contains_diff() {
            debug!("rendering unified diff");
            let original = self.render_side(node, UndiffDirection::Original);
            let update = self.render_side(node, UndiffDirection::Update);
            unified(&original, &update, &self.config.symbols)
        } else {
            debug!("rendering single tree");
            self.render_side(node, UndiffDirection::Original)
        }
    }

    pub fn render_to<W: fmt::Write>(&self, node: &Node, out: &mut W) -> RenderResult<()> {
        out.write_str(&self.render(node))?;
        Ok(())
    }

    fn render_side(&self, node: &Node, side: UndiffDirection) -> String {
        let token = Tokenizer::new(self.config, self.names, side).tokenize(node);
        let token = Summarizer::new(self.config).process(token);
        Printer::new(self.config).print(&token)
    }
}

/// Render `node` to a string.
pub fn render(node: &Node, config: &RenderConfig) -> String {
    Renderer::new(config).render(node)
}

/// Render `node` into any [`fmt::Write`] sink.
pub fn render_to<W: fmt::Write>(node: &Node, config: &RenderConfig, out: &mut W) -> RenderResult<()> {
    Renderer::new(config).render_to(node, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RenderError;
    use pretty_assertions::assert_eq;
    use vellum_diff::diff;
    use vellum_types::{Keyed, Labeled, OmittedReason};

    fn leaf(description: &str) -> Node {
        Node::leaf(description)
    }

    fn narrow() -> RenderConfig {
        RenderConfig {
            max_items: 32,
            max_line_width: 1,
            collection_index_min_items: 3,
            ..RenderConfig::default()
        }
    }

    fn wide() -> RenderConfig {
        RenderConfig {
            max_line_width: usize::MAX,
            ..narrow()
        }
    }

    fn simple() -> Node {
        Node::record(
            "Simple",
            [
                Labeled::new("firstProperty", leaf("77")),
                Labeled::new("secondProperty", leaf("\"Hello world!\"")),
            ],
        )
    }

    fn int_list(values: &[&str]) -> Node {
        Node::sequence(values.iter().map(|v| leaf(v)))
    }

    #[test]
    fn simple_record() {
        assert_eq!(
            render(&simple(), &narrow()),
            "Simple(\n    firstProperty: 77,\n    secondProperty: \"Hello world!\"\n)"
        );
        assert_eq!(
            render(&simple(), &wide()),
            "Simple(firstProperty: 77, secondProperty: \"Hello world!\")"
        );
    }

    #[test]
    fn indexed_sequence() {
        let node = int_list(&["1", "22", "333", "4444"]);
        assert_eq!(
            render(&node, &narrow()),
            "[\n    .0: 1,\n    .1: 22,\n    .2: 333,\n    .3: 4444\n]"
        );
        assert_eq!(render(&node, &wide()), "[.0: 1, .1: 22, .2: 333, .3: 4444]");
    }

    #[test]
    fn mapping_entries() {
        let node = Node::mapping([
            Keyed::new(leaf("1"), leaf("4")),
            Keyed::new(leaf("22"), leaf("33")),
        ]);
        assert_eq!(render(&node, &narrow()), "[\n    1: 4,\n    22: 33\n]");
        assert_eq!(render(&node, &wide()), "[1: 4, 22: 33]");
        assert_eq!(render(&Node::mapping([]), &narrow()), "[:]");
    }

    #[test]
    fn variant_with_payload() {
        let node = Node::variant(
            "SimpleWithAssociatedType",
            "secondCase",
            Some(leaf("\"mySecondCaseValue\"")),
        );
        assert_eq!(
            render(&node, &narrow()),
            "SimpleWithAssociatedType.secondCase(\n    \"mySecondCaseValue\"\n)"
        );
        assert_eq!(
            render(&node, &wide()),
            "SimpleWithAssociatedType.secondCase(\"mySecondCaseValue\")"
        );
    }

    #[test]
    fn absent_wrapper() {
        assert_eq!(render(&Node::none(), &narrow()), "nil");
    }

    #[test]
    fn set_and_tuple() {
        let node = Node::tuple([
            Labeled::new("0", Node::set([leaf("1"), leaf("2")])),
            Labeled::new("name", leaf("\"x\"")),
        ]);
        assert_eq!(render(&node, &wide()), "(0: Set([1, 2]), name: \"x\")");
    }

    #[test]
    fn nested_sequences_with_item_limit() {
        let node = Node::sequence((0..10).map(|i| Node::sequence((0..10 - i).map(|j| leaf(&j.to_string())))));
        let mut config = RenderConfig {
            max_items: 3,
            max_line_width: 0,
            ..RenderConfig::default()
        };
        assert_eq!(
            render(&node, &config),
            [
                "[",
                "    [",
                "        0,",
                "        1,",
                "        … (7 more),",
                "        9",
                "    ],",
                "    [",
                "        0,",
                "        1,",
                "        … (6 more),",
                "        8",
                "    ],",
                "    … (7 more),",
                "    [",
                "        0",
                "    ]",
                "]",
            ]
            .join("\n")
        );

        config.max_line_width = usize::MAX;
        assert_eq!(
            render(&node, &config),
            "[[0, 1, … (7 more), 9], [0, 1, … (6 more), 8], … (7 more), [0]]"
        );
    }

    #[test]
    fn filtered_values_are_summarized() {
        let config = RenderConfig {
            max_items: 4,
            ..RenderConfig::default()
        };
        let node = Node::sequence((0..100).map(|i| leaf(&i.to_string())));

        let zeros = vellum_filter::filter(&node, vellum_filter::by_value("*0*").unwrap(), 0);
        assert_eq!(
            render(&zeros, &config),
            "[\n    0,\n    … (99 more with 90 filtered)\n]"
        );

        let nines = vellum_filter::filter(&node, vellum_filter::by_value("*9*").unwrap(), 0);
        assert_eq!(
            render(&nines, &config),
            "[\n    … (98 more with 81 filtered),\n    98,\n    99\n]"
        );
    }

    #[test]
    fn fully_filtered_tree() {
        let filtered = vellum_filter::filter(&simple(), vellum_filter::by_value("!").unwrap(), 0);
        assert_eq!(filtered, Node::omitted(OmittedReason::Filtered));
        assert_eq!(render(&filtered, &narrow()), "… (1 filtered)");
    }

    #[test]
    fn changed_record_field() {
        let original = Node::record(
            "Simple",
            [
                Labeled::new("first", leaf("77")),
                Labeled::new("second", leaf("\"Hello\"")),
                Labeled::new("third", leaf("3.14")),
                Labeled::new("fourth", leaf("false")),
            ],
        );
        let mut update = original.clone();
        if let Node::Record { fields, .. } = &mut update {
            fields[3].value = leaf("true");
        }

        assert_eq!(
            render(&diff(&original, &update), &narrow()),
            [
                "  Simple(",
                "      … (3 unchanged),",
                "-     fourth: false",
                "+     fourth: true",
                "  )",
            ]
            .join("\n")
        );
    }

    #[test]
    fn removed_sequence_element() {
        let original = Node::sequence([leaf("1"), Node::sequence([leaf("2")])]);
        let update = Node::sequence([leaf("1")]);

        assert_eq!(
            render(&diff(&original, &update), &narrow()),
            [
                "  [",
                "      … (1 unchanged),",
                "-     [",
                "-         2",
                "-     ]",
                "  ]",
            ]
            .join("\n")
        );
    }

    #[test]
    fn root_level_change() {
        let node = Node::changed(Node::variant("Color", "red", None), Node::variant("Color", "blue", None));
        assert_eq!(render(&node, &narrow()), "- Color.red\n+ Color.blue");
    }

    #[test]
    fn renamed_record_changes_only_its_header() {
        let original = Node::record("Before", [Labeled::new("a", leaf("1"))]);
        let update = Node::record("After", [Labeled::new("a", leaf("1"))]);
        assert_eq!(
            render(&diff(&original, &update), &narrow()),
            "- Before(\n+ After(\n      a: 1\n  )"
        );
    }

    #[test]
    fn json_output() {
        let node = Node::record(
            "Point",
            [
                Labeled::new("x", leaf("1")),
                Labeled::new("tags", Node::sequence([leaf("\"a\""), leaf("\"b\"")])),
                Labeled::new("parent", Node::none()),
                Labeled::new("mode", Node::variant("Mode", "fast", None)),
            ],
        );
        assert_eq!(
            render(&node, &RenderConfig::json(true)),
            r#"{"x":1,"tags":["a","b"],"parent":null,"mode":"fast"}"#
        );
        assert_eq!(
            render(&node, &RenderConfig::json(false)),
            [
                "{",
                "    \"x\": 1,",
                "    \"tags\": [",
                "        \"a\",",
                "        \"b\"",
                "    ],",
                "    \"parent\": null,",
                "    \"mode\": \"fast\"",
                "}",
            ]
            .join("\n")
        );
    }

    #[test]
    fn custom_name_formatter() {
        struct Unqualified;
        impl NameFormatter for Unqualified {
            fn format_name(&self, name: &str) -> String {
                name.rsplit('.').next().unwrap_or(name).to_string()
            }
        }

        let config = wide();
        let node = Node::record("app.Empty", []);
        let renderer = Renderer::new(&config).with_names(&Unqualified);
        assert_eq!(renderer.render(&node), "Empty()");
    }

    #[test]
    fn render_to_writer() {
        let mut out = String::from("> ");
        render_to(&simple(), &wide(), &mut out).unwrap();
        assert_eq!(out, "> Simple(firstProperty: 77, secondProperty: \"Hello world!\")");
    }

    #[test]
    fn writer_failures_surface() {
        struct Broken;
        impl fmt::Write for Broken {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let err = render_to(&simple(), &wide(), &mut Broken).unwrap_err();
        assert!(matches!(err, RenderError::Format(_)));
    }
}
