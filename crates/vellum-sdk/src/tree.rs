use std::borrow::Cow;
use std::fmt;

use vellum_path::PathKey;
use vellum_render::RenderConfig;
use vellum_sort::{SortOptions, SortOrder};
use vellum_stats::Stats;
use vellum_types::{Node, NodeKind, UndiffDirection};

use crate::error::SdkResult;

/// Value tree operations as methods.
///
/// Every method is a thin wrapper over the engine crate that owns the
/// operation; none of them mutate `self`.
pub trait TreeExt {
    /// Diff `self` (the original) against `update`.
    fn diffed(&self, update: &Node) -> Node;

    /// Recover one side of every embedded diff.
    fn undiffed(&self, direction: UndiffDirection) -> Option<Node>;

    /// Keep matches of `predicate`, their ancestors and `match_depth` levels
    /// below them.
    fn filtered(&self, predicate: impl Fn(&Node) -> bool, match_depth: usize) -> Node;

    /// [`filtered`](TreeExt::filtered) with a wildcard pattern over leaf
    /// descriptions and variant cases.
    fn filtered_by_value(&self, pattern: &str, match_depth: usize) -> SdkResult<Node>;

    /// [`filtered`](TreeExt::filtered) by node kind.
    fn filtered_by_kind(&self, kind: NodeKind, match_depth: usize) -> Node;

    fn sorted(&self, order: SortOrder, options: SortOptions) -> Node;

    fn stats(&self) -> Stats;

    fn render(&self, config: &RenderConfig) -> String;

    fn render_to<W: fmt::Write>(&self, config: &RenderConfig, out: &mut W) -> SdkResult<()>;

    fn get(&self, key: impl Into<PathKey>) -> Option<Cow<'_, Node>>;

    fn get_path<K: Into<PathKey>>(&self, keys: impl IntoIterator<Item = K>) -> Option<Cow<'_, Node>>;
}

impl TreeExt for Node {
    fn diffed(&self, update: &Node) -> Node {
        vellum_diff::diff(self, update)
    }

    fn undiffed(&self, direction: UndiffDirection) -> Option<Node> {
        vellum_diff::undiff(self, direction)
    }

    fn filtered(&self, predicate: impl Fn(&Node) -> bool, match_depth: usize) -> Node {
        vellum_filter::filter(self, predicate, match_depth)
    }

    fn filtered_by_value(&self, pattern: &str, match_depth: usize) -> SdkResult<Node> {
        let predicate = vellum_filter::by_value(pattern)?;
        Ok(vellum_filter::filter(self, predicate, match_depth))
    }

    fn filtered_by_kind(&self, kind: NodeKind, match_depth: usize) -> Node {
        vellum_filter::filter(self, vellum_filter::by_kind(kind), match_depth)
    }

    fn sorted(&self, order: SortOrder, options: SortOptions) -> Node {
        vellum_sort::sort(self, order, options)
    }

    fn stats(&self) -> Stats {
        vellum_stats::stats(self)
    }

    fn render(&self, config: &RenderConfig) -> String {
        vellum_render::render(self, config)
    }

    fn render_to<W: fmt::Write>(&self, config: &RenderConfig, out: &mut W) -> SdkResult<()> {
        vellum_render::render_to(self, config, out)?;
        Ok(())
    }

    fn get(&self, key: impl Into<PathKey>) -> Option<Cow<'_, Node>> {
        vellum_path::lookup(self, key)
    }

    fn get_path<K: Into<PathKey>>(&self, keys: impl IntoIterator<Item = K>) -> Option<Cow<'_, Node>> {
        vellum_path::lookup_path(self, keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SdkError;
    use pretty_assertions::assert_eq;
    use vellum_types::{Keyed, Labeled};

    fn leaf(description: &str) -> Node {
        Node::leaf(description)
    }

    fn account(balance: &str, tags: &[&str]) -> Node {
        Node::record(
            "Account",
            [
                Labeled::new("owner", leaf("\"ada\"")),
                Labeled::new("balance", leaf(balance)),
                Labeled::new("tags", Node::set(tags.iter().map(|t| leaf(t)))),
                Labeled::new(
                    "limits",
                    Node::mapping([Keyed::new(leaf("\"daily\""), leaf("100"))]),
                ),
            ],
        )
    }

    #[test]
    fn diff_then_render_then_recover() {
        let before = account("10", &["\"a\""]);
        let after = account("25", &["\"a\""]);
        let diffed = before.diffed(&after);

        let config = RenderConfig {
            max_line_width: 1,
            ..RenderConfig::default()
        };
        assert_eq!(
            diffed.render(&config),
            [
                "  Account(",
                "      … (1 unchanged),",
                "-     balance: 10,",
                "+     balance: 25,",
                "      … (2 unchanged)",
                "  )",
            ]
            .join("\n")
        );

        assert_eq!(diffed.undiffed(UndiffDirection::Original), Some(before));
        assert_eq!(diffed.undiffed(UndiffDirection::Update), Some(after));
        assert_eq!(diffed.stats().diff_count, 1);
    }

    #[test]
    fn lookup_through_a_diff() {
        let diffed = account("10", &[]).diffed(&account("25", &[]));
        assert_eq!(
            diffed.get("balance").map(Cow::into_owned),
            Some(Node::changed(leaf("10"), leaf("25")))
        );
        assert_eq!(
            diffed.get_path(["limits", "daily"]).map(Cow::into_owned),
            Some(leaf("100"))
        );
        assert!(diffed.get("missing").is_none());
    }

    #[test]
    fn filter_and_sort_compose() {
        let node = account("10", &["\"b\"", "\"a\""]);
        let sorted = node.sorted(SortOrder::Ascending, SortOptions::default());
        let labels: Vec<String> = match &sorted {
            Node::Record { fields, .. } => fields.iter().map(|f| f.label.clone()).collect(),
            other => panic!("expected record, got {other:?}"),
        };
        assert_eq!(labels, ["balance", "limits", "owner", "tags"]);

        let only_tags = sorted.filtered_by_value("\"a\"", 0).unwrap();
        assert_eq!(
            only_tags.render(&RenderConfig {
                max_line_width: usize::MAX,
                ..RenderConfig::default()
            }),
            "Account(… (3 filtered), tags: Set([\"a\", … (1 filtered)]))"
        );
    }

    #[test]
    fn kind_filter_keeps_matching_containers() {
        let node = account("10", &["\"a\""]);
        let sets = node.filtered_by_kind(NodeKind::Set, 1);
        assert_eq!(sets.stats().filtered_count, 3);
        assert_eq!(sets.get("tags").map(Cow::into_owned), Some(Node::set([leaf("\"a\"")])));
    }

    #[test]
    fn stats_agree_with_rendered_filter_summary() {
        let map = Node::mapping([
            Keyed::new(leaf("\"a\""), leaf("1")),
            Keyed::new(leaf("\"b\""), leaf("2")),
        ]);
        let only_one = map.filtered_by_value("1", 0).unwrap();

        assert_eq!(only_one.stats().filtered_count, 1);
        assert!(only_one
            .render(&RenderConfig::default())
            .contains("… (1 filtered)"));
    }

    #[test]
    fn writer_failures_surface_as_render_errors() {
        struct Broken;
        impl fmt::Write for Broken {
            fn write_str(&mut self, _: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let node = leaf("1");
        let err = node.render_to(&RenderConfig::default(), &mut Broken).unwrap_err();
        assert!(matches!(err, SdkError::Render(_)));

        let mut out = String::new();
        node.render_to(&RenderConfig::default(), &mut out).unwrap();
        assert_eq!(out, "1");
    }
}
