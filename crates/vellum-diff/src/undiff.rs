//! Recovery of one side of an embedded diff.

use tracing::debug;
use vellum_types::{ensure_sufficient_stack, Keyed, Labeled, Node, UndiffDirection};

/// Strip every embedded diff from `node`, keeping the given side.
///
/// Returns `None` when `node` itself is a diff without that side (a pure
/// addition when asking for the original, a pure removal when asking for
/// the update). Children without the side are dropped from their container;
/// a mapping entry is dropped when either its key or its value is.
pub fn undiff(node: &Node, direction: UndiffDirection) -> Option<Node> {
    debug!(?direction, "undiffing tree");
    side_of(node, direction)
}

fn side_of(node: &Node, direction: UndiffDirection) -> Option<Node> {
    ensure_sufficient_stack(|| match node {
        Node::Diff { .. } => node
            .side(direction)
            .and_then(|side| side_of(side, direction)),

        Node::Record { name, fields } => Some(Node::Record {
            name: name.clone(),
            fields: labeled(fields, direction),
        }),

        Node::Tuple(elements) => Some(Node::Tuple(labeled(elements, direction))),

        Node::Sequence(elements) => Some(Node::Sequence(
            elements.iter().filter_map(|e| side_of(e, direction)).collect(),
        )),

        Node::Set(elements) => Some(Node::Set(
            elements.iter().filter_map(|e| side_of(e, direction)).collect(),
        )),

        Node::Mapping(entries) => Some(Node::Mapping(
            entries
                .iter()
                .filter_map(|entry| {
                    Some(Keyed::new(
                        side_of(&entry.key, direction)?,
                        side_of(&entry.value, direction)?,
                    ))
                })
                .collect(),
        )),

        Node::Variant {
            name,
            case,
            payload,
        } => Some(Node::Variant {
            name: name.clone(),
            case: case.clone(),
            payload: payload
                .as_deref()
                .and_then(|p| side_of(p, direction))
                .map(Box::new),
        }),

        Node::Wrapped(value) => Some(Node::Wrapped(
            value
                .as_deref()
                .and_then(|v| side_of(v, direction))
                .map(Box::new),
        )),

        Node::Leaf(_) | Node::Omitted(_) => Some(node.clone()),
    })
}

fn labeled(fields: &[Labeled], direction: UndiffDirection) -> Vec<Labeled> {
    fields
        .iter()
        .filter_map(|field| Some(Labeled::new(field.label.clone(), side_of(&field.value, direction)?)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff;
    use vellum_types::OmittedReason;

    fn leaf(description: &str) -> Node {
        Node::leaf(description)
    }

    #[test]
    fn pure_edits_lose_their_missing_side() {
        let added = Node::added(leaf("1"));
        assert_eq!(undiff(&added, UndiffDirection::Original), None);
        assert_eq!(undiff(&added, UndiffDirection::Update), Some(leaf("1")));

        let removed = Node::removed(leaf("1"));
        assert_eq!(undiff(&removed, UndiffDirection::Original), Some(leaf("1")));
        assert_eq!(undiff(&removed, UndiffDirection::Update), None);
    }

    #[test]
    fn record_drops_fields_without_side() {
        let node = Node::record(
            "Simple",
            [
                Labeled::new("firstProperty", Node::changed(leaf("77"), leaf("99"))),
                Labeled::new("secondProperty", Node::removed(leaf("\"Hello\""))),
                Labeled::new("thirdProperty", Node::added(leaf("3.14"))),
            ],
        );
        assert_eq!(
            undiff(&node, UndiffDirection::Original),
            Some(Node::record(
                "Simple",
                [
                    Labeled::new("firstProperty", leaf("77")),
                    Labeled::new("secondProperty", leaf("\"Hello\"")),
                ],
            ))
        );
        assert_eq!(
            undiff(&node, UndiffDirection::Update),
            Some(Node::record(
                "Simple",
                [
                    Labeled::new("firstProperty", leaf("99")),
                    Labeled::new("thirdProperty", leaf("3.14")),
                ],
            ))
        );
    }

    #[test]
    fn mapping_drops_entry_when_either_half_is_missing() {
        let node = Node::mapping([
            Keyed::new(leaf("1"), Node::changed(leaf("a"), leaf("b"))),
            Keyed::new(Node::added(leaf("2")), Node::added(leaf("c"))),
            Keyed::new(leaf("3"), Node::removed(leaf("d"))),
        ]);
        assert_eq!(
            undiff(&node, UndiffDirection::Original),
            Some(Node::mapping([
                Keyed::new(leaf("1"), leaf("a")),
                Keyed::new(leaf("3"), leaf("d")),
            ]))
        );
        assert_eq!(
            undiff(&node, UndiffDirection::Update),
            Some(Node::mapping([
                Keyed::new(leaf("1"), leaf("b")),
                Keyed::new(leaf("2"), leaf("c")),
            ]))
        );
    }

    #[test]
    fn variant_payload_restores_absence() {
        let node = Node::Variant {
            name: "E".into(),
            case: "c".into(),
            payload: Some(Box::new(Node::added(leaf("1")))),
        };
        assert_eq!(
            undiff(&node, UndiffDirection::Original),
            Some(Node::variant("E", "c", None))
        );
        assert_eq!(
            undiff(&node, UndiffDirection::Update),
            Some(Node::variant("E", "c", Some(leaf("1"))))
        );
    }

    #[test]
    fn nested_diff_sides_are_stripped() {
        let node = Node::changed(
            Node::sequence([Node::added(leaf("x"))]),
            leaf("y"),
        );
        assert_eq!(
            undiff(&node, UndiffDirection::Original),
            Some(Node::sequence([]))
        );
    }

    #[test]
    fn plain_trees_pass_through() {
        let node = Node::tuple([
            Labeled::new("0", Node::some(leaf("1"))),
            Labeled::omitted("1", OmittedReason::CycleDetected),
        ]);
        assert_eq!(undiff(&node, UndiffDirection::Original), Some(node.clone()));
        assert_eq!(undiff(&node, UndiffDirection::Update), Some(node));
    }

    #[test]
    fn round_trip_through_diff() {
        let original = Node::record(
            "Complex",
            [
                Labeled::new("list", Node::sequence([leaf("2"), leaf("3"), leaf("4"), leaf("5")])),
                Labeled::new("maybe", Node::some(leaf("\"a\""))),
                Labeled::new(
                    "map",
                    Node::mapping([
                        Keyed::new(leaf("1"), leaf("one")),
                        Keyed::new(leaf("2"), leaf("two")),
                    ]),
                ),
            ],
        );
        let update = Node::record(
            "Complex",
            [
                Labeled::new("list", Node::sequence([leaf("1"), leaf("2"), leaf("9"), leaf("4")])),
                Labeled::new("maybe", Node::none()),
                Labeled::new(
                    "map",
                    Node::mapping([
                        Keyed::new(leaf("1"), leaf("uno")),
                        Keyed::new(leaf("3"), leaf("three")),
                    ]),
                ),
            ],
        );
        let diffed = diff(&original, &update);
        assert_eq!(undiff(&diffed, UndiffDirection::Original), Some(original));
        assert_eq!(undiff(&diffed, UndiffDirection::Update), Some(update));
    }
}
