//! Edit scripts over ordered slices.
//!
//! Uses the `similar` crate (Myers diff algorithm) to find which positions
//! of the original were removed and which positions of the update were
//! inserted. Consumers then walk both slices in lockstep.

use similar::algorithms::{myers, Capture};
use similar::DiffOp;
use tracing::trace;

/// Removed original positions and inserted update positions of a minimal
/// edit script.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EditScript {
    removed: Vec<bool>,
    inserted: Vec<bool>,
}

/// One step of the pairing walk over an [`EditScript`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    /// Aligned positions outside the edit script.
    Unchanged { original: usize, update: usize },
    /// A removal and an insertion met at the same cursor.
    Paired { original: usize, update: usize },
    /// An update position with no original counterpart.
    Inserted(usize),
    /// An original position with no update counterpart.
    Removed(usize),
}

impl EditScript {
    /// Compute the edit script turning `original` into `update`.
    pub fn between<T: PartialEq>(original: &[T], update: &[T]) -> Self {
        let mut removed = vec![false; original.len()];
        let mut inserted = vec![false; update.len()];

        let mut capture = Capture::new();
        if let Err(never) =
            myers::diff(&mut capture, original, 0..original.len(), update, 0..update.len())
        {
            match never {}
        }

        for op in capture.into_ops() {
            match op {
                DiffOp::Equal { .. } => {}
                DiffOp::Delete {
                    old_index, old_len, ..
                } => mark(&mut removed, old_index, old_len),
                DiffOp::Insert {
                    new_index, new_len, ..
                } => mark(&mut inserted, new_index, new_len),
                DiffOp::Replace {
                    old_index,
                    old_len,
                    new_index,
                    new_len,
                } => {
                    mark(&mut removed, old_index, old_len);
                    mark(&mut inserted, new_index, new_len);
                }
            }
        }

        let script = Self { removed, inserted };
        trace!(
            removals = script.removals(),
            insertions = script.insertions(),
            "computed edit script"
        );
        script
    }

    /// Whether the original position `index` is removed.
    pub fn is_removal(&self, index: usize) -> bool {
        self.removed.get(index).copied().unwrap_or(false)
    }

    /// Whether the update position `index` is inserted.
    pub fn is_insertion(&self, index: usize) -> bool {
        self.inserted.get(index).copied().unwrap_or(false)
    }

    pub fn removals(&self) -> usize {
        self.removed.iter().filter(|r| **r).count()
    }

    pub fn insertions(&self) -> usize {
        self.inserted.iter().filter(|i| **i).count()
    }

    /// Returns `true` when both slices were equal.
    pub fn is_empty(&self) -> bool {
        self.removals() == 0 && self.insertions() == 0
    }

    /// Walk both slices in lockstep.
    ///
    /// When the original cursor sits on a removal and the update cursor on
    /// an insertion, the two are reported as one [`Step::Paired`] change
    /// instead of an unrelated removal and insertion.
    pub fn align(&self) -> Vec<Step> {
        let (original_len, update_len) = (self.removed.len(), self.inserted.len());
        let mut steps = Vec::with_capacity(original_len.max(update_len));
        let (mut o, mut u) = (0, 0);

        while o < original_len || u < update_len {
            // Once one side is exhausted, everything left on the other side is
            // an edit.
            let removal = self.removed.get(o).map(|&r| r || u >= update_len);
            let insertion = self.inserted.get(u).map(|&i| i || o >= original_len);

            match (removal, insertion) {
                (Some(true), Some(true)) => {
                    steps.push(Step::Paired {
                        original: o,
                        update: u,
                    });
                    o += 1;
                    u += 1;
                }
                (Some(true), _) => {
                    steps.push(Step::Removed(o));
                    o += 1;
                }
                (_, Some(true)) => {
                    steps.push(Step::Inserted(u));
                    u += 1;
                }
                _ => {
                    steps.push(Step::Unchanged {
                        original: o,
                        update: u,
                    });
                    o += 1;
                    u += 1;
                }
            }
        }

        steps
    }
}

fn mark(flags: &mut [bool], start: usize, len: usize) {
    if let Some(range) = flags.get_mut(start..start + len) {
        range.fill(true);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_slices_have_empty_script() {
        let script = EditScript::between(&[1, 2, 3], &[1, 2, 3]);
        assert!(script.is_empty());
        assert_eq!(
            script.align(),
            vec![
                Step::Unchanged { original: 0, update: 0 },
                Step::Unchanged { original: 1, update: 1 },
                Step::Unchanged { original: 2, update: 2 },
            ]
        );
    }

    #[test]
    fn removal_and_insertion_at_same_cursor_pair_up() {
        let script = EditScript::between(&[2, 3, 4, 5], &[1, 2, 9, 4]);
        assert_eq!(script.removals(), 2);
        assert_eq!(script.insertions(), 2);
        assert!(script.is_removal(1));
        assert!(script.is_removal(3));
        assert!(script.is_insertion(0));
        assert!(script.is_insertion(2));
        assert_eq!(
            script.align(),
            vec![
                Step::Inserted(0),
                Step::Unchanged { original: 0, update: 1 },
                Step::Paired { original: 1, update: 2 },
                Step::Unchanged { original: 2, update: 3 },
                Step::Removed(3),
            ]
        );
    }

    #[test]
    fn empty_sides() {
        assert_eq!(
            EditScript::between::<u8>(&[], &[7, 8]).align(),
            vec![Step::Inserted(0), Step::Inserted(1)]
        );
        assert_eq!(
            EditScript::between::<u8>(&[7], &[]).align(),
            vec![Step::Removed(0)]
        );
        assert!(EditScript::between::<u8>(&[], &[]).align().is_empty());
    }

    #[test]
    fn elements_need_only_equality() {
        // Floats are neither `Hash` nor `Ord`.
        let script = EditScript::between(&[1.5, 2.5, 3.5], &[1.5, 3.5]);
        assert_eq!(
            script.align(),
            vec![
                Step::Unchanged { original: 0, update: 0 },
                Step::Removed(1),
                Step::Unchanged { original: 2, update: 1 },
            ]
        );
    }

    #[test]
    fn out_of_range_queries_are_false() {
        let script = EditScript::between(&["a"], &["b"]);
        assert!(!script.is_removal(5));
        assert!(!script.is_insertion(5));
    }
}
