//! Unified line view of two rendered sides.

use vellum_diff::EditScript;

use crate::config::Symbols;

/// Line-diff two renderings and prefix every line with its marker.
///
/// Removals are emitted before insertions at the same position. Empty lines
/// are ignored on both sides.
pub fn unified(original: &str, update: &str, symbols: &Symbols) -> String {
    let original: Vec<&str> = original.split('\n').filter(|l| !l.is_empty()).collect();
    let update: Vec<&str> = update.split('\n').filter(|l| !l.is_empty()).collect();
    let script = EditScript::between(&original, &update);

    let mut lines = Vec::with_capacity(original.len().max(update.len()));
    let (mut o, mut u) = (0, 0);
    while o < original.len() || u < update.len() {
        if o < original.len() && (script.is_removal(o) || u >= update.len()) {
            lines.push(format!("{}{}", symbols.removed_line_prefix, original[o]));
            o += 1;
        } else if u < update.len() && (script.is_insertion(u) || o >= original.len()) {
            lines.push(format!("{}{}", symbols.inserted_line_prefix, update[u]));
            u += 1;
        } else {
            lines.push(format!("{}{}", symbols.unchanged_line_prefix, original[o]));
            o += 1;
            u += 1;
        }
    }
    lines.join("\n")
}
