//! Named-placeholder expansion for symbol templates.
//!
//! A template such as `"{name}.{case}("` is expanded by substituting each
//! `{key}` for which an argument is supplied. Braces that do not form a
//! known placeholder are copied through unchanged, so JSON-like templates
//! such as `{"{case}":{` need no escaping.

/// Expand `template`, replacing `{key}` with the matching argument.
pub fn fill(template: &str, args: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let replacement = after.find('}').and_then(|close| {
            let key = &after[..close];
            args.iter()
                .find(|(name, _)| *name == key)
                .map(|(_, value)| (*value, close))
        });
        match replacement {
            Some((value, close)) => {
                out.push_str(value);
                rest = &after[close + 1..];
            }
            None => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}
