//! Type name formatting.
//!
//! Names arrive from the capture layer fully qualified. How much of them to
//! show (module paths, generic parameters) is the caller's choice, so the
//! render engine only ever sees names through a [`NameFormatter`].

/// Turns a captured type name into the text shown in rendered output.
pub trait NameFormatter {
    fn format_name(&self, name: &str) -> String;
}

/// Shows names exactly as captured.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityNames;

impl NameFormatter for IdentityNames {
    fn format_name(&self, name: &str) -> String {
        name.to_string()
    }
}
