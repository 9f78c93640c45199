//! Render configuration.
//!
//! Every bracket, separator and summary string is a template in
//! [`Symbols`]; the layout limits live on [`RenderConfig`]. Both load from
//! TOML with missing keys falling back to their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{RenderError, RenderResult};

/// Layout limits and symbol tables for the render engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Children shown per group before the middle collapses into a summary.
    pub max_items: usize,
    /// Preferred line width. `0` always breaks groups across lines,
    /// `usize::MAX` always keeps them on one line.
    pub max_line_width: usize,
    /// Sequences longer than this prefix each element with its index.
    pub collection_index_min_items: usize,
    pub symbols: Symbols,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            max_items: usize::MAX,
            max_line_width: 0,
            collection_index_min_items: usize::MAX,
            symbols: Symbols::default(),
        }
    }
}

/// Symbol templates. Placeholders are written `{name}` and are expanded by
/// name; see each field for the placeholders it receives.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Symbols {
    /// `{name}`
    pub record_prefix: String,
    /// `{name}`
    pub record_suffix: String,
    pub sequence_prefix: String,
    /// `{index}`
    pub sequence_index: String,
    pub sequence_suffix: String,
    pub mapping_prefix: String,
    pub mapping_empty: String,
    pub mapping_suffix: String,
    /// Payload-less variant. `{name}`, `{case}`
    pub variant: String,
    /// `{name}`, `{case}`
    pub variant_payload_prefix: String,
    /// `{name}`, `{case}`
    pub variant_payload_suffix: String,
    pub set_prefix: String,
    pub set_suffix: String,
    pub tuple_prefix: String,
    pub tuple_suffix: String,

    pub inserted_line_prefix: String,
    pub removed_line_prefix: String,
    pub unchanged_line_prefix: String,
    pub name_value_separator: String,
    pub element_separator: String,
    pub indentation: String,
    pub nil: String,
    pub omitted_unresolved: String,
    pub omitted_depth_exceeded: String,
    pub omitted_cycle_detected: String,
    /// `{label}`
    pub label: String,
    /// `{count}`
    pub summary_filtered: String,
    /// `{count}`
    pub summary_skipped: String,
    /// `{count}`
    pub summary_unchanged: String,
    /// `{entry}`
    pub summary_single: String,
    /// `{first}`, `{second}`
    pub summary_dual: String,
}

impl Default for Symbols {
    fn default() -> Self {
        Self {
            record_prefix: "{name}(".into(),
            record_suffix: ")".into(),
            sequence_prefix: "[".into(),
            sequence_index: ".{index}".into(),
            sequence_suffix: "]".into(),
            mapping_prefix: "[".into(),
            mapping_empty: "[:]".into(),
            mapping_suffix: "]".into(),
            variant: "{name}.{case}".into(),
            variant_payload_prefix: "{name}.{case}(".into(),
            variant_payload_suffix: ")".into(),
            set_prefix: "Set([".into(),
            set_suffix: "])".into(),
            tuple_prefix: "(".into(),
            tuple_suffix: ")".into(),

            inserted_line_prefix: "+ ".into(),
            removed_line_prefix: "- ".into(),
            unchanged_line_prefix: "  ".into(),
            name_value_separator: ": ".into(),
            element_separator: ", ".into(),
            indentation: "    ".into(),
            nil: "nil".into(),
            omitted_unresolved: "?".into(),
            omitted_depth_exceeded: "…".into(),
            omitted_cycle_detected: "… (skipped due to reference cycle)".into(),
            label: "{label}".into(),
            summary_filtered: "{count} filtered".into(),
            summary_skipped: "{count} more".into(),
            summary_unchanged: "{count} unchanged".into(),
            summary_single: "… ({entry})".into(),
            summary_dual: "… ({first} with {second})".into(),
        }
    }
}

impl RenderConfig {
    /// JSON-like output. Minified output stays on a single line.
    pub fn json(minified: bool) -> Self {
        let (name_value_separator, element_separator) =
            if minified { (":", ",") } else { (": ", ", ") };
        let variant_payload_prefix = if minified {
            "{\"{case}\":{"
        } else {
            "{ \"{case}\": {"
        };

        Self {
            max_items: usize::MAX,
            max_line_width: if minified { usize::MAX } else { 0 },
            collection_index_min_items: usize::MAX,
            symbols: Symbols {
                record_prefix: "{".into(),
                record_suffix: "}".into(),
                mapping_prefix: "{".into(),
                mapping_empty: "{}".into(),
                mapping_suffix: "}".into(),
                variant: "\"{case}\"".into(),
                variant_payload_prefix: variant_payload_prefix.into(),
                variant_payload_suffix: "}}".into(),
                set_prefix: "[".into(),
                set_suffix: "]".into(),
                tuple_prefix: "{".into(),
                tuple_suffix: "}".into(),
                name_value_separator: name_value_separator.into(),
                element_separator: element_separator.into(),
                nil: "null".into(),
                label: "\"{label}\"".into(),
                ..Symbols::default()
            },
        }
    }

    /// Parse a TOML document and validate the result.
    pub fn from_toml_str(s: &str) -> RenderResult<Self> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file.
    pub fn load(path: impl AsRef<Path>) -> RenderResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        info!(
            path = %path.display(),
            max_items = config.max_items,
            max_line_width = config.max_line_width,
            "loaded render config"
        );
        Ok(config)
    }

    pub fn validate(&self) -> RenderResult<()> {
        if self.max_items == 0 {
            return Err(RenderError::Invalid("max_items must be at least 1".into()));
        }
        if self.symbols.indentation.is_empty() {
            return Err(RenderError::Invalid("indentation must not be empty".into()));
        }
        Ok(())
    }
}
