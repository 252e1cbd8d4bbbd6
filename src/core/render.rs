//! Renderer module
//!
//! Renders ResultSet to different output formats: jsonl, json, md, raw

use crate::core::model::{Kind, ResultSet};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
            OutputFormat::Raw => self.render_raw(result_set),
        }
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        let mut sources = Vec::new();
        let mut tokens = Vec::new();
        let mut summaries = Vec::new();
        let mut errors = Vec::new();

        for item in &result_set.items {
            match item.kind {
                Kind::Source => sources.push(item),
                Kind::Token => tokens.push(item),
                Kind::Summary => summaries.push(item),
                Kind::Error => errors.push(item),
            }
        }

        if !errors.is_empty() {
            output.push_str("## Errors\n\n");
            for item in errors {
                for error in &item.errors {
                    output.push_str(&format!("- **{}**: {}", error.code, error.message));
                    if let Some(path) = &item.path {
                        output.push_str(&format!(" (`{}`)", path));
                    }
                    output.push('\n');
                }
            }
            output.push('\n');
        }

        if !sources.is_empty() {
            output.push_str("## Sources\n\n");
            for item in sources {
                if let Some(path) = &item.path {
                    output.push_str(&format!("- `{}`", path));
                    if let Some(size) = item.meta.size {
                        output.push_str(&format!(" ({} bytes)", size));
                    }
                    output.push('\n');
                }
            }
            output.push('\n');
        }

        if !tokens.is_empty() {
            output.push_str("## Tokens\n\n| Token | Count |\n|---|---|\n");
            for item in tokens {
                output.push_str(&format!(
                    "| `{}` | {} |\n",
                    item.token.as_deref().unwrap_or_default(),
                    item.count.unwrap_or_default()
                ));
            }
            output.push('\n');
        }

        for summary in summaries.iter().filter_map(|item| item.summary.as_ref()) {
            output.push_str("## Summary\n\n");
            output.push_str(&format!("- Files: {}\n", summary.files));
            if let Some(skipped) = summary.skipped {
                output.push_str(&format!("- Skipped: {}\n", skipped));
            }
            if let Some(tokens) = summary.tokens {
                output.push_str(&format!("- Tokens: {}\n", tokens));
            }
            if let Some(distinct) = summary.distinct {
                output.push_str(&format!("- Distinct: {}\n", distinct));
            }
            if let Some(bytes) = summary.bytes {
                output.push_str(&format!("- Bytes: {}\n", bytes));
            }
            output.push('\n');
        }

        output
    }

    /// Render as raw lines: `token<TAB>count`, source paths, `CODE: message`.
    ///
    /// Summary items are left out so the output can be piped as a word list.
    fn render_raw(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| match item.kind {
                Kind::Token => item
                    .token
                    .as_ref()
                    .map(|t| format!("{}\t{}", t, item.count.unwrap_or_default())),
                Kind::Source => item.path.clone(),
                Kind::Summary => None,
                Kind::Error => item
                    .errors
                    .first()
                    .map(|e| format!("{}: {}", e.code, e.message)),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
