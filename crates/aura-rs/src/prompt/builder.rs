//! Line-oriented prompt builder.
//!
//! [`PromptBuilder`] collects `### Heading` blocks of lines. Each block is
//! followed by one blank line; the finished prompt is the lines joined with
//! `\n`.

/// Builder for block-structured prompt text.
///
/// # Example
///
/// ```
/// use aura_rs::prompt::PromptBuilder;
///
/// let text = PromptBuilder::new("## Title")
///     .block("### Shown", vec!["- a".into()])
///     .block_if(false, "### Hidden", || vec!["- b".into()])
///     .line("Done.")
///     .build();
///
/// assert_eq!(text, "## Title\n### Shown\n- a\n\nDone.");
/// ```
#[derive(Debug, Default)]
pub struct PromptBuilder {
    lines: Vec<String>,
}

impl PromptBuilder {
    /// Start with a single header line.
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            lines: vec![header.into()],
        }
    }

    /// Append one raw line.
    pub fn line(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Append a raw line only when `line` is `Some`.
    pub fn line_opt(self, line: Option<impl Into<String>>) -> Self {
        match line {
            Some(line) => self.line(line),
            None => self,
        }
    }

    /// Append a heading, its body lines, and a blank separator line.
    ///
    /// The heading is written even when `body` is empty.
    pub fn block(mut self, heading: &str, body: Vec<String>) -> Self {
        self.lines.push(heading.to_string());
        self.lines.extend(body);
        self.lines.push(String::new());
        self
    }

    /// Append a block only if `condition` is true. The body is built lazily.
    pub fn block_if(
        self,
        condition: bool,
        heading: &str,
        body: impl FnOnce() -> Vec<String>,
    ) -> Self {
        if condition {
            self.block(heading, body())
        } else {
            self
        }
    }

    /// Join every line with `\n`.
    pub fn build(self) -> String {
        self.lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_only() {
        assert_eq!(PromptBuilder::new("## Only").build(), "## Only");
    }

    #[test]
    fn blocks_end_with_blank_line() {
        let text = PromptBuilder::new("H")
            .block("### A", vec!["one".into(), "two".into()])
            .block("### B", vec![])
            .build();
        assert_eq!(text, "H\n### A\none\ntwo\n\n### B\n");
    }

    #[test]
    fn block_if_false_skips_body_construction() {
        let text = PromptBuilder::new("H")
            .block_if(false, "### Skipped", || panic!("body built"))
            .build();
        assert_eq!(text, "H");
    }

    #[test]
    fn line_opt_none_adds_nothing() {
        let text = PromptBuilder::new("H")
            .line_opt(None::<String>)
            .line_opt(Some("*desc*"))
            .build();
        assert_eq!(text, "H\n*desc*");
    }
}
