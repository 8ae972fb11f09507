//! Block assembly shared by every makefile serializer.
//!
//! A makefile is a list of independent blocks joined by one blank line and
//! terminated by exactly one newline. The provenance header is always the
//! first block.

pub const MAKEFILE_HEADER: &str = "# Generated by vendorgen; do not edit";

/// Joins the items of a continuation block.
pub const CONT_SEPARATOR: &str = " \\\n    ";

/// Accumulates makefile blocks and renders them once.
#[derive(Debug, Clone)]
pub struct Blocks {
    blocks: Vec<String>,
}

impl Blocks {
    pub fn new() -> Self {
        Self {
            blocks: vec![MAKEFILE_HEADER.to_string()],
        }
    }

    pub fn push(&mut self, block: impl Into<String>) {
        self.blocks.push(block.into());
    }

    /// Push `VARIABLE += \` followed by the items, one per line.
    ///
    /// Nothing is pushed for an empty list.
    pub fn push_list<S: AsRef<str>>(&mut self, variable: &str, items: &[S]) {
        if let Some(block) = cont_block(variable, items) {
            self.blocks.push(block);
        }
    }

    /// [`Blocks::push_list`] for optional model fields.
    pub fn push_opt_list<S: AsRef<str>>(&mut self, variable: &str, items: Option<&[S]>) {
        if let Some(items) = items {
            self.push_list(variable, items);
        }
    }

    pub fn finish(self) -> String {
        let mut out = self.blocks.join("\n\n");
        let len = out.trim_end_matches('\n').len();
        out.truncate(len);
        out.push('\n');
        out
    }
}

impl Default for Blocks {
    fn default() -> Self {
        Self::new()
    }
}

/// Render a continuation block, or `None` for an empty list.
pub fn cont_block<S: AsRef<str>>(variable: &str, items: &[S]) -> Option<String> {
    if items.is_empty() {
        return None;
    }
    Some(format!("{} += \\\n    {}", variable, join_cont(items)))
}

/// Join items with the continuation separator.
pub fn join_cont<S: AsRef<str>>(items: &[S]) -> String {
    items
        .iter()
        .map(|item| item.as_ref())
        .collect::<Vec<_>>()
        .join(CONT_SEPARATOR)
}
