//! Ordered class-list assembly.

use std::borrow::Cow;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Space-joined class list built from fragments in order.
///
/// Empty and whitespace-only fragments are dropped. Caller classes are appended last so they
/// can override computed utilities.
pub struct ClassList {
    parts: Vec<Cow<'static, str>>,
}

impl ClassList {
    /// Starts an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a static fragment.
    pub fn with(mut self, fragment: &'static str) -> Self {
        if !fragment.trim().is_empty() {
            self.parts.push(Cow::Borrowed(fragment));
        }
        self
    }

    /// Appends a static fragment when `condition` holds.
    pub fn with_if(self, condition: bool, fragment: &'static str) -> Self {
        if condition {
            self.with(fragment)
        } else {
            self
        }
    }

    /// Appends caller-supplied classes.
    pub fn with_caller(mut self, classes: Option<&str>) -> Self {
        if let Some(classes) = classes.map(str::trim).filter(|classes| !classes.is_empty()) {
            self.parts.push(Cow::Owned(classes.to_string()));
        }
        self
    }

    /// Joins the fragments with single spaces.
    pub fn build(&self) -> String {
        self.parts.join(" ")
    }
}

/// Joins a base class string with optional caller classes.
pub fn merge_classes(base: &'static str, classes: Option<&str>) -> String {
    ClassList::new().with(base).with_caller(classes).build()
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
