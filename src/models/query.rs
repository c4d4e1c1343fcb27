//! Builder for strings in the arXiv query language.

/// Builds a `search_query` value such as `au:Einstein AND cat:physics.gen-ph`.
///
/// Terms are joined with `AND` in the order they were added. Values containing
/// whitespace are quoted so the API treats them as a phrase.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryBuilder {
    parts: Vec<String>,
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Match against all fields
    pub fn all(self, value: &str) -> Self {
        self.term("all", value)
    }

    /// Match the title
    pub fn title(self, value: &str) -> Self {
        self.term("ti", value)
    }

    /// Match an author name
    pub fn author(self, value: &str) -> Self {
        self.term("au", value)
    }

    /// Match the abstract
    pub fn abstract_text(self, value: &str) -> Self {
        self.term("abs", value)
    }

    /// Restrict to a subject category, e.g. `cs.CL`
    pub fn category(self, value: &str) -> Self {
        self.term("cat", value)
    }

    /// Match an arXiv identifier
    pub fn id(self, value: &str) -> Self {
        self.term("id", value)
    }

    /// Add an arbitrary `field:value` term
    pub fn term(mut self, field: &str, value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            return self;
        }
        if value.chars().any(char::is_whitespace) {
            self.parts.push(format!("{}:\"{}\"", field, value));
        } else {
            self.parts.push(format!("{}:{}", field, value));
        }
        self
    }

    pub fn build(&self) -> String {
        if self.parts.is_empty() {
            "all:*".to_string()
        } else {
            self.parts.join(" AND ")
        }
    }
}
