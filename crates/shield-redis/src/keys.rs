//! Key layout.
//!
//! ```text
//! {prefix}:classes          SET   registered class names
//! {prefix}:sum              HASH  class -> total
//! {prefix}:class:{class}    HASH  word  -> count
//! ```

/// The keys one store instance owns, all under a common prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpace {
    prefix: String,
}

impl KeySpace {
    pub fn new(prefix: &str) -> Self {
        Self {
            prefix: prefix.to_string(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Set of registered classes.
    pub fn classes(&self) -> String {
        format!("{}:classes", self.prefix)
    }

    /// Hash of class totals.
    pub fn sum(&self) -> String {
        format!("{}:sum", self.prefix)
    }

    /// Common prefix of every per-class count hash.
    pub fn class_prefix(&self) -> String {
        format!("{}:class:", self.prefix)
    }

    /// Hash of word counts for `class`.
    pub fn class(&self, class: &str) -> String {
        format!("{}:class:{}", self.prefix, class)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout() {
        let keys = KeySpace::new("shield");
        assert_eq!(keys.classes(), "shield:classes");
        assert_eq!(keys.sum(), "shield:sum");
        assert_eq!(keys.class("good"), "shield:class:good");
        assert_eq!(keys.class_prefix() + "good", keys.class("good"));
    }

    #[test]
    fn prefixes_do_not_collide() {
        let a = KeySpace::new("app1");
        let b = KeySpace::new("app2");
        assert_ne!(a.sum(), b.sum());
        assert_ne!(a.class("x"), b.class("x"));
    }
}
