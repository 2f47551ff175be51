//! V001: Initial schema: classes with totals, per-class word counts.

pub const MIGRATION_SQL: &str = r#"
-- One row per registered class. `total` is the maintained ClassTotal:
-- it moves in the same transaction as every word_counts change.
CREATE TABLE IF NOT EXISTS classes (
    name TEXT PRIMARY KEY CHECK (length(name) > 0),
    total INTEGER NOT NULL DEFAULT 0 CHECK (total >= 0)
) STRICT;

-- Learned occurrences of a word within a class. The foreign key means a
-- count can never exist for an unregistered class.
CREATE TABLE IF NOT EXISTS word_counts (
    class TEXT NOT NULL REFERENCES classes(name) ON DELETE CASCADE,
    word TEXT NOT NULL,
    count INTEGER NOT NULL CHECK (count >= 0),
    PRIMARY KEY (class, word)
) STRICT, WITHOUT ROWID;
"#;
