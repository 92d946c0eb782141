//! SQLite schema definitions.

/// Complete schema for the package store.
pub const SCHEMA: &str = r#"
-- Flashcard packages, one per ingested document. Questions are stored
-- as a JSON column: packages are written once and read whole.
CREATE TABLE IF NOT EXISTS packages (
    id TEXT PRIMARY KEY,
    nombre TEXT NOT NULL,
    created_at TEXT NOT NULL,
    total_questions INTEGER NOT NULL,
    questions TEXT NOT NULL,
    file_size INTEGER NOT NULL,
    page_count INTEGER NOT NULL,
    file_name TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_packages_created_at ON packages(created_at);

-- Study progress, one row per package.
CREATE TABLE IF NOT EXISTS study_progress (
    package_id TEXT PRIMARY KEY REFERENCES packages(id),
    current_index INTEGER NOT NULL DEFAULT 0,
    answer_revealed INTEGER NOT NULL DEFAULT 0,
    correct_answers TEXT NOT NULL DEFAULT '[]',
    incorrect_answers TEXT NOT NULL DEFAULT '[]',
    last_studied TEXT NOT NULL
);
"#;
