//! SQL DDL for the students table. Applied on every startup.

/// `CREATE ... IF NOT EXISTS`, so re-applying against an existing file is a no-op.
pub const SQLITE_INIT: &str = r#"
CREATE TABLE IF NOT EXISTS students (
    id INTEGER PRIMARY KEY NOT NULL,
    name TEXT NOT NULL,
    dept TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    year INTEGER NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_students_dept_year ON students(dept, year);
"#;
