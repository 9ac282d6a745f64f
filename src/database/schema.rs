// Table definitions, applied in order at startup by DatabaseManager::migrate.

pub const STATEMENTS: &[&str] = &[
    r#"CREATE TABLE IF NOT EXISTS users (
        id            INTEGER PRIMARY KEY AUTOINCREMENT,
        username      TEXT NOT NULL UNIQUE,
        email         TEXT NOT NULL UNIQUE,
        password_hash TEXT NOT NULL,
        created_at    DATETIME NOT NULL
    )"#,
    r#"CREATE TABLE IF NOT EXISTS tasks (
        id           INTEGER PRIMARY KEY AUTOINCREMENT,
        title        TEXT NOT NULL,
        description  TEXT,
        is_completed BOOLEAN NOT NULL DEFAULT 0,
        user_id      INTEGER NOT NULL REFERENCES users(id),
        created_at   DATETIME NOT NULL,
        updated_at   DATETIME NOT NULL
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_tasks_user_id ON tasks(user_id)",
    r#"CREATE TABLE IF NOT EXISTS habits (
        id          INTEGER PRIMARY KEY AUTOINCREMENT,
        title       TEXT NOT NULL,
        description TEXT,
        is_active   BOOLEAN NOT NULL DEFAULT 1,
        user_id     INTEGER NOT NULL REFERENCES users(id),
        created_at  DATETIME NOT NULL,
        updated_at  DATETIME NOT NULL
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_habits_user_id ON habits(user_id)",
    r#"CREATE TABLE IF NOT EXISTS notes (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        title      TEXT NOT NULL,
        content    TEXT,
        user_id    INTEGER NOT NULL REFERENCES users(id),
        created_at DATETIME NOT NULL,
        updated_at DATETIME NOT NULL
    )"#,
    "CREATE INDEX IF NOT EXISTS idx_notes_user_id ON notes(user_id)",
];
