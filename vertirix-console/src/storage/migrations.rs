use rusqlite::Connection;

/// Run all database migrations
pub fn run_migrations(conn: &Connection) -> anyhow::Result<()> {
    // Create contact_lists table; each row holds the full list as JSON
    conn.execute(
        "CREATE TABLE IF NOT EXISTS contact_lists (
            id VARCHAR PRIMARY KEY,
            user_id VARCHAR NOT NULL,
            name VARCHAR NOT NULL,
            payload VARCHAR NOT NULL,
            created_at BIGINT NOT NULL,
            updated_at BIGINT NOT NULL
        )",
        [],
    )?;

    conn.execute(
        "CREATE INDEX IF NOT EXISTS idx_contact_lists_user_id ON contact_lists (user_id)",
        [],
    )?;

    Ok(())
}
