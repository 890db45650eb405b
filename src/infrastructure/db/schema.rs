use sqlx::SqlitePool;
use tracing::{error, info};

/// Table definitions, one statement per entity. Column names, types and
/// defaults match databases created by earlier releases so existing files
/// open unchanged.
const SCHEMA: [(&str, &str); 6] = [
    (
        "projects",
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            description TEXT,
            technologies TEXT,
            image_url TEXT,
            project_url TEXT,
            github_url TEXT,
            category TEXT,
            featured BOOLEAN DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "skills",
        r#"
        CREATE TABLE IF NOT EXISTS skills (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            category TEXT,
            proficiency INTEGER,
            icon TEXT
        )
        "#,
    ),
    (
        "certifications",
        r#"
        CREATE TABLE IF NOT EXISTS certifications (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            issuer TEXT,
            date_obtained DATE,
            credential_id TEXT,
            credential_url TEXT,
            image_url TEXT
        )
        "#,
    ),
    (
        "blog_posts",
        r#"
        CREATE TABLE IF NOT EXISTS blog_posts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            title TEXT NOT NULL,
            slug TEXT UNIQUE,
            content TEXT,
            excerpt TEXT,
            author TEXT,
            tags TEXT,
            published BOOLEAN DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP,
            updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "contact_messages",
        r#"
        CREATE TABLE IF NOT EXISTS contact_messages (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            email TEXT NOT NULL,
            subject TEXT,
            message TEXT NOT NULL,
            read BOOLEAN DEFAULT 0,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
    (
        "admin_users",
        r#"
        CREATE TABLE IF NOT EXISTS admin_users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT UNIQUE NOT NULL,
            password_hash TEXT NOT NULL,
            email TEXT,
            created_at DATETIME DEFAULT CURRENT_TIMESTAMP
        )
        "#,
    ),
];

/// Creates any missing tables. Safe to run on every start: existing tables
/// and their rows are left untouched.
pub async fn init_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    for (table, ddl) in SCHEMA {
        sqlx::query(ddl).execute(pool).await.map_err(|e| {
            error!("Failed to create table {}: {}", table, e);
            e
        })?;
    }

    info!("Database tables initialized");
    Ok(())
}

/// Names of the tables managed by [`init_schema`].
pub fn table_names() -> impl Iterator<Item = &'static str> {
    SCHEMA.iter().map(|(table, _)| *table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::create_pool;

    async fn existing_tables(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name NOT LIKE 'sqlite_%' ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn creates_all_tables() {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();
        init_schema(&pool).await.unwrap();

        let mut expected: Vec<String> = table_names().map(String::from).collect();
        expected.sort();
        assert_eq!(existing_tables(&pool).await, expected);
    }

    #[tokio::test]
    async fn rerunning_keeps_existing_rows() {
        let pool = create_pool("sqlite::memory:", 1).await.unwrap();
        init_schema(&pool).await.unwrap();

        sqlx::query("INSERT INTO skills (name, proficiency) VALUES ('Rust', 90)")
            .execute(&pool)
            .await
            .unwrap();

        init_schema(&pool).await.unwrap();

        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM skills")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(count, 1);
    }
}
