use sqlx::SqlitePool;

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxSkillRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxCertificationRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxBlogPostRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxContactMessageRepo {
    pub pool: SqlitePool,
}

#[derive(Clone)]
pub struct SqlxAdminUserRepo {
    pub pool: SqlitePool,
}

/// Round-trips a trivial query to confirm the database is reachable.
pub async fn check_connection(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

#[cfg(test)]
pub(crate) async fn test_pool() -> SqlitePool {
    let pool = crate::db::sqlite::create_pool("sqlite::memory:", 1)
        .await
        .expect("Failed to open in-memory database");
    crate::db::schema::init_schema(&pool)
        .await
        .expect("Failed to initialize schema");
    pool
}
