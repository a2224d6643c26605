//! Student group repository.

use sqlx::PgPool;

use crate::entities::StudentGroupEntity;
use crate::metrics::QueryTimer;

/// Read-only access to the seeded student groups.
#[derive(Clone)]
pub struct GroupRepository {
    pool: PgPool,
}

impl GroupRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Lists all groups ordered by name.
    pub async fn list_all(&self) -> Result<Vec<StudentGroupEntity>, sqlx::Error> {
        let timer = QueryTimer::new("list_student_groups");
        let result = sqlx::query_as::<_, StudentGroupEntity>(
            "SELECT id, name FROM student_groups ORDER BY name",
        )
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }

    pub async fn exists(&self, name: &str) -> Result<bool, sqlx::Error> {
        let timer = QueryTimer::new("student_group_exists");
        let result = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS (SELECT 1 FROM student_groups WHERE name = $1)",
        )
        .bind(name)
        .fetch_one(&self.pool)
        .await;
        timer.record();
        result
    }
}
