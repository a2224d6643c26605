//! Student group entity (database row mapping).

use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct StudentGroupEntity {
    pub id: i32,
    pub name: String,
}

impl From<StudentGroupEntity> for domain::models::StudentGroup {
    fn from(entity: StudentGroupEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}
