use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classroom_types::model::{ClassroomType, CreateClassroomTypeDto};
use crate::utils::errors::AppError;

pub struct ClassroomTypeService;

impl ClassroomTypeService {
    #[instrument(skip(db))]
    pub async fn create_classroom_type(
        db: &PgPool,
        dto: CreateClassroomTypeDto,
    ) -> Result<ClassroomType, AppError> {
        let name = dto.name.trim();
        if name.is_empty() {
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "name cannot be blank"
            )));
        }

        let classroom_type = sqlx::query_as::<_, ClassroomType>(
            r#"INSERT INTO classroom_types (name)
               VALUES ($1)
               RETURNING id, name, created_at, updated_at"#,
        )
        .bind(name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "A classroom type with this name already exists"
                ));
            }
            AppError::from(e)
        })?;

        Ok(classroom_type)
    }

    #[instrument(skip(db))]
    pub async fn get_classroom_types(db: &PgPool) -> Result<Vec<ClassroomType>, AppError> {
        let types = sqlx::query_as::<_, ClassroomType>(
            r#"SELECT id, name, created_at, updated_at
               FROM classroom_types
               ORDER BY name"#,
        )
        .fetch_all(db)
        .await?;

        Ok(types)
    }

    #[instrument(skip(db))]
    pub async fn get_classroom_type_by_id(
        db: &PgPool,
        id: Uuid,
    ) -> Result<ClassroomType, AppError> {
        let classroom_type = sqlx::query_as::<_, ClassroomType>(
            r#"SELECT id, name, created_at, updated_at
               FROM classroom_types
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Classroom type not found")))?;

        Ok(classroom_type)
    }

    #[instrument(skip(db))]
    pub async fn delete_classroom_type(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM classroom_types WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Classroom type not found"
            )));
        }

        Ok(())
    }
}
