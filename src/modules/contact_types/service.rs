use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::contact_types::model::{
    ContactType, ContactTypeFilterParams, CreateContactTypeDto,
};
use crate::utils::errors::AppError;

pub struct ContactTypeService;

impl ContactTypeService {
    #[instrument(skip(db))]
    pub async fn create_contact_type(
        db: &PgPool,
        dto: CreateContactTypeDto,
    ) -> Result<ContactType, AppError> {
        let name = dto.name.trim();
        if name.is_empty() {
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "name cannot be blank"
            )));
        }

        let contact_type = sqlx::query_as::<_, ContactType>(
            r#"INSERT INTO contact_types (kind, name)
               VALUES ($1, $2)
               RETURNING id, kind, name, created_at, updated_at"#,
        )
        .bind(dto.kind.as_str())
        .bind(name)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "A {} contact type with this name already exists",
                    dto.kind
                ));
            }
            AppError::from(e)
        })?;

        Ok(contact_type)
    }

    #[instrument(skip(db))]
    pub async fn get_contact_types(
        db: &PgPool,
        filters: ContactTypeFilterParams,
    ) -> Result<Vec<ContactType>, AppError> {
        let types = match filters.kind {
            Some(kind) => {
                sqlx::query_as::<_, ContactType>(
                    r#"SELECT id, kind, name, created_at, updated_at
                       FROM contact_types
                       WHERE kind = $1
                       ORDER BY name"#,
                )
                .bind(kind.as_str())
                .fetch_all(db)
                .await?
            }
            None => {
                sqlx::query_as::<_, ContactType>(
                    r#"SELECT id, kind, name, created_at, updated_at
                       FROM contact_types
                       ORDER BY kind, name"#,
                )
                .fetch_all(db)
                .await?
            }
        };

        Ok(types)
    }

    #[instrument(skip(db))]
    pub async fn get_contact_type_by_id(db: &PgPool, id: Uuid) -> Result<ContactType, AppError> {
        let contact_type = sqlx::query_as::<_, ContactType>(
            r#"SELECT id, kind, name, created_at, updated_at
               FROM contact_types
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Contact type not found")))?;

        Ok(contact_type)
    }

    #[instrument(skip(db))]
    pub async fn delete_contact_type(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM contact_types WHERE id = $1")
            .bind(id)
            .execute(db)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e
                    && db_err.is_foreign_key_violation()
                {
                    return AppError::bad_request(anyhow::anyhow!(
                        "Contact type is still referenced by teacher contacts"
                    ));
                }
                AppError::from(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Contact type not found"
            )));
        }

        Ok(())
    }
}
