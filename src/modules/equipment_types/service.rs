use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::equipment_types::model::{
    CreateEquipmentTypeDto, EquipmentType, UpdateEquipmentTypeDto,
};
use crate::utils::errors::AppError;

pub struct EquipmentTypeService;

impl EquipmentTypeService {
    #[instrument(skip(db))]
    pub async fn create_equipment_type(
        db: &PgPool,
        dto: CreateEquipmentTypeDto,
    ) -> Result<EquipmentType, AppError> {
        let name = dto.name.trim();
        if name.is_empty() {
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "name cannot be blank"
            )));
        }

        let equipment_type = sqlx::query_as::<_, EquipmentType>(
            r#"INSERT INTO equipment_types (name)
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
                    "An equipment type with this name already exists"
                ));
            }
            AppError::from(e)
        })?;

        Ok(equipment_type)
    }

    #[instrument(skip(db))]
    pub async fn get_equipment_types(db: &PgPool) -> Result<Vec<EquipmentType>, AppError> {
        let types = sqlx::query_as::<_, EquipmentType>(
            r#"SELECT id, name, created_at, updated_at
               FROM equipment_types
               ORDER BY name"#,
        )
        .fetch_all(db)
        .await?;

        Ok(types)
    }

    #[instrument(skip(db))]
    pub async fn get_equipment_type_by_id(
        db: &PgPool,
        id: Uuid,
    ) -> Result<EquipmentType, AppError> {
        let equipment_type = sqlx::query_as::<_, EquipmentType>(
            r#"SELECT id, name, created_at, updated_at
               FROM equipment_types
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Equipment type not found")))?;

        Ok(equipment_type)
    }

    #[instrument(skip(db))]
    pub async fn update_equipment_type(
        db: &PgPool,
        id: Uuid,
        dto: UpdateEquipmentTypeDto,
    ) -> Result<EquipmentType, AppError> {
        let name = dto.name.trim();
        if name.is_empty() {
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "name cannot be blank"
            )));
        }

        let equipment_type = sqlx::query_as::<_, EquipmentType>(
            r#"UPDATE equipment_types
               SET name = $2, updated_at = now()
               WHERE id = $1
               RETURNING id, name, created_at, updated_at"#,
        )
        .bind(id)
        .bind(name)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "An equipment type with this name already exists"
                ));
            }
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Equipment type not found")))?;

        Ok(equipment_type)
    }

    #[instrument(skip(db))]
    pub async fn delete_equipment_type(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM equipment_types WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Equipment type not found"
            )));
        }

        Ok(())
    }
}
