use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::classroom_types::model::ClassroomType;
use crate::modules::classrooms::model::{
    Classroom, ClassroomFilterParams, ClassroomWithDetails, CreateClassroomDto,
    PaginatedClassroomsResponse, RoomEquipment, UpdateClassroomDto,
};
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

pub struct ClassroomService;

impl ClassroomService {
    #[instrument(skip(db))]
    pub async fn create_classroom(
        db: &PgPool,
        dto: CreateClassroomDto,
    ) -> Result<ClassroomWithDetails, AppError> {
        let name = dto.name.trim();
        if name.is_empty() {
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "name cannot be blank"
            )));
        }

        // Every referenced classroom type must exist before anything is written
        let known: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM classroom_types WHERE id = ANY($1)",
        )
        .bind(&dto.type_ids)
        .fetch_one(db)
        .await?;
        if known != dto.type_ids.len() as i64 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "One or more classroom types do not exist"
            )));
        }

        let mut tx = db.begin().await?;

        let classroom = sqlx::query_as::<_, Classroom>(
            r#"INSERT INTO classrooms (name, capacity)
               VALUES ($1, $2)
               RETURNING id, name, capacity, created_at, updated_at"#,
        )
        .bind(name)
        .bind(dto.capacity)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "A classroom with this name already exists"
                ));
            }
            AppError::from(e)
        })?;

        sqlx::query(
            r#"INSERT INTO classroom_classroom_types (classroom_id, classroom_type_id)
               SELECT $1, unnest($2::uuid[])
               ON CONFLICT DO NOTHING"#,
        )
        .bind(classroom.id)
        .bind(&dto.type_ids)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;

        Self::get_classroom_by_id(db, classroom.id).await
    }

    #[instrument(skip(db))]
    pub async fn get_classrooms(
        db: &PgPool,
        filters: ClassroomFilterParams,
    ) -> Result<PaginatedClassroomsResponse, AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();
        let name_pattern = filters.name.as_ref().map(|n| format!("%{}%", n));

        let total: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM classrooms
               WHERE ($1::text IS NULL OR name ILIKE $1)"#,
        )
        .bind(&name_pattern)
        .fetch_one(db)
        .await?;

        let classrooms = sqlx::query_as::<_, Classroom>(
            r#"SELECT id, name, capacity, created_at, updated_at
               FROM classrooms
               WHERE ($1::text IS NULL OR name ILIKE $1)
               ORDER BY name
               LIMIT $2 OFFSET $3"#,
        )
        .bind(&name_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;

        let has_more = offset + limit < total;

        Ok(PaginatedClassroomsResponse {
            data: classrooms,
            meta: PaginationMeta {
                total,
                limit,
                offset,
                has_more,
            },
        })
    }

    #[instrument(skip(db))]
    pub async fn get_classroom_by_id(
        db: &PgPool,
        id: Uuid,
    ) -> Result<ClassroomWithDetails, AppError> {
        let classroom = sqlx::query_as::<_, Classroom>(
            r#"SELECT id, name, capacity, created_at, updated_at
               FROM classrooms
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Classroom not found")))?;

        let types = sqlx::query_as::<_, ClassroomType>(
            r#"SELECT ct.id, ct.name, ct.created_at, ct.updated_at
               FROM classroom_types ct
               JOIN classroom_classroom_types cct ON cct.classroom_type_id = ct.id
               WHERE cct.classroom_id = $1
               ORDER BY ct.name"#,
        )
        .bind(id)
        .fetch_all(db)
        .await?;

        let equipments = Self::get_room_equipments(db, id).await?;

        Ok(ClassroomWithDetails {
            id: classroom.id,
            name: classroom.name,
            capacity: classroom.capacity,
            types,
            equipments,
            created_at: classroom.created_at,
            updated_at: classroom.updated_at,
        })
    }

    #[instrument(skip(db))]
    pub async fn update_classroom(
        db: &PgPool,
        id: Uuid,
        dto: UpdateClassroomDto,
    ) -> Result<Classroom, AppError> {
        if let Some(name) = &dto.name
            && name.trim().is_empty()
        {
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "name cannot be blank"
            )));
        }

        let classroom = sqlx::query_as::<_, Classroom>(
            r#"UPDATE classrooms
               SET name = COALESCE($2, name),
                   capacity = COALESCE($3, capacity),
                   updated_at = now()
               WHERE id = $1
               RETURNING id, name, capacity, created_at, updated_at"#,
        )
        .bind(id)
        .bind(dto.name.as_deref().map(str::trim))
        .bind(dto.capacity)
        .fetch_optional(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "A classroom with this name already exists"
                ));
            }
            AppError::from(e)
        })?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Classroom not found")))?;

        Ok(classroom)
    }

    #[instrument(skip(db))]
    pub async fn delete_classroom(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM classrooms WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Classroom not found")));
        }

        Ok(())
    }

    /// Assign an equipment type to a room. A given equipment type can be
    /// assigned to a room at most once; quantity changes go through
    /// remove-and-reassign.
    #[instrument(skip(db))]
    pub async fn assign_equipment(
        db: &PgPool,
        classroom_id: Uuid,
        equipment_type_id: Uuid,
        quantity: i32,
    ) -> Result<RoomEquipment, AppError> {
        if quantity <= 0 {
            return Err(AppError::bad_request(anyhow::anyhow!(
                "quantity must be positive"
            )));
        }

        let classroom_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM classrooms WHERE id = $1)")
                .bind(classroom_id)
                .fetch_one(db)
                .await?;
        if !classroom_exists {
            return Err(AppError::not_found(anyhow::anyhow!("Classroom not found")));
        }

        let equipment_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM equipment_types WHERE id = $1)")
                .bind(equipment_type_id)
                .fetch_one(db)
                .await?;
        if !equipment_exists {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Equipment type not found"
            )));
        }

        let room_equipment = sqlx::query_as::<_, RoomEquipment>(
            r#"WITH inserted AS (
                   INSERT INTO room_equipments (classroom_id, equipment_type_id, quantity)
                   VALUES ($1, $2, $3)
                   RETURNING id, classroom_id, equipment_type_id, quantity, created_at
               )
               SELECT i.id, i.classroom_id, i.equipment_type_id,
                      et.name AS equipment_type_name, i.quantity, i.created_at
               FROM inserted i
               JOIN equipment_types et ON et.id = i.equipment_type_id"#,
        )
        .bind(classroom_id)
        .bind(equipment_type_id)
        .bind(quantity)
        .fetch_one(db)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(db_err) = &e
                && db_err.is_unique_violation()
            {
                return AppError::bad_request(anyhow::anyhow!(
                    "This equipment type is already assigned to the classroom"
                ));
            }
            AppError::from(e)
        })?;

        Ok(room_equipment)
    }

    #[instrument(skip(db))]
    pub async fn remove_equipment(
        db: &PgPool,
        classroom_id: Uuid,
        equipment_type_id: Uuid,
    ) -> Result<(), AppError> {
        let result = sqlx::query(
            "DELETE FROM room_equipments WHERE classroom_id = $1 AND equipment_type_id = $2",
        )
        .bind(classroom_id)
        .bind(equipment_type_id)
        .execute(db)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Equipment is not assigned to this classroom"
            )));
        }

        Ok(())
    }

    async fn get_room_equipments(
        db: &PgPool,
        classroom_id: Uuid,
    ) -> Result<Vec<RoomEquipment>, AppError> {
        let equipments = sqlx::query_as::<_, RoomEquipment>(
            r#"SELECT re.id, re.classroom_id, re.equipment_type_id,
                      et.name AS equipment_type_name, re.quantity, re.created_at
               FROM room_equipments re
               JOIN equipment_types et ON et.id = re.equipment_type_id
               WHERE re.classroom_id = $1
               ORDER BY et.name"#,
        )
        .bind(classroom_id)
        .fetch_all(db)
        .await?;

        Ok(equipments)
    }
}
