use campushub_models::value_types::{Email, PhoneNumber, ValueTypeError};
use sqlx::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::modules::contact_types::model::ContactKind;
use crate::modules::teachers::model::{
    AddEmailContactDto, AddPhoneContactDto, CreateTeacherDto, EmailContact,
    PaginatedTeachersResponse, PhoneContact, Teacher, TeacherFilterParams, TeacherWithContacts,
    UpdateTeacherDto,
};
use crate::utils::errors::AppError;
use crate::utils::pagination::PaginationMeta;

pub struct TeacherService;

impl TeacherService {
    #[instrument(skip(db))]
    pub async fn create_teacher(db: &PgPool, dto: CreateTeacherDto) -> Result<Teacher, AppError> {
        let first_name = dto.first_name.trim();
        let last_name = dto.last_name.trim();
        if first_name.is_empty() || last_name.is_empty() {
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "first_name and last_name cannot be blank"
            )));
        }

        let teacher = sqlx::query_as::<_, Teacher>(
            r#"INSERT INTO teachers (first_name, last_name)
               VALUES ($1, $2)
               RETURNING id, first_name, last_name, created_at, updated_at"#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_one(db)
        .await?;

        Ok(teacher)
    }

    #[instrument(skip(db))]
    pub async fn get_teachers(
        db: &PgPool,
        filters: TeacherFilterParams,
    ) -> Result<PaginatedTeachersResponse, AppError> {
        let limit = filters.pagination.limit();
        let offset = filters.pagination.offset();
        let name_pattern = filters.name.as_ref().map(|n| format!("%{}%", n));

        let total: i64 = sqlx::query_scalar(
            r#"SELECT COUNT(*) FROM teachers
               WHERE ($1::text IS NULL OR first_name ILIKE $1 OR last_name ILIKE $1)"#,
        )
        .bind(&name_pattern)
        .fetch_one(db)
        .await?;

        let teachers = sqlx::query_as::<_, Teacher>(
            r#"SELECT id, first_name, last_name, created_at, updated_at
               FROM teachers
               WHERE ($1::text IS NULL OR first_name ILIKE $1 OR last_name ILIKE $1)
               ORDER BY last_name, first_name
               LIMIT $2 OFFSET $3"#,
        )
        .bind(&name_pattern)
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;

        let has_more = offset + limit < total;

        Ok(PaginatedTeachersResponse {
            data: teachers,
            meta: PaginationMeta {
                total,
                limit,
                offset,
                has_more,
            },
        })
    }

    #[instrument(skip(db))]
    pub async fn get_teacher_by_id(
        db: &PgPool,
        id: Uuid,
    ) -> Result<TeacherWithContacts, AppError> {
        let teacher = sqlx::query_as::<_, Teacher>(
            r#"SELECT id, first_name, last_name, created_at, updated_at
               FROM teachers
               WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        let phones = sqlx::query_as::<_, PhoneContact>(
            r#"SELECT tp.id, tp.teacher_id, tp.contact_type_id,
                      ct.name AS contact_type_name, tp.number, tp.created_at
               FROM teacher_phones tp
               JOIN contact_types ct ON ct.id = tp.contact_type_id
               WHERE tp.teacher_id = $1
               ORDER BY tp.created_at"#,
        )
        .bind(id)
        .fetch_all(db)
        .await?;

        let emails = sqlx::query_as::<_, EmailContact>(
            r#"SELECT te.id, te.teacher_id, te.contact_type_id,
                      ct.name AS contact_type_name, te.address, te.created_at
               FROM teacher_emails te
               JOIN contact_types ct ON ct.id = te.contact_type_id
               WHERE te.teacher_id = $1
               ORDER BY te.created_at"#,
        )
        .bind(id)
        .fetch_all(db)
        .await?;

        Ok(TeacherWithContacts {
            id: teacher.id,
            first_name: teacher.first_name,
            last_name: teacher.last_name,
            phones,
            emails,
            created_at: teacher.created_at,
            updated_at: teacher.updated_at,
        })
    }

    #[instrument(skip(db))]
    pub async fn update_teacher(
        db: &PgPool,
        id: Uuid,
        dto: UpdateTeacherDto,
    ) -> Result<Teacher, AppError> {
        let blank = |s: &Option<String>| s.as_deref().is_some_and(|v| v.trim().is_empty());
        if blank(&dto.first_name) || blank(&dto.last_name) {
            return Err(AppError::unprocessable(anyhow::anyhow!(
                "first_name and last_name cannot be blank"
            )));
        }

        let teacher = sqlx::query_as::<_, Teacher>(
            r#"UPDATE teachers
               SET first_name = COALESCE($2, first_name),
                   last_name = COALESCE($3, last_name),
                   updated_at = now()
               WHERE id = $1
               RETURNING id, first_name, last_name, created_at, updated_at"#,
        )
        .bind(id)
        .bind(dto.first_name.as_deref().map(str::trim))
        .bind(dto.last_name.as_deref().map(str::trim))
        .fetch_optional(db)
        .await?
        .ok_or_else(|| AppError::not_found(anyhow::anyhow!("Teacher not found")))?;

        Ok(teacher)
    }

    #[instrument(skip(db))]
    pub async fn delete_teacher(db: &PgPool, id: Uuid) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teachers WHERE id = $1")
            .bind(id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!("Teacher not found")));
        }

        Ok(())
    }

    /// Add a phone contact. The raw number goes through the normalizer and
    /// only the canonical form is stored.
    #[instrument(skip(db))]
    pub async fn add_phone(
        db: &PgPool,
        teacher_id: Uuid,
        dto: AddPhoneContactDto,
    ) -> Result<PhoneContact, AppError> {
        let number = PhoneNumber::new(dto.number).map_err(value_error_to_app_error)?;

        Self::ensure_teacher_exists(db, teacher_id).await?;
        Self::ensure_contact_type_kind(db, dto.contact_type_id, ContactKind::Phone).await?;

        let phone = sqlx::query_as::<_, PhoneContact>(
            r#"WITH inserted AS (
                   INSERT INTO teacher_phones (teacher_id, contact_type_id, number)
                   VALUES ($1, $2, $3)
                   RETURNING id, teacher_id, contact_type_id, number, created_at
               )
               SELECT i.id, i.teacher_id, i.contact_type_id,
                      ct.name AS contact_type_name, i.number, i.created_at
               FROM inserted i
               JOIN contact_types ct ON ct.id = i.contact_type_id"#,
        )
        .bind(teacher_id)
        .bind(dto.contact_type_id)
        .bind(&number)
        .fetch_one(db)
        .await?;

        Ok(phone)
    }

    #[instrument(skip(db))]
    pub async fn remove_phone(
        db: &PgPool,
        teacher_id: Uuid,
        phone_id: Uuid,
    ) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teacher_phones WHERE id = $1 AND teacher_id = $2")
            .bind(phone_id)
            .bind(teacher_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Phone contact not found"
            )));
        }

        Ok(())
    }

    #[instrument(skip(db))]
    pub async fn add_email(
        db: &PgPool,
        teacher_id: Uuid,
        dto: AddEmailContactDto,
    ) -> Result<EmailContact, AppError> {
        let address = Email::new(dto.address).map_err(value_error_to_app_error)?;

        Self::ensure_teacher_exists(db, teacher_id).await?;
        Self::ensure_contact_type_kind(db, dto.contact_type_id, ContactKind::Email).await?;

        let email = sqlx::query_as::<_, EmailContact>(
            r#"WITH inserted AS (
                   INSERT INTO teacher_emails (teacher_id, contact_type_id, address)
                   VALUES ($1, $2, $3)
                   RETURNING id, teacher_id, contact_type_id, address, created_at
               )
               SELECT i.id, i.teacher_id, i.contact_type_id,
                      ct.name AS contact_type_name, i.address, i.created_at
               FROM inserted i
               JOIN contact_types ct ON ct.id = i.contact_type_id"#,
        )
        .bind(teacher_id)
        .bind(dto.contact_type_id)
        .bind(&address)
        .fetch_one(db)
        .await?;

        Ok(email)
    }

    #[instrument(skip(db))]
    pub async fn remove_email(
        db: &PgPool,
        teacher_id: Uuid,
        email_id: Uuid,
    ) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM teacher_emails WHERE id = $1 AND teacher_id = $2")
            .bind(email_id)
            .bind(teacher_id)
            .execute(db)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(anyhow::anyhow!(
                "Email contact not found"
            )));
        }

        Ok(())
    }

    async fn ensure_teacher_exists(db: &PgPool, teacher_id: Uuid) -> Result<(), AppError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM teachers WHERE id = $1)")
                .bind(teacher_id)
                .fetch_one(db)
                .await?;

        if !exists {
            return Err(AppError::not_found(anyhow::anyhow!("Teacher not found")));
        }

        Ok(())
    }

    /// The referenced contact type must exist and be of the expected kind
    /// (a phone contact cannot carry an email classification).
    async fn ensure_contact_type_kind(
        db: &PgPool,
        contact_type_id: Uuid,
        expected: ContactKind,
    ) -> Result<(), AppError> {
        let kind: Option<String> =
            sqlx::query_scalar("SELECT kind FROM contact_types WHERE id = $1")
                .bind(contact_type_id)
                .fetch_optional(db)
                .await?;

        match kind {
            None => Err(AppError::not_found(anyhow::anyhow!(
                "Contact type not found"
            ))),
            Some(kind) if kind != expected.as_str() => Err(AppError::bad_request(
                anyhow::anyhow!("Contact type is not a {} classification", expected),
            )),
            Some(_) => Ok(()),
        }
    }
}

/// Blank input is caller misuse (422); a malformed value is user-facing
/// invalid data (400) and echoes the offending input.
fn value_error_to_app_error(err: ValueTypeError) -> AppError {
    match err {
        ValueTypeError::Blank => AppError::unprocessable(err),
        ValueTypeError::BadFormattedPhoneNumber(_) | ValueTypeError::InvalidEmail(_) => {
            AppError::bad_request(err)
        }
    }
}
