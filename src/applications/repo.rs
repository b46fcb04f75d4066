use sqlx::PgPool;
use uuid::Uuid;

use crate::applications::dto::NewApplication;
use crate::applications::repo_types::Application;

impl Application {
    pub async fn insert(db: &PgPool, new: &NewApplication) -> anyhow::Result<Application> {
        let application = sqlx::query_as::<_, Application>(
            r#"
            INSERT INTO applications
                (full_name, phone_number, email, cdl_license, state,
                 driving_experience, truck_types, long_haul_trips, comments)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
            RETURNING id, full_name, phone_number, email, cdl_license, state,
                      driving_experience, truck_types, long_haul_trips, comments,
                      archived, created_at, updated_at
            "#,
        )
        .bind(&new.full_name)
        .bind(&new.phone_number)
        .bind(&new.email)
        .bind(&new.cdl_license)
        .bind(&new.state)
        .bind(&new.driving_experience)
        .bind(&new.truck_types)
        .bind(&new.long_haul_trips)
        .bind(&new.comments)
        .fetch_one(db)
        .await?;
        Ok(application)
    }

    pub async fn find_by_id(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Application>> {
        let application = sqlx::query_as::<_, Application>(
            r#"
            SELECT id, full_name, phone_number, email, cdl_license, state,
                   driving_experience, truck_types, long_haul_trips, comments,
                   archived, created_at, updated_at
            FROM applications
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(application)
    }

    pub async fn count(db: &PgPool) -> anyhow::Result<i64> {
        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM applications")
            .fetch_one(db)
            .await?;
        Ok(total)
    }

    /// One page of records in insertion order.
    pub async fn list_page(
        db: &PgPool,
        limit: i64,
        offset: i64,
    ) -> anyhow::Result<Vec<Application>> {
        let rows = sqlx::query_as::<_, Application>(
            r#"
            SELECT id, full_name, phone_number, email, cdl_license, state,
                   driving_experience, truck_types, long_haul_trips, comments,
                   archived, created_at, updated_at
            FROM applications
            ORDER BY created_at ASC
            LIMIT $1 OFFSET $2
            "#,
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(db)
        .await?;
        Ok(rows)
    }

    /// Flip the archived flag. Returns `None` when no record matches.
    pub async fn toggle_archived(db: &PgPool, id: Uuid) -> anyhow::Result<Option<Application>> {
        let application = sqlx::query_as::<_, Application>(
            r#"
            UPDATE applications
            SET archived = NOT archived, updated_at = now()
            WHERE id = $1
            RETURNING id, full_name, phone_number, email, cdl_license, state,
                      driving_experience, truck_types, long_haul_trips, comments,
                      archived, created_at, updated_at
            "#,
        )
        .bind(id)
        .fetch_optional(db)
        .await?;
        Ok(application)
    }
}
