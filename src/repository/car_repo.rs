use sqlx::PgPool;

use crate::models::{Car, CarRow, ModelSearchResult};

const CAR_COLUMNS: &str = "id, make, brand, model, year, production_from_year, to_year, \
     body_type, body_style, segment, cylinders, displacement, power, torque, \
     fuel_system, fuel, fuel_capacity, top_speed, drive_type, title, description, \
     engine_speed, image_url";

/// Read-only access to the `cars` table. Records are created by the bulk
/// import process and never mutated here.
#[derive(Clone)]
pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {CAR_COLUMNS} FROM cars WHERE id = $1");
        let row = sqlx::query_as::<_, CarRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Car::from))
    }

    /// Resolve a guess string to a record: case-insensitive exact match
    /// on model. Multiple trims can share a model name; the first row
    /// wins, same as the original game.
    pub async fn find_by_model(&self, model: &str) -> Result<Option<Car>, sqlx::Error> {
        let query = format!("SELECT {CAR_COLUMNS} FROM cars WHERE LOWER(model) = LOWER($1) LIMIT 1");
        let row = sqlx::query_as::<_, CarRow>(&query)
            .bind(model)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row.map(Car::from))
    }

    /// Substring search over model and brand for the autocomplete box.
    pub async fn search_models(&self, query: &str) -> Result<Vec<ModelSearchResult>, sqlx::Error> {
        let rows: Vec<(Option<String>, String)> = sqlx::query_as(
            "SELECT DISTINCT COALESCE(brand, make) AS brand, model
             FROM cars
             WHERE LOWER(model) LIKE LOWER($1) OR LOWER(brand) LIKE LOWER($1)
             ORDER BY brand, model",
        )
        .bind(format!("%{query}%"))
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(brand, model)| ModelSearchResult {
                display: match &brand {
                    Some(brand) => format!("{brand} {model}"),
                    None => model.clone(),
                },
                model,
            })
            .collect())
    }

    /// Uniform random pick over the whole table.
    pub async fn random_id(&self) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar("SELECT id FROM cars ORDER BY RANDOM() LIMIT 1")
            .fetch_optional(&self.pool)
            .await
    }

    /// Random pick restricted to records with enough data to make a fair
    /// puzzle (used by the rotation job; falls back to [`random_id`]).
    ///
    /// [`random_id`]: CarRepository::random_id
    pub async fn random_complete_id(&self) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar(
            "SELECT id
             FROM cars
             WHERE segment IS NOT NULL
               AND drive_type IS NOT NULL
               AND (displacement IS NOT NULL OR cylinders IS NOT NULL)
             ORDER BY RANDOM()
             LIMIT 1",
        )
        .fetch_optional(&self.pool)
        .await
    }

    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM cars")
            .fetch_one(&self.pool)
            .await
    }
}
