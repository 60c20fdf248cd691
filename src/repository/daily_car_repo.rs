use chrono::NaiveDate;
use sqlx::PgPool;

/// Access to the `daily_cars` table: one row per calendar date, pointing
/// at the car everyone guesses against that day. The UNIQUE constraint on
/// `date` is what keeps concurrent first-of-the-day requests from seating
/// two different cars.
#[derive(Clone)]
pub struct DailyCarRepository {
    pool: PgPool,
}

impl DailyCarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn find_car_id_for_date(&self, date: NaiveDate) -> Result<Option<i32>, sqlx::Error> {
        sqlx::query_scalar("SELECT car_id FROM daily_cars WHERE date = $1")
            .bind(date)
            .fetch_optional(&self.pool)
            .await
    }

    pub async fn exists_for_date(&self, date: NaiveDate) -> Result<bool, sqlx::Error> {
        let exists: Option<bool> =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM daily_cars WHERE date = $1)")
                .bind(date)
                .fetch_optional(&self.pool)
                .await?;
        Ok(exists.unwrap_or(false))
    }

    /// Insert the selection for a date. Fails with a unique violation if
    /// another request seated a car for the same date first; callers
    /// detect that with [`check_duplicate_error`] and re-read.
    ///
    /// [`check_duplicate_error`]: DailyCarRepository::check_duplicate_error
    pub async fn insert(&self, car_id: i32, date: NaiveDate) -> Result<(), sqlx::Error> {
        sqlx::query("INSERT INTO daily_cars (car_id, date) VALUES ($1, $2)")
            .bind(car_id)
            .bind(date)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Clear a date's selection so it can be re-rolled (admin re-roll and
    /// the midnight rotation job).
    pub async fn delete_for_date(&self, date: NaiveDate) -> Result<(), sqlx::Error> {
        sqlx::query("DELETE FROM daily_cars WHERE date = $1")
            .bind(date)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub fn check_duplicate_error(err: &sqlx::Error) -> Option<String> {
        if let sqlx::Error::Database(db_err) = err {
            // 23505 = unique_violation
            if db_err.code().as_deref() == Some("23505") {
                return Some(db_err.message().to_string());
            }
        }
        None
    }
}
