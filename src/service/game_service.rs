use anyhow::Context;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::PgPool;

use crate::constants::API_NAME;
use crate::models::{Car, GuessReport, ModelSearchResult};
use crate::repository::{CarRepository, DailyCarRepository};
use crate::service::comparison;

/// Orchestrates the game: resolves guesses, seats the daily car, and
/// hands record pairs to the comparison function.
#[derive(Clone)]
pub struct GameService {
    car_repo: CarRepository,
    daily_car_repo: DailyCarRepository,
    pool: PgPool,
}

impl GameService {
    pub fn new(pool: PgPool) -> Self {
        Self {
            car_repo: CarRepository::new(pool.clone()),
            daily_car_repo: DailyCarRepository::new(pool.clone()),
            pool,
        }
    }

    /// Resolve a guessed model name and score it against today's car.
    pub async fn process_guess(&self, model: &str) -> anyhow::Result<GuessReport> {
        let target = self.todays_car().await?;

        let guessed = self
            .car_repo
            .find_by_model(model)
            .await
            .context("Failed to look up guessed model")?;

        let Some(guessed) = guessed else {
            tracing::info!("{} Guess did not match any known model: {}", API_NAME, model);
            return Ok(GuessReport::not_found());
        };

        let report = comparison::compare(&guessed, &target);
        tracing::info!(
            "{} Scored guess {} against daily car {}: correct={}",
            API_NAME,
            guessed.id,
            target.id,
            report.is_correct
        );
        Ok(report)
    }

    /// Fetch today's car, seating one lazily on the first request of a
    /// new day. A concurrent first request can win the insert race; the
    /// unique constraint on the date column surfaces that as a duplicate
    /// error and we re-read the row that won.
    pub async fn todays_car(&self) -> anyhow::Result<Car> {
        let today = Utc::now().date_naive();

        let car_id = match self
            .daily_car_repo
            .find_car_id_for_date(today)
            .await
            .context("Failed to read daily car selection")?
        {
            Some(id) => id,
            None => self.seat_daily_car(today).await?,
        };

        self.car_repo
            .find_by_id(car_id)
            .await
            .context("Failed to load daily car record")?
            .with_context(|| format!("Daily car {car_id} is missing from the cars table"))
    }

    async fn seat_daily_car(&self, date: NaiveDate) -> anyhow::Result<i32> {
        let car_id = self
            .car_repo
            .random_id()
            .await
            .context("Failed to pick a random car")?
            .context("No cars available in the database")?;

        match self.daily_car_repo.insert(car_id, date).await {
            Ok(()) => {
                tracing::info!("{} Seated daily car {} for {}", API_NAME, car_id, date);
                Ok(car_id)
            }
            Err(e) if DailyCarRepository::check_duplicate_error(&e).is_some() => {
                // Another request seated a car for this date first.
                self.daily_car_repo
                    .find_car_id_for_date(date)
                    .await
                    .context("Failed to re-read daily car after insert race")?
                    .context("Daily car row vanished after insert race")
            }
            Err(e) => Err(e).context("Failed to insert daily car selection"),
        }
    }

    /// Replace today's selection with a fresh pick, preferring records
    /// with enough attribute data to make a fair puzzle. Used by the
    /// midnight rotation job and the administrative re-roll.
    pub async fn rotate_daily_car(&self) -> anyhow::Result<i32> {
        let car_id = match self
            .car_repo
            .random_complete_id()
            .await
            .context("Failed to pick a car with complete data")?
        {
            Some(id) => id,
            None => {
                tracing::warn!("{} No cars with complete data, using any car", API_NAME);
                self.car_repo
                    .random_id()
                    .await
                    .context("Failed to pick a random car")?
                    .context("No cars available in the database")?
            }
        };

        let today = Utc::now().date_naive();
        self.daily_car_repo
            .delete_for_date(today)
            .await
            .context("Failed to clear today's daily car")?;
        self.daily_car_repo
            .insert(car_id, today)
            .await
            .context("Failed to insert rotated daily car")?;

        tracing::info!("{} Rotated daily car for {} to {}", API_NAME, today, car_id);
        Ok(car_id)
    }

    pub async fn search_models(&self, query: &str) -> anyhow::Result<Vec<ModelSearchResult>> {
        self.car_repo
            .search_models(query)
            .await
            .context("Failed to search models")
    }

    /// Whether a daily car has been seated for today.
    pub async fn has_game_today(&self) -> anyhow::Result<bool> {
        self.daily_car_repo
            .exists_for_date(Utc::now().date_naive())
            .await
            .context("Failed to check today's daily car")
    }

    pub async fn car_count(&self) -> anyhow::Result<i64> {
        self.car_repo.count().await.context("Failed to count cars")
    }

    /// Round-trip to the database, for the health endpoint.
    pub async fn ping_database(&self) -> Result<DateTime<Utc>, sqlx::Error> {
        sqlx::query_scalar("SELECT NOW()").fetch_one(&self.pool).await
    }
}
