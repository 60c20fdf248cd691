use serde::Serialize;
use sqlx::FromRow;

/// Raw `cars` row as stored in Postgres. Carries the legacy sibling
/// columns (`make`, `year`, `body_type`) left over from an old schema
/// migration; they are folded into their canonical counterparts by
/// [`Car::from`] before any game logic sees the record.
#[derive(Debug, Clone, FromRow)]
pub struct CarRow {
    pub id: i32,
    pub make: Option<String>,
    pub brand: Option<String>,
    pub model: String,
    pub year: Option<i32>,
    #[sqlx(rename = "production_from_year")]
    pub production_from_year: Option<i32>,
    #[sqlx(rename = "to_year")]
    pub to_year: Option<i32>,
    #[sqlx(rename = "body_type")]
    pub body_type: Option<String>,
    #[sqlx(rename = "body_style")]
    pub body_style: Option<String>,
    pub segment: Option<String>,
    pub cylinders: Option<i32>,
    pub displacement: Option<i32>,
    pub power: Option<i32>,
    pub torque: Option<i32>,
    #[sqlx(rename = "fuel_system")]
    pub fuel_system: Option<String>,
    pub fuel: Option<String>,
    #[sqlx(rename = "fuel_capacity")]
    pub fuel_capacity: Option<f64>,
    #[sqlx(rename = "top_speed")]
    pub top_speed: Option<i32>,
    #[sqlx(rename = "drive_type")]
    pub drive_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    #[sqlx(rename = "engine_speed")]
    pub engine_speed: Option<String>,
    #[sqlx(rename = "image_url")]
    pub image_url: Option<String>,
}

/// Canonical car record used for comparison and display.
#[derive(Debug, Clone)]
pub struct Car {
    pub id: i32,
    pub brand: Option<String>,
    pub model: String,
    pub production_from_year: Option<i32>,
    pub to_year: Option<i32>,
    pub body_style: Option<String>,
    pub segment: Option<String>,
    pub cylinders: Option<i32>,
    pub displacement: Option<i32>,
    pub power: Option<i32>,
    pub torque: Option<i32>,
    pub fuel_system: Option<String>,
    pub fuel: Option<String>,
    pub fuel_capacity: Option<f64>,
    pub top_speed: Option<i32>,
    pub drive_type: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub engine_speed: Option<String>,
    pub image_url: Option<String>,
}

impl From<CarRow> for Car {
    fn from(row: CarRow) -> Self {
        Car {
            id: row.id,
            brand: row.brand.or(row.make),
            model: row.model,
            production_from_year: row.production_from_year.or(row.year),
            to_year: row.to_year,
            body_style: row.body_style.or(row.body_type),
            segment: row.segment,
            cylinders: row.cylinders,
            displacement: row.displacement,
            power: row.power,
            torque: row.torque,
            fuel_system: row.fuel_system,
            fuel: row.fuel,
            fuel_capacity: row.fuel_capacity,
            top_speed: row.top_speed,
            drive_type: row.drive_type,
            title: row.title,
            description: row.description,
            engine_speed: row.engine_speed,
            image_url: row.image_url,
        }
    }
}

/// Full projection of the daily car, returned only on a correct guess.
/// Field names match the historical JSON contract (snake_case).
#[derive(Debug, Clone, Serialize)]
pub struct CarDetails {
    pub brand: Option<String>,
    pub model: String,
    pub production_from_year: Option<i32>,
    pub to_year: Option<i32>,
    pub body_style: Option<String>,
    pub segment: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub engine_speed: Option<String>,
    pub cylinders: Option<i32>,
    pub displacement: Option<i32>,
    pub power: Option<i32>,
    pub torque: Option<i32>,
    pub fuel_system: Option<String>,
    pub fuel: Option<String>,
    pub fuel_capacity: Option<f64>,
    pub top_speed: Option<i32>,
    pub drive_type: Option<String>,
    pub image_url: Option<String>,
}

impl From<&Car> for CarDetails {
    fn from(car: &Car) -> Self {
        CarDetails {
            brand: car.brand.clone(),
            model: car.model.clone(),
            production_from_year: car.production_from_year,
            to_year: car.to_year,
            body_style: car.body_style.clone(),
            segment: car.segment.clone(),
            title: car.title.clone(),
            description: car.description.clone(),
            engine_speed: car.engine_speed.clone(),
            cylinders: car.cylinders,
            displacement: car.displacement,
            power: car.power,
            torque: car.torque,
            fuel_system: car.fuel_system.clone(),
            fuel: car.fuel.clone(),
            fuel_capacity: car.fuel_capacity,
            top_speed: car.top_speed,
            drive_type: car.drive_type.clone(),
            image_url: car.image_url.clone(),
        }
    }
}

/// One row of the model-search autocomplete response.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ModelSearchResult {
    pub display: String,
    pub model: String,
}
