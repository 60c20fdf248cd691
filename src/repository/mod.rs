pub mod car_repo;
pub mod daily_car_repo;

pub use car_repo::CarRepository;
pub use daily_car_repo::DailyCarRepository;
