pub mod comparison;
pub mod game_service;

#[cfg(test)]
mod comparison_test;

pub use game_service::GameService;
