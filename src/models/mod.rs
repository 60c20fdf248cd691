pub mod car;
pub mod guess;

pub use car::{Car, CarDetails, CarRow, ModelSearchResult};
pub use guess::{Direction, FieldValue, GuessReport, GuessRequest, Similarities, SimilarityField};
