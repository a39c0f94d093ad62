pub mod catalog;
pub mod recommender;
pub mod similarity;

pub use catalog::MovieCatalog;
pub use recommender::{RecommendError, Recommender, DEFAULT_RECOMMENDATIONS, GENRE_LISTING_LIMIT};
pub use similarity::SimilarityMatrix;
