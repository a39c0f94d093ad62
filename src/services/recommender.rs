use std::cmp::Ordering;

use thiserror::Error;

use crate::models::CategoryField;
use crate::services::{MovieCatalog, SimilarityMatrix};

/// Number of recommendations returned when the caller does not ask otherwise
pub const DEFAULT_RECOMMENDATIONS: usize = 5;

/// Cap on direct genre listings
pub const GENRE_LISTING_LIMIT: usize = 10;

/// Error types for recommendation queries
#[derive(Debug, Error, PartialEq)]
pub enum RecommendError {
    #[error("no movie titled {0:?} in the catalog")]
    TitleNotFound(String),

    #[error("no movies match {value:?} in the {field} field")]
    NoMatches {
        field: CategoryField,
        value: String,
    },
}

/// Similarity-ranking engine over the loaded catalog and matrix
///
/// Construction enforces the index-alignment invariant between the two
/// artifacts; every query afterwards is a pure read.
pub struct Recommender {
    catalog: MovieCatalog,
    similarity: SimilarityMatrix,
}

impl Recommender {
    pub fn new(catalog: MovieCatalog, similarity: SimilarityMatrix) -> anyhow::Result<Self> {
        anyhow::ensure!(
            catalog.len() == similarity.len(),
            "catalog has {} movies but the similarity matrix covers {}",
            catalog.len(),
            similarity.len()
        );

        Ok(Self {
            catalog,
            similarity,
        })
    }

    pub fn catalog(&self) -> &MovieCatalog {
        &self.catalog
    }

    /// Returns the `k` movies most similar to `title`
    ///
    /// The title must match a catalog record exactly; duplicate titles
    /// resolve to the first occurrence. Candidates are ranked by descending
    /// score with ties broken by ascending id, and the top rank is skipped
    /// since a movie's best match is itself.
    pub fn recommend_similar(
        &self,
        title: &str,
        k: usize,
    ) -> Result<Vec<String>, RecommendError> {
        let id = self
            .catalog
            .find_title(title)
            .ok_or_else(|| RecommendError::TitleNotFound(title.to_string()))?;

        let mut ranked: Vec<(usize, f32)> =
            self.similarity.row(id).iter().copied().enumerate().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let titles = ranked
            .into_iter()
            .skip(1) // rank 0 is the movie itself
            .take(k)
            .filter_map(|(candidate, _)| self.catalog.get(candidate))
            .map(|record| record.title.clone())
            .collect();

        tracing::debug!(title, k, "ranked similar movies");
        Ok(titles)
    }

    /// Lists titles for a category value
    ///
    /// Genres get a direct store-order listing capped at ten titles; cast and
    /// crew reduce to a similarity ranking seeded by a representative movie.
    pub fn filter_by_field(
        &self,
        field: CategoryField,
        value: &str,
    ) -> Result<Vec<String>, RecommendError> {
        match field {
            CategoryField::Genres => {
                let matches = self.catalog.matching_records(field, value);
                if matches.is_empty() {
                    return Err(RecommendError::NoMatches {
                        field,
                        value: value.to_string(),
                    });
                }

                Ok(matches
                    .into_iter()
                    .take(GENRE_LISTING_LIMIT)
                    .map(|record| record.title.clone())
                    .collect())
            }
            CategoryField::Cast | CategoryField::Crew => self.top_by_representative(field, value),
        }
    }

    /// Recommends via the first movie matching a cast/crew value
    ///
    /// The representative's neighbors stand in for the person's top titles;
    /// this trades precision for reuse of the similarity primitive and is
    /// kept as-is for compatibility with the reference behavior.
    pub fn top_by_representative(
        &self,
        field: CategoryField,
        value: &str,
    ) -> Result<Vec<String>, RecommendError> {
        let matches = self.catalog.matching_records(field, value);
        let Some(representative) = matches.first() else {
            return Err(RecommendError::NoMatches {
                field,
                value: value.to_string(),
            });
        };

        let mut titles =
            self.recommend_similar(&representative.title, DEFAULT_RECOMMENDATIONS)?;
        titles.truncate(DEFAULT_RECOMMENDATIONS);
        Ok(titles)
    }
}
