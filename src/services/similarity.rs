use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Context;
use ndarray::{Array2, ArrayView1};
use thiserror::Error;

/// Error types for similarity matrix construction
#[derive(Debug, Error)]
pub enum MatrixShapeError {
    #[error("similarity matrix row {row} has {len} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        len: usize,
        expected: usize,
    },
}

/// Precomputed pairwise similarity scores between all movie pairs
///
/// Square N×N, aligned with catalog ids on both axes. Immutable after load;
/// shared read-only across requests without locking.
#[derive(Debug)]
pub struct SimilarityMatrix {
    scores: Array2<f32>,
}

impl SimilarityMatrix {
    /// Builds the matrix from row-major nested vectors, rejecting any input
    /// that is not square
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, MatrixShapeError> {
        let n = rows.len();
        let mut flat = Vec::with_capacity(n * n);

        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != n {
                return Err(MatrixShapeError::RaggedRow {
                    row,
                    len: values.len(),
                    expected: n,
                });
            }
            flat.extend(values);
        }

        // Shape is guaranteed by the per-row check above
        let scores = Array2::from_shape_vec((n, n), flat).map_err(|_| {
            MatrixShapeError::RaggedRow {
                row: 0,
                len: 0,
                expected: n,
            }
        })?;

        Ok(Self { scores })
    }

    /// Loads the serialized matrix artifact (N×N nested JSON array)
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("failed to open similarity artifact {:?}", path.as_ref()))?;
        let rows: Vec<Vec<f32>> = serde_json::from_reader(BufReader::new(file))
            .context("failed to parse similarity artifact")?;

        let matrix = Self::from_rows(rows).context("similarity artifact is not square")?;
        tracing::info!(dimension = matrix.len(), "loaded similarity matrix");
        Ok(matrix)
    }

    /// Number of movies covered (one row/column per movie)
    pub fn len(&self) -> usize {
        self.scores.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.nrows() == 0
    }

    /// Similarity of movie `i` to all movies
    pub fn row(&self, i: usize) -> ArrayView1<'_, f32> {
        self.scores.row(i)
    }

    /// Pairwise score between movies `i` and `j`
    pub fn score(&self, i: usize, j: usize) -> f32 {
        self.scores[(i, j)]
    }
}
