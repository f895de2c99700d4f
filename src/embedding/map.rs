//! Embedding map: entity key -> coordinate vector

use super::{EmbeddingError, EmbeddingResult};
use ndarray::{Array2, ArrayView1};
use rustc_hash::FxHashMap;
use serde_json::Value;
use std::path::Path;
use tracing::info;

/// Immutable table of equal-length coordinate vectors keyed by entity key.
///
/// Rows are stored contiguously in an `n x dimension` matrix.
#[derive(Debug, Clone)]
pub struct EmbeddingMap {
    dimension: usize,
    index: FxHashMap<String, usize>,
    points: Array2<f64>,
}

impl EmbeddingMap {
    /// Build from `(key, coordinates)` pairs.
    ///
    /// The first entry fixes the dimension. A repeated key replaces the
    /// earlier coordinates.
    pub fn from_points<K, I>(entries: I) -> EmbeddingResult<Self>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, Vec<f64>)>,
    {
        let mut dimension = None;
        let mut index: FxHashMap<String, usize> = FxHashMap::default();
        let mut rows: Vec<Vec<f64>> = Vec::new();

        for (key, coords) in entries {
            let key = key.into();
            let expected = *dimension.get_or_insert(coords.len());
            if coords.is_empty() {
                return Err(EmbeddingError::InvalidCoordinate {
                    key,
                    reason: "empty coordinate vector".to_string(),
                });
            }
            if coords.len() != expected {
                return Err(EmbeddingError::DimensionMismatch {
                    key,
                    expected,
                    got: coords.len(),
                });
            }
            if let Some(bad) = coords.iter().find(|c| !c.is_finite()) {
                return Err(EmbeddingError::InvalidCoordinate {
                    key,
                    reason: format!("non-finite value {}", bad),
                });
            }

            match index.get(&key) {
                Some(&row) => rows[row] = coords,
                None => {
                    index.insert(key, rows.len());
                    rows.push(coords);
                }
            }
        }

        let dimension = dimension.unwrap_or(0);
        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let points = Array2::from_shape_vec((index.len(), dimension), flat)
            .map_err(|e| EmbeddingError::Malformed(e.to_string()))?;

        Ok(Self {
            dimension,
            index,
            points,
        })
    }

    /// Parse a JSON object of coordinate arrays
    pub fn from_json_str(text: &str) -> EmbeddingResult<Self> {
        let doc: Value =
            serde_json::from_str(text).map_err(|e| EmbeddingError::Malformed(e.to_string()))?;
        Self::from_json_value(&doc)
    }

    pub fn from_json_value(doc: &Value) -> EmbeddingResult<Self> {
        let obj = doc
            .as_object()
            .ok_or_else(|| EmbeddingError::Malformed("document is not a JSON object".to_string()))?;

        let mut entries = Vec::with_capacity(obj.len());
        for (key, value) in obj {
            let coords = value
                .as_array()
                .ok_or_else(|| EmbeddingError::InvalidCoordinate {
                    key: key.clone(),
                    reason: "not an array".to_string(),
                })?
                .iter()
                .map(|c| {
                    c.as_f64().ok_or_else(|| EmbeddingError::InvalidCoordinate {
                        key: key.clone(),
                        reason: format!("non-numeric value {}", c),
                    })
                })
                .collect::<EmbeddingResult<Vec<f64>>>()?;
            entries.push((key.clone(), coords));
        }

        Self::from_points(entries)
    }

    /// Load from disk
    pub fn load(path: impl AsRef<Path>) -> EmbeddingResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| EmbeddingError::Io(format!("{}: {}", path.display(), e)))?;
        let map = Self::from_json_str(&text)?;
        info!(
            "Loaded {} embeddings of dimension {} from {}",
            map.len(),
            map.dimension(),
            path.display()
        );
        Ok(map)
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Row of a key in the point matrix
    pub fn row(&self, key: &str) -> Option<usize> {
        self.index.get(key).copied()
    }

    /// Coordinates stored at a row
    pub fn point(&self, row: usize) -> ArrayView1<'_, f64> {
        self.points.row(row)
    }

    /// Coordinates of a key
    pub fn get(&self, key: &str) -> Option<ArrayView1<'_, f64>> {
        self.row(key).map(|row| self.point(row))
    }
}
