//! Euclidean distance from every node to two fixed reference entities

use super::{EmbeddingError, EmbeddingMap, EmbeddingResult};
use crate::graph::{EntityGraph, EntityId};
use ndarray::ArrayView1;

/// Which reference entity a distance is measured to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reference {
    Primary,
    Secondary,
}

/// Euclidean (L2) distance between two coordinate vectors
pub fn euclidean(a: ArrayView1<'_, f64>, b: ArrayView1<'_, f64>) -> f64 {
    let diff = &a - &b;
    diff.dot(&diff).sqrt()
}

/// Distance lookups resolved once against a graph.
///
/// Construction fails with [`EmbeddingError::Missing`] naming the first
/// graph node or reference entity without coordinates, so lookups during
/// scoring cannot fail.
#[derive(Debug)]
pub struct EmbeddingDistanceOracle<'a> {
    map: &'a EmbeddingMap,
    /// Embedding row of each node, by dense node index
    node_rows: Vec<usize>,
    primary_row: usize,
    secondary_row: usize,
}

impl<'a> EmbeddingDistanceOracle<'a> {
    pub fn new(
        map: &'a EmbeddingMap,
        graph: &EntityGraph,
        primary: &EntityId,
        secondary: &EntityId,
    ) -> EmbeddingResult<Self> {
        let resolve = |entity: &EntityId| {
            let key = entity.key();
            map.row(&key).ok_or(EmbeddingError::Missing(key))
        };

        let primary_row = resolve(primary)?;
        let secondary_row = resolve(secondary)?;
        let node_rows = graph
            .nodes()
            .iter()
            .map(|node| resolve(&node.entity))
            .collect::<EmbeddingResult<Vec<usize>>>()?;

        Ok(Self {
            map,
            node_rows,
            primary_row,
            secondary_row,
        })
    }

    /// Distance from the node at dense index `idx` to a reference entity
    pub fn distance(&self, idx: usize, reference: Reference) -> f64 {
        let target = match reference {
            Reference::Primary => self.primary_row,
            Reference::Secondary => self.secondary_row,
        };
        euclidean(self.map.point(self.node_rows[idx]), self.map.point(target))
    }
}
