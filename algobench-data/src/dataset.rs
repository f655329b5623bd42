//! Datasets

use crate::DataShape;

/// An input array tagged with its shape
///
/// Contents are copied on construction and on every read, so one dataset can
/// be handed unmutated to every algorithm under test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    shape: DataShape,
    values: Box<[i32]>,
}

impl Dataset {
    /// Create a dataset from a copy of `values`
    pub fn new(shape: DataShape, values: &[i32]) -> Self {
        Self {
            shape,
            values: values.into(),
        }
    }

    /// Shape tag
    pub fn shape(&self) -> DataShape {
        self.shape
    }

    /// Number of elements
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the dataset has no elements
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A fresh deep copy of the contents
    pub fn values(&self) -> Vec<i32> {
        self.values.to_vec()
    }
}
