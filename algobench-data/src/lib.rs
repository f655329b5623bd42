#![warn(missing_docs)]
//! AlgoBench Data - Input Datasets
//!
//! - `DataShape`: ordering class of an input array
//! - `Dataset`: immutable, defensively copied input array
//! - `DataFactory`: generator contract, with a seedable `RandomDataFactory`

mod dataset;
mod factory;
mod shape;

pub use dataset::Dataset;
pub use factory::{DataFactory, RandomDataFactory};
pub use shape::DataShape;
