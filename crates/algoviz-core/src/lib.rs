pub mod catalog;
pub mod element;
pub mod error;
pub mod step;
pub mod trace;

// Re-export commonly used types
pub use catalog::{Algorithm, AlgorithmInfo, Catalog, Category};
pub use element::{Element, ElementId, Status};
pub use error::CoreError;
pub use step::Step;
pub use trace::Trace;
