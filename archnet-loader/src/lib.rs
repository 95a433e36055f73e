pub mod error;
pub mod loader;
pub mod model;

pub use error::LoadError;
pub use loader::{GraphLoader, GraphSource, load_graph_from_file, parse_graph};
pub use model::{Entity, GraphData, Relationship};
