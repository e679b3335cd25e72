pub mod model;
pub mod snapshot;
pub mod taxonomy;

pub use model::CompositionModel;
pub use snapshot::{COMPOSITION_SNAPSHOT_JSON_SCHEMA_V1, CompositionSnapshot};
pub use taxonomy::{Category, Group};
