pub mod coordinate;
pub mod features;

pub use coordinate::map_coordinate;
pub use features::{collect_functions, extract_features};
