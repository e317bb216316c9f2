pub mod error;
pub mod location_table;
pub mod search_box;

pub use error::error_page;
pub use location_table::location_table;
pub use search_box::search_box;
