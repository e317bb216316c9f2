pub mod location;
pub mod normalize;
pub mod search;
pub mod sort;
pub mod view;

pub use location::{FieldValue, Location, LocationField};
pub use normalize::normalize;
pub use sort::SortOrder;
pub use view::{ViewState, ViewStateError};
