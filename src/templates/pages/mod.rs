pub mod locations;

pub use locations::{locations_page, LocationsVm};
