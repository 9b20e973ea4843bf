//! Traveling Salesman problem model.
//!
//! - [`City`]: a labelled point with Euclidean distance
//! - [`Instance`]: the ordered city set; tours index into it
//! - [`tsplib`]: reading coordinate files and writing tour files

mod city;
mod instance;
pub mod tsplib;

pub use city::City;
pub use instance::Instance;
