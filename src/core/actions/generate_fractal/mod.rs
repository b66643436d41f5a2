pub mod fill_matrix;
pub mod ports;
