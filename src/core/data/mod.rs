pub mod colour;
pub mod complex;
pub mod divergence_matrix;
pub mod pixel_buffer;
pub mod point;
pub mod rendered_image;
pub mod window;
