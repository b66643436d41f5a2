pub mod image_folder;
