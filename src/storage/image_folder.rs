use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{debug, error};
use thiserror::Error;

use crate::core::data::rendered_image::RenderedImage;

/// Extensions recognised when looking for a previously rendered image.
pub const IMAGE_EXTENSIONS: [&str; 4] = ["jpg", "jpeg", "png", "gif"];

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to encode image for {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to write image to {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to list image folder {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// `true` when `file_name` is `<id>.<ext>` for one of `ids`, ignoring case.
fn is_image_for(file_name: &str, ids: &[String]) -> bool {
    let file_name = file_name.to_lowercase();

    match file_name.rsplit_once('.') {
        Some((stem, extension)) => {
            IMAGE_EXTENSIONS.contains(&extension) && ids.iter().any(|id| id == stem)
        }
        None => false,
    }
}

/// Directory holding rendered images, one file per identifier.
#[derive(Debug, Clone)]
pub struct ImageFolder {
    root: PathBuf,
}

impl ImageFolder {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    #[must_use]
    pub fn path_of(&self, file_name: &str) -> PathBuf {
        self.root.join(file_name)
    }

    /// Writes the image as `<root>/<id>.<ext>`, creating the folder if needed.
    pub fn store(&self, image: &RenderedImage) -> Result<PathBuf, StorageError> {
        let path = self.path_of(image.file_name());

        fs::create_dir_all(&self.root)
            .and_then(|()| fs::write(&path, image.bytes()))
            .map_err(|source| {
                error!("could not write {}: {}", path.display(), source);
                StorageError::Io {
                    path: path.clone(),
                    source,
                }
            })?;

        debug!("wrote {} bytes to {}", image.bytes().len(), path.display());

        Ok(path)
    }

    /// Name of the first image (in file name order) stored under any of `ids`,
    /// or an empty string when there is none.
    pub fn find_existing<S: AsRef<str>>(&self, ids: &[S]) -> Result<String, StorageError> {
        if ids.is_empty() {
            return Ok(String::new());
        }

        let ids: Vec<String> = ids.iter().map(|id| id.as_ref().to_lowercase()).collect();
        let read_dir_error = |source: io::Error| StorageError::ReadDir {
            path: self.root.clone(),
            source,
        };

        let mut names = Vec::new();
        for entry in fs::read_dir(&self.root).map_err(read_dir_error)? {
            let entry = entry.map_err(read_dir_error)?;

            if !entry.file_type().map_err(read_dir_error)?.is_file() {
                continue;
            }

            if let Some(name) = entry.file_name().to_str() {
                names.push(name.to_owned());
            }
        }
        names.sort();

        Ok(names
            .into_iter()
            .find(|name| is_image_for(name, &ids))
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ids(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn touch(dir: &TempDir, name: &str) {
        fs::write(dir.path().join(name), b"x").unwrap();
    }

    #[test]
    fn test_is_image_for_requires_exact_stem_and_known_extension() {
        let candidates = ids(&["7", "12"]);

        assert!(is_image_for("7.png", &candidates));
        assert!(is_image_for("12.JPEG", &candidates));
        assert!(is_image_for("7.Gif", &candidates));
        assert!(!is_image_for("17.png", &candidates));
        assert!(!is_image_for("7.png.bak", &candidates));
        assert!(!is_image_for("7.bmp", &candidates));
        assert!(!is_image_for("7", &candidates));
    }

    #[test]
    fn test_store_writes_id_named_file() {
        let dir = TempDir::new().unwrap();
        let folder = ImageFolder::new(dir.path().join("images"));
        let image = RenderedImage::new("5", "png", vec![9, 8, 7]);

        let path = folder.store(&image).unwrap();

        assert_eq!(path, dir.path().join("images").join("5.png"));
        assert_eq!(fs::read(path).unwrap(), vec![9, 8, 7]);
    }

    #[test]
    fn test_store_reports_path_on_failure() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("not-a-dir");
        fs::write(&blocker, b"").unwrap();
        let folder = ImageFolder::new(&blocker);

        let err = folder
            .store(&RenderedImage::new("1", "png", vec![]))
            .unwrap_err();

        assert!(matches!(err, StorageError::Io { .. }));
        assert!(err.to_string().contains("not-a-dir"));
    }

    #[test]
    fn test_find_existing_returns_first_match_by_name() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "3.png");
        touch(&dir, "2.JPG");
        touch(&dir, "1.txt");
        let folder = ImageFolder::new(dir.path());

        assert_eq!(folder.find_existing(&["1", "2", "3"]).unwrap(), "2.JPG");
        assert_eq!(folder.find_existing(&["3"]).unwrap(), "3.png");
    }

    #[test]
    fn test_find_existing_without_match_is_empty() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "10.png");
        let folder = ImageFolder::new(dir.path());

        assert_eq!(folder.find_existing(&["1", "0"]).unwrap(), "");
    }

    #[test]
    fn test_find_existing_with_no_ids_skips_folder() {
        let folder = ImageFolder::new("/definitely/not/a/folder");
        let none: [&str; 0] = [];

        assert_eq!(folder.find_existing(&none).unwrap(), "");
    }

    #[test]
    fn test_find_existing_missing_folder_fails() {
        let dir = TempDir::new().unwrap();
        let folder = ImageFolder::new(dir.path().join("missing"));

        let result = folder.find_existing(&["1"]);

        assert!(matches!(result, Err(StorageError::ReadDir { .. })));
    }
}
