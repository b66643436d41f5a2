/// Encoded image bytes plus the identifier they are stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedImage {
    id: String,
    file_name: String,
    bytes: Vec<u8>,
}

impl RenderedImage {
    #[must_use]
    pub fn new(id: impl Into<String>, extension: &str, bytes: Vec<u8>) -> Self {
        let id = id.into();
        let file_name = format!("{id}.{extension}");

        Self {
            id,
            file_name,
            bytes,
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
