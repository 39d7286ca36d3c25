//! Image key → asset URL resolution.

use forkpath_content::resolver::ImageKey;

/// Maps image keys onto the scene image files served by the front end.
#[derive(Debug, Clone)]
pub struct AssetResolver {
    base_url: String,
}

impl AssetResolver {
    /// Creates a resolver rooted at `base_url` (no trailing slash needed).
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_owned();
        Self { base_url }
    }

    /// Returns the URL of the image for `key`.
    ///
    /// The opening screen uses the combined `Node1LR` image.
    #[must_use]
    pub fn image_url(&self, key: ImageKey) -> String {
        match key {
            ImageKey::Start => format!("{}/Node1LR.jpeg", self.base_url),
            ImageKey::Node { .. } => format!("{}/Node{key}.jpeg", self.base_url),
        }
    }
}

impl Default for AssetResolver {
    fn default() -> Self {
        Self::new("Images")
    }
}
