use url::Url;

/// An image held in memory, either picked by the user or ready for upload.
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageFile {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl ImageFile {
    pub fn new(
        file_name: impl Into<String>,
        content_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// Empty stand-in used before a real image is known.
    pub fn placeholder() -> Self {
        Self {
            file_name: String::new(),
            content_type: String::new(),
            bytes: Vec::new(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.bytes.is_empty()
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFile")
            .field("file_name", &self.file_name)
            .field("content_type", &self.content_type)
            .field("len", &self.bytes.len())
            .finish()
    }
}

/// Avatar value held by the form.
///
/// `Remote` is the avatar already stored for the profile, `Local` is an image
/// chosen in this edit session. Keeping both in one type lets validation and
/// submit treat "unchanged" and "replaced" avatars uniformly without
/// downloading the stored image first.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AvatarRef {
    Remote(Url),
    Local(ImageFile),
}

impl Default for AvatarRef {
    fn default() -> Self {
        AvatarRef::Local(ImageFile::placeholder())
    }
}

impl AvatarRef {
    /// Normalises the avatar URL stored on a profile record.
    ///
    /// Records without a usable absolute URL yield the placeholder, so the
    /// user has to pick an image before the form validates.
    pub fn from_stored_url(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return AvatarRef::default();
        }
        match Url::parse(trimmed) {
            Ok(url) => AvatarRef::Remote(url),
            Err(_) => AvatarRef::default(),
        }
    }

    pub fn is_placeholder(&self) -> bool {
        match self {
            AvatarRef::Remote(_) => false,
            AvatarRef::Local(image) => image.is_placeholder(),
        }
    }

    pub fn as_local(&self) -> Option<&ImageFile> {
        match self {
            AvatarRef::Local(image) => Some(image),
            AvatarRef::Remote(_) => None,
        }
    }

    pub fn as_remote(&self) -> Option<&Url> {
        match self {
            AvatarRef::Remote(url) => Some(url),
            AvatarRef::Local(_) => None,
        }
    }
}

/// Reference returned by the image store after a successful upload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UploadedObject {
    /// Object path relative to the public storage base URL.
    pub path: String,
}

impl UploadedObject {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}
