use url::Url;

use crate::ids::UserId;

/// Profile row as held by the backing store.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileRecord {
    pub id: UserId,
    pub name: String,
    pub handle: String,
    /// Absolute public URL of the avatar, empty when none was ever set.
    #[cfg_attr(feature = "serde", serde(default))]
    pub avatar_url: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bio: String,
}

impl ProfileRecord {
    pub fn new(id: UserId) -> Self {
        Self {
            id,
            name: String::new(),
            handle: String::new(),
            avatar_url: String::new(),
            bio: String::new(),
        }
    }
}

/// Payload written to the profile store when a submit succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileUpdate {
    pub handle: String,
    pub display_name: String,
    pub avatar_url: Url,
    pub about_me: String,
}

impl ProfileUpdate {
    /// Applies the update on top of an existing record.
    pub fn apply_to(&self, record: &mut ProfileRecord) {
        record.handle = self.handle.clone();
        record.name = self.display_name.clone();
        record.avatar_url = self.avatar_url.to_string();
        record.bio = self.about_me.clone();
    }
}
