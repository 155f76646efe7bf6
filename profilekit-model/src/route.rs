/// Navigation target understood by the host router.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Route(String);

impl Route {
    pub const HOME: &'static str = "/";

    pub fn new(path: impl Into<String>) -> Self {
        Route(path.into())
    }

    pub fn home() -> Self {
        Route(Self::HOME.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::home()
    }
}

impl From<&str> for Route {
    fn from(value: &str) -> Self {
        Route(value.to_string())
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
