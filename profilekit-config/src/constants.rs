/// Public URL prefix of the avatar bucket. Upload paths are appended verbatim.
pub const DEFAULT_STORAGE_BASE_URL: &str =
    "https://ltabpziqzfhhohokzdfm.supabase.co/storage/v1/object/public/PostImages/";

pub const DEFAULT_HOME_ROUTE: &str = "/";

pub const ENV_CONFIG_PATH: &str = "PROFILEKIT_CONFIG";
pub const ENV_STORAGE_BASE_URL: &str = "PROFILEKIT_STORAGE_BASE_URL";
pub const ENV_HOME_ROUTE: &str = "PROFILEKIT_HOME_ROUTE";
