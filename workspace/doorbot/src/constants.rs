pub const DOORBOT_HTTP_ADDR_ENV: &'static str = "DOORBOT_HTTP_ADDR";

pub const REDIS_HOSTNAME_ENV: &'static str = "DOORBOT_REDIS_HOSTNAME";
pub const REDIS_PORT_ENV: &'static str = "DOORBOT_REDIS_PORT";
pub const REDIS_PASSWORD_ENV: &'static str = "DOORBOT_REDIS_PASSWORD";

pub const ORIGIN_URL_ENV: &'static str = "DOORBOT_ORIGIN_URL";

pub const HOST_STORAGE_KEY: &'static str = "host";
pub const DEFAULT_OUTLINE_HOST: &'static str = "app.getoutline.com";

pub const REDIS_DEFAULT_PORT: &'static str = "6379";
