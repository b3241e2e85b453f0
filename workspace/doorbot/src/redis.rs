use crate::constants;

#[derive(Debug, Clone)]
pub struct RedisConfig {
  pub(crate) host: String,
  pub(crate) port: String,
  pub(crate) password: Option<String>,
}

pub fn from_env() -> Option<RedisConfig> {
  let host = std::env::var(constants::REDIS_HOSTNAME_ENV).ok()?;
  let port = std::env::var(constants::REDIS_PORT_ENV).unwrap_or_else(|_| constants::REDIS_DEFAULT_PORT.to_string());
  let password = std::env::var(constants::REDIS_PASSWORD_ENV).ok().filter(|pass| pass.len() > 0);

  Some(RedisConfig { host, port, password })
}
