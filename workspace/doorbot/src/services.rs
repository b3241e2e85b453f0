use std::io::{Error, ErrorKind, Result};

use async_std::net::TcpStream;
use async_std::sync::Arc;
use async_std::sync::Mutex;

use crate::constants;

async fn connect_redis(config: &crate::redis::RedisConfig) -> Result<TcpStream> {
  log::debug!("redis configuration - '{}', connecting", config.host);
  let mut redis = TcpStream::connect(format!("{}:{}", config.host, config.port)).await?;
  log::debug!("connection established - {:?}, authenticating", redis.peer_addr());

  if let Some(password) = &config.password {
    let cmd = kramer::Command::Auth::<&String, &String>(kramer::AuthCredentials::Password(password));
    let result = kramer::execute(&mut redis, cmd).await?;
    log::debug!("authentication result - {:?}", result);
  }

  Ok(redis)
}

#[derive(Clone)]
pub struct Services {
  redis: Arc<Mutex<TcpStream>>,
  rc: crate::redis::RedisConfig,
  client: surf::Client,
  version: String,
}

impl Services {
  pub fn client(&self) -> surf::Client {
    self.client.clone()
  }

  // Resolves the canonical outline host, lazily seeding the storage key with the default on the
  // first request that finds it missing. Concurrent first requests may both write the default;
  // the value is always the same so the race is harmless.
  pub async fn host(&self) -> Result<String> {
    let get = kramer::Command::Strings::<_, &str>(kramer::StringCommand::Get(kramer::Arity::One(
      constants::HOST_STORAGE_KEY,
    )));

    let stored = match self.command(&get).await? {
      kramer::Response::Item(kramer::ResponseValue::String(inner)) => Some(inner),
      kramer::Response::Item(kramer::ResponseValue::Empty) => None,
      other => {
        log::warn!("strange response from host lookup - {:?}", other);
        None
      }
    };

    if let Some(host) = stored.filter(|host| host.len() > 0) {
      log::debug!("loaded outline host from storage - '{}'", host);
      return Ok(host);
    }

    let fallback = constants::DEFAULT_OUTLINE_HOST.to_string();
    log::info!("no outline host stored, seeding default '{}'", fallback);

    let set = kramer::Command::Strings(kramer::StringCommand::Set(
      kramer::Arity::One((constants::HOST_STORAGE_KEY, fallback.as_str())),
      None,
      kramer::Insertion::Always,
    ));

    // The request can still be served from the in-memory default; the next one retries the write.
    if let Err(error) = self.command(&set).await {
      log::warn!("unable to persist default outline host - {}", error);
    }

    Ok(fallback)
  }

  pub async fn command<S, V>(&self, command: &kramer::Command<S, V>) -> Result<kramer::Response>
  where
    S: std::fmt::Display,
    V: std::fmt::Display,
  {
    self.inner_command(command, 0).await
  }

  async fn inner_command<S, V>(&self, command: &kramer::Command<S, V>, mut attempt: u8) -> Result<kramer::Response>
  where
    S: std::fmt::Display,
    V: std::fmt::Display,
  {
    while attempt < 10 {
      log::debug!("requesting tcp write access through lock (attempt {})", attempt);
      let mut lock = self.redis.lock().await;
      let mut redis: &mut TcpStream = &mut lock;

      match async_std::future::timeout(std::time::Duration::from_secs(5), kramer::execute(&mut redis, command)).await {
        Err(timeout_error) => {
          log::warn!("timeout error during command transfer - {}", timeout_error);
          *lock = connect_redis(&self.rc).await?;
          return Err(Error::new(ErrorKind::Other, "timeout-error"));
        }
        Ok(result) => match result {
          Err(error) => {
            log::warn!("failed executing command - {}", error);

            if error.kind() == ErrorKind::BrokenPipe {
              log::info!("broken pipe, attempting to re-establish connection");
              *lock = connect_redis(&self.rc).await?;
            }

            attempt = attempt + 1;
          }
          Ok(response) => {
            log::debug!("redis command executed successfully - {:?}", response);
            return Ok(response);
          }
        },
      }
    }

    log::warn!("failed redis connection after {} attempts", attempt);
    Err(Error::new(ErrorKind::Other, "too-many-attempts"))
  }

  pub async fn status(&self) -> Result<()> {
    let redis = self.redis.lock().await;
    redis.peer_addr().map(|addr| {
      log::debug!("addr - {:?}", addr);
      ()
    })
  }

  pub async fn new() -> Result<Self> {
    let rc = crate::redis::from_env().ok_or(Error::new(ErrorKind::Other, "missing-redis-config"))?;

    log::info!("connecting to redis...");
    let redis = connect_redis(&rc).await?;

    log::info!("services ready!");
    Ok(Services {
      rc,
      redis: Arc::new(Mutex::new(redis)),
      client: surf::Client::new(),
      version: std::option_env!("DOORBOT_VERSION").unwrap_or("dev").to_string(),
    })
  }
}

impl std::fmt::Display for Services {
  fn fmt(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
    write!(formatter, "doorbot-services@v{}", self.version)
  }
}
