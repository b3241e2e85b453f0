use std::io::Result;

use async_std;
use dotenv;
use env_logger;

use doorbot;

fn main() -> Result<()> {
  async_std::task::block_on(async {
    dotenv::dotenv().expect("unable to load environment from '.env'");
    env_logger::init();

    let addr = std::env::var(doorbot::constants::DOORBOT_HTTP_ADDR_ENV).unwrap_or_default();
    log::info!("spawning tide server on {}, connecting services", addr);
    let services = doorbot::Services::new().await?;
    log::info!("services ready, creating application");
    let mut app = tide::with_state(services);
    app.at("/heartbeat").get(doorbot::routes::heartbeat);
    app.at("/").all(doorbot::routes::gateway::intercept);
    app.at("/*").all(doorbot::routes::gateway::intercept);
    log::info!("application ready, spawning");
    app.listen(&addr).await?;
    Ok(())
  })
}
