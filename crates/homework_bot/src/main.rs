mod config;
mod logging;

use bot_logging::{bot_critical, bot_debug, bot_warn};
use homework_engine::{PollLoop, PollSettings};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Must run before anything reads the environment.
    let dotenv = config::load_dotenv();
    logging::initialize(config::log_level());

    match dotenv {
        Ok(Some(path)) => bot_debug!("Loaded environment from {:?}", path),
        Ok(None) => {}
        Err(err) => bot_warn!("Ignoring unreadable .env file: {}", err),
    }

    let credentials = match config::load_credentials() {
        Ok(credentials) => credentials,
        Err(err) => {
            bot_critical!("{}", err);
            return Err(err.into());
        }
    };
    bot_debug!("Configuration loaded: {:?}", credentials);

    PollLoop::from_credentials(&credentials, PollSettings::default())
        .run_forever()
        .await;
    Ok(())
}
