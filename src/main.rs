use crate::client::Console;
use crate::config::Config;
use crate::session::Session;
use crate::text::Text;
use rand::RngCore;
use std::io;

mod client;
mod config;
mod error;
mod game;
mod session;
mod text;

fn main() {
    dotenv::dotenv().ok();
    env_logger::try_init().ok();

    if let Err(err) = run(Config::from_env()) {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout(), Text::new(config.language));

    let options = console.read_player_count()?;
    let seed = config.seed.unwrap_or_else(|| rand::thread_rng().next_u64());
    let mut session = Session::new(options, seed)?;

    console.play(&mut session)?;

    if let Some(path) = &config.transcript {
        if let Err(err) = session.archive(path) {
            log::error!("{:#}", err);
        }
    }

    Ok(())
}
