//! Prints a short preview of the private key held in SNOWFLAKE_PRIVATE_KEY.

use std::process;
use supportgen::{
    core::{env::Env, logging},
    keys,
};

fn main() {
    dotenvy::dotenv().ok();
    logging::init();

    match keys::read_private_key(&Env::real()) {
        Ok(key) => {
            tracing::debug!(chars = key.chars().count(), "loaded private key");
            println!("{}", keys::preview_line(&key));
        }
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}
