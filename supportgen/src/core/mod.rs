pub mod config;
pub mod env;
pub mod error;
pub mod generator;
pub mod logging;

pub mod prelude {
    pub use super::{
        config::Settings,
        env::Env,
        error::{Error, Result},
        generator::{NullPolicy, RecordGenerator},
    };
}
