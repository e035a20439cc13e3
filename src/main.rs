use materialize_connector_config::{shared::LoggingUtils, Configuration, ConnectorError};
use tracing::error;

fn main() {
    if let Err(e) = LoggingUtils::initialize("info") {
        eprintln!("{}", e);
        std::process::exit(1);
    }

    match Configuration::load() {
        Ok(config) => LoggingUtils::log_loaded(&config),
        Err(ConnectorError::Validation(e)) => {
            LoggingUtils::log_rejected(&e);
            eprintln!("invalid configuration: {}", e);
            std::process::exit(1);
        }
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}
