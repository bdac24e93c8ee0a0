//! Server startup utilities.

use tracing::info;

/// Prints the startup banner.
pub fn print_banner() {
    info!(
        r#"
    __  ___
   /  |/  /__  ______  __
  / /|_/ / _ \/ ___/ |/_/
 / /  / /  __/ /  _>  <
/_/  /_/\___/_/  /_/|_|

     Commerce Backend
    "#
    );
}

/// Prints server startup information.
pub fn print_startup_info(host: &str, port: u16) {
    let separator = "=".repeat(60);
    info!("{}", separator);
    info!("REST API:  http://{}:{}", host, port);
    info!("Health:    http://{}:{}/health", host, port);
    info!("API Docs:  http://{}:{}/swagger-ui", host, port);
    info!("{}", separator);
}
