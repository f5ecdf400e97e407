//! Password generator service entry point.
//!
//! Loads configuration, starts the HTTP server, and serves the form.

use passgen_web::run;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    run().await
}
