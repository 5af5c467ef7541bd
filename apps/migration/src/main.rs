//! Migration CLI tool.

use sea_orm_migration::prelude::*;

use scribe_infra::database::migrations::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt().with_env_filter("info").init();

    cli::run_cli(Migrator).await;
}
