use sea_orm_migration::prelude::*;

use shelf_tracker_migration::Migrator;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
