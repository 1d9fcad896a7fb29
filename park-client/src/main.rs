use anyhow::Result;
use log::{error, info};
use std::path::PathBuf;

use park_client::booking::config::ConfigService;
use park_client::booking::domain::ScheduleListing;
use park_client::initialize_booking;

const DEFAULT_CONFIG_PATH: &str = "park-client.yaml";

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
    let config = ConfigService::apply_env_overrides(ConfigService::load_or_default(&config_path));

    info!("🚀 Starting park client against {}", config.api_base_url);
    let context = initialize_booking(&config)?;

    let snapshot = match context.schedules.refresh().await {
        Ok(snapshot) => snapshot,
        Err(e) => {
            error!("Could not load schedules: {:#}", e);
            return Err(e);
        }
    };

    for row in ScheduleListing::overview(&context.catalog, &snapshot) {
        println!(
            "{} {} ({} of {} schedules available)",
            row.style.icon, row.activity.name, row.available_slots, row.total_slots
        );

        for view in ScheduleListing::slots_for_activity(&context.catalog, &snapshot, &row.activity.id)? {
            println!(
                "    #{:<4} {}  {:>3} places left  [{:?}]",
                view.slot.id,
                view.slot.time_window(),
                view.capacity.remaining,
                view.capacity.status
            );
        }
    }

    Ok(())
}
