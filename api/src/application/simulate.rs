use std::{sync::Arc, time::Duration};

use foodchat_core::{
    application::create_service,
    domain::{
        common::FoodChatConfig,
        conversation::{ports::ConversationService, value_objects::SimulationInput},
    },
};
use tracing::info;

use crate::args::{Args, SimulateArgs};

/// Runs the synthetic conversation batch and writes the results file.
pub async fn simulate(args: Arc<Args>, simulate_args: SimulateArgs) -> Result<(), anyhow::Error> {
    let config = FoodChatConfig::from(args.as_ref().clone());
    let service = create_service(config).await?;

    let report = service
        .simulate_conversations(SimulationInput {
            iterations: simulate_args.iterations,
            delay: Duration::from_millis(simulate_args.delay_ms),
            seed: simulate_args.seed,
        })
        .await?;

    tokio::fs::write(&simulate_args.output, report.render()).await?;

    info!(
        "Completed {} simulations. Results saved to {}",
        report.entries.len(),
        simulate_args.output.display()
    );

    Ok(())
}
