use log::{error, info};
use poll_sim::ballot::CandidateSet;
use poll_sim::client::PollClient;
use poll_sim::config::SimulationConfig;
use poll_sim::driver::Simulation;

#[tokio::main]
async fn main() {
    // Initialize logging
    dotenvy::dotenv().ok();
    env_logger::init();

    let config = match SimulationConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!(
        "Exercising poll service at {} with {} ballots over {:?}",
        config.base_url, config.ballot_count, config.candidates
    );

    let client = match PollClient::new(&config.base_url) {
        Ok(client) => client,
        Err(e) => {
            error!("Failed to build HTTP client: {}", e);
            std::process::exit(1);
        }
    };

    let candidates = CandidateSet::new(config.candidates, config.policy);
    let simulation = Simulation::new(client, candidates, config.ballot_count);

    match simulation.run().await {
        Ok(summary) => {
            info!(
                "Poll {}: {} of {} ballots accepted",
                summary.poll_id, summary.accepted, summary.submitted
            );
            println!("{}", summary.results.to_string_pretty());
        }
        Err(e) => {
            error!("Run aborted: {}", e);
            std::process::exit(1);
        }
    }
}
