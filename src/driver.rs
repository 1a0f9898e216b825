use crate::ballot::CandidateSet;
use crate::client::{PollClient, SubmissionOutcome};
use crate::error::Result;
use crate::models::{PollId, PollResults};
use log::{info, warn};

/// Orchestrates one run against the service: one poll creation, a fixed
/// number of ballot submissions, one results fetch. Strictly sequential;
/// nothing is retried.
pub struct Simulation {
    client: PollClient,
    candidates: CandidateSet,
    ballot_count: u32,
}

/// Outcome of a run. `submitted` always equals the configured ballot count;
/// rejected ballots are skipped votes, not aborts.
#[derive(Debug)]
pub struct RunSummary {
    pub poll_id: PollId,
    pub submitted: u32,
    pub accepted: u32,
    pub rejected: u32,
    pub results: PollResults,
}

impl Simulation {
    pub fn new(client: PollClient, candidates: CandidateSet, ballot_count: u32) -> Self {
        Self {
            client,
            candidates,
            ballot_count,
        }
    }

    pub async fn run(&self) -> Result<RunSummary> {
        let poll_id = self.client.create_poll().await?;
        info!("Created poll id={}", poll_id);

        let mut rng = rand::thread_rng();
        let mut accepted = 0;
        let mut rejected = 0;
        for _ in 0..self.ballot_count {
            let ballot = self.candidates.ballot(&mut rng);
            match self.client.submit_ballot(&poll_id, &ballot).await {
                Ok(SubmissionOutcome::Accepted) => accepted += 1,
                Ok(SubmissionOutcome::Rejected { status }) => {
                    warn!("Ballot {:?} rejected with status {}", ballot, status);
                    rejected += 1;
                }
                // Transport failures on a submission are skipped votes too;
                // only creation and the results fetch can abort the run.
                Err(e) => {
                    warn!("Failed to submit ballot {:?}: {}", ballot, e);
                    rejected += 1;
                }
            }
        }

        let results = self.client.fetch_results(&poll_id).await?;
        info!(
            "Run complete for poll {}: {} accepted, {} rejected of {} ballots",
            poll_id, accepted, rejected, self.ballot_count
        );

        Ok(RunSummary {
            poll_id,
            submitted: self.ballot_count,
            accepted,
            rejected,
            results,
        })
    }
}
