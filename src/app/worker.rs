//! Background partition + diff.
//!
//! One worker thread serves the screen. Jobs carry the collection
//! generation they were cut from; when several jobs queue up the worker
//! skips to the newest, so at most one computation is ever in flight for
//! current data. The receiving side decides whether an outcome is still
//! current (see `App::accept_outcome`).

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};
use std::thread::{self, JoinHandle};

use crate::model::Person;
use crate::snapshot::{diff, partition, EditOp, PartitionError, PartitionStrategy, SectionKey, Snapshot};

/// Everything needed to compute one update away from the UI thread.
#[derive(Clone, Debug)]
pub struct DiffJob {
    /// Collection generation the inputs were taken from.
    pub generation: u64,
    /// Generation of `base`, the snapshot currently on screen.
    pub base_generation: u64,
    pub base: Snapshot<Person>,
    pub people: Vec<Person>,
    pub strategy: PartitionStrategy,
    pub keys: Vec<SectionKey>,
}

#[derive(Clone, Debug)]
pub struct DiffOutcome {
    pub generation: u64,
    pub base_generation: u64,
    pub result: Result<(Snapshot<Person>, Vec<EditOp<Person>>), PartitionError>,
}

impl DiffJob {
    /// Run partition then diff. Also used inline when no worker is running.
    pub fn run(self) -> DiffOutcome {
        let result = partition(&self.people, self.strategy, &self.keys).map(|next| {
            let ops = diff(&self.base, &next);
            (next, ops)
        });
        DiffOutcome {
            generation: self.generation,
            base_generation: self.base_generation,
            result,
        }
    }
}

pub struct DiffWorker {
    jobs: Option<Sender<DiffJob>>,
    outcomes: Receiver<DiffOutcome>,
    handle: Option<JoinHandle<()>>,
}

impl DiffWorker {
    pub fn spawn() -> std::io::Result<Self> {
        let (job_tx, job_rx) = mpsc::channel::<DiffJob>();
        let (out_tx, out_rx) = mpsc::channel::<DiffOutcome>();
        let handle = thread::Builder::new()
            .name("diff-worker".to_string())
            .spawn(move || {
                while let Ok(mut job) = job_rx.recv() {
                    // Only the newest queued job is worth computing.
                    let mut skipped = 0usize;
                    while let Ok(newer) = job_rx.try_recv() {
                        job = newer;
                        skipped += 1;
                    }
                    if skipped > 0 {
                        tracing::debug!(skipped, generation = job.generation, "coalesced diff jobs");
                    }
                    if out_tx.send(job.run()).is_err() {
                        break;
                    }
                }
                tracing::debug!("diff worker exiting");
            })?;
        Ok(DiffWorker {
            jobs: Some(job_tx),
            outcomes: out_rx,
            handle: Some(handle),
        })
    }

    /// Queue a job. Returns `false` when the worker thread has gone away.
    pub fn submit(&self, job: DiffJob) -> bool {
        self.jobs.as_ref().is_some_and(|tx| tx.send(job).is_ok())
    }

    /// Next finished outcome, if any, without blocking.
    pub fn try_recv(&self) -> Option<DiffOutcome> {
        match self.outcomes.try_recv() {
            Ok(outcome) => Some(outcome),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Block until the next outcome arrives.
    pub fn recv(&self) -> Option<DiffOutcome> {
        self.outcomes.recv().ok()
    }
}

impl Drop for DiffWorker {
    fn drop(&mut self) {
        // closing the job channel ends the worker loop
        self.jobs.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Team;

    fn job(generation: u64, people: Vec<Person>) -> DiffJob {
        DiffJob {
            generation,
            base_generation: 0,
            base: Snapshot::new(),
            people,
            strategy: PartitionStrategy::ByCategory,
            keys: PartitionStrategy::ByCategory.candidate_keys(true),
        }
    }

    #[test]
    fn inline_run_partitions_and_diffs() {
        let out = job(3, vec![Person::new("Amy", Team::Red)]).run();
        assert_eq!(out.generation, 3);
        let (snapshot, ops) = out.result.expect("valid keys");
        assert_eq!(snapshot.section_titles(), vec!["Red".to_string()]);
        assert_eq!(ops.len(), 1);
    }

    #[test]
    fn worker_answers_the_last_job() {
        let worker = DiffWorker::spawn().expect("spawn");
        for g in 1..=5 {
            assert!(worker.submit(job(g, vec![Person::new(format!("P{g}"), Team::Blue)])));
        }
        // some jobs may be coalesced, but the newest is always answered
        let mut last = None;
        while let Some(out) = worker.recv() {
            let g = out.generation;
            last = Some(g);
            if g == 5 {
                break;
            }
        }
        assert_eq!(last, Some(5));
    }
}
