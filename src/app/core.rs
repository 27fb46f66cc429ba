use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::settings::Settings;
use super::types::{Mode, Row};
use super::worker::{DiffJob, DiffOutcome, DiffWorker};
use crate::model::Person;
use crate::snapshot::{
    EditOp, EditSummary, PartitionError, PartitionStrategy, SectionKey, Snapshot,
};

mod commands;
mod navigation;

/// State of the one screen: the live people, how they are grouped, and what
/// the list currently shows.
///
/// Every change to `people`, `strategy` or the letter order goes through a
/// command that bumps the generation and calls [`App::refresh`], which
/// partitions, diffs against `rendered` and only then swaps `rendered` out.
pub struct App {
    pub people: Vec<Person>,
    pub strategy: PartitionStrategy,
    pub sort_ascending: bool,
    /// Letter keys in display order; reversed by `sort_by_name`.
    pub alphabet: Vec<SectionKey>,
    /// Snapshot currently on screen.
    pub rendered: Snapshot<Person>,
    /// One header title per rendered section.
    pub section_titles: Vec<String>,
    /// Edit script that produced `rendered` from the previous snapshot.
    pub last_ops: Vec<EditOp<Person>>,
    /// Remaining frames of the change highlight.
    pub highlight_ticks: u8,
    /// Cursor over `rows()`.
    pub selected: usize,
    /// Index of the top-most visible row.
    pub offset: usize,
    pub mode: Mode,
    pub settings: Settings,
    rng: StdRng,
    generation: u64,
    rendered_generation: u64,
    worker: Option<DiffWorker>,
}

impl App {
    /// Empty screen. `seed` makes the random roster reproducible.
    ///
    /// When `settings.background_diff` is on a worker thread is started; if
    /// that fails updates are computed inline instead.
    pub fn new(settings: Settings, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let worker = if settings.background_diff {
            match DiffWorker::spawn() {
                Ok(w) => Some(w),
                Err(e) => {
                    tracing::warn!("failed to start diff worker, diffing inline: {}", e);
                    None
                }
            }
        } else {
            None
        };
        App {
            people: Vec::new(),
            strategy: PartitionStrategy::ByNameFirstLetter,
            sort_ascending: true,
            alphabet: PartitionStrategy::ByNameFirstLetter.candidate_keys(true),
            rendered: Snapshot::new(),
            section_titles: Vec::new(),
            last_ops: Vec::new(),
            highlight_ticks: 0,
            selected: 0,
            offset: 0,
            mode: Mode::Normal,
            settings,
            rng,
            generation: 0,
            rendered_generation: 0,
            worker,
        }
    }

    /// Screen title, as shown in the header bar.
    pub fn title(&self) -> &'static str {
        match self.strategy {
            PartitionStrategy::ByCategory => "By Team",
            PartitionStrategy::ByNameFirstLetter if self.sort_ascending => "A to Z",
            PartitionStrategy::ByNameFirstLetter => "Z to A",
        }
    }

    /// Candidate keys for the active strategy, in display order.
    pub fn current_keys(&self) -> Vec<SectionKey> {
        match self.strategy {
            PartitionStrategy::ByNameFirstLetter => self.alphabet.clone(),
            PartitionStrategy::ByCategory => self.strategy.candidate_keys(true),
        }
    }

    /// Generation of the latest committed change to people or grouping.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// True while the screen still shows an older generation.
    pub fn is_pending(&self) -> bool {
        self.rendered_generation != self.generation
    }

    pub fn has_worker(&self) -> bool {
        self.worker.is_some()
    }

    pub(crate) fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }

    /// Record that people or grouping changed.
    pub(crate) fn bump_generation(&mut self) {
        self.generation += 1;
    }

    fn job(&self) -> DiffJob {
        DiffJob {
            generation: self.generation,
            base_generation: self.rendered_generation,
            base: self.rendered.clone(),
            people: self.people.clone(),
            strategy: self.strategy,
            keys: self.current_keys(),
        }
    }

    /// Recompute the snapshot for the current state and diff it against the
    /// one on screen. With a worker the result arrives later through
    /// [`App::poll_worker`].
    pub fn refresh(&mut self) -> Result<(), PartitionError> {
        let job = self.job();
        if let Some(worker) = &self.worker {
            if worker.submit(job.clone()) {
                return Ok(());
            }
            tracing::warn!("diff worker gone, diffing inline");
            self.worker = None;
        }
        self.accept_outcome(job.run()).map(|_| ())
    }

    /// Commit `outcome` if it is still current.
    ///
    /// An outcome is current when it was computed from the latest generation
    /// against the snapshot that is on screen now. Anything else is dropped,
    /// so an older diff can never land after a newer one. Returns whether
    /// the outcome was committed.
    pub fn accept_outcome(&mut self, outcome: DiffOutcome) -> Result<bool, PartitionError> {
        if outcome.generation != self.generation
            || outcome.base_generation != self.rendered_generation
        {
            tracing::debug!(
                outcome = outcome.generation,
                base = outcome.base_generation,
                latest = self.generation,
                rendered = self.rendered_generation,
                "discarding stale diff outcome"
            );
            return Ok(false);
        }
        let (next, ops) = outcome.result?;
        self.commit(next, ops, outcome.generation);
        Ok(true)
    }

    /// Drain finished worker outcomes. Returns whether the screen changed.
    pub fn poll_worker(&mut self) -> Result<bool, PartitionError> {
        let mut changed = false;
        while let Some(outcome) = self.worker.as_ref().and_then(DiffWorker::try_recv) {
            changed |= self.accept_outcome(outcome)?;
        }
        Ok(changed)
    }

    fn commit(&mut self, next: Snapshot<Person>, ops: Vec<EditOp<Person>>, generation: u64) {
        tracing::debug!(
            generation,
            summary = %EditSummary::of(&ops),
            "committing snapshot"
        );
        self.section_titles = next.section_titles();
        if !ops.is_empty() {
            self.highlight_ticks = self.settings.highlight_ticks;
        }
        self.last_ops = ops;
        self.rendered = next;
        self.rendered_generation = generation;
        self.clamp_selected();
    }

    /// Summary of the last update, for the title bar.
    pub fn last_summary(&self) -> EditSummary {
        EditSummary::of(&self.last_ops)
    }

    /// Number of rows `rows()` yields: one header per section plus one row
    /// per person.
    pub fn row_count(&self) -> usize {
        self.rendered.len() + self.rendered.item_count()
    }

    /// Flattened view of the rendered snapshot for the list widget.
    pub fn rows(&self) -> Vec<Row> {
        let mut fresh: HashSet<(&SectionKey, &Person)> = HashSet::new();
        if self.highlight_ticks > 0 {
            for op in &self.last_ops {
                match op {
                    EditOp::InsertSection { key, items, .. } => {
                        fresh.extend(items.iter().map(|p| (key, p)));
                    }
                    EditOp::InsertItem { item, .. } | EditOp::MoveItem { item, .. } => {
                        fresh.insert((op.section_key(), item));
                    }
                    EditOp::DeleteSection { .. } | EditOp::DeleteItem { .. } => {}
                }
            }
        }

        let mut rows = Vec::with_capacity(self.row_count());
        for section in &self.rendered {
            rows.push(Row::Header(section.key.to_string()));
            for person in &section.items {
                rows.push(Row::Person {
                    fresh: fresh.contains(&(&section.key, person)),
                    person: person.clone(),
                });
            }
        }
        rows
    }

    /// Advance the change highlight by one frame.
    pub fn tick(&mut self) {
        self.highlight_ticks = self.highlight_ticks.saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Team;

    fn app() -> App {
        App::new(Settings::default(), Some(1))
    }

    #[test]
    fn stale_outcome_is_discarded() {
        let mut app = app();
        app.add_person(Person::new("Amy", Team::Blue)).unwrap();
        let old_job = app.job();
        app.add_person(Person::new("Bob", Team::Red)).unwrap();

        // computed from generation 1 while generation 2 is already on screen
        assert!(!app.accept_outcome(old_job.run()).unwrap());
        assert_eq!(app.rendered.item_count(), 2);
    }

    #[test]
    fn rows_flag_changed_people_while_highlighted() {
        let mut app = app();
        app.add_person(Person::new("Amy", Team::Blue)).unwrap();
        app.add_person(Person::new("Al", Team::Green)).unwrap();
        let rows = app.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], Row::Header("A".to_string()));
        assert_eq!(
            rows[2],
            Row::Person {
                person: Person::new("Al", Team::Green),
                fresh: true
            }
        );
        assert_eq!(
            rows[1],
            Row::Person {
                person: Person::new("Amy", Team::Blue),
                fresh: false
            }
        );

        for _ in 0..app.settings.highlight_ticks {
            app.tick();
        }
        assert!(app.rows().iter().all(|r| !matches!(r, Row::Person { fresh: true, .. })));
    }

    #[test]
    fn title_follows_grouping_and_direction() {
        let mut app = app();
        assert_eq!(app.title(), "A to Z");
        app.sort_by_name().unwrap();
        assert_eq!(app.title(), "Z to A");
        app.sort_by_team().unwrap();
        assert_eq!(app.title(), "By Team");
    }
}
