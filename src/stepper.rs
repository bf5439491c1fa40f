//! Timed, interruptible playback of a [`TraversalPlan`].
//!
//! A `Stepper` walks a plan one value per step: `Idle -> Running -> (Paused <-> Running) ->
//! Completed`. Each step highlights one value, records it as visited and schedules the next step
//! through a [`Scheduler`]. At most one step is ever pending for the current run: every scheduled
//! step carries a [`Ticket`], and a ticket from a restarted run or one superseded by a resume is
//! ignored when it comes back.
//!
//! # Examples
//!
//! ```
//! use bintree::config::PlaybackConfig;
//! use bintree::scheduler::TimerQueue;
//! use bintree::stepper::{PlaybackState, StepEvent, Stepper};
//! use bintree::traversal::TraversalPlan;
//!
//! let mut queue = TimerQueue::new();
//! let mut events: Vec<StepEvent<i64>> = Vec::new();
//! let mut stepper = Stepper::new(PlaybackConfig::default());
//!
//! stepper.start(TraversalPlan::new(vec![5, 3, 8]), &mut queue);
//! while let Some(fired) = queue.pop_next() {
//!     stepper.fire(fired.ticket, &mut queue, &mut events);
//! }
//!
//! assert_eq!(stepper.state(), PlaybackState::Completed);
//! assert_eq!(stepper.visited(), [5, 3, 8]);
//! assert_eq!(events.last(), Some(&StepEvent::Completed));
//! ```

use std::fmt;
use std::time::Duration;

use tracing::{info, trace, warn};

use crate::config::PlaybackConfig;
use crate::error::SpeedError;
use crate::scheduler::{Scheduler, Ticket};
use crate::traversal::TraversalPlan;

/// Where playback stands.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlaybackState {
    /// Nothing started, or the last run was cancelled.
    Idle,
    /// Steps are being emitted on a cadence.
    Running,
    /// Scheduled steps are swallowed until resumed.
    Paused,
    /// Every step of the plan was emitted.
    Completed,
}

/// Receives what playback wants shown.
pub trait StepObserver<K> {
    /// `value` is now the highlighted one.
    fn on_step_visible(&mut self, value: &K);

    /// The plan ran out and the highlight was cleared.
    fn on_completed(&mut self);
}

/// A recorded observer callback.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StepEvent<K> {
    /// [`StepObserver::on_step_visible`].
    Visible(K),
    /// [`StepObserver::on_completed`].
    Completed,
}

/// Records every callback, in order.
impl<K: Clone> StepObserver<K> for Vec<StepEvent<K>> {
    fn on_step_visible(&mut self, value: &K) {
        self.push(StepEvent::Visible(value.clone()));
    }

    fn on_completed(&mut self) {
        self.push(StepEvent::Completed);
    }
}

/// What one call to [`Stepper::step`] or [`Stepper::fire`] did.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// A value was highlighted and the next step scheduled.
    Emitted,
    /// The plan ran out; playback is now [`PlaybackState::Completed`].
    Completed,
    /// Paused, so nothing happened and nothing was scheduled.
    Paused,
    /// Not running at all.
    Inactive,
    /// The ticket belongs to a superseded step and was ignored.
    Stale,
}

/// Steps through one plan at a time.
pub struct Stepper<K> {
    config: PlaybackConfig,
    speed: u8,
    state: PlaybackState,
    plan: TraversalPlan<K>,
    index: usize,
    visited: Vec<K>,
    highlighted: Option<K>,
    current: Ticket,
}

impl<K: fmt::Debug> fmt::Debug for Stepper<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stepper")
            .field("state", &self.state)
            .field("speed", &self.speed)
            .field("index", &self.index)
            .field("plan", &self.plan)
            .field("highlighted", &self.highlighted)
            .finish()
    }
}

impl<K: Clone + fmt::Debug> Stepper<K> {
    /// An idle stepper at `config.default_speed`.
    pub fn new(config: PlaybackConfig) -> Self {
        let speed = config.default_speed.min(config.max_speed);
        Self {
            config,
            speed,
            state: PlaybackState::Idle,
            plan: TraversalPlan::default(),
            index: 0,
            visited: Vec::new(),
            highlighted: None,
            current: Ticket { session: 0, tick: 0 },
        }
    }

    /// Discards whatever was playing and schedules the first step of `plan` right away. Returns
    /// the ticket of that first step.
    pub fn start(&mut self, plan: TraversalPlan<K>, scheduler: &mut impl Scheduler) -> Ticket {
        self.reset();
        info!(steps = plan.len(), session = self.current.session, "playback started");
        self.plan = plan;
        self.state = PlaybackState::Running;
        self.schedule(Duration::ZERO, scheduler)
    }

    /// Stops playback and forgets the plan. Any pending step becomes stale.
    pub fn cancel(&mut self) {
        if self.state != PlaybackState::Idle {
            info!(session = self.current.session, "playback cancelled");
        }
        self.reset();
        self.plan = TraversalPlan::default();
    }

    /// Delivers a scheduled step. Tickets that aren't the most recently scheduled one for the
    /// current run are ignored.
    pub fn fire(
        &mut self,
        ticket: Ticket,
        scheduler: &mut impl Scheduler,
        observer: &mut impl StepObserver<K>,
    ) -> StepOutcome {
        if ticket != self.current {
            warn!(?ticket, current = ?self.current, "ignoring stale step");
            return StepOutcome::Stale;
        }
        self.step(scheduler, observer)
    }

    /// Emits the next value, or completes when the plan is exhausted. Does nothing while paused.
    pub fn step(
        &mut self,
        scheduler: &mut impl Scheduler,
        observer: &mut impl StepObserver<K>,
    ) -> StepOutcome {
        match self.state {
            PlaybackState::Paused => return StepOutcome::Paused,
            PlaybackState::Idle | PlaybackState::Completed => return StepOutcome::Inactive,
            PlaybackState::Running => {}
        }

        let Some(value) = self.plan.get(self.index).cloned() else {
            self.highlighted = None;
            self.state = PlaybackState::Completed;
            info!(visited = self.visited.len(), "playback completed");
            observer.on_completed();
            return StepOutcome::Completed;
        };

        trace!(index = self.index, ?value, "step");
        self.index += 1;
        self.visited.push(value.clone());
        observer.on_step_visible(&value);
        self.highlighted = Some(value);
        self.schedule(self.delay(), scheduler);
        StepOutcome::Emitted
    }

    /// Swallows steps until [`resume`][Self::resume]. Only a running stepper can pause.
    pub fn pause(&mut self) -> bool {
        if self.state != PlaybackState::Running {
            return false;
        }
        self.state = PlaybackState::Paused;
        true
    }

    /// Continues a paused run with an immediate step. Anything scheduled before the pause is
    /// superseded by the steps this schedules.
    pub fn resume(
        &mut self,
        scheduler: &mut impl Scheduler,
        observer: &mut impl StepObserver<K>,
    ) -> StepOutcome {
        if self.state != PlaybackState::Paused {
            return StepOutcome::Inactive;
        }
        self.state = PlaybackState::Running;
        self.step(scheduler, observer)
    }

    /// Pauses when running, resumes when paused.
    pub fn toggle_pause(
        &mut self,
        scheduler: &mut impl Scheduler,
        observer: &mut impl StepObserver<K>,
    ) -> StepOutcome {
        match self.state {
            PlaybackState::Running => {
                self.pause();
                StepOutcome::Paused
            }
            PlaybackState::Paused => self.resume(scheduler, observer),
            _ => StepOutcome::Inactive,
        }
    }

    /// Changes the speed used for steps scheduled from now on.
    pub fn set_speed(&mut self, speed: u8) -> Result<(), SpeedError> {
        if speed > self.config.max_speed {
            return Err(SpeedError::OutOfRange {
                speed,
                max: self.config.max_speed,
            });
        }
        self.speed = speed;
        Ok(())
    }
}

impl<K> Stepper<K> {
    /// Current state.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Current speed.
    pub fn speed(&self) -> u8 {
        self.speed
    }

    /// Delay between steps at the current speed.
    pub fn delay(&self) -> Duration {
        self.config.delay_for(self.speed)
    }

    /// The value currently highlighted, if any.
    pub fn highlighted(&self) -> Option<&K> {
        self.highlighted.as_ref()
    }

    /// Values emitted so far in this run.
    pub fn visited(&self) -> &[K] {
        &self.visited
    }

    /// The plan being played.
    pub fn plan(&self) -> &TraversalPlan<K> {
        &self.plan
    }

    /// The only ticket that will currently be honored.
    pub fn current_ticket(&self) -> Ticket {
        self.current
    }

    /// Starts a new session: the index, the record and the highlight are cleared and every
    /// outstanding ticket goes stale.
    fn reset(&mut self) {
        self.current = Ticket {
            session: self.current.session + 1,
            tick: 0,
        };
        self.index = 0;
        self.visited.clear();
        self.highlighted = None;
        self.state = PlaybackState::Idle;
    }

    fn schedule(&mut self, delay: Duration, scheduler: &mut impl Scheduler) -> Ticket {
        self.current.tick += 1;
        scheduler.schedule(delay, self.current);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scheduler::TimerQueue;

    fn stepper() -> Stepper<i32> {
        Stepper::new(PlaybackConfig::default())
    }

    fn plan(values: &[i32]) -> TraversalPlan<i32> {
        TraversalPlan::new(values.to_vec())
    }

    fn events() -> Vec<StepEvent<i32>> {
        Vec::new()
    }

    /// Fires every pending timer, returning the outcomes.
    fn drain(
        stepper: &mut Stepper<i32>,
        queue: &mut TimerQueue,
        events: &mut Vec<StepEvent<i32>>,
    ) -> Vec<StepOutcome> {
        let mut outcomes = Vec::new();
        while let Some(fired) = queue.pop_next() {
            outcomes.push(stepper.fire(fired.ticket, queue, events));
        }
        outcomes
    }

    #[test]
    fn test_full_run() {
        let (mut s, mut queue, mut events) = (stepper(), TimerQueue::new(), events());
        s.start(plan(&[1, 2]), &mut queue);
        assert_eq!(s.state(), PlaybackState::Running);

        let outcomes = drain(&mut s, &mut queue, &mut events);

        assert_eq!(
            outcomes,
            [StepOutcome::Emitted, StepOutcome::Emitted, StepOutcome::Completed]
        );
        assert_eq!(
            events,
            [StepEvent::Visible(1), StepEvent::Visible(2), StepEvent::Completed]
        );
        assert_eq!(s.state(), PlaybackState::Completed);
        assert_eq!(s.highlighted(), None);
        // First step right away, then two delays at the default speed.
        assert_eq!(queue.now(), Duration::from_millis(1000));
    }

    #[test]
    fn test_empty_plan_completes() {
        let (mut s, mut queue, mut events) = (stepper(), TimerQueue::new(), events());
        s.start(plan(&[]), &mut queue);

        assert_eq!(drain(&mut s, &mut queue, &mut events), [StepOutcome::Completed]);
        assert_eq!(events, [StepEvent::Completed]);
    }

    #[test]
    fn test_pause_before_second_step() {
        let (mut s, mut queue, mut events) = (stepper(), TimerQueue::new(), events());
        s.start(plan(&[1, 2, 3]), &mut queue);

        let first = queue.pop_next().unwrap();
        assert_eq!(s.fire(first.ticket, &mut queue, &mut events), StepOutcome::Emitted);
        assert_eq!(s.highlighted(), Some(&1));
        assert!(s.pause());

        // The already scheduled second step still fires but does nothing.
        assert_eq!(drain(&mut s, &mut queue, &mut events), [StepOutcome::Paused]);
        assert!(queue.is_empty());
        assert_eq!(events, [StepEvent::Visible(1)]);
        assert_eq!(s.state(), PlaybackState::Paused);
        assert_eq!(s.visited(), [1]);
    }

    #[test]
    fn test_resume_after_swallowed_step() {
        let (mut s, mut queue, mut events) = (stepper(), TimerQueue::new(), events());
        s.start(plan(&[1, 2]), &mut queue);
        let first = queue.pop_next().unwrap();
        s.fire(first.ticket, &mut queue, &mut events);
        s.pause();
        drain(&mut s, &mut queue, &mut events);

        assert_eq!(s.resume(&mut queue, &mut events), StepOutcome::Emitted);
        assert_eq!(s.highlighted(), Some(&2));
        drain(&mut s, &mut queue, &mut events);
        assert_eq!(s.state(), PlaybackState::Completed);
        assert_eq!(s.visited(), [1, 2]);
    }

    #[test]
    fn test_resume_before_pending_step_keeps_one_cadence() {
        let (mut s, mut queue, mut events) = (stepper(), TimerQueue::new(), events());
        s.start(plan(&[1, 2, 3]), &mut queue);
        let first = queue.pop_next().unwrap();
        s.fire(first.ticket, &mut queue, &mut events);

        s.pause();
        // Resume while the step scheduled before the pause is still pending.
        assert_eq!(s.resume(&mut queue, &mut events), StepOutcome::Emitted);
        assert_eq!(queue.len(), 2);

        let outcomes = drain(&mut s, &mut queue, &mut events);
        assert_eq!(outcomes.iter().filter(|o| **o == StepOutcome::Stale).count(), 1);
        assert_eq!(s.visited(), [1, 2, 3]);
        assert_eq!(
            events,
            [
                StepEvent::Visible(1),
                StepEvent::Visible(2),
                StepEvent::Visible(3),
                StepEvent::Completed
            ]
        );
    }

    #[test]
    fn test_restart_discards_previous_run() {
        let (mut s, mut queue, mut events) = (stepper(), TimerQueue::new(), events());
        let old = s.start(plan(&[1, 2, 3]), &mut queue);
        let first = queue.pop_next().unwrap();
        s.fire(first.ticket, &mut queue, &mut events);
        s.pause();

        s.start(plan(&[7]), &mut queue);
        assert_eq!(s.state(), PlaybackState::Running);
        assert!(s.visited().is_empty());
        assert_eq!(s.highlighted(), None);
        assert_eq!(s.fire(old, &mut queue, &mut events), StepOutcome::Stale);

        events.clear();
        let outcomes = drain(&mut s, &mut queue, &mut events);
        // The new first step is due immediately, ahead of the old run's pending step.
        assert_eq!(
            outcomes,
            [StepOutcome::Emitted, StepOutcome::Stale, StepOutcome::Completed]
        );
        assert_eq!(events, [StepEvent::Visible(7), StepEvent::Completed]);
    }

    #[test]
    fn test_cancel() {
        let (mut s, mut queue, mut events) = (stepper(), TimerQueue::new(), events());
        s.start(plan(&[1]), &mut queue);
        s.cancel();

        assert_eq!(s.state(), PlaybackState::Idle);
        assert!(s.plan().is_empty());
        assert_eq!(drain(&mut s, &mut queue, &mut events), [StepOutcome::Stale]);
        assert!(events.is_empty());
    }

    #[test]
    fn test_pause_only_when_running() {
        let (mut s, mut queue, mut events) = (stepper(), TimerQueue::new(), events());
        assert!(!s.pause());
        assert_eq!(s.resume(&mut queue, &mut events), StepOutcome::Inactive);

        s.start(plan(&[1]), &mut queue);
        assert_eq!(s.toggle_pause(&mut queue, &mut events), StepOutcome::Paused);
        assert_eq!(s.toggle_pause(&mut queue, &mut events), StepOutcome::Emitted);
    }

    #[test]
    fn test_keys_need_not_have_a_default() {
        #[derive(Clone, Debug, PartialEq)]
        struct Label(&'static str);

        let mut s: Stepper<Label> = Stepper::new(PlaybackConfig::default());
        let mut queue = TimerQueue::new();
        let mut seen: Vec<StepEvent<Label>> = Vec::new();
        s.start(TraversalPlan::new(vec![Label("a")]), &mut queue);
        s.cancel();

        assert!(s.plan().is_empty());
        while let Some(fired) = queue.pop_next() {
            assert_eq!(s.fire(fired.ticket, &mut queue, &mut seen), StepOutcome::Stale);
        }
        assert!(seen.is_empty());
    }

    #[test]
    fn test_speed() {
        let mut s = stepper();
        assert_eq!(s.speed(), 50);
        assert_eq!(s.delay(), Duration::from_millis(500));

        s.set_speed(80).unwrap();
        assert_eq!(s.delay(), Duration::from_millis(200));
        assert_eq!(
            s.set_speed(101),
            Err(SpeedError::OutOfRange { speed: 101, max: 100 })
        );
        assert_eq!(s.speed(), 80);
    }
}
