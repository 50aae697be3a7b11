//! Playback controller: a finite-state machine over a finished trace.
//!
//! The controller owns a [`Trace`] and a cursor, and is driven entirely by
//! its caller: [`Playback::tick`] is the single clock entry point, called
//! from whatever timer the front end runs. The engine itself has no
//! awareness of wall-clock time, playback speed, or pause state.
//!
//! State transitions:
//! `Idle -> Playing <-> Paused`, and any state `-> Complete` when the
//! cursor lands on the final step. `play()` from `Complete` restarts from
//! the beginning.

use algoviz_core::{Step, Trace};
use tracing::trace;

/// Lifecycle state of the playback controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    /// Loaded but not yet started (initial state).
    Idle,
    /// Advancing one step per clock tick.
    Playing,
    /// Halted mid-trace; `play()` or manual stepping resumes.
    Paused,
    /// Cursor is on the terminal step.
    Complete,
}

/// Timer-driven cursor over a complete, immutable trace.
///
/// All operations are pure index manipulation -- the trace is never
/// mutated, and out-of-range seeks are clamped here rather than rejected
/// by the generator.
#[derive(Debug)]
pub struct Playback {
    trace: Trace,
    cursor: usize,
    state: PlaybackState,
}

impl Playback {
    /// Wraps a finished trace, idle at the first step.
    pub fn new(trace: Trace) -> Self {
        Playback {
            trace,
            cursor: 0,
            state: PlaybackState::Idle,
        }
    }

    /// Current state of the controller.
    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// Index of the step the cursor is on.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Total number of steps in the underlying trace.
    pub fn len(&self) -> usize {
        self.trace.len()
    }

    /// Returns `true` if the trace has no steps.
    pub fn is_empty(&self) -> bool {
        self.trace.is_empty()
    }

    /// Returns `true` once the cursor has reached the terminal step.
    pub fn is_complete(&self) -> bool {
        self.state == PlaybackState::Complete
    }

    /// The step under the cursor.
    pub fn current(&self) -> Option<&Step> {
        self.trace.get(self.cursor)
    }

    /// The underlying trace.
    pub fn trace(&self) -> &Trace {
        &self.trace
    }

    /// Starts or resumes playback. From `Complete` this rewinds to the
    /// first step and plays again.
    pub fn play(&mut self) {
        match self.state {
            PlaybackState::Idle | PlaybackState::Paused => self.state = PlaybackState::Playing,
            PlaybackState::Complete => {
                self.cursor = 0;
                self.state = PlaybackState::Playing;
            }
            PlaybackState::Playing => {}
        }
    }

    /// Pauses playback. No effect unless currently playing.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Paused;
        }
    }

    /// Advances one step on the external clock tick.
    ///
    /// Only moves while `Playing`; landing on the final step transitions
    /// to `Complete`. Returns the state after the tick.
    pub fn tick(&mut self) -> PlaybackState {
        if self.state == PlaybackState::Playing {
            self.advance();
            trace!("tick: cursor {} of {}", self.cursor, self.trace.len());
        }
        self.state
    }

    /// Manually advances one step regardless of play state.
    pub fn step_forward(&mut self) {
        if self.state != PlaybackState::Complete {
            self.advance();
        }
    }

    /// Manually rewinds one step. Stepping back off the terminal step
    /// returns the controller to `Paused`.
    pub fn step_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            if self.state == PlaybackState::Complete {
                self.state = PlaybackState::Paused;
            }
        }
    }

    /// Moves the cursor to `index`, clamped to the trace bounds.
    pub fn seek(&mut self, index: usize) {
        let last = self.trace.len().saturating_sub(1);
        self.cursor = index.min(last);
        if self.cursor == last {
            self.state = PlaybackState::Complete;
        } else if self.state == PlaybackState::Complete {
            self.state = PlaybackState::Paused;
        }
    }

    /// Rewinds to the first step and returns to `Idle`.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.state = PlaybackState::Idle;
    }

    /// Number of comparison steps at or before the cursor.
    ///
    /// Derived from the trace on demand, so rewinding and seeking keep the
    /// counters honest.
    pub fn comparisons(&self) -> usize {
        self.trace
            .iter()
            .take(self.cursor + 1)
            .filter(|s| s.is_comparison())
            .count()
    }

    /// Number of swap steps at or before the cursor.
    pub fn swaps(&self) -> usize {
        self.trace
            .iter()
            .take(self.cursor + 1)
            .filter(|s| s.is_swap())
            .count()
    }

    fn advance(&mut self) {
        let last = self.trace.len().saturating_sub(1);
        if self.cursor < last {
            self.cursor += 1;
        }
        if self.cursor >= last {
            self.state = PlaybackState::Complete;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::elements_from_values;
    use crate::sorting::bubble_sort;

    fn sample_playback() -> Playback {
        Playback::new(bubble_sort(&elements_from_values(&[3, 1, 2])))
    }

    #[test]
    fn starts_idle_at_first_step() {
        let pb = sample_playback();
        assert_eq!(pb.state(), PlaybackState::Idle);
        assert_eq!(pb.cursor(), 0);
        assert!(pb.current().unwrap().description.starts_with("Starting Bubble Sort"));
    }

    #[test]
    fn tick_only_moves_while_playing() {
        let mut pb = sample_playback();
        pb.tick();
        assert_eq!(pb.cursor(), 0);

        pb.play();
        assert_eq!(pb.state(), PlaybackState::Playing);
        pb.tick();
        assert_eq!(pb.cursor(), 1);
    }

    #[test]
    fn pause_halts_and_play_resumes() {
        let mut pb = sample_playback();
        pb.play();
        pb.tick();
        pb.pause();
        assert_eq!(pb.state(), PlaybackState::Paused);

        let before = pb.cursor();
        pb.tick();
        assert_eq!(pb.cursor(), before);

        pb.play();
        pb.tick();
        assert_eq!(pb.cursor(), before + 1);
    }

    #[test]
    fn ticking_to_the_end_completes() {
        let mut pb = sample_playback();
        pb.play();
        for _ in 0..pb.len() * 2 {
            pb.tick();
        }
        assert_eq!(pb.state(), PlaybackState::Complete);
        assert_eq!(pb.cursor(), pb.len() - 1);
        assert!(pb.is_complete());
    }

    #[test]
    fn play_from_complete_restarts() {
        let mut pb = sample_playback();
        pb.seek(usize::MAX);
        assert!(pb.is_complete());

        pb.play();
        assert_eq!(pb.cursor(), 0);
        assert_eq!(pb.state(), PlaybackState::Playing);
    }

    #[test]
    fn manual_stepping_clamps_at_both_ends() {
        let mut pb = sample_playback();
        pb.step_back();
        assert_eq!(pb.cursor(), 0);

        for _ in 0..pb.len() * 2 {
            pb.step_forward();
        }
        assert_eq!(pb.cursor(), pb.len() - 1);
        assert!(pb.is_complete());

        pb.step_back();
        assert_eq!(pb.cursor(), pb.len() - 2);
        assert_eq!(pb.state(), PlaybackState::Paused);
    }

    #[test]
    fn seek_clamps_out_of_range_indices() {
        let mut pb = sample_playback();
        pb.seek(9999);
        assert_eq!(pb.cursor(), pb.len() - 1);
        assert!(pb.is_complete());

        pb.seek(2);
        assert_eq!(pb.cursor(), 2);
        assert_eq!(pb.state(), PlaybackState::Paused);
    }

    #[test]
    fn reset_returns_to_idle_at_start() {
        let mut pb = sample_playback();
        pb.play();
        pb.tick();
        pb.tick();
        pb.reset();
        assert_eq!(pb.cursor(), 0);
        assert_eq!(pb.state(), PlaybackState::Idle);
    }

    #[test]
    fn counters_follow_the_cursor() {
        let mut pb = sample_playback();
        assert_eq!(pb.comparisons(), 0);
        assert_eq!(pb.swaps(), 0);

        pb.seek(usize::MAX);
        assert_eq!(pb.comparisons(), pb.trace().comparison_count());
        assert_eq!(pb.swaps(), pb.trace().swap_count());

        // Rewinding brings the derived counters back down.
        pb.seek(0);
        assert_eq!(pb.comparisons(), 0);
        assert_eq!(pb.swaps(), 0);
    }

    #[test]
    fn playback_never_mutates_the_trace() {
        let trace = bubble_sort(&elements_from_values(&[3, 1, 2]));
        let mut pb = Playback::new(trace.clone());
        pb.play();
        for _ in 0..pb.len() {
            pb.tick();
        }
        pb.seek(1);
        pb.reset();
        assert_eq!(pb.trace(), &trace);
    }
}
