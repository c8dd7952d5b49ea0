use std::rc::Rc;

use log::{debug, info};
use yew::Reducible;

use crate::config;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
    Correct,
    Incorrect,
}

/// What the page is currently showing, derived from [`LandingState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Intro,
    Riddle,
    Outcome(Verdict),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    RevealNextWord,
    ShowRiddle,
    SetAnswer(String),
    Submit,
    /// Carries the generation of the hint it was scheduled for.
    HideHint(u32),
    CloseOutcome,
}

/// A deferred action the page has to schedule for the current state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Task {
    pub delay_ms: u32,
    pub action: Action,
}

/// Everything one page view knows. Dropped with the page.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LandingState {
    pub revealed_words: usize,
    pub riddle_visible: bool,
    pub answer: String,
    pub outcome_visible: bool,
    pub hint_visible: bool,
    pub hint: String,
    pub is_correct: bool,
    pub incorrect_attempts: u32,
    pub hint_generation: u32,
}

pub fn is_correct_answer(answer: &str) -> bool {
    answer.to_lowercase() == config::SECRET_ANSWER
}

/// Hint for a miss, given how many misses came right before it.
pub fn hint_for(previous_misses: u32) -> &'static str {
    if previous_misses >= config::MISSES_BEFORE_META_HINT {
        config::META_HINT
    } else {
        config::RHYMING_HINT
    }
}

impl LandingState {
    /// Intro ticks before the riddle is due.
    pub fn word_count() -> usize {
        config::INTRO_CADENCE.len()
    }

    pub fn intro_finished(&self) -> bool {
        self.revealed_words >= Self::word_count()
    }

    /// The first headline word is out from the start, one more per tick.
    pub fn is_headline_word_revealed(&self, index: usize) -> bool {
        index <= self.revealed_words
    }

    /// Changes exactly when `next_intro_task` may change.
    pub fn intro_timer_key(&self) -> (usize, bool) {
        (self.revealed_words, self.riddle_visible)
    }

    /// Changes exactly when `next_hint_task` may change.
    pub fn hint_timer_key(&self) -> (u32, bool) {
        (self.hint_generation, self.hint_visible)
    }

    /// While the modal is open its failure branch carries the hint instead.
    pub fn toast_visible(&self) -> bool {
        self.hint_visible && !self.outcome_visible
    }

    pub fn phase(&self) -> Phase {
        if self.outcome_visible {
            let verdict = if self.is_correct {
                Verdict::Correct
            } else {
                Verdict::Incorrect
            };
            Phase::Outcome(verdict)
        } else if self.riddle_visible {
            Phase::Riddle
        } else {
            Phase::Intro
        }
    }

    pub fn reveal_next_word(&mut self) {
        if !self.intro_finished() {
            self.revealed_words += 1;
        }
    }

    /// Only takes effect once every word is out, and only once.
    pub fn show_riddle(&mut self) -> bool {
        if self.riddle_visible || !self.intro_finished() {
            return false;
        }
        self.riddle_visible = true;
        true
    }

    pub fn set_answer(&mut self, answer: String) {
        self.answer = answer;
    }

    pub fn submit(&mut self) -> Verdict {
        self.outcome_visible = true;
        if is_correct_answer(&self.answer) {
            self.is_correct = true;
            self.incorrect_attempts = 0;
            Verdict::Correct
        } else {
            self.is_correct = false;
            self.hint = hint_for(self.incorrect_attempts).to_string();
            self.incorrect_attempts = self.incorrect_attempts.saturating_add(1);
            // A new hint replaces the pending one and restarts its timer.
            self.hint_visible = true;
            self.hint_generation = self.hint_generation.wrapping_add(1);
            Verdict::Incorrect
        }
    }

    /// Ignored unless `generation` belongs to the hint on screen.
    pub fn hide_hint(&mut self, generation: u32) -> bool {
        if !self.hint_visible || generation != self.hint_generation {
            return false;
        }
        self.hint_visible = false;
        true
    }

    /// Hides the modal. The verdict and hint stay until the next submission.
    pub fn close_outcome(&mut self) {
        self.outcome_visible = false;
    }

    pub fn next_intro_task(&self) -> Option<Task> {
        if self.riddle_visible {
            None
        } else if !self.intro_finished() {
            Some(Task {
                delay_ms: config::WORD_INTERVAL_MS,
                action: Action::RevealNextWord,
            })
        } else {
            Some(Task {
                delay_ms: config::RIDDLE_DELAY_MS,
                action: Action::ShowRiddle,
            })
        }
    }

    pub fn next_hint_task(&self) -> Option<Task> {
        self.hint_visible.then(|| Task {
            delay_ms: config::HINT_DURATION_MS,
            action: Action::HideHint(self.hint_generation),
        })
    }

    pub fn apply(&mut self, action: Action) {
        match action {
            Action::RevealNextWord => {
                self.reveal_next_word();
                debug!("Intro tick {}/{}", self.revealed_words, Self::word_count());
            }
            Action::ShowRiddle => {
                if self.show_riddle() {
                    info!("Intro finished, showing riddle");
                }
            }
            Action::SetAnswer(answer) => self.set_answer(answer),
            Action::Submit => match self.submit() {
                Verdict::Correct => info!("Correct answer submitted"),
                Verdict::Incorrect => {
                    info!("Incorrect answer, {} in a row", self.incorrect_attempts)
                }
            },
            Action::HideHint(generation) => {
                if self.hide_hint(generation) {
                    debug!("Hint {} hidden", generation);
                }
            }
            Action::CloseOutcome => {
                self.close_outcome();
                debug!("Outcome modal closed");
            }
        }
    }
}

impl Reducible for LandingState {
    type Action = Action;

    fn reduce(self: Rc<Self>, action: Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        // Same Rc means no re-render.
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn riddle_ready() -> LandingState {
        let mut state = LandingState::default();
        while let Some(task) = state.next_intro_task() {
            state.apply(task.action);
        }
        state
    }

    fn submit(state: &mut LandingState, answer: &str) -> Verdict {
        state.apply(Action::SetAnswer(answer.to_string()));
        state.apply(Action::Submit);
        match state.phase() {
            Phase::Outcome(verdict) => verdict,
            other => panic!("submission left the page in {other:?}"),
        }
    }

    #[test]
    fn starts_in_intro_before_the_first_tick() {
        let state = LandingState::default();
        assert_eq!(state.phase(), Phase::Intro);
        assert_eq!(state.revealed_words, 0);
        assert!(!state.outcome_visible);
        assert!(!state.hint_visible);
        assert_eq!(state.incorrect_attempts, 0);
    }

    #[test]
    fn intro_reveals_every_word_at_the_interval_then_shows_riddle_once() {
        let mut state = LandingState::default();
        for expected in 1..=LandingState::word_count() {
            let task = state.next_intro_task().expect("intro still running");
            assert_eq!(task.delay_ms, config::WORD_INTERVAL_MS);
            assert_eq!(task.action, Action::RevealNextWord);
            state.apply(task.action);
            assert_eq!(state.revealed_words, expected);
            assert!(!state.riddle_visible);
        }

        let task = state.next_intro_task().expect("riddle still pending");
        assert_eq!(task.delay_ms, config::RIDDLE_DELAY_MS);
        assert_eq!(task.action, Action::ShowRiddle);
        state.apply(task.action);

        assert!(state.riddle_visible);
        assert_eq!(state.phase(), Phase::Riddle);
        assert_eq!(state.next_intro_task(), None);
    }

    #[test]
    fn intro_never_restarts_after_later_state_changes() {
        let mut state = riddle_ready();
        submit(&mut state, "innovation");
        state.apply(Action::CloseOutcome);
        submit(&mut state, "ecell");
        assert_eq!(state.next_intro_task(), None);
        assert_eq!(state.revealed_words, LandingState::word_count());
    }

    #[test]
    fn riddle_is_due_after_the_full_cadence() {
        let mut state = LandingState::default();
        let mut total_ms = 0;
        while let Some(task) = state.next_intro_task() {
            total_ms += task.delay_ms;
            state.apply(task.action);
        }
        assert_eq!(LandingState::word_count(), 6);
        assert_eq!(total_ms, 6 * 800 + 100);
        assert!(state.riddle_visible);
    }

    #[test]
    fn first_headline_word_is_visible_at_mount() {
        let mut state = LandingState::default();
        assert!(state.is_headline_word_revealed(0));
        assert!(!state.is_headline_word_revealed(1));

        state.apply(Action::RevealNextWord);
        assert!(state.is_headline_word_revealed(1));
        assert!(!state.is_headline_word_revealed(2));

        state.apply(Action::RevealNextWord);
        let all = (0..config::HEADLINE_WORDS.len()).all(|i| state.is_headline_word_revealed(i));
        assert!(all);
    }

    #[test]
    fn reveal_saturates_at_word_count() {
        let mut state = riddle_ready();
        state.apply(Action::RevealNextWord);
        state.apply(Action::RevealNextWord);
        assert_eq!(state.revealed_words, LandingState::word_count());
    }

    #[test]
    fn intro_timer_key_follows_the_intro_task() {
        let mut state = LandingState::default();
        let mut keys = vec![state.intro_timer_key()];
        while let Some(task) = state.next_intro_task() {
            state.apply(task.action);
            let key = state.intro_timer_key();
            assert_ne!(Some(&key), keys.last(), "intro timer would not be rescheduled");
            keys.push(key);
        }

        let settled = state.intro_timer_key();
        state.apply(Action::SetAnswer("typing".into()));
        submit(&mut state, "nope");
        state.apply(Action::CloseOutcome);
        assert_eq!(state.intro_timer_key(), settled);
    }

    #[test]
    fn hint_timer_key_restarts_on_every_miss_only() {
        let mut state = riddle_ready();
        let idle = state.hint_timer_key();

        state.apply(Action::SetAnswer("typing".into()));
        assert_eq!(state.hint_timer_key(), idle);

        submit(&mut state, "one");
        let first = state.hint_timer_key();
        assert_ne!(first, idle);

        state.apply(Action::CloseOutcome);
        assert_eq!(state.hint_timer_key(), first);

        submit(&mut state, "two");
        let second = state.hint_timer_key();
        assert_ne!(second, first);

        submit(&mut state, "ecell");
        assert_eq!(state.hint_timer_key(), second);

        let task = state.next_hint_task().expect("hint timer scheduled");
        state.apply(task.action);
        assert_ne!(state.hint_timer_key(), second);
        assert_eq!(state.next_hint_task(), None);
    }

    #[test]
    fn hint_shows_once_while_the_modal_is_open() {
        let mut state = riddle_ready();
        submit(&mut state, "nope");
        assert_eq!(state.phase(), Phase::Outcome(Verdict::Incorrect));
        assert!(!state.toast_visible());

        state.apply(Action::CloseOutcome);
        assert!(state.toast_visible());

        let task = state.next_hint_task().expect("hint timer scheduled");
        state.apply(task.action);
        assert!(!state.toast_visible());
    }

    #[test]
    fn riddle_cannot_show_before_intro_finishes() {
        let mut state = LandingState::default();
        state.reveal_next_word();
        assert!(!state.show_riddle());
        assert!(!state.riddle_visible);
    }

    #[test]
    fn show_riddle_only_flips_once() {
        let mut state = riddle_ready();
        assert!(!state.show_riddle());
        assert!(state.riddle_visible);
    }

    #[test]
    fn correct_answers_match_case_insensitively() {
        for answer in ["Ecell", "ECELL", "ecell", "eCeLl"] {
            let mut state = riddle_ready();
            submit(&mut state, "wrong");
            assert_eq!(submit(&mut state, answer), Verdict::Correct, "{answer}");
            assert!(state.is_correct);
            assert!(state.outcome_visible);
            assert_eq!(state.incorrect_attempts, 0);
            assert_eq!(state.phase(), Phase::Outcome(Verdict::Correct));
        }
    }

    #[test]
    fn anything_else_is_a_miss() {
        for answer in ["innovation", "", "ecell ", " ecell", "   ", "e-cell"] {
            let mut state = riddle_ready();
            assert_eq!(submit(&mut state, answer), Verdict::Incorrect, "{answer:?}");
            assert!(!state.is_correct);
            assert!(state.outcome_visible);
            assert_eq!(state.incorrect_attempts, 1);
            assert_eq!(state.phase(), Phase::Outcome(Verdict::Incorrect));
        }
    }

    #[test]
    fn third_consecutive_miss_gets_the_meta_hint() {
        let mut state = riddle_ready();

        submit(&mut state, "startup");
        assert_eq!(state.hint, config::RHYMING_HINT);
        submit(&mut state, "incubator");
        assert_eq!(state.hint, config::RHYMING_HINT);
        submit(&mut state, "club");
        assert_eq!(state.incorrect_attempts, 3);
        assert_eq!(state.hint, config::META_HINT);

        submit(&mut state, "still wrong");
        assert_eq!(state.hint, config::META_HINT);
    }

    #[test]
    fn correct_answer_resets_the_hint_escalation() {
        let mut state = riddle_ready();
        for _ in 0..3 {
            submit(&mut state, "nope");
        }
        submit(&mut state, "ECell");
        assert_eq!(state.incorrect_attempts, 0);

        submit(&mut state, "nope");
        assert_eq!(state.hint, config::RHYMING_HINT);
    }

    #[test]
    fn correct_answer_keeps_previous_hint_text() {
        let mut state = riddle_ready();
        submit(&mut state, "nope");
        submit(&mut state, "ecell");
        assert_eq!(state.hint, config::RHYMING_HINT);
    }

    #[test]
    fn hint_hides_after_its_duration() {
        let mut state = riddle_ready();
        submit(&mut state, "nope");
        assert!(state.hint_visible);

        let task = state.next_hint_task().expect("hint timer scheduled");
        assert_eq!(task.delay_ms, config::HINT_DURATION_MS);
        state.apply(task.action);

        assert!(!state.hint_visible);
        assert_eq!(state.next_hint_task(), None);
        // The modal is untouched by the toast.
        assert!(state.outcome_visible);
    }

    #[test]
    fn new_miss_restarts_the_hint_timer() {
        let mut state = riddle_ready();
        submit(&mut state, "one");
        let stale = state.next_hint_task().expect("first timer");
        submit(&mut state, "two");
        let live = state.next_hint_task().expect("second timer");
        assert_ne!(stale, live);

        state.apply(stale.action);
        assert!(state.hint_visible);

        state.apply(live.action);
        assert!(!state.hint_visible);
    }

    #[test]
    fn correct_answer_does_not_touch_a_pending_hint() {
        let mut state = riddle_ready();
        submit(&mut state, "nope");
        let pending = state.next_hint_task();
        submit(&mut state, "ecell");
        assert!(state.hint_visible);
        assert_eq!(state.next_hint_task(), pending);
    }

    #[test]
    fn closing_the_modal_keeps_the_verdict() {
        let mut state = riddle_ready();
        submit(&mut state, "nope");
        state.apply(Action::CloseOutcome);

        assert!(!state.outcome_visible);
        assert_eq!(state.phase(), Phase::Riddle);
        assert!(!state.is_correct);
        assert_eq!(state.hint, config::RHYMING_HINT);
        assert!(state.hint_visible);
    }

    #[test]
    fn answer_text_survives_submission() {
        let mut state = riddle_ready();
        submit(&mut state, "almost");
        assert_eq!(state.answer, "almost");
    }

    #[test]
    fn reduce_reuses_the_state_when_nothing_changes() {
        let state = Rc::new(riddle_ready());
        let next = state.clone().reduce(Action::HideHint(42));
        assert!(Rc::ptr_eq(&state, &next));

        let next = state.clone().reduce(Action::SetAnswer("ecell".into()));
        assert!(!Rc::ptr_eq(&state, &next));
        assert_eq!(next.answer, "ecell");
    }
}
