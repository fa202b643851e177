//! Test session state machine
//!
//! A session is an immutable snapshot. `advance` never touches the receiver;
//! it returns the next snapshot, so a reader holding an older one never sees
//! a half-applied answer. The battery is shared between snapshots.
//!
//! Stages: NotStarted -> InProgress -> Complete. Complete is terminal; retesting
//! means starting a new session.

use std::sync::Arc;

use super::plates::{PlateBattery, TestPlate};
use crate::error::{CoreError, CoreResult};

/// Where a session is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStage {
    NotStarted,
    InProgress,
    Complete,
}

/// One user's run through a plate battery
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestSession {
    battery: Arc<PlateBattery>,
    current_index: usize,
    answers: Vec<String>,
    complete: bool,
}

impl TestSession {
    pub fn new(battery: Arc<PlateBattery>) -> Self {
        Self {
            battery,
            current_index: 0,
            answers: Vec::new(),
            complete: false,
        }
    }

    /// Session over the standard ten-plate battery
    pub fn standard() -> Self {
        Self::new(Arc::new(PlateBattery::standard()))
    }

    /// Record the answer for the current plate and move to the next one
    pub fn advance(&self, chosen_option: &str) -> CoreResult<TestSession> {
        if self.complete {
            tracing::warn!("Rejected answer for completed session");
            return Err(CoreError::SessionComplete { total: self.battery.len() });
        }

        let plate = self.current_plate().ok_or(CoreError::SessionComplete {
            total: self.battery.len(),
        })?;

        if !plate.offers(chosen_option) {
            tracing::warn!(plate_id = plate.id, option = chosen_option, "Rejected option not offered by plate");
            return Err(CoreError::OptionNotOffered {
                plate_id: plate.id,
                option: chosen_option.to_string(),
            });
        }

        let mut answers = Vec::with_capacity(self.answers.len() + 1);
        answers.extend_from_slice(&self.answers);
        answers.push(chosen_option.to_string());

        let current_index = self.current_index + 1;
        let complete = current_index == self.battery.len();

        tracing::debug!(
            plate_id = plate.id,
            answered = current_index,
            total = self.battery.len(),
            complete,
            "Session advanced"
        );

        Ok(TestSession {
            battery: Arc::clone(&self.battery),
            current_index,
            answers,
            complete,
        })
    }

    pub fn stage(&self) -> SessionStage {
        if self.complete {
            SessionStage::Complete
        } else if self.answers.is_empty() {
            SessionStage::NotStarted
        } else {
            SessionStage::InProgress
        }
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Plate awaiting an answer, `None` once complete
    pub fn current_plate(&self) -> Option<&TestPlate> {
        if self.complete {
            None
        } else {
            self.battery.get(self.current_index)
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// 1-based number of the question on screen, capped at the plate count
    pub fn question_number(&self) -> usize {
        (self.current_index + 1).min(self.battery.len())
    }

    /// Progress shown while answering: current question over plate count
    pub fn progress_percent(&self) -> f64 {
        self.question_number() as f64 / self.battery.len() as f64 * 100.0
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn plates(&self) -> &[TestPlate] {
        self.battery.plates()
    }

    pub fn battery(&self) -> &Arc<PlateBattery> {
        &self.battery
    }

    pub fn total_plates(&self) -> usize {
        self.battery.len()
    }

    /// Answers so far that match their plate's expected answer
    pub fn correct_count(&self) -> usize {
        self.answers
            .iter()
            .zip(self.battery.plates())
            .filter(|(answer, plate)| plate.is_correct(answer))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vision::plates::CANNOT_SEE_OPTION;
    use approx::assert_relative_eq;

    fn answer_all_correct(mut session: TestSession) -> TestSession {
        while let Some(plate) = session.current_plate() {
            let correct = plate.correct_answer.clone();
            session = session.advance(&correct).unwrap();
        }
        session
    }

    #[test]
    fn test_new_session_not_started() {
        let session = TestSession::standard();
        assert_eq!(session.stage(), SessionStage::NotStarted);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.question_number(), 1);
        assert_relative_eq!(session.progress_percent(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_advance_leaves_original_untouched() {
        let start = TestSession::standard();
        let next = start.advance("12").unwrap();

        assert_eq!(start.answers().len(), 0);
        assert_eq!(next.answers(), &["12".to_string()]);
        assert_eq!(next.current_index(), 1);
        assert_eq!(next.stage(), SessionStage::InProgress);
        assert!(Arc::ptr_eq(start.battery(), next.battery()));
    }

    #[test]
    fn test_answers_len_tracks_index() {
        let mut session = TestSession::standard();
        for _ in 0..5 {
            session = session.advance(CANNOT_SEE_OPTION).unwrap();
            assert_eq!(session.answers().len(), session.current_index());
        }
    }

    #[test]
    fn test_completes_after_last_plate() {
        let session = answer_all_correct(TestSession::standard());
        assert!(session.is_complete());
        assert_eq!(session.stage(), SessionStage::Complete);
        assert_eq!(session.answers().len(), 10);
        assert_eq!(session.correct_count(), 10);
        assert!(session.current_plate().is_none());
        assert_relative_eq!(session.progress_percent(), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_advance_after_complete_is_invalid_state() {
        let session = answer_all_correct(TestSession::standard());
        let err = session.advance("57").unwrap_err();
        assert_eq!(err, CoreError::SessionComplete { total: 10 });
        assert_eq!(err.kind(), crate::error::ErrorKind::InvalidState);
    }

    #[test]
    fn test_option_not_offered_is_invalid_input() {
        let session = TestSession::standard();
        let err = session.advance("99").unwrap_err();
        assert_eq!(err, CoreError::OptionNotOffered { plate_id: 1, option: "99".to_string() });
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn test_correct_count_partial() {
        let session = TestSession::standard()
            .advance("12")
            .unwrap()
            .advance("3")
            .unwrap();
        assert_eq!(session.correct_count(), 1);
    }
}
