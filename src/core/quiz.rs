//! # Quiz Session
//!
//! In-progress answers for the open article's quiz, plus whether results have
//! been revealed. A session is created fresh every time an article is
//! selected and dropped when the selection is cleared.
//!
//! The session does not own the questions. Every operation that needs them
//! takes the article's `quiz` slice, so the content store stays the single
//! source of truth for correct answers.

use std::collections::BTreeMap;
use std::fmt;

use crate::core::content::Question;

/// Rejected `record_answer` call. The session is unchanged when one is returned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizError {
    QuestionOutOfRange { index: usize, len: usize },
    UnknownOption { index: usize, option: String },
}

impl fmt::Display for QuizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuizError::QuestionOutOfRange { index, len } => {
                write!(f, "question {index} out of range (quiz has {len})")
            }
            QuizError::UnknownOption { index, option } => {
                write!(f, "{option:?} is not an option of question {index}")
            }
        }
    }
}

impl std::error::Error for QuizError {}

/// How a single question stands against the recorded answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionOutcome<'a> {
    Correct,
    Incorrect { correct: &'a str },
    Unanswered { correct: &'a str },
}

impl QuestionOutcome<'_> {
    pub fn is_correct(&self) -> bool {
        matches!(self, QuestionOutcome::Correct)
    }
}

/// Score summary, available once results are revealed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizResults<'a> {
    pub score: usize,
    pub total: usize,
    pub outcomes: Vec<QuestionOutcome<'a>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSession {
    answers: BTreeMap<usize, String>,
    results_revealed: bool,
}

impl QuizSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `option` as the answer to `quiz[index]`, replacing any earlier choice.
    pub fn record_answer(
        &mut self,
        quiz: &[Question],
        index: usize,
        option: &str,
    ) -> Result<(), QuizError> {
        let question = quiz.get(index).ok_or(QuizError::QuestionOutOfRange {
            index,
            len: quiz.len(),
        })?;
        if !question.has_option(option) {
            return Err(QuizError::UnknownOption {
                index,
                option: option.to_string(),
            });
        }
        self.answers.insert(index, option.to_string());
        Ok(())
    }

    /// Reveal results. Allowed with unanswered questions; there is no way back.
    pub fn submit(&mut self) {
        self.results_revealed = true;
    }

    pub fn results_revealed(&self) -> bool {
        self.results_revealed
    }

    pub fn answer(&self, index: usize) -> Option<&str> {
        self.answers.get(&index).map(String::as_str)
    }

    pub fn answered_count(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Number of questions whose recorded answer equals the correct option.
    pub fn score(&self, quiz: &[Question]) -> usize {
        quiz.iter()
            .enumerate()
            .filter(|(i, q)| self.answer(*i) == Some(q.correct.as_str()))
            .count()
    }

    pub fn outcome<'q>(&self, quiz: &'q [Question], index: usize) -> Option<QuestionOutcome<'q>> {
        let question = quiz.get(index)?;
        let correct = question.correct.as_str();
        Some(match self.answer(index) {
            Some(answer) if answer == correct => QuestionOutcome::Correct,
            Some(_) => QuestionOutcome::Incorrect { correct },
            None => QuestionOutcome::Unanswered { correct },
        })
    }

    /// Results, or `None` until [`submit`](Self::submit) has been called.
    pub fn results<'q>(&self, quiz: &'q [Question]) -> Option<QuizResults<'q>> {
        if !self.results_revealed {
            return None;
        }
        let outcomes: Vec<QuestionOutcome<'q>> = (0..quiz.len())
            .filter_map(|i| self.outcome(quiz, i))
            .collect();
        Some(QuizResults {
            score: outcomes.iter().filter(|o| o.is_correct()).count(),
            total: quiz.len(),
            outcomes,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::ContentStore;
    use proptest::prelude::*;

    fn quantum_quiz() -> Vec<Question> {
        ContentStore::sample().article(2).unwrap().quiz.clone()
    }

    #[test]
    fn test_new_session_is_empty_and_hidden() {
        let session = QuizSession::new();
        assert!(session.is_empty());
        assert!(!session.results_revealed());
        assert_eq!(session.score(&quantum_quiz()), 0);
    }

    #[test]
    fn test_quantum_scenario_scores_one() {
        let quiz = quantum_quiz();
        let mut session = QuizSession::new();
        session.record_answer(&quiz, 0, "1000").unwrap();
        session.record_answer(&quiz, 1, "Lower cost").unwrap();
        session.submit();

        assert_eq!(session.score(&quiz), 1);
        assert_eq!(session.outcome(&quiz, 0), Some(QuestionOutcome::Correct));
        assert_eq!(
            session.outcome(&quiz, 1),
            Some(QuestionOutcome::Incorrect {
                correct: "Faster calculations"
            })
        );
    }

    #[test]
    fn test_results_score_counts_correct_outcomes() {
        let quiz = quantum_quiz();
        let mut session = QuizSession::new();
        session.record_answer(&quiz, 0, "1000").unwrap();
        session.record_answer(&quiz, 1, "Lower cost").unwrap();
        session.submit();

        let results = session.results(&quiz).unwrap();
        let correct: Vec<bool> = results.outcomes.iter().map(|o| o.is_correct()).collect();
        assert_eq!(correct, vec![true, false]);
        assert_eq!(results.score, session.score(&quiz));
    }

    #[test]
    fn test_submit_with_nothing_answered() {
        let quiz = quantum_quiz();
        let mut session = QuizSession::new();
        session.submit();

        let results = session.results(&quiz).unwrap();
        assert_eq!(results.score, 0);
        assert_eq!(results.total, 2);
        assert!(matches!(
            results.outcomes[0],
            QuestionOutcome::Unanswered { correct: "1000" }
        ));
    }

    #[test]
    fn test_results_hidden_until_submit() {
        let quiz = quantum_quiz();
        let mut session = QuizSession::new();
        session.record_answer(&quiz, 0, "1000").unwrap();
        assert!(session.results(&quiz).is_none());
        // Score is still computable before submission
        assert_eq!(session.score(&quiz), 1);
    }

    #[test]
    fn test_last_write_wins() {
        let quiz = quantum_quiz();
        let mut session = QuizSession::new();
        session.record_answer(&quiz, 1, "Lower cost").unwrap();
        session.record_answer(&quiz, 1, "Faster calculations").unwrap();
        assert_eq!(session.answer(1), Some("Faster calculations"));
        assert_eq!(session.answered_count(), 1);
    }

    #[test]
    fn test_answers_can_change_after_submit() {
        let quiz = quantum_quiz();
        let mut session = QuizSession::new();
        session.record_answer(&quiz, 0, "500").unwrap();
        session.submit();
        assert_eq!(session.score(&quiz), 0);

        session.record_answer(&quiz, 0, "1000").unwrap();
        assert!(session.results_revealed());
        assert_eq!(session.results(&quiz).unwrap().score, 1);
    }

    #[test]
    fn test_out_of_range_is_rejected_without_change() {
        let quiz = quantum_quiz();
        let mut session = QuizSession::new();
        let err = session.record_answer(&quiz, 2, "1000").unwrap_err();
        assert_eq!(err, QuizError::QuestionOutOfRange { index: 2, len: 2 });
        assert!(session.is_empty());
    }

    #[test]
    fn test_foreign_option_is_rejected_without_change() {
        let quiz = quantum_quiz();
        let mut session = QuizSession::new();
        session.record_answer(&quiz, 0, "750").unwrap();
        let err = session.record_answer(&quiz, 0, "Lower cost").unwrap_err();
        assert!(matches!(err, QuizError::UnknownOption { index: 0, .. }));
        assert_eq!(session.answer(0), Some("750"));
    }

    #[test]
    fn test_outcome_out_of_range_is_none() {
        let session = QuizSession::new();
        assert!(session.outcome(&quantum_quiz(), 5).is_none());
    }

    proptest! {
        #[test]
        fn prop_score_within_bounds(picks in prop::collection::vec((0usize..2, 0usize..4), 0..10)) {
            let quiz = quantum_quiz();
            let mut session = QuizSession::new();
            for (question, option) in picks {
                let option = quiz[question].options[option].clone();
                session.record_answer(&quiz, question, &option).unwrap();
            }
            prop_assert!(session.score(&quiz) <= quiz.len());
        }

        #[test]
        fn prop_record_answer_is_idempotent(question in 0usize..2, option in 0usize..4) {
            let quiz = quantum_quiz();
            let option = quiz[question].options[option].clone();

            let mut once = QuizSession::new();
            once.record_answer(&quiz, question, &option).unwrap();
            let mut twice = once.clone();
            twice.record_answer(&quiz, question, &option).unwrap();

            prop_assert_eq!(once, twice);
        }
    }
}
