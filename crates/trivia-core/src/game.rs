//! Next-question selection for game play.

use rand::{Rng, seq::IndexedRandom};

use crate::question::Question;

/// Pick one question uniformly at random from `candidates`.
///
/// `candidates` must already exclude the questions the player has seen.
/// Returns `None` when nothing is left, which ends the game.
pub fn choose_question<R>(candidates: &[Question], rng: &mut R) -> Option<Question>
where
  R: Rng + ?Sized,
{
  candidates.choose(rng).cloned()
}

#[cfg(test)]
mod tests {
  use std::collections::HashSet;

  use rand::{SeedableRng, rngs::StdRng};

  use super::*;

  fn question(id: i64) -> Question {
    Question {
      id,
      question:   format!("Question {id}?"),
      answer:     format!("Answer {id}"),
      category:   "1".into(),
      difficulty: 1,
    }
  }

  #[test]
  fn empty_candidates_end_the_game() {
    let mut rng = StdRng::seed_from_u64(7);
    assert_eq!(choose_question(&[], &mut rng), None);
  }

  #[test]
  fn single_candidate_is_always_chosen() {
    let mut rng = StdRng::seed_from_u64(7);
    let only = [question(4)];
    for _ in 0..20 {
      assert_eq!(choose_question(&only, &mut rng).map(|q| q.id), Some(4));
    }
  }

  #[test]
  fn every_candidate_is_reachable() {
    let mut rng = StdRng::seed_from_u64(42);
    let candidates: Vec<Question> = (1..=5).map(question).collect();
    let seen: HashSet<i64> = (0..500)
      .filter_map(|_| choose_question(&candidates, &mut rng))
      .map(|q| q.id)
      .collect();
    assert_eq!(seen, (1..=5).collect());
  }
}
