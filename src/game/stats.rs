//! Results across the games played in one run

use super::Outcome;

/// Running totals for finished games
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    pub current_streak: usize,
    pub max_streak: usize,
    /// `guess_distribution[n]` counts wins in `n + 1` attempts
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    #[must_use]
    pub fn new(max_attempts: usize) -> Self {
        Self {
            guess_distribution: vec![0; max_attempts],
            ..Self::default()
        }
    }

    /// Count a finished game
    pub fn record(&mut self, outcome: &Outcome) {
        self.total_games += 1;

        match outcome {
            Outcome::Won { attempts } => {
                self.games_won += 1;
                self.current_streak += 1;
                self.max_streak = self.max_streak.max(self.current_streak);

                if *attempts > 0 {
                    if self.guess_distribution.len() < *attempts {
                        self.guess_distribution.resize(*attempts, 0);
                    }
                    self.guess_distribution[attempts - 1] += 1;
                }
            }
            Outcome::Lost { .. } => self.current_streak = 0,
        }
    }

    /// Percentage of games won, 0 when nothing was played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Word;

    fn loss() -> Outcome {
        Outcome::Lost {
            target: Word::new("slate").unwrap(),
        }
    }

    #[test]
    fn empty_statistics() {
        let stats = Statistics::new(6);
        assert_eq!(stats.total_games, 0);
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert_eq!(stats.guess_distribution, vec![0; 6]);
    }

    #[test]
    fn record_wins_and_losses() {
        let mut stats = Statistics::new(6);
        stats.record(&Outcome::Won { attempts: 3 });
        stats.record(&Outcome::Won { attempts: 3 });
        stats.record(&loss());
        stats.record(&Outcome::Won { attempts: 1 });

        assert_eq!(stats.total_games, 4);
        assert_eq!(stats.games_won, 3);
        assert_eq!(stats.current_streak, 1);
        assert_eq!(stats.max_streak, 2);
        assert_eq!(stats.guess_distribution, vec![1, 0, 2, 0, 0, 0]);
        assert!((stats.win_rate() - 75.0).abs() < 1e-9);
    }

    #[test]
    fn distribution_grows_for_longer_games() {
        let mut stats = Statistics::new(2);
        stats.record(&Outcome::Won { attempts: 4 });
        assert_eq!(stats.guess_distribution, vec![0, 0, 0, 1]);
    }
}
