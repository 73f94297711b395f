//! Game rules and session flow
//!
//! A [`GameSession`] owns one game. [`play`] drives it against any front end
//! that implements [`InputSource`] and [`Presenter`].

mod driver;
mod error;
mod interface;
mod session;
mod stats;
mod vocabulary;

pub use driver::{play, run_games};
pub use error::GameError;
pub use interface::{InputSource, Presenter, WordSource};
pub use session::{GameSession, GameState, Outcome, Rules, win_message};
pub use stats::Statistics;
pub use vocabulary::Vocabulary;
