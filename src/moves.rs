//! Moves a Pokemon learns by leveling up.

use crate::model::Pokemon;

/// The learn method for moves picked up automatically on level-up.
pub const LEVEL_UP: &str = "level-up";

/// A move learned on reaching some level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LearnedMove {
  /// The move's API name.
  pub name: String,
  /// The level the move is learned at.
  pub level: u32,
}

/// Returns the moves `pokemon` learns by leveling up, lowest level first.
///
/// When a move is learned by level-up in several version groups, the level
/// from the last (most recent) one is used. Moves only learned some other way
/// (TMs, tutors, breeding) are left out. Moves sharing a level keep the
/// order the service lists them in.
pub fn level_up_moves(pokemon: &Pokemon) -> Vec<LearnedMove> {
  let mut moves = pokemon
    .moves
    .iter()
    .filter_map(|m| {
      let detail = m
        .details
        .iter()
        .rev()
        .find(|d| d.method.name() == Some(LEVEL_UP))?;
      Some(LearnedMove {
        name: m.mov.name()?.to_string(),
        level: detail.level,
      })
    })
    .collect::<Vec<_>>();

  // `sort_by_key` is stable.
  moves.sort_by_key(|m| m.level);
  moves
}
