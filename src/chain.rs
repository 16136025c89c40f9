//! Evolution chains as owned trees, and flattening them into display rows.

use std::fmt;

use crate::display;
use crate::model::evolution::Stage;

/// The deepest chain [`render()`] will walk before giving up.
///
/// Real chains are at most three stages deep.
pub const MAX_DEPTH: usize = 32;

/// One species within an evolution chain, along with everything it evolves
/// into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvolutionNode {
  /// The species' API name.
  pub species: String,
  /// How the parent stage becomes this one; `None` for the root, and for
  /// stages the service lists no conditions for.
  pub transition: Option<Transition>,
  /// Stages this species evolves into, in service order.
  pub evolves_to: Vec<EvolutionNode>,
}

/// The condition under which one species evolves into another.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
  /// The trigger's API name, such as `"level-up"` or `"trade"`.
  pub trigger: String,
  /// The minimum level, if the trigger requires one.
  pub min_level: Option<u32>,
}

impl EvolutionNode {
  /// Creates a node with no transition and no children.
  pub fn new(species: impl Into<String>) -> Self {
    Self {
      species: species.into(),
      transition: None,
      evolves_to: Vec::new(),
    }
  }

  /// Adds a child reached through `transition`.
  pub fn evolves_to(
    mut self,
    transition: Option<Transition>,
    mut child: EvolutionNode,
  ) -> Self {
    child.transition = transition;
    self.evolves_to.push(child);
    self
  }
}

impl Transition {
  /// Creates a new transition.
  pub fn new(trigger: impl Into<String>, min_level: Option<u32>) -> Self {
    Self {
      trigger: trigger.into(),
      min_level,
    }
  }
}

impl fmt::Display for Transition {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    f.write_str(&display::humanize(&self.trigger))?;
    if let Some(level) = self.min_level {
      write!(f, " (Level {})", level)?;
    }
    Ok(())
  }
}

impl From<&Stage> for EvolutionNode {
  fn from(stage: &Stage) -> Self {
    let transition = stage.conditions.first().and_then(|c| {
      let trigger = c.trigger.name().filter(|t| !t.is_empty())?;
      Some(Transition::new(trigger, c.min_level.filter(|&l| l > 0)))
    });

    Self {
      species: stage.species.name().unwrap_or_default().to_string(),
      transition,
      evolves_to: stage.evolves_to.iter().map(Self::from).collect(),
    }
  }
}

/// A line of a rendered evolution chain.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Row {
  /// A species in the chain.
  Species {
    /// Nesting depth, starting at zero for the root.
    depth: usize,
    /// One-based stage number, `depth + 1`.
    rank: usize,
    /// The species' API name.
    name: String,
  },
  /// The step from a species to the one in the next [`Row::Species`].
  Transition {
    /// Nesting depth of the species this transition leads to.
    depth: usize,
    /// The condition, if known.
    transition: Option<Transition>,
  },
}

impl Row {
  /// Returns this row's nesting depth.
  pub fn depth(&self) -> usize {
    match self {
      Row::Species { depth, .. } | Row::Transition { depth, .. } => *depth,
    }
  }
}

impl fmt::Display for Row {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Row::Species { rank, name, .. } => write!(f, "{}. {}", rank, name),
      Row::Transition {
        transition: Some(t),
        ..
      } => fmt::Display::fmt(t, f),
      Row::Transition {
        transition: None, ..
      } => Ok(()),
    }
  }
}

/// An evolution chain that could not be rendered.
#[derive(Debug, thiserror::Error)]
pub enum ChainError {
  /// The chain nests deeper than [`MAX_DEPTH`].
  #[error("evolution chain is deeper than {limit} stages")]
  TooDeep {
    /// The depth limit that was exceeded.
    limit: usize,
  },
}

/// Flattens an evolution chain into rows, depth-first and in source order.
///
/// Each species row is followed, for every child, by a transition row and
/// then the child's own rows. An absent chain produces no rows.
pub fn render(root: Option<&EvolutionNode>) -> Result<Vec<Row>, ChainError> {
  let mut rows = Vec::new();
  if let Some(root) = root {
    walk(root, 0, &mut rows)?;
  }
  Ok(rows)
}

fn walk(
  node: &EvolutionNode,
  depth: usize,
  rows: &mut Vec<Row>,
) -> Result<(), ChainError> {
  if depth >= MAX_DEPTH {
    return Err(ChainError::TooDeep { limit: MAX_DEPTH });
  }

  rows.push(Row::Species {
    depth,
    rank: depth + 1,
    name: node.species.clone(),
  });

  for child in &node.evolves_to {
    rows.push(Row::Transition {
      depth: depth + 1,
      transition: child.transition.clone(),
    });
    walk(child, depth + 1, rows)?;
  }
  Ok(())
}
