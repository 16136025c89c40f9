//! Catalog entries and searching through them.

use crate::model::Pokemon;

/// One catalog item: the data needed to list a Pokemon and show its
/// overview.
///
/// Entries are immutable once built from a [`Pokemon`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
  /// The Pokemon's numeric ID; unique within the catalog.
  pub id: u32,
  /// The Pokemon's API name, a lowercase slug.
  pub name: String,
  /// The URL of the default front sprite, if the service has one.
  pub image: Option<String>,
  /// Type names, primary type first.
  pub types: Vec<String>,
  /// Height, in decimetres.
  pub height: u32,
  /// Weight, in hectograms.
  pub weight: u32,
  /// Ability names, in slot order.
  pub abilities: Vec<String>,
  /// Base stats, in the order the service lists them.
  pub stats: Vec<BaseStat>,
}

/// A named base stat value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseStat {
  /// The stat's API name, such as `"special-attack"`.
  pub name: String,
  /// The base value, in `0..=255`.
  pub value: u8,
}

impl CatalogEntry {
  /// Returns the type used for theming this entry.
  pub fn primary_type(&self) -> Option<&str> {
    self.types.first().map(String::as_str)
  }

  /// Returns whether this entry matches a search query.
  ///
  /// The name is matched case-insensitively; the ID is matched against the
  /// raw query. Both use substring semantics, so the empty query matches
  /// everything.
  pub fn matches(&self, query: &str) -> bool {
    self.name.to_lowercase().contains(&query.to_lowercase())
      || self.id.to_string().contains(query)
  }
}

impl From<&Pokemon> for CatalogEntry {
  fn from(pokemon: &Pokemon) -> Self {
    let mut types = pokemon.types.iter().collect::<Vec<_>>();
    types.sort_by_key(|t| t.slot);

    let mut abilities = pokemon.abilities.iter().collect::<Vec<_>>();
    abilities.sort_by_key(|a| a.slot);

    Self {
      id: pokemon.id,
      name: pokemon.name.clone(),
      image: pokemon.sprites.front_default.clone(),
      types: types
        .into_iter()
        .filter_map(|t| t.ty.name())
        .map(String::from)
        .collect(),
      height: pokemon.height,
      weight: pokemon.weight,
      abilities: abilities
        .into_iter()
        .filter_map(|a| a.ability.name())
        .map(String::from)
        .collect(),
      stats: pokemon
        .stats
        .iter()
        .filter_map(|s| {
          Some(BaseStat {
            name: s.stat.name()?.to_string(),
            value: s.base_stat,
          })
        })
        .collect(),
    }
  }
}

/// Returns the entries matching `query`, in their original order.
///
/// An empty query returns every entry; a query matching nothing returns an
/// empty vector.
pub fn filter<'a>(
  entries: &'a [CatalogEntry],
  query: &str,
) -> Vec<&'a CatalogEntry> {
  if query.is_empty() {
    return entries.iter().collect();
  }

  entries.iter().filter(|e| e.matches(query)).collect()
}

#[cfg(test)]
pub(crate) fn entry(id: u32, name: &str) -> CatalogEntry {
  CatalogEntry {
    id,
    name: name.to_string(),
    image: None,
    types: vec!["normal".to_string()],
    height: 10,
    weight: 100,
    abilities: Vec::new(),
    stats: Vec::new(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use crate::model::pokemon::fixtures;

  fn starters() -> Vec<CatalogEntry> {
    vec![
      entry(1, "bulbasaur"),
      entry(4, "charmander"),
      entry(7, "squirtle"),
      entry(25, "pikachu"),
      entry(125, "electabuzz"),
    ]
  }

  fn ids(entries: &[&CatalogEntry]) -> Vec<u32> {
    entries.iter().map(|e| e.id).collect()
  }

  #[test]
  fn matches_by_id_or_name() {
    let list = vec![entry(1, "bulbasaur"), entry(25, "pikachu")];
    assert_eq!(ids(&filter(&list, "25")), [25]);
    assert_eq!(ids(&filter(&list, "bulb")), [1]);
    assert!(filter(&list, "z").is_empty());
  }

  #[test]
  fn empty_query_is_identity() {
    let list = starters();
    let all = filter(&list, "");
    assert_eq!(all.len(), list.len());
    for (a, b) in all.iter().zip(&list) {
      assert_eq!(*a, b);
    }

    assert!(filter(&[], "").is_empty());
  }

  #[test]
  fn names_match_case_insensitively() {
    let list = starters();
    assert_eq!(ids(&filter(&list, "PIKA")), [25]);
    assert_eq!(ids(&filter(&list, "ChAr")), [4]);
  }

  #[test]
  fn ids_match_as_substrings() {
    let list = starters();
    // "25" is in both 25 and 125.
    assert_eq!(ids(&filter(&list, "25")), [25, 125]);
    assert_eq!(ids(&filter(&list, "7")), [7]);
  }

  #[test]
  fn results_preserve_order() {
    let list = starters();
    // Every name except "squirtle" contains an "a".
    let hits = ids(&filter(&list, "a"));
    assert_eq!(hits, [1, 4, 25, 125]);

    let mut last = None;
    for id in hits {
      let pos = list.iter().position(|e| e.id == id).unwrap();
      assert!(last.map(|l| l < pos).unwrap_or(true));
      last = Some(pos);
    }
  }

  #[test]
  fn filtering_is_idempotent() {
    let list = starters();
    for query in &["", "a", "1", "zzz", "SQUIRT"] {
      assert_eq!(filter(&list, query), filter(&list, query));
    }
  }

  #[test]
  fn entry_from_pokemon() {
    let pikachu: Pokemon = serde_json::from_str(fixtures::PIKACHU).unwrap();
    let entry = CatalogEntry::from(&pikachu);

    assert_eq!(entry.id, 25);
    assert_eq!(entry.name, "pikachu");
    assert_eq!(entry.primary_type(), Some("electric"));
    assert_eq!(entry.abilities, ["static", "lightning-rod"]);
    assert_eq!(
      entry.stats[0],
      BaseStat {
        name: "hp".to_string(),
        value: 35
      }
    );
    assert!(entry.image.unwrap().ends_with("/25.png"));
  }
}
