//! Utility for asynchronously downloading catalog data.
//!
//! The [`Dex`] type hands out whatever has been downloaded so far, and starts
//! a download the first time something is asked for. Downloads are
//! fire-and-forget: each runs on its own thread, once, and is never retried
//! or cancelled.

use std::fmt;
use std::hash::Hash;
use std::sync::Arc;
use std::thread;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;

use image::RgbaImage;

use pkcat::catalog::CatalogEntry;
use pkcat::chain::EvolutionNode;
use pkcat::moves::LearnedMove;
use pkcat::species::SpeciesInfo;
use pkcat::Source;

/// The state of a download.
pub enum Fetch<T> {
  /// The download is still running.
  Pending,
  /// The download finished.
  Ready(Arc<T>),
  /// The download failed; the message is for logs and diagnostics.
  Failed(String),
}

// Derived `Clone` would require `T: Clone`.
impl<T> Clone for Fetch<T> {
  fn clone(&self) -> Self {
    match self {
      Fetch::Pending => Fetch::Pending,
      Fetch::Ready(val) => Fetch::Ready(Arc::clone(val)),
      Fetch::Failed(msg) => Fetch::Failed(msg.clone()),
    }
  }
}

impl<T> fmt::Debug for Fetch<T> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      Fetch::Pending => f.write_str("Pending"),
      Fetch::Ready(_) => f.write_str("Ready(..)"),
      Fetch::Failed(msg) => write!(f, "Failed({:?})", msg),
    }
  }
}

impl<T> Fetch<T> {
  /// Returns the downloaded value, if there is one.
  pub fn ready(&self) -> Option<&Arc<T>> {
    match self {
      Fetch::Ready(val) => Some(val),
      _ => None,
    }
  }

  /// Returns whether the download is still running.
  #[cfg(test)]
  pub fn is_pending(&self) -> bool {
    matches!(self, Fetch::Pending)
  }
}

/// A table of downloads, keyed by what was asked for.
struct Table<K, T> {
  slots: Arc<DashMap<K, Fetch<T>>>,
}

impl<K, T> Table<K, T>
where
  K: Eq + Hash + Clone + fmt::Debug + Send + Sync + 'static,
  T: Send + Sync + 'static,
{
  fn new() -> Self {
    Self {
      slots: Default::default(),
    }
  }

  fn get(
    &self,
    key: K,
    load: impl FnOnce() -> Result<T, String> + Send + 'static,
  ) -> Fetch<T> {
    // If an entry exists, that means we already spawned the task.
    match self.slots.entry(key.clone()) {
      Entry::Occupied(e) => return e.get().clone(),
      Entry::Vacant(e) => {
        e.insert(Fetch::Pending);
      }
    }

    let slots = Arc::clone(&self.slots);
    thread::spawn(move || {
      let fetch = match load() {
        Ok(val) => Fetch::Ready(Arc::new(val)),
        Err(e) => {
          log::warn!("failed to load {:?}: {}", key, e);
          Fetch::Failed(e)
        }
      };
      slots.insert(key, fetch);
    });

    Fetch::Pending
  }
}

/// The "Dex", which contains asynchronously-loaded catalog data.
pub struct Dex {
  source: Arc<dyn Source>,
  page_limit: usize,

  entries: Table<(), Vec<CatalogEntry>>,
  species: Table<u32, SpeciesInfo>,
  evolutions: Table<u32, Option<EvolutionNode>>,
  moves: Table<u32, Vec<LearnedMove>>,
  sprites: Table<String, RgbaImage>,
}

impl Dex {
  /// Creates a new `Dex` that lists `page_limit` entries from `source`.
  pub fn new(source: Arc<dyn Source>, page_limit: usize) -> Self {
    Self {
      source,
      page_limit,
      entries: Table::new(),
      species: Table::new(),
      evolutions: Table::new(),
      moves: Table::new(),
      sprites: Table::new(),
    }
  }

  /// Returns the catalog listing.
  pub fn entries(&self) -> Fetch<Vec<CatalogEntry>> {
    let source = Arc::clone(&self.source);
    let limit = self.page_limit;
    self.entries.get((), move || {
      source.entries(limit).map_err(|e| e.to_string())
    })
  }

  /// Returns species information for entry `id`.
  pub fn species(&self, id: u32) -> Fetch<SpeciesInfo> {
    let source = Arc::clone(&self.source);
    self
      .species
      .get(id, move || source.species(id).map_err(|e| e.to_string()))
  }

  /// Returns the evolution chain for entry `id`.
  pub fn evolution(&self, id: u32) -> Fetch<Option<EvolutionNode>> {
    let source = Arc::clone(&self.source);
    self
      .evolutions
      .get(id, move || source.evolution(id).map_err(|e| e.to_string()))
  }

  /// Returns the level-up moves for entry `id`.
  pub fn moves(&self, id: u32) -> Fetch<Vec<LearnedMove>> {
    let source = Arc::clone(&self.source);
    self
      .moves
      .get(id, move || source.moves(id).map_err(|e| e.to_string()))
  }

  /// Returns the decoded sprite at `url`.
  pub fn sprite(&self, url: &str) -> Fetch<RgbaImage> {
    let source = Arc::clone(&self.source);
    let owned = url.to_string();
    self.sprites.get(url.to_string(), move || {
      let bytes = source.blob(&owned).map_err(|e| e.to_string())?;
      let image = image::load_from_memory(&bytes).map_err(|e| e.to_string())?;
      Ok(image.into_rgba8())
    })
  }
}

#[cfg(test)]
pub mod testing {
  //! A canned [`Source`] for tests.

  use std::sync::atomic::AtomicUsize;
  use std::sync::atomic::Ordering;
  use std::time::Duration;
  use std::time::Instant;

  use pkcat::api;
  use pkcat::catalog::BaseStat;
  use pkcat::chain::Transition;

  use super::*;

  /// A [`Source`] serving fixed data; entry ids above 1000 fail.
  #[derive(Default)]
  pub struct FakeSource {
    pub calls: AtomicUsize,
    pub fail_entries: bool,
  }

  pub fn entry(id: u32, name: &str, types: &[&str]) -> CatalogEntry {
    CatalogEntry {
      id,
      name: name.to_string(),
      image: None,
      types: types.iter().map(|t| t.to_string()).collect(),
      height: 7,
      weight: 69,
      abilities: vec!["overgrow".to_string(), "chlorophyll".to_string()],
      stats: vec![
        BaseStat {
          name: "hp".to_string(),
          value: 45,
        },
        BaseStat {
          name: "special-attack".to_string(),
          value: 65,
        },
      ],
    }
  }

  fn not_found(what: &str) -> api::Error {
    api::Error::Io(std::io::Error::new(std::io::ErrorKind::NotFound, what))
  }

  impl Source for FakeSource {
    fn entries(&self, limit: usize) -> Result<Vec<CatalogEntry>, api::Error> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      if self.fail_entries {
        return Err(not_found("pokemon"));
      }

      let all = vec![
        entry(1, "bulbasaur", &["grass", "poison"]),
        entry(4, "charmander", &["fire"]),
        entry(25, "pikachu", &["electric"]),
      ];
      Ok(all.into_iter().take(limit).collect())
    }

    fn species(&self, id: u32) -> Result<SpeciesInfo, api::Error> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      if id > 1000 {
        return Err(not_found("pokemon-species"));
      }
      Ok(SpeciesInfo {
        genus: Some("Seed Pokémon".to_string()),
        generation: "generation-i".to_string(),
        habitat: None,
        egg_groups: vec!["monster".to_string()],
        growth_rate: "medium-slow".to_string(),
        capture_rate: 45,
        base_happiness: Some(50),
        description: Some("A strange seed.".to_string()),
      })
    }

    fn evolution(&self, id: u32) -> Result<Option<EvolutionNode>, api::Error> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      match id {
        1 => Ok(Some(EvolutionNode::new("bulbasaur").evolves_to(
          Some(Transition::new("level-up", Some(16))),
          EvolutionNode::new("ivysaur"),
        ))),
        25 => Ok(None),
        _ => Err(not_found("evolution-chain")),
      }
    }

    fn moves(&self, id: u32) -> Result<Vec<LearnedMove>, api::Error> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      match id {
        1 => Ok(vec![
          LearnedMove {
            name: "tackle".to_string(),
            level: 1,
          },
          LearnedMove {
            name: "vine-whip".to_string(),
            level: 3,
          },
        ]),
        25 => Ok(Vec::new()),
        _ => Err(not_found("pokemon")),
      }
    }

    fn blob(&self, _: &str) -> Result<Vec<u8>, api::Error> {
      self.calls.fetch_add(1, Ordering::SeqCst);
      Err(not_found("sprite"))
    }
  }

  pub fn dex() -> Dex {
    Dex::new(Arc::new(FakeSource::default()), 20)
  }

  /// Polls `f` until it stops reporting [`Fetch::Pending`].
  pub fn settle<T>(mut f: impl FnMut() -> Fetch<T>) -> Fetch<T> {
    let deadline = Instant::now() + Duration::from_secs(5);
    loop {
      let fetch = f();
      if !fetch.is_pending() || Instant::now() > deadline {
        return fetch;
      }
      std::thread::sleep(Duration::from_millis(2));
    }
  }
}
