//! The data-fetching boundary between the catalog and PokéAPI.

use crate::api::Api;
use crate::api::Blob;
use crate::api::Error;
use crate::catalog::CatalogEntry;
use crate::chain::EvolutionNode;
use crate::model::Pokemon;
use crate::model::Species;
use crate::moves;
use crate::moves::LearnedMove;
use crate::species::SpeciesInfo;

/// How many detail requests a listing keeps in flight at once.
const FETCH_WORKERS: usize = 8;

/// A source of catalog data.
///
/// Each call is a single, independent attempt; implementations neither
/// cache nor retry. A failed fetch is an `Err`, while a successful fetch of
/// absent data is an empty result.
pub trait Source: Send + Sync {
  /// Returns the first `limit` entries of the catalog, in catalog order.
  fn entries(&self, limit: usize) -> Result<Vec<CatalogEntry>, Error>;

  /// Returns descriptive information about the species of entry `id`.
  fn species(&self, id: u32) -> Result<SpeciesInfo, Error>;

  /// Returns the evolution chain entry `id` belongs to, if it has one.
  fn evolution(&self, id: u32) -> Result<Option<EvolutionNode>, Error>;

  /// Returns the moves entry `id` learns by level-up, lowest level first.
  fn moves(&self, id: u32) -> Result<Vec<LearnedMove>, Error>;

  /// Returns the raw bytes at `url`, such as a sprite image.
  fn blob(&self, url: &str) -> Result<Vec<u8>, Error>;
}

impl Source for Api {
  fn entries(&self, limit: usize) -> Result<Vec<CatalogEntry>, Error> {
    let listing = self.listing::<Pokemon>(limit)?;

    let entries = load_chunked(&listing, FETCH_WORKERS, |r| {
      r.load(self).map(|pokemon| CatalogEntry::from(&pokemon))
    })?;
    log::info!("loaded {} catalog entries", entries.len());
    Ok(entries)
  }

  fn species(&self, id: u32) -> Result<SpeciesInfo, Error> {
    let species = self.by_id::<Species>(id)?;
    Ok(SpeciesInfo::from(&species))
  }

  fn evolution(&self, id: u32) -> Result<Option<EvolutionNode>, Error> {
    let species = self.by_id::<Species>(id)?;
    let link = match &species.evolution_chain {
      Some(link) => link,
      None => return Ok(None),
    };

    let family = link.family().load(self)?;
    Ok(Some(EvolutionNode::from(&family.base_stage)))
  }

  fn moves(&self, id: u32) -> Result<Vec<LearnedMove>, Error> {
    let pokemon = self.by_id::<Pokemon>(id)?;
    Ok(moves::level_up_moves(&pokemon))
  }

  fn blob(&self, url: &str) -> Result<Vec<u8>, Error> {
    Blob::new(url.to_string()).load(self)
  }
}

/// Runs `load` over `items`, at most `workers` at a time, keeping order.
///
/// The first failure fails the whole batch, and no later chunk is started.
fn load_chunked<T, U, F>(
  items: &[T],
  workers: usize,
  load: F,
) -> Result<Vec<U>, Error>
where
  T: Sync,
  U: Send,
  F: Fn(&T) -> Result<U, Error> + Sync,
{
  let load = &load;
  let mut loaded = Vec::with_capacity(items.len());
  for chunk in items.chunks(workers.max(1)) {
    let results = crossbeam::thread::scope(|s| {
      let handles = chunk
        .iter()
        .map(|item| s.spawn(move |_| load(item)))
        .collect::<Vec<_>>();
      handles
        .into_iter()
        .map(|h| h.join())
        .collect::<Vec<_>>()
    })
    .map_err(|_| worker_panicked())?;

    for result in results {
      loaded.push(result.map_err(|_| worker_panicked())??);
    }
  }
  Ok(loaded)
}

fn worker_panicked() -> Error {
  Error::Io(std::io::Error::new(
    std::io::ErrorKind::Other,
    "fetch worker panicked",
  ))
}
