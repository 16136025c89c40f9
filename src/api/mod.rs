//! A PokéAPI client.

use std::io;
use std::io::Read;
use std::marker::PhantomData;

use reqwest::blocking::Client;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::model::Resource;

/// The public PokéAPI instance.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// An API client.
///
/// This type is the entrypoint for downloading information from PokéAPI.
/// Every call performs exactly one request per resource; nothing is cached
/// and failed requests are not retried.
///
/// `Api` is `Send + Sync`, so a single client can be shared between the
/// threads that perform independent fetches.
pub struct Api {
  base_url: String,
  client: Client,
}

/// Options for constructing an [`Api`].
#[derive(Clone, Debug)]
pub struct Options {
  /// The base URL to point the client at.
  pub base_url: String,
}

impl Default for Options {
  fn default() -> Self {
    Self {
      base_url: DEFAULT_BASE_URL.to_string(),
    }
  }
}

/// An [`Api`] client error.
#[derive(Debug, thiserror::Error)]
#[allow(missing_docs)]
pub enum Error {
  #[error(transparent)]
  Io(#[from] io::Error),

  #[error(transparent)]
  Http(#[from] reqwest::Error),

  #[error(transparent)]
  Json(#[from] serde_json::Error),

  #[error("mismatched API URLs (expected {expected_base} but got {actual_url} instead)")]
  ApiMismatch {
    expected_base: String,
    actual_url: String,
  },
}

impl Api {
  /// Creates a new [`Api`] pointed at the public PokéAPI instance.
  pub fn new() -> Self {
    Self::with_options(Options::default())
  }

  /// Creates a new [`Api`] with the given options.
  pub fn with_options(opts: Options) -> Self {
    Self {
      base_url: opts.base_url.trim_end_matches('/').to_string(),
      client: Client::new(),
    }
  }

  /// Returns the base URL this client sends requests to.
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Base request-generating function.
  fn request_blob(&self, url: &str) -> Result<Vec<u8>, Error> {
    log::debug!("GET {}", url);
    let mut buf = Vec::new();
    self
      .client
      .get(url)
      .send()?
      .error_for_status()?
      .read_to_end(&mut buf)?;
    Ok(buf)
  }

  /// Returns whether `url` is `base_url` itself or a path below it.
  ///
  /// A bare prefix match is not enough: `.../api/v2x` is not under
  /// `.../api/v2`.
  fn is_under_base(&self, url: &str) -> bool {
    match url.strip_prefix(self.base_url.as_str()) {
      Some(rest) => {
        rest.is_empty() || rest.starts_with('/') || rest.starts_with('?')
      }
      None => false,
    }
  }

  /// Base request-generating function, for JSON resources under
  /// `base_url`.
  fn request_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, Error> {
    if !self.is_under_base(url) {
      log::warn!("refusing to fetch {} (not under {})", url, self.base_url);
      return Err(Error::ApiMismatch {
        expected_base: self.base_url.clone(),
        actual_url: url.to_string(),
      });
    }

    let buf = self.request_blob(url)?;
    Ok(serde_json::from_reader(&mut &buf[..])?)
  }

  /// Returns the first `limit` listed resources of type `T`.
  ///
  /// Only a single page is requested; `next` links are not followed.
  pub fn listing<T: Endpoint>(
    &self,
    limit: usize,
  ) -> Result<Vec<Resource<T>>, Error> {
    let url = format!("{}/{}?limit={}", self.base_url, T::NAME, limit);
    let page = self.request_json::<Page<T>>(&url)?;
    Ok(page.results)
  }

  /// Try to get the specific resource of type `T` with the given name.
  pub fn by_name<T: Endpoint>(&self, name: &str) -> Result<T, Error> {
    self.request_json(&format!("{}/{}/{}", self.base_url, T::NAME, name))
  }

  /// Try to get the specific resource of type `T` with the given numeric ID.
  pub fn by_id<T: Endpoint>(&self, id: u32) -> Result<T, Error> {
    self.request_json(&format!("{}/{}/{}", self.base_url, T::NAME, id))
  }
}

impl Default for Api {
  fn default() -> Self {
    Self::new()
  }
}

/// An endpoint type, representing a type that can be requested directly from
/// an [`Api`].
pub trait Endpoint: DeserializeOwned + 'static {
  /// The name of the endpoint, used to construct the request.
  const NAME: &'static str;
}

#[derive(Clone, Deserialize)]
struct Page<T> {
  results: Vec<Resource<T>>,

  #[allow(unused)]
  next: Option<String>,
  #[allow(unused)]
  previous: Option<String>,
  #[allow(unused)]
  count: u64,
}

/// A lazily-loaded blob.
///
/// Evaluating this blob performs a network request. Blobs may live outside of
/// the API's base URL (sprites are served from a separate host).
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Blob {
  url: String,
}

impl Blob {
  /// Creates a new lazily-loaded blob located at `url`.
  pub fn new(url: String) -> Self {
    Self { url }
  }

  /// Returns the `url` that points to the blob.
  pub fn url(&self) -> &str {
    &self.url
  }

  /// Performs a network request to lazily evaluate this blob.
  pub fn load(&self, api: &Api) -> Result<Vec<u8>, Error> {
    api.request_blob(&self.url)
  }
}

/// A lazily-loaded object.
///
/// Evaluating this object performs a network request.
#[derive(Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Lazy<T> {
  url: String,

  #[serde(skip)]
  _ph: PhantomData<fn() -> T>,
}

// Derived `Clone` would require `T: Clone`.
impl<T> Clone for Lazy<T> {
  fn clone(&self) -> Self {
    Self::new(self.url.clone())
  }
}

impl<T> Lazy<T> {
  /// Creates a new lazily-loaded object located at `url`.
  pub fn new(url: String) -> Self {
    Self {
      url,
      _ph: PhantomData,
    }
  }

  /// Returns the `url` that points to the object.
  pub fn url(&self) -> &str {
    &self.url
  }
}

impl<T: DeserializeOwned> Lazy<T> {
  /// Performs a network request to lazily evaluate this object.
  pub fn load(&self, api: &Api) -> Result<T, Error> {
    api.request_json(&self.url)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use crate::model::Pokemon;

  #[test]
  fn base_url_is_normalized() {
    let api = Api::with_options(Options {
      base_url: "http://127.0.0.1:1/api/v2/".to_string(),
    });
    assert_eq!(api.base_url(), "http://127.0.0.1:1/api/v2");
    assert_eq!(Api::new().base_url(), DEFAULT_BASE_URL);
  }

  #[test]
  fn foreign_urls_are_rejected_before_any_request() {
    let api = Api::with_options(Options {
      base_url: "http://127.0.0.1:1/api/v2".to_string(),
    });
    let lazy = Lazy::<Pokemon>::new("https://example.com/pokemon/1".into());
    match lazy.load(&api) {
      Err(Error::ApiMismatch {
        expected_base,
        actual_url,
      }) => {
        assert_eq!(expected_base, "http://127.0.0.1:1/api/v2");
        assert_eq!(actual_url, "https://example.com/pokemon/1");
      }
      Err(e) => panic!("unexpected error: {}", e),
      Ok(_) => panic!("foreign URL was fetched"),
    }
  }

  #[test]
  fn base_url_must_end_at_a_path_boundary() {
    let api = Api::with_options(Options {
      base_url: "http://127.0.0.1:1/api/v2".to_string(),
    });
    assert!(api.is_under_base("http://127.0.0.1:1/api/v2"));
    assert!(api.is_under_base("http://127.0.0.1:1/api/v2/pokemon/1/"));
    assert!(api.is_under_base("http://127.0.0.1:1/api/v2?limit=1"));
    assert!(!api.is_under_base("http://127.0.0.1:1/api/v2x/pokemon/1"));
    assert!(!api.is_under_base("http://127.0.0.1:1/api/v20/pokemon/1"));

    let lazy =
      Lazy::<Pokemon>::new("http://127.0.0.1:1/api/v2x/pokemon/1".into());
    match lazy.load(&api) {
      Err(Error::ApiMismatch { actual_url, .. }) => {
        assert_eq!(actual_url, "http://127.0.0.1:1/api/v2x/pokemon/1");
      }
      Err(e) => panic!("unexpected error: {}", e),
      Ok(_) => panic!("sibling path was fetched"),
    }
  }

  #[test]
  fn page_decodes_results() {
    let page: Page<Pokemon> = serde_json::from_str(
      r#"{
        "count": 1302,
        "next": "https://pokeapi.co/api/v2/pokemon?offset=2&limit=2",
        "previous": null,
        "results": [
          {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"},
          {"name": "ivysaur", "url": "https://pokeapi.co/api/v2/pokemon/2/"}
        ]
      }"#,
    )
    .unwrap();

    let names = page
      .results
      .iter()
      .map(|r| r.name().unwrap())
      .collect::<Vec<_>>();
    assert_eq!(names, ["bulbasaur", "ivysaur"]);
    assert_eq!(page.results[1].url(), "https://pokeapi.co/api/v2/pokemon/2/");
  }
}
