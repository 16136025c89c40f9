//! Resources are lazily-loaded objects that may have a name attached to them.
//!
//! PokéAPI uses [`Resource`]s as hyperlinks between the objects it returns.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;

use crate::api::Api;
use crate::api::Error;
use crate::api::Lazy;

/// A (possibly-named) PokéAPI resource.
///
/// Call [`Resource::load()`] to convert this into a `T`.
#[derive(Debug, Serialize, Deserialize)]
pub struct Resource<T> {
  #[serde(default)]
  name: Option<String>,
  #[serde(rename = "url")]
  object: Lazy<T>,
}

impl<T> Clone for Resource<T> {
  fn clone(&self) -> Self {
    Self {
      name: self.name.clone(),
      object: self.object.clone(),
    }
  }
}

impl<T> Resource<T> {
  /// Returns this [`Resource`]'s name.
  pub fn name(&self) -> Option<&str> {
    self.name.as_deref()
  }

  /// Returns the URL this [`Resource`] points to.
  pub fn url(&self) -> &str {
    self.object.url()
  }
}

impl<T: DeserializeOwned> Resource<T> {
  /// Performs a network request to obtain the `T` represented by this
  /// [`Resource`].
  pub fn load(&self, api: &Api) -> Result<T, Error> {
    self.object.load(api)
  }
}
