//! Geometry dataset acquisition: local file or one-shot remote fetch.

use std::path::Path;

use tracing::info;

use choro_model::{ChoroError, Result};

use crate::world::WorldAtlas;

/// Natural Earth 110m admin-0 countries, GeoJSON rendition.
pub const NATURAL_EARTH_URL: &str =
    "https://raw.githubusercontent.com/nvkelso/natural-earth-vector/master/geojson/ne_110m_admin_0_countries.geojson";

/// Loads the world geometry from a local file when given, otherwise fetches
/// the Natural Earth dataset. The fetch is a single fail-fast blocking
/// operation; a failure is fatal for the run and is not retried.
pub fn load_world(local: Option<&Path>) -> Result<WorldAtlas> {
    let text = match local {
        Some(path) => {
            info!(path = %path.display(), "loading local geometry");
            std::fs::read_to_string(path).map_err(|error| ChoroError::io(path, error))?
        }
        None => fetch_remote(NATURAL_EARTH_URL)?,
    };
    WorldAtlas::from_geojson(&text)
}

fn fetch_remote(url: &str) -> Result<String> {
    info!(url, "fetching geometry dataset");
    let response = reqwest::blocking::get(url).map_err(|error| ChoroError::GeometryFetch {
        url: url.to_string(),
        message: error.to_string(),
    })?;
    let response = response
        .error_for_status()
        .map_err(|error| ChoroError::GeometryFetch {
            url: url.to_string(),
            message: error.to_string(),
        })?;
    response.text().map_err(|error| ChoroError::GeometryFetch {
        url: url.to_string(),
        message: error.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_local_file_reports_the_path() {
        let result = load_world(Some(Path::new("/definitely/not/here.geojson")));
        assert!(matches!(result, Err(ChoroError::Io { .. })));
    }
}
