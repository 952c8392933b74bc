use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::engine::item::MenuItem;
use crate::engine::submenu::close_all_submenus;

#[derive(Embed)]
#[folder = "assets/menus/"]
struct MenuAssets;

#[derive(Debug, Error)]
pub enum MenuFileError {
    #[error("failed to read menu file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid TOML in menu {name}")]
    Toml {
        name: String,
        #[source]
        source: toml::de::Error,
    },
    #[error("invalid JSON in menu {name}")]
    Json {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("menu {name} is not valid UTF-8")]
    Encoding { name: String },
    #[error("unsupported menu file format: {}", .path.display())]
    UnsupportedFormat { path: PathBuf },
    #[error("no bundled menu named {name:?}")]
    UnknownBundled { name: String },
    #[error("menu {name} has no items")]
    Empty { name: String },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuFormat {
    Toml,
    Json,
}

impl MenuFormat {
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(MenuFormat::Toml),
            "json" => Some(MenuFormat::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct MenuDocument {
    #[serde(default)]
    items: Vec<MenuItem>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonDocument {
    Bare(Vec<MenuItem>),
    Wrapped(MenuDocument),
}

/// Parse a menu tree. Loaded trees always come back fully collapsed.
pub fn parse(content: &str, format: MenuFormat, name: &str) -> Result<Vec<MenuItem>, MenuFileError> {
    let items = match format {
        MenuFormat::Toml => {
            toml::from_str::<MenuDocument>(content)
                .map_err(|source| MenuFileError::Toml {
                    name: name.to_string(),
                    source,
                })?
                .items
        }
        MenuFormat::Json => match serde_json::from_str::<JsonDocument>(content) {
            Ok(JsonDocument::Bare(items)) => items,
            Ok(JsonDocument::Wrapped(doc)) => doc.items,
            Err(source) => {
                return Err(MenuFileError::Json {
                    name: name.to_string(),
                    source,
                });
            }
        },
    };

    if items.is_empty() {
        return Err(MenuFileError::Empty {
            name: name.to_string(),
        });
    }
    Ok(close_all_submenus(&items))
}

pub fn load_path(path: &Path) -> Result<Vec<MenuItem>, MenuFileError> {
    let format = MenuFormat::from_path(path).ok_or_else(|| MenuFileError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = fs::read_to_string(path).map_err(|source| MenuFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&content, format, &path.display().to_string())
}

pub fn load_bundled(name: &str) -> Result<Vec<MenuItem>, MenuFileError> {
    for (ext, format) in [("toml", MenuFormat::Toml), ("json", MenuFormat::Json)] {
        let filename = format!("{name}.{ext}");
        if let Some(file) = MenuAssets::get(&filename) {
            let content = std::str::from_utf8(file.data.as_ref()).map_err(|_| {
                MenuFileError::Encoding {
                    name: filename.clone(),
                }
            })?;
            return parse(content, format, &filename);
        }
    }
    Err(MenuFileError::UnknownBundled {
        name: name.to_string(),
    })
}

pub fn bundled_names() -> Vec<String> {
    let mut names: Vec<String> = MenuAssets::iter()
        .filter_map(|f| {
            f.strip_suffix(".toml")
                .or_else(|| f.strip_suffix(".json"))
                .map(|n| n.to_string())
        })
        .collect();
    names.sort();
    names
}

/// Load `reference` as a file path if one exists, otherwise as a bundled
/// menu name.
pub fn resolve(reference: &str) -> Result<Vec<MenuItem>, MenuFileError> {
    let path = Path::new(reference);
    if path.is_file() {
        debug!(path = %path.display(), "loading menu from file");
        return load_path(path);
    }
    load_bundled(reference)
}

pub fn save_path(path: &Path, items: &[MenuItem]) -> anyhow::Result<()> {
    let doc = MenuDocument {
        items: close_all_submenus(items),
    };
    let content = match MenuFormat::from_path(path) {
        Some(MenuFormat::Json) => serde_json::to_string_pretty(&doc)?,
        Some(MenuFormat::Toml) => toml::to_string_pretty(&doc)?,
        None => anyhow::bail!("unsupported menu file format: {}", path.display()),
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
