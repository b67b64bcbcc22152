use std::{collections::BTreeSet, fs::File, io::BufReader, path::Path};

use crate::{
    contact::relay::RelayConfig,
    foundation::error::{FolioError, FolioResult},
    marquee::{config::MarqueeConfig, track::CarouselItem},
    page::counter::Stat,
};

const DEVICON_BASE: &str = "https://cdn.jsdelivr.net/gh/devicons/devicon/icons";

/// Static configuration for the whole page: the logo strip, its timing, About-section stats,
/// and the contact relay.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Logo strip contents, in display order.
    pub items: Vec<CarouselItem>,
    /// Logo strip timing.
    pub marquee: MarqueeConfig,
    /// Count-up stats.
    pub stats: Vec<Stat>,
    /// Contact relay.
    pub relay: RelayConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            items: default_tech_stack(),
            marquee: MarqueeConfig::default(),
            stats: default_stats(),
            relay: RelayConfig::default(),
        }
    }
}

/// The portfolio's technology strip.
pub fn default_tech_stack() -> Vec<CarouselItem> {
    [
        ("Python", "python/python-original.svg"),
        ("C++", "cplusplus/cplusplus-original.svg"),
        ("Flask", "flask/flask-original.svg"),
        ("FastAPI", "fastapi/fastapi-original.svg"),
        ("TensorFlow", "tensorflow/tensorflow-original.svg"),
        ("PyTorch", "pytorch/pytorch-original.svg"),
        ("PostgreSQL", "postgresql/postgresql-original.svg"),
        ("Docker", "docker/docker-original.svg"),
        ("Git", "git/git-original.svg"),
    ]
    .into_iter()
    .map(|(name, icon)| CarouselItem::new(name, format!("{DEVICON_BASE}/{icon}")))
    .collect()
}

fn default_stats() -> Vec<Stat> {
    [
        (10, "Projects Completed"),
        (5, "Core Technologies"),
        (1, "Years of Practical Experience"),
    ]
    .into_iter()
    .map(|(value, label)| Stat {
        value,
        suffix: "+".to_owned(),
        label: label.to_owned(),
    })
    .collect()
}

impl SiteConfig {
    /// Parse a site config from a JSON reader.
    pub fn from_reader(r: impl std::io::Read) -> FolioResult<Self> {
        serde_json::from_reader(r)
            .map_err(|e| FolioError::serde(format!("parse site config JSON: {e}")))
    }

    /// Parse a site config from a JSON string.
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        serde_json::from_str(s)
            .map_err(|e| FolioError::serde(format!("parse site config JSON: {e}")))
    }

    /// Parse a site config from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> FolioResult<Self> {
        let path = path.as_ref();
        let f = File::open(path).map_err(|e| {
            FolioError::validation(format!("open site config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Validate items, timing, and relay settings.
    pub fn validate(&self) -> FolioResult<()> {
        let mut seen = BTreeSet::new();
        for item in &self.items {
            if item.name.trim().is_empty() {
                return Err(FolioError::validation("item name must not be empty"));
            }
            if !seen.insert(item.name.as_str()) {
                return Err(FolioError::validation(format!(
                    "duplicate item name '{}'",
                    item.name
                )));
            }
        }
        self.marquee.validate()?;
        self.relay.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/model.rs"]
mod tests;
