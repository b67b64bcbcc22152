/// One logo tile in the strip.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct CarouselItem {
    /// Unique display label.
    pub name: String,
    /// Opaque locator for the icon resource.
    pub icon_ref: String,
}

impl CarouselItem {
    /// Build an item from a label and icon locator.
    pub fn new(name: impl Into<String>, icon_ref: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            icon_ref: icon_ref.into(),
        }
    }
}

/// The doubled marquee track: `source ++ source`.
///
/// Only the source list is stored. Indices in `[N, 2N)` resolve to the same element as
/// `i - N`, so the two halves cannot diverge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Track {
    source: Vec<CarouselItem>,
}

impl Track {
    /// Build the doubled view over `source`.
    pub fn duplicate(source: Vec<CarouselItem>) -> Self {
        Self { source }
    }

    /// The original (undoubled) items.
    pub fn source(&self) -> &[CarouselItem] {
        &self.source
    }

    /// Number of original items `N`.
    pub fn source_len(&self) -> usize {
        self.source.len()
    }

    /// Number of rendered tiles, always `2 * N`.
    pub fn len(&self) -> usize {
        self.source.len() * 2
    }

    /// `true` when there is nothing to scroll.
    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Tile at track index `i`, for `i < 2 * N`.
    pub fn get(&self, i: usize) -> Option<&CarouselItem> {
        if i >= self.len() {
            return None;
        }
        self.source.get(i % self.source.len())
    }

    /// Index into the source list that track index `i` mirrors.
    pub fn source_index(&self, i: usize) -> Option<usize> {
        if i >= self.len() {
            return None;
        }
        Some(i % self.source.len())
    }

    /// All `2 * N` tiles in render order.
    pub fn iter(&self) -> impl Iterator<Item = &CarouselItem> + '_ {
        self.source.iter().chain(self.source.iter())
    }

    /// Tiles from track index `start` to the end of the track.
    pub fn visible_from(&self, start: usize) -> impl Iterator<Item = &CarouselItem> + '_ {
        self.iter().skip(start)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/marquee/track.rs"]
mod tests;
