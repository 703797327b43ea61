//! Optional interaction features.

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feature {
    /// Horizontal swipe-to-delete of rows.
    ItemDrag = 0,
    /// Long-press multi-select with tap-to-toggle.
    MultiSelect = 1,
}

impl Feature {
    pub const ALL: [Feature; 2] = [Feature::ItemDrag, Feature::MultiSelect];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FeatureFlags(u8);

impl FeatureFlags {
    pub const NONE: Self = Self(0);

    pub fn new() -> Self {
        Self::NONE
    }

    pub fn all() -> Self {
        Feature::ALL
            .into_iter()
            .fold(Self::NONE, |flags, feature| flags.with(feature))
    }

    pub fn with(mut self, feature: Feature) -> Self {
        self.insert(feature);
        self
    }

    pub fn insert(&mut self, feature: Feature) {
        self.0 |= 1 << (feature as u8);
    }

    pub fn remove(&mut self, feature: Feature) {
        self.0 &= !(1 << (feature as u8));
    }

    pub fn contains(&self, feature: Feature) -> bool {
        (self.0 & (1 << (feature as u8))) != 0
    }

    /// Sets membership and returns whether it changed.
    pub fn set(&mut self, feature: Feature, enabled: bool) -> bool {
        let was = self.contains(feature);
        if enabled {
            self.insert(feature);
        } else {
            self.remove(feature);
        }
        was != enabled
    }
}
