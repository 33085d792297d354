//! Filter state held for one shopper session
//!
//! The state is a single instance mutated from one event task. Multi-select
//! categories (color, size) use toggle semantics; sort and price are set
//! directly by their widgets.

use crate::catalog::{Color, Size, SortOrder, DEFAULT_PRICE_RANGE};
use crate::{Result, ShopError};
use serde::{Deserialize, Serialize};

/// Multi-select filter categories
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterCategory {
    Color,
    Size,
}

impl std::str::FromStr for FilterCategory {
    type Err = ShopError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "color" => Ok(Self::Color),
            "size" => Ok(Self::Size),
            _ => Err(ShopError::ValidationError(format!(
                "unknown filter category: {s}"
            ))),
        }
    }
}

/// Price selection: a named preset range or a custom slider range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceSelection {
    /// True when the range came from the dual-ended slider
    pub is_custom: bool,

    /// Raw `[low, high]` pair; a custom pair may be inverted while the
    /// shopper drags one handle past the other
    pub range: [f64; 2],
}

impl PriceSelection {
    pub fn preset(range: [f64; 2]) -> Self {
        Self {
            is_custom: false,
            range,
        }
    }

    pub fn custom(low: f64, high: f64) -> Self {
        Self {
            is_custom: true,
            range: [low, high],
        }
    }

    /// Bounds for display: ordered and rounded to whole units when custom,
    /// the preset pair verbatim otherwise
    pub fn display_bounds(&self) -> (f64, f64) {
        if self.is_custom {
            let low = self.range[0].min(self.range[1]).round();
            let high = self.range[0].max(self.range[1]).round();
            (low, high)
        } else {
            (self.range[0], self.range[1])
        }
    }
}

impl Default for PriceSelection {
    fn default() -> Self {
        Self::preset(DEFAULT_PRICE_RANGE)
    }
}

/// Filter payload as sent to `POST /api/products`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterPayload {
    pub sort: SortOrder,
    pub color: Vec<Color>,
    pub size: Vec<Size>,
    pub price: [f64; 2],
}

/// The shopper's current filter selections
///
/// Selection vectors keep insertion order; the clause builder emits
/// fragments in that order.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    pub sort: SortOrder,
    pub colors: Vec<Color>,
    pub sizes: Vec<Size>,
    pub price: PriceSelection,
}

impl FilterState {
    /// Page-load default: everything selected, default price preset
    pub fn new() -> Self {
        Self {
            sort: SortOrder::None,
            colors: Color::ALL.to_vec(),
            sizes: Size::ALL.to_vec(),
            price: PriceSelection::default(),
        }
    }

    /// Toggle a color: remove if selected, append otherwise
    pub fn toggle_color(&mut self, color: Color) {
        if let Some(pos) = self.colors.iter().position(|c| *c == color) {
            self.colors.remove(pos);
        } else {
            self.colors.push(color);
        }
    }

    /// Toggle a size: remove if selected, append otherwise
    pub fn toggle_size(&mut self, size: Size) {
        if let Some(pos) = self.sizes.iter().position(|s| *s == size) {
            self.sizes.remove(pos);
        } else {
            self.sizes.push(size);
        }
    }

    /// Toggle by raw token, rejecting tokens outside the catalog
    pub fn toggle(&mut self, category: FilterCategory, token: &str) -> Result<()> {
        match category {
            FilterCategory::Color => self.toggle_color(token.parse()?),
            FilterCategory::Size => self.toggle_size(token.parse()?),
        }
        Ok(())
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
    }

    /// Select a preset price range
    pub fn select_price_preset(&mut self, range: [f64; 2]) {
        self.price = PriceSelection::preset(range);
    }

    /// Set a custom price range from the slider; an inverted pair is kept
    /// as-is (the widget clamps, the model does not)
    pub fn set_custom_price(&mut self, low: f64, high: f64) {
        self.price = PriceSelection::custom(low, high);
    }

    /// Snapshot the current selections into a wire payload
    pub fn payload(&self) -> FilterPayload {
        FilterPayload {
            sort: self.sort,
            color: self.colors.clone(),
            size: self.sizes.clone(),
            price: self.price.range,
        }
    }
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_selects_everything() {
        let state = FilterState::new();
        assert_eq!(state.colors.len(), Color::ALL.len());
        assert_eq!(state.sizes.len(), Size::ALL.len());
        assert_eq!(state.sort, SortOrder::None);
        assert_eq!(state.price.range, DEFAULT_PRICE_RANGE);
        assert!(!state.price.is_custom);
    }

    #[test]
    fn test_toggle_removes_then_appends() {
        let mut state = FilterState::new();
        state.toggle_color(Color::Blue);
        assert!(!state.colors.contains(&Color::Blue));

        state.toggle_color(Color::Blue);
        assert!(state.colors.contains(&Color::Blue));
        // Re-added values land at the end of the selection order
        assert_eq!(state.colors.last(), Some(&Color::Blue));
    }

    #[test]
    fn test_toggle_pair_is_identity() {
        let mut state = FilterState::new();
        state.toggle_size(Size::M);
        state.toggle_size(Size::M);
        // Toggling twice restores membership but moves the value to the
        // end, so compare as sets
        for size in Size::ALL {
            assert!(state.sizes.contains(&size));
        }
        assert_eq!(state.sizes.len(), Size::ALL.len());
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("color".parse::<FilterCategory>().unwrap(), FilterCategory::Color);
        assert_eq!("size".parse::<FilterCategory>().unwrap(), FilterCategory::Size);
        assert!("price".parse::<FilterCategory>().is_err());
    }

    #[test]
    fn test_toggle_token_rejects_unknown() {
        let mut state = FilterState::new();
        assert!(state.toggle(FilterCategory::Color, "blue").is_ok());
        assert!(state.toggle(FilterCategory::Color, "chartreuse").is_err());
        assert!(state.toggle(FilterCategory::Size, "XL").is_err());
    }

    #[test]
    fn test_custom_price_display_bounds() {
        let mut state = FilterState::new();
        // Low handle dragged past the high handle
        state.set_custom_price(62.7, 14.2);
        assert_eq!(state.price.display_bounds(), (14.0, 63.0));
        // The raw range is preserved in the payload
        assert_eq!(state.payload().price, [62.7, 14.2]);
    }

    #[test]
    fn test_preset_bounds_are_verbatim() {
        let mut state = FilterState::new();
        state.select_price_preset([0.0, 40.0]);
        assert_eq!(state.price.display_bounds(), (0.0, 40.0));
        assert!(!state.price.is_custom);
    }
}
