use std::fmt;

/// Canonical vendor categories used across the vendor tables and cache.
///
/// Free-text search keywords are folded into one of these slugs where
/// possible; keywords that match nothing fall back to substring search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VendorCategory {
    CoffeeCarts,
    MatchaCarts,
    CocktailCarts,
    DessertCarts,
    FlowerCarts,
    ChampagneCarts,
    Photographers,
    WeddingPlanners,
    Videographers,
    Florists,
    Caterers,
    Venues,
}

impl VendorCategory {
    /// Maps a free-text search keyword to a canonical category.
    ///
    /// The cart checks run before the plain categories so that
    /// "flower cart" lands on `FlowerCarts` rather than `Florists`.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        let k = keyword.to_lowercase();
        let has = |needle: &str| k.contains(needle);

        if has("coffee cart") || (has("coffee") && has("cart")) {
            return Some(Self::CoffeeCarts);
        }
        if has("matcha cart") || (has("matcha") && has("cart")) {
            return Some(Self::MatchaCarts);
        }
        if has("cocktail cart") || has("mobile bar") || (has("cocktail") && has("cart")) {
            return Some(Self::CocktailCarts);
        }
        if has("dessert cart") || has("ice cream cart") || (has("dessert") && has("cart")) {
            return Some(Self::DessertCarts);
        }
        if has("flower cart") || (has("flower") && has("cart")) {
            return Some(Self::FlowerCarts);
        }
        if has("champagne cart") || has("prosecco cart") || (has("champagne") && has("cart")) {
            return Some(Self::ChampagneCarts);
        }
        if has("photographer") || has("photography") || has("photo") {
            return Some(Self::Photographers);
        }
        if has("wedding planner") || has("planner") {
            return Some(Self::WeddingPlanners);
        }
        if has("videographer") || has("videography") || has("video") {
            return Some(Self::Videographers);
        }
        if has("florist") || has("floral") {
            return Some(Self::Florists);
        }
        if has("caterer") || has("catering") {
            return Some(Self::Caterers);
        }
        if has("venue") {
            return Some(Self::Venues);
        }

        None
    }

    #[must_use]
    pub const fn slug(self) -> &'static str {
        match self {
            Self::CoffeeCarts => "coffee-carts",
            Self::MatchaCarts => "matcha-carts",
            Self::CocktailCarts => "cocktail-carts",
            Self::DessertCarts => "dessert-carts",
            Self::FlowerCarts => "flower-carts",
            Self::ChampagneCarts => "champagne-carts",
            Self::Photographers => "photographers",
            Self::WeddingPlanners => "wedding-planners",
            Self::Videographers => "videographers",
            Self::Florists => "florists",
            Self::Caterers => "caterers",
            Self::Venues => "venues",
        }
    }
}

impl fmt::Display for VendorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_plain_categories() {
        assert_eq!(
            VendorCategory::from_keyword("wedding photographer"),
            Some(VendorCategory::Photographers)
        );
        assert_eq!(
            VendorCategory::from_keyword("Videography"),
            Some(VendorCategory::Videographers)
        );
        assert_eq!(
            VendorCategory::from_keyword("catering"),
            Some(VendorCategory::Caterers)
        );
        assert_eq!(
            VendorCategory::from_keyword("wedding venue"),
            Some(VendorCategory::Venues)
        );
    }

    #[test]
    fn cart_keywords_win_over_plain_categories() {
        assert_eq!(
            VendorCategory::from_keyword("flower cart"),
            Some(VendorCategory::FlowerCarts)
        );
        assert_eq!(
            VendorCategory::from_keyword("floral design"),
            Some(VendorCategory::Florists)
        );
        assert_eq!(
            VendorCategory::from_keyword("mobile bar"),
            Some(VendorCategory::CocktailCarts)
        );
    }

    #[test]
    fn split_cart_words_still_match() {
        assert_eq!(
            VendorCategory::from_keyword("coffee and espresso cart"),
            Some(VendorCategory::CoffeeCarts)
        );
    }

    #[test]
    fn unmapped_keyword_returns_none() {
        assert_eq!(VendorCategory::from_keyword("calligraphy"), None);
    }

    #[test]
    fn slug_round_trip() {
        assert_eq!(VendorCategory::WeddingPlanners.to_string(), "wedding-planners");
    }
}
