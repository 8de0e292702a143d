//! Product catalog — the creamery's two cheese archetypes.
//!
//! Process-wide immutable reference data: built once at startup, shared
//! behind an `Arc` in `AppState`, never mutated. Safe for concurrent
//! reads without synchronization.

use serde::{Deserialize, Serialize};

/// Catalog product identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductId {
    PastureBloom,
    SmokyAlder,
}

impl ProductId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductId::PastureBloom => "pasture_bloom",
            ProductId::SmokyAlder => "smoky_alder",
        }
    }
}

/// Pairing suggestions a pitch can draw from.
#[derive(Debug, Clone)]
pub struct Pairings {
    pub proteins: &'static [&'static str],
    pub produce: &'static [&'static str],
    pub beverages: &'static [&'static str],
    pub flavors: &'static [&'static str],
}

/// B2B production constraints.
#[derive(Debug, Clone)]
pub struct Production {
    pub batch_size: &'static str,
    pub availability: &'static str,
    pub lead_time_days: u32,
    pub minimum_order_lbs: u32,
}

/// One catalog product. All text is static reference data.
#[derive(Debug, Clone)]
pub struct ProductCatalogEntry {
    pub id: ProductId,
    pub name: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub target_restaurants: &'static [&'static str],
    pub ideal_uses: &'static [&'static str],
    pub selling_points: &'static [&'static str],
    pub pairings: Pairings,
    pub price_tier: &'static str,
    pub price_per_lb: &'static str,
    pub production: Production,
}

/// The full catalog. Exactly two products today; lookups are by id.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    entries: Vec<ProductCatalogEntry>,
}

impl ProductCatalog {
    /// Builds the built-in catalog. Called once from `main`.
    pub fn builtin() -> Self {
        Self {
            entries: vec![pasture_bloom(), smoky_alder()],
        }
    }

    pub fn get(&self, id: ProductId) -> &ProductCatalogEntry {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .expect("builtin catalog covers every ProductId")
    }

    pub fn entries(&self) -> &[ProductCatalogEntry] {
        &self.entries
    }
}

fn pasture_bloom() -> ProductCatalogEntry {
    ProductCatalogEntry {
        id: ProductId::PastureBloom,
        name: "Pasture Bloom Triple Crème",
        subtitle: "Seasonal, Bloomy-Rind",
        description: "A decadent, high-fat, triple-crème cheese infused with a touch of \
            cultured cream and aged just long enough to develop a delicate, edible white \
            rind. Its texture is almost custard-like at room temp, making it ideal for \
            fine-dining dishes like savory pastries, cheese-forward sauces, or composed \
            appetizers. Too rich and delicate for retail, it works beautifully on tasting \
            menus where plating precision and immediate table service keep it at peak \
            quality.",
        target_restaurants: &[
            "fine dining",
            "French cuisine",
            "Italian restaurants",
            "European bistros",
            "tasting menu restaurants",
            "upscale seafood",
        ],
        ideal_uses: &[
            "Savory pastries",
            "Cheese-forward sauces",
            "Composed appetizers",
            "Tasting menus",
            "Cheese plates",
            "Amuse-bouche",
            "Paired with champagne/white wine",
        ],
        selling_points: &[
            "Luxurious custard-like texture",
            "Delicate bloomy rind",
            "High-fat triple crème (perfect for rich dishes)",
            "Peak quality when served at room temp",
            "Locally sourced and sustainably crafted",
            "Small-batch seasonal production",
            "Ideal for plated presentations",
        ],
        pairings: Pairings {
            proteins: &["Duck", "Scallops", "Lobster", "Prosciutto"],
            produce: &["Figs", "Apples", "Pears", "Truffle", "Mushrooms"],
            beverages: &["Champagne", "Chardonnay", "Sauvignon Blanc"],
            flavors: &["Honey", "Herbs", "Light citrus", "Toasted nuts"],
        },
        price_tier: "premium",
        price_per_lb: "$32-38",
        production: Production {
            batch_size: "Small-batch",
            availability: "Seasonal",
            lead_time_days: 7,
            minimum_order_lbs: 3,
        },
    }
}

fn smoky_alder() -> ProductCatalogEntry {
    ProductCatalogEntry {
        id: ProductId::SmokyAlder,
        name: "Smoky Alder Wash Rind",
        subtitle: "Small-Batch, Semi-Soft",
        description: "A pungent, washed-rind cheese matured with a house brine and \
            cold-smoked over locally sourced alder wood. It delivers deep umami and subtle \
            smoke that pairs perfectly with elevated tavern menus, gastropub burgers, \
            charcuterie programs, and wood-fired dishes. Its assertive aroma makes it \
            unsuitable for grocery shelves but highly prized by chefs who want a bold, \
            signature flavor component.",
        target_restaurants: &[
            "gastropubs",
            "taverns",
            "upscale American",
            "wood-fired restaurants",
            "craft beer bars",
            "burger joints (elevated)",
            "charcuterie-focused",
        ],
        ideal_uses: &[
            "Gastropub burgers",
            "Charcuterie boards",
            "Wood-fired pizzas",
            "Mac and cheese",
            "Grilled cheese sandwiches",
            "Beer pairing menus",
            "Smoked meat dishes",
        ],
        selling_points: &[
            "Bold, assertive flavor profile",
            "Locally sourced alder wood smoking",
            "Deep umami character",
            "Washed-rind complexity",
            "Perfect for elevated pub fare",
            "Pairs beautifully with craft beer",
            "Signature ingredient for menu differentiation",
        ],
        pairings: Pairings {
            proteins: &["Bacon", "Brisket", "Short rib", "Pulled pork", "Sausage"],
            produce: &["Caramelized onions", "Roasted peppers", "Pickles", "Arugula"],
            beverages: &["IPA", "Stout", "Porter", "Rye whiskey", "Red wine"],
            flavors: &["Smoke", "Mustard", "BBQ sauce", "Pickled vegetables"],
        },
        price_tier: "mid-premium",
        price_per_lb: "$24-28",
        production: Production {
            batch_size: "Small-batch",
            availability: "Year-round",
            lead_time_days: 5,
            minimum_order_lbs: 5,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_covers_both_products() {
        let catalog = ProductCatalog::builtin();
        assert_eq!(catalog.entries().len(), 2);
        assert_eq!(catalog.get(ProductId::PastureBloom).id, ProductId::PastureBloom);
        assert_eq!(catalog.get(ProductId::SmokyAlder).id, ProductId::SmokyAlder);
    }

    #[test]
    fn test_product_id_serializes_snake_case() {
        assert_eq!(
            serde_json::to_string(&ProductId::PastureBloom).unwrap(),
            "\"pasture_bloom\""
        );
        assert_eq!(ProductId::SmokyAlder.as_str(), "smoky_alder");
    }

    #[test]
    fn test_entries_carry_selling_points_for_fallback_pitches() {
        let catalog = ProductCatalog::builtin();
        for entry in catalog.entries() {
            assert!(entry.selling_points.len() >= 3);
            assert!(!entry.price_per_lb.is_empty());
        }
    }
}
