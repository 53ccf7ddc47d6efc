//! # Catalog
//!
//! The static product catalog: seeded once at process start, read-only
//! thereafter. Carts and orders reference products by id; a reference that
//! fails to resolve here surfaces as `ProductNotFound`.

use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;
use vend_core::{CoreError, CoreResult, Money, Product};

/// Read-only product index.
///
/// Keeps the seed ordering for `list()` (the storefront shows products in a
/// stable order) with a by-id index on the side.
#[derive(Debug)]
pub struct Catalog {
    products: Vec<Product>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Builds a catalog from a product list. Later entries win on a
    /// duplicated id, which cannot happen with UUID seeding.
    pub fn new(products: Vec<Product>) -> Self {
        let index = products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.id.clone(), i))
            .collect();
        Catalog { products, index }
    }

    /// Looks up a product by id.
    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.index.get(product_id).map(|&i| &self.products[i])
    }

    /// Looks up a product by id, failing with `ProductNotFound`.
    pub fn require(&self, product_id: &str) -> CoreResult<&Product> {
        self.get(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))
    }

    /// Looks up a product by its business identifier.
    pub fn find_by_sku(&self, sku: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.sku == sku)
    }

    /// All products, in seed order.
    pub fn list(&self) -> &[Product] {
        &self.products
    }

    /// Number of products in the catalog.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

// =============================================================================
// Seed Data
// =============================================================================

/// Builds one seed product. Ids are UUID v4; the sku is the stable handle.
#[allow(clippy::too_many_arguments)]
fn product(
    sku: &str,
    name: &str,
    description: &str,
    price_cents: i64,
    original_price_cents: Option<i64>,
    category: &str,
    rating: f32,
    review_count: u32,
    features: &[&str],
    stock: i64,
) -> Product {
    Product {
        id: Uuid::new_v4().to_string(),
        sku: sku.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price: Money::from_cents(price_cents),
        original_price: original_price_cents.map(Money::from_cents),
        image: "/image.png".to_string(),
        category: category.to_string(),
        rating,
        review_count,
        features: features.iter().map(|f| f.to_string()).collect(),
        stock,
        on_sale: original_price_cents.is_some(),
        created_at: Utc::now(),
    }
}

/// Seeds the fixed storefront catalog.
///
/// All state is volatile for the process lifetime and fully reconstructible
/// by re-running this step.
pub fn seed_catalog() -> Catalog {
    Catalog::new(vec![
        product(
            "HDPH-NC100",
            "Wireless Noise-Canceling Headphones",
            "Experience immersive sound with our premium wireless headphones \
             featuring advanced noise-canceling technology. Perfect for music \
             lovers, travelers, and remote workers who demand crystal-clear audio.",
            29999,
            Some(34999),
            "Electronics",
            4.8,
            2847,
            &[
                "Active Noise Cancellation",
                "40-hour battery life",
                "Bluetooth 5.2",
                "Premium memory foam ear cushions",
                "Foldable design for travel",
            ],
            45,
        ),
        product(
            "WTCH-FIT20",
            "Smart Fitness Watch Pro",
            "Track your health and fitness goals with precision. This advanced \
             smartwatch monitors heart rate, sleep patterns, and over 100 \
             workout modes.",
            19950,
            None,
            "Electronics",
            4.5,
            1523,
            &[
                "Heart rate monitoring",
                "GPS tracking",
                "Water resistant to 50m",
                "7-day battery life",
                "Compatible with iOS and Android",
            ],
            78,
        ),
        product(
            "CHR-ERGO1",
            "Ergonomic Office Chair",
            "Designed for all-day comfort, this ergonomic chair features \
             adjustable lumbar support, breathable mesh back, and customizable \
             armrests.",
            45000,
            None,
            "Furniture",
            4.9,
            892,
            &[
                "Adjustable lumbar support",
                "Breathable mesh back",
                "4D armrests",
                "Recline up to 135 degrees",
                "Supports up to 300 lbs",
            ],
            23,
        ),
        product(
            "TSH-ORG12",
            "Premium Cotton T-Shirt",
            "Ultra-soft 100% organic cotton t-shirt with a modern fit. \
             Pre-shrunk and machine washable for easy care.",
            2500,
            None,
            "Clothing",
            4.2,
            3421,
            &[
                "100% organic cotton",
                "Pre-shrunk fabric",
                "Reinforced seams",
                "Available in 12 colors",
                "Sizes XS-3XL",
            ],
            156,
        ),
        product(
            "BTL-STL32",
            "Stainless Steel Water Bottle",
            "Double-walled vacuum insulated water bottle keeps drinks cold for \
             24 hours or hot for 12 hours. BPA-free and eco-friendly.",
            3500,
            None,
            "Accessories",
            4.7,
            2156,
            &[
                "24-hour cold / 12-hour hot",
                "Double-wall insulation",
                "BPA-free",
                "Leak-proof lid",
                "32 oz capacity",
            ],
            234,
        ),
        product(
            "BAG-WKND",
            "Leather Weekend Bag",
            "Handcrafted genuine leather weekend bag with spacious interior \
             and multiple compartments. Perfect for short trips and gym \
             sessions.",
            15000,
            Some(19900),
            "Accessories",
            4.6,
            678,
            &[
                "Genuine full-grain leather",
                "Padded laptop sleeve",
                "Multiple pockets",
                "Detachable shoulder strap",
                "Brass hardware",
            ],
            34,
        ),
        product(
            "MON-4K27",
            "4K Ultra HD Monitor",
            "27-inch 4K UHD monitor with HDR support, perfect for content \
             creators, gamers, and professionals who demand accurate colors.",
            39999,
            None,
            "Electronics",
            4.4,
            1892,
            &[
                "27-inch 4K UHD display",
                "HDR10 support",
                "99% sRGB color accuracy",
                "USB-C with 65W charging",
                "Height adjustable stand",
            ],
            56,
        ),
        product(
            "KBD-MECH",
            "Mechanical Gaming Keyboard",
            "Premium mechanical keyboard with hot-swappable switches, per-key \
             RGB lighting, and aircraft-grade aluminum frame.",
            12999,
            None,
            "Electronics",
            4.8,
            3567,
            &[
                "Hot-swappable switches",
                "Per-key RGB lighting",
                "Aluminum frame",
                "N-key rollover",
                "Detachable USB-C cable",
            ],
            89,
        ),
        product(
            "SRM-VITC",
            "Organic Face Serum",
            "Luxurious organic face serum with vitamin C and hyaluronic acid. \
             Brightens skin, reduces fine lines, and provides deep hydration.",
            4500,
            None,
            "Beauty",
            4.9,
            4521,
            &[
                "Vitamin C and hyaluronic acid",
                "100% organic ingredients",
                "Cruelty-free",
                "Suitable for all skin types",
                "1 oz bottle",
            ],
            167,
        ),
        product(
            "SHO-RUN2",
            "Running Shoes Gen 2",
            "Lightweight running shoes with responsive cushioning and \
             breathable mesh upper. Designed for comfort on long runs.",
            8995,
            None,
            "Footwear",
            4.3,
            2789,
            &[
                "Responsive foam cushioning",
                "Breathable mesh upper",
                "Rubber outsole for grip",
                "Reflective details",
                "Available in 8 colors",
            ],
            145,
        ),
    ])
}
