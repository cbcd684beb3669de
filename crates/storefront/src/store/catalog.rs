//! Product catalog, seeded once at startup.

use std::collections::BTreeMap;

use chrono::Utc;

use bravenza_core::{Category, Price, ProductId};

use crate::models::Product;

/// A catalog seed entry; ids and timestamps are assigned at construction.
struct Seed {
    name: &'static str,
    description: &'static str,
    price: &'static str,
    category: Category,
    image: &'static str,
    sizes: &'static [&'static str],
    bestseller: bool,
    featured: bool,
}

/// The fixed catalog, spanning the two categories.
const SEED: &[Seed] = &[
    Seed {
        name: "Elegant Silk Blouse",
        description: "Luxurious silk blouse with contemporary tailoring and elegant drape.",
        price: "289.00",
        category: Category::Women,
        image: "https://images.unsplash.com/photo-1564257577-d18f494f8fdd?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=500",
        sizes: &["XS", "S", "M", "L", "XL"],
        bestseller: true,
        featured: true,
    },
    Seed {
        name: "Classic Tailored Blazer",
        description: "Perfectly tailored blazer crafted from premium wool blend.",
        price: "459.00",
        category: Category::Women,
        image: "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=500",
        sizes: &["XS", "S", "M", "L", "XL"],
        bestseller: true,
        featured: false,
    },
    Seed {
        name: "Premium Dress Shirt",
        description: "Crisp cotton dress shirt with impeccable attention to detail.",
        price: "225.00",
        category: Category::Men,
        image: "https://images.unsplash.com/photo-1562157873-818bc0726f68?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=500",
        sizes: &["S", "M", "L", "XL", "XXL"],
        bestseller: true,
        featured: false,
    },
    Seed {
        name: "Wool Trench Coat",
        description: "Classic trench coat in premium wool with timeless silhouette.",
        price: "789.00",
        category: Category::Women,
        image: "https://images.unsplash.com/photo-1578662996442-48f60103fc96?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=500",
        sizes: &["XS", "S", "M", "L", "XL"],
        bestseller: false,
        featured: false,
    },
    Seed {
        name: "Tailored Suit Jacket",
        description: "Impeccably tailored suit jacket in fine Italian wool.",
        price: "649.00",
        category: Category::Men,
        image: "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=500",
        sizes: &["S", "M", "L", "XL", "XXL"],
        bestseller: true,
        featured: false,
    },
    Seed {
        name: "Silk Evening Dress",
        description: "Stunning silk evening dress with elegant draping and timeless appeal.",
        price: "899.00",
        category: Category::Women,
        image: "https://images.unsplash.com/photo-1566479179817-c0ae25c08b05?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=500",
        sizes: &["XS", "S", "M", "L", "XL"],
        bestseller: false,
        featured: true,
    },
    Seed {
        name: "Leather Chelsea Boots",
        description: "Handcrafted leather Chelsea boots with superior comfort and style.",
        price: "349.00",
        category: Category::Men,
        image: "https://images.unsplash.com/photo-1520639888713-7851133b1ed0?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=500",
        sizes: &["7", "8", "9", "10", "11", "12"],
        bestseller: false,
        featured: false,
    },
    Seed {
        name: "Cashmere Sweater",
        description: "Luxurious cashmere sweater with classic fit and superior softness.",
        price: "429.00",
        category: Category::Men,
        image: "https://images.unsplash.com/photo-1618354691373-d851c5c3a990?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=500",
        sizes: &["S", "M", "L", "XL", "XXL"],
        bestseller: true,
        featured: false,
    },
    Seed {
        name: "Wool Midi Skirt",
        description: "Sophisticated wool midi skirt with A-line silhouette.",
        price: "289.00",
        category: Category::Women,
        image: "https://images.unsplash.com/photo-1583496661160-fb5886a13d74?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=500",
        sizes: &["XS", "S", "M", "L", "XL"],
        bestseller: false,
        featured: false,
    },
    Seed {
        name: "Leather Jacket",
        description: "Premium leather jacket with modern cut and timeless appeal.",
        price: "899.00",
        category: Category::Women,
        image: "https://images.unsplash.com/photo-1558882224-dda166733046?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=500",
        sizes: &["XS", "S", "M", "L", "XL"],
        bestseller: true,
        featured: true,
    },
    Seed {
        name: "Merino Wool Polo",
        description: "Fine-gauge merino polo with a clean placket and soft hand feel.",
        price: "189.00",
        category: Category::Men,
        image: "https://images.unsplash.com/photo-1586363104862-3a5e2ab60d99?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=500",
        sizes: &["S", "M", "L", "XL", "XXL"],
        bestseller: false,
        featured: false,
    },
    Seed {
        name: "Satin Slip Dress",
        description: "Bias-cut satin slip dress with a fluid drape and adjustable straps.",
        price: "329.00",
        category: Category::Women,
        image: "https://images.unsplash.com/photo-1595777457583-95e059d581b8?ixlib=rb-4.0.3&auto=format&fit=crop&w=400&h=500",
        sizes: &["XS", "S", "M", "L", "XL"],
        bestseller: false,
        featured: true,
    },
];

/// The immutable product catalog.
///
/// Seeded once at construction; exposes read and filter operations only.
/// Being read-only post-seed, it needs no locking.
pub struct ProductCatalog {
    products: BTreeMap<ProductId, Product>,
}

impl ProductCatalog {
    /// Build the catalog from the fixed seed list, assigning sequential
    /// ids starting at 1.
    #[must_use]
    pub fn seeded() -> Self {
        let mut products = BTreeMap::new();
        let mut next_id = 1;
        for seed in SEED {
            let id = ProductId::new(next_id);
            next_id += 1;
            products.insert(
                id,
                Product {
                    id,
                    name: seed.name.to_owned(),
                    description: seed.description.to_owned(),
                    price: Price::parse(seed.price).expect("seed price is valid decimal text"),
                    category: seed.category,
                    image: seed.image.to_owned(),
                    sizes: seed.sizes.iter().map(ToString::to_string).collect(),
                    bestseller: seed.bestseller,
                    featured: seed.featured,
                    created_at: Utc::now(),
                },
            );
        }
        Self { products }
    }

    /// All products in insertion (id) order.
    #[must_use]
    pub fn all(&self) -> Vec<Product> {
        self.products.values().cloned().collect()
    }

    /// A single product, or `None` if the id is unknown.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<Product> {
        self.products.get(&id).cloned()
    }

    /// Products whose category matches exactly.
    #[must_use]
    pub fn by_category(&self, category: Category) -> Vec<Product> {
        self.products
            .values()
            .filter(|p| p.category == category)
            .cloned()
            .collect()
    }

    /// Products with the bestseller flag set.
    #[must_use]
    pub fn bestsellers(&self) -> Vec<Product> {
        self.products
            .values()
            .filter(|p| p.bestseller)
            .cloned()
            .collect()
    }

    /// Case-insensitive substring search over name, description, and
    /// category; a product matches if ANY field contains the query.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<Product> {
        let query = query.to_lowercase();
        self.products
            .values()
            .filter(|p| {
                p.name.to_lowercase().contains(&query)
                    || p.description.to_lowercase().contains(&query)
                    || p.category.as_str().contains(&query)
            })
            .cloned()
            .collect()
    }

    /// Number of seeded products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty (never, after seeding).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
