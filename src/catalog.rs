//! Static variant catalog for the demo products and the composite cart id.

use rust_decimal::Decimal;

use crate::dto::cart::AddToCartRequest;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorOption {
    pub name: &'static str,
    pub hex: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct VariantSet {
    pub colors: &'static [ColorOption],
    /// `None` for products sold in a single size.
    pub sizes: Option<&'static [&'static str]>,
}

/// Offered to products without a catalog entry.
pub const DEFAULT_COLORS: [ColorOption; 2] = [
    ColorOption {
        name: "Black",
        hex: "#000000",
    },
    ColorOption {
        name: "White",
        hex: "#ffffff",
    },
];

static PRO_SMARTPHONE_X: VariantSet = VariantSet {
    colors: &[
        ColorOption { name: "Midnight Black", hex: "#1a1a1a" },
        ColorOption { name: "Silver", hex: "#c0c0c0" },
        ColorOption { name: "Deep Blue", hex: "#1e3a8a" },
        ColorOption { name: "Rose Gold", hex: "#b76e79" },
    ],
    sizes: Some(&["128GB", "256GB", "512GB"]),
};

static GAMING_LAPTOP_PRO: VariantSet = VariantSet {
    colors: &[
        ColorOption { name: "Space Gray", hex: "#4a5568" },
        ColorOption { name: "Midnight Black", hex: "#1a1a1a" },
    ],
    sizes: Some(&["16GB RAM", "32GB RAM", "64GB RAM"]),
};

static WIRELESS_HEADPHONES: VariantSet = VariantSet {
    colors: &[
        ColorOption { name: "Black", hex: "#000000" },
        ColorOption { name: "White", hex: "#ffffff" },
        ColorOption { name: "Red", hex: "#dc2626" },
        ColorOption { name: "Blue", hex: "#2563eb" },
    ],
    sizes: None,
};

static SMART_WATCH_ULTRA: VariantSet = VariantSet {
    colors: &[
        ColorOption { name: "Titanium", hex: "#71717a" },
        ColorOption { name: "Black", hex: "#000000" },
        ColorOption { name: "Gold", hex: "#d4af37" },
    ],
    sizes: Some(&["40mm", "44mm", "48mm"]),
};

static WIRELESS_EARBUDS_PRO: VariantSet = VariantSet {
    colors: &[
        ColorOption { name: "White", hex: "#ffffff" },
        ColorOption { name: "Black", hex: "#000000" },
    ],
    sizes: None,
};

static TABLET_PRO: VariantSet = VariantSet {
    colors: &[
        ColorOption { name: "Space Gray", hex: "#4a5568" },
        ColorOption { name: "Silver", hex: "#c0c0c0" },
    ],
    sizes: Some(&["128GB", "256GB", "512GB", "1TB"]),
};

static PORTABLE_SPEAKER: VariantSet = VariantSet {
    colors: &[
        ColorOption { name: "Black", hex: "#000000" },
        ColorOption { name: "Blue", hex: "#2563eb" },
        ColorOption { name: "Red", hex: "#dc2626" },
        ColorOption { name: "Green", hex: "#16a34a" },
    ],
    sizes: None,
};

static ACTION_CAMERA_4K: VariantSet = VariantSet {
    colors: &[
        ColorOption { name: "Black", hex: "#000000" },
        ColorOption { name: "White", hex: "#ffffff" },
    ],
    sizes: None,
};

pub fn variants_for(product_name: &str) -> Option<&'static VariantSet> {
    match product_name {
        "Pro Smartphone X" => Some(&PRO_SMARTPHONE_X),
        "Gaming Laptop Pro" => Some(&GAMING_LAPTOP_PRO),
        "Wireless Headphones" => Some(&WIRELESS_HEADPHONES),
        "Smart Watch Ultra" => Some(&SMART_WATCH_ULTRA),
        "Wireless Earbuds Pro" => Some(&WIRELESS_EARBUDS_PRO),
        "Tablet Pro 12.9\"" => Some(&TABLET_PRO),
        "Portable Speaker" => Some(&PORTABLE_SPEAKER),
        "4K Action Camera" => Some(&ACTION_CAMERA_4K),
        _ => None,
    }
}

/// Product card fields as shown in the listing, before variant selection.
#[derive(Debug, Clone)]
pub struct ProductInfo {
    pub id: String,
    pub name: String,
    pub price: Decimal,
    pub image: String,
}

/// Composite cart id: base product id plus color and size slugs. A product
/// without sizes gets the `default` size slot so the id shape stays uniform.
pub fn variant_id(base_id: &str, color: &str, size: Option<&str>) -> String {
    let color = slug(color);
    let size = size.map_or_else(|| "default".to_string(), slug);
    format!("{base_id}-{color}-{size}")
}

fn slug(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join("-")
}

/// Turn a variant selection into a cart payload, enforcing the selection
/// rules: a color is always required, a size only when the product has sizes.
pub fn build_cart_request(
    product: &ProductInfo,
    color: Option<&str>,
    size: Option<&str>,
) -> AppResult<AddToCartRequest> {
    let Some(color) = color else {
        return Err(AppError::Validation("Please select a color".to_string()));
    };
    let has_sizes = variants_for(&product.name).is_some_and(|set| set.sizes.is_some());
    if has_sizes && size.is_none() {
        return Err(AppError::Validation("Please select a size".to_string()));
    }

    Ok(AddToCartRequest {
        id: variant_id(&product.id, color, size),
        name: product.name.clone(),
        price: product.price,
        image: product.image.clone(),
        color: Some(color.to_string()),
        size: size.map(str::to_string),
    })
}
