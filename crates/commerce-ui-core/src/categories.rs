//! Component and block category tables
//!
//! Static configuration: each category becomes one MCP tool that resolves
//! the items listed here, in order. The tables are fixed at build time and
//! define the set of exposed category operations.

/// A named, ordered group of registry items
#[derive(Debug, Clone, Copy)]
pub struct Category {
    /// Tool label, appended to `get` (e.g. `Ratings` -> `getRatings`)
    pub label: &'static str,
    /// Registry item names resolved by the category tool, in response order
    pub items: &'static [&'static str],
}

/// Component categories, one tool each
pub const COMPONENT_CATEGORIES: &[Category] = &[
    Category {
        label: "Ratings",
        items: &[
            "star-rating-basic",
            "star-rating-fractions",
            "upvote-rating-basic",
            "upvote-rating-animated",
            "face-rating-basic",
            "face-rating-gradient",
        ],
    },
    Category {
        label: "Images",
        items: &[
            "image-viewer-basic",
            "image-viewer-motion",
            "image-carousel-basic",
        ],
    },
    Category {
        label: "Products",
        items: &[
            "price-format-basic",
            "price-format-sale",
            "quantity-input-basic",
            "variant-color-selector-basic",
            "variant-selector-basic",
            "variant-selector-images",
            "variant-selector-multiple",
        ],
    },
];

/// Block categories, one tool each
pub const BLOCK_CATEGORIES: &[Category] = &[Category {
    label: "Banners",
    items: &[
        "banner-01-block",
        "banner-02-block",
        "banner-03-block",
        "banner-04-block",
        "banner-05-block",
        "banner-06-block",
        "banner-07-block",
        "banner-08-block",
        "banner-09-block",
        "banner-10-block",
        "banner-11-block",
        "banner-12-block",
    ],
}];
