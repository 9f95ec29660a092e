// MarketView - core/catalog.rs
//
// The built-in product catalog and its startup validation.

use crate::core::model::{Category, Product};
use crate::util::constants::PRICE_SLIDER_MAX;
use crate::util::error::CatalogError;
use std::collections::HashSet;

/// The six products offered by the marketplace.
pub static PRODUCTS: [Product; 6] = [
    Product {
        id: 1,
        name: "Laptop Pro",
        price: 1299,
        category: Category::Electronics,
    },
    Product {
        id: 2,
        name: "Smartphone X",
        price: 699,
        category: Category::Electronics,
    },
    Product {
        id: 3,
        name: "Ergonomic Chair",
        price: 299,
        category: Category::Furniture,
    },
    Product {
        id: 4,
        name: "Coffee Maker",
        price: 89,
        category: Category::Appliances,
    },
    Product {
        id: 5,
        name: "Running Shoes",
        price: 129,
        category: Category::Sports,
    },
    Product {
        id: 6,
        name: "Wireless Earbuds",
        price: 159,
        category: Category::Electronics,
    },
];

/// Check the catalog invariants: unique ids, prices reachable by the slider.
///
/// Returns the first violation found, in catalog order.
pub fn validate(products: &[Product]) -> Result<(), CatalogError> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        if !seen.insert(product.id) {
            return Err(CatalogError::DuplicateId { id: product.id });
        }
        if product.price > PRICE_SLIDER_MAX {
            return Err(CatalogError::PriceOutOfRange {
                id: product.id,
                price: product.price,
                max: PRICE_SLIDER_MAX,
            });
        }
    }
    tracing::debug!(products = products.len(), "Catalog validated");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        assert_eq!(validate(&PRODUCTS), Ok(()));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut products = PRODUCTS.to_vec();
        products[3].id = 1;
        assert_eq!(
            validate(&products),
            Err(CatalogError::DuplicateId { id: 1 })
        );
    }

    #[test]
    fn test_price_above_slider_rejected() {
        let mut products = PRODUCTS.to_vec();
        products[0].price = PRICE_SLIDER_MAX + 1;
        assert!(matches!(
            validate(&products),
            Err(CatalogError::PriceOutOfRange { id: 1, .. })
        ));
    }
}
