//! # Menu Catalog
//!
//! The read-only menu, built once at startup and passed by reference to
//! the order builder. There is no global menu.
//!
//! Selection numbers on the order screen are 1-based positions in
//! [`MenuCatalog::list_items`], so the catalog order is part of the
//! operator-facing contract and never changes after construction.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{CoreResult, ValidationError};
use crate::money::Money;
use crate::types::MenuItem;
use crate::validation::{validate_item_name, validate_price_cents, validate_selection};

/// The café menu plus the topping list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuCatalog {
    items: Vec<MenuItem>,
    toppings: Vec<String>,
    topping_categories: Vec<String>,
}

/// One heading on the menu screen and its items with their selection numbers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryGroup<'a> {
    pub category: &'a str,
    pub items: Vec<(usize, &'a MenuItem)>,
}

impl MenuCatalog {
    /// Builds a catalog, checking every item.
    ///
    /// ## Rules
    /// - At least one item
    /// - Names non-empty and unique (case-insensitive)
    /// - Prices non-negative
    pub fn new(
        items: Vec<MenuItem>,
        toppings: Vec<String>,
        topping_categories: Vec<String>,
    ) -> CoreResult<Self> {
        if items.is_empty() {
            return Err(ValidationError::Required {
                field: "menu items".to_string(),
            }
            .into());
        }

        let mut seen = HashSet::new();
        for item in &items {
            validate_item_name(&item.name)?;
            validate_price_cents(item.price_cents)?;
            if !seen.insert(item.name.trim().to_lowercase()) {
                return Err(ValidationError::Duplicate {
                    field: "menu item".to_string(),
                    value: item.name.clone(),
                }
                .into());
            }
        }

        Ok(MenuCatalog {
            items,
            toppings,
            topping_categories,
        })
    }

    /// The house menu of Rukaab Cafe & Ice Cream.
    pub fn rukaab_default() -> Self {
        MenuCatalog {
            items: default_items(),
            toppings: default_toppings(),
            topping_categories: vec!["Ice Cream".to_string()],
        }
    }

    /// Every item in selection order.
    pub fn list_items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Looks up a 1-based operator selection.
    pub fn item_at(&self, choice: i64) -> CoreResult<&MenuItem> {
        let idx = validate_selection("menu item", choice, self.items.len())?;
        Ok(&self.items[idx])
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn toppings(&self) -> &[String] {
        &self.toppings
    }

    pub fn topping_categories(&self) -> &[String] {
        &self.topping_categories
    }

    /// Whether the operator must pick a topping for this item.
    pub fn takes_toppings(&self, item: &MenuItem) -> bool {
        !self.toppings.is_empty() && self.topping_categories.iter().any(|c| c == &item.category)
    }

    /// Items grouped under their category, first-appearance order.
    pub fn categories(&self) -> Vec<CategoryGroup<'_>> {
        let mut groups: Vec<CategoryGroup<'_>> = Vec::new();
        for (idx, item) in self.items.iter().enumerate() {
            let number = idx + 1;
            match groups.iter_mut().find(|g| g.category == item.category) {
                Some(group) => group.items.push((number, item)),
                None => groups.push(CategoryGroup {
                    category: &item.category,
                    items: vec![(number, item)],
                }),
            }
        }
        groups
    }
}

impl Default for MenuCatalog {
    fn default() -> Self {
        MenuCatalog::rukaab_default()
    }
}

const SCOOPS: &[&str] = &["Single Scoop", "Double Scoop", "Triple Scoop"];
const SHAKE_SIZES: &[&str] = &["Small", "Medium", "Large"];

/// Default menu items, in selection order.
pub fn default_items() -> Vec<MenuItem> {
    let rs = |rupees| Money::from_major_minor(rupees, 0);
    vec![
        MenuItem::new("Ice Cream", "Chocolate Dream", rs(100), SCOOPS),
        MenuItem::new("Ice Cream", "Vanilla Bliss", rs(100), SCOOPS),
        MenuItem::new("Ice Cream", "Strawberry Fields", rs(120), SCOOPS),
        MenuItem::new("Ice Cream", "Mango Tango", rs(120), SCOOPS),
        MenuItem::new("Shakes", "Chocolate Shake", rs(250), SHAKE_SIZES),
        MenuItem::new("Shakes", "Strawberry Shake", rs(250), SHAKE_SIZES),
        MenuItem::new("Desserts", "Rukaab Brownie", rs(300), &["Plain", "With Ice Cream"]),
        MenuItem::new("Beverages", "Coffee", rs(150), &["Hot", "Cold"]),
        MenuItem::new("Beverages", "Karak Chai", rs(100), &["Regular", "Masala"]),
    ]
}

/// Default topping labels. "No Topping" is the explicit opt-out.
pub fn default_toppings() -> Vec<String> {
    [
        "Chocolate Syrup",
        "Strawberry Syrup",
        "Caramel",
        "Oreo Crumbles",
        "Almonds",
        "Whipped Cream",
        "No Topping",
    ]
    .iter()
    .map(|t| t.to_string())
    .collect()
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_default_menu() {
        let catalog = MenuCatalog::rukaab_default();
        assert_eq!(catalog.len(), 9);
        assert_eq!(catalog.item_at(1).unwrap().name, "Chocolate Dream");
        assert_eq!(catalog.item_at(1).unwrap().price().cents(), 10_000);
        assert_eq!(catalog.item_at(9).unwrap().name, "Karak Chai");
    }

    #[test]
    fn test_item_at_out_of_range() {
        let catalog = MenuCatalog::rukaab_default();
        for choice in [0, 10, -1] {
            assert!(matches!(
                catalog.item_at(choice),
                Err(CoreError::InvalidSelection { max: 9, .. })
            ));
        }
    }

    #[test]
    fn test_takes_toppings_only_for_ice_cream() {
        let catalog = MenuCatalog::rukaab_default();
        assert!(catalog.takes_toppings(catalog.item_at(1).unwrap()));
        assert!(!catalog.takes_toppings(catalog.item_at(5).unwrap()));
        assert_eq!(catalog.toppings().last().map(String::as_str), Some("No Topping"));
    }

    #[test]
    fn test_categories_keep_selection_numbers() {
        let catalog = MenuCatalog::rukaab_default();
        let groups = catalog.categories();

        let names: Vec<&str> = groups.iter().map(|g| g.category).collect();
        assert_eq!(names, ["Ice Cream", "Shakes", "Desserts", "Beverages"]);

        let beverages = &groups[3];
        assert_eq!(beverages.items[0].0, 8);
        assert_eq!(beverages.items[1].1.name, "Karak Chai");
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let items = vec![
            MenuItem::new("Beverages", "Coffee", Money::from_cents(100), &[]),
            MenuItem::new("Beverages", "coffee", Money::from_cents(200), &[]),
        ];
        let err = MenuCatalog::new(items, vec![], vec![]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::Duplicate { .. })));
    }

    #[test]
    fn test_new_rejects_empty_and_negative() {
        assert!(MenuCatalog::new(vec![], vec![], vec![]).is_err());

        let items = vec![MenuItem::new("Beverages", "Water", Money::from_cents(-1), &[])];
        assert!(MenuCatalog::new(items, vec![], vec![]).is_err());
    }

    #[test]
    fn test_new_rejects_price_that_could_overflow_totals() {
        let items = vec![MenuItem::new("Desserts", "Gold Cake", Money::from_cents(i64::MAX / 2), &[])];
        let err = MenuCatalog::new(items, vec![], vec![]).unwrap_err();
        assert!(matches!(err, CoreError::Validation(ValidationError::OutOfRange { .. })));
    }

    #[test]
    fn test_topping_category_without_toppings() {
        let items = vec![MenuItem::new("Ice Cream", "Plain Cone", Money::from_cents(5_000), &["Single Scoop"])];
        let catalog = MenuCatalog::new(items, vec![], vec!["Ice Cream".to_string()]).unwrap();
        assert!(!catalog.takes_toppings(catalog.item_at(1).unwrap()));
    }
}
