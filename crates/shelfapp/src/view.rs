//! # List Projection
//!
//! The list view never stores anything. [`project`] is a pure function of the
//! product collection and a [`ListQuery`] (search term, sort key, direction),
//! recomputed from scratch whenever any of them changes.
//!
//! ## Filtering
//!
//! Case-insensitive substring match of the search term against the product
//! name. An empty (or all-whitespace) term matches everything.
//!
//! ## Sorting
//!
//! | Key | Comparison |
//! |-----|------------|
//! | `code` | numeric |
//! | `quantity` | numeric |
//! | `created` | chronological |
//! | `name` | Unicode collation (CLDR root order) |
//!
//! Name collation follows the Unicode Collation Algorithm, so accents and case
//! are secondary differences: "Álamo" sorts with the A names and "Ñandú" with
//! the N names, where a code point comparison would push both past "Z".
//!
//! The default order is `created-desc`: most recent first. Ties keep their
//! relative insertion order (the sort is stable) but callers should not rely
//! on that.
//!
//! ## Compact Form
//!
//! A [`SortOrder`] round-trips through `<key>-<direction>` strings such as
//! `name-asc` or `created-desc`, which is what the CLI and config accept.

use crate::model::Product;
use feruca::Collator;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortKey {
    Code,
    Name,
    Quantity,
    #[default]
    CreatedAt,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Code => "code",
            SortKey::Name => "name",
            SortKey::Quantity => "quantity",
            SortKey::CreatedAt => "created",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "code" => Ok(SortKey::Code),
            "name" => Ok(SortKey::Name),
            "quantity" | "qty" => Ok(SortKey::Quantity),
            "created" | "createdat" | "created_at" | "created-at" | "date" => {
                Ok(SortKey::CreatedAt)
            }
            other => Err(format!(
                "Unknown sort key '{}' (expected code, name, quantity or created)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" | "ascending" => Ok(SortDirection::Asc),
            "desc" | "descending" => Ok(SortDirection::Desc),
            other => Err(format!(
                "Unknown sort direction '{}' (expected asc or desc)",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortOrder {
    pub key: SortKey,
    pub direction: SortDirection,
}

impl SortOrder {
    pub fn new(key: SortKey, direction: SortDirection) -> Self {
        Self { key, direction }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.key.as_str(), self.direction.as_str())
    }
}

/// Parses `<key>-<direction>`. The split is on the last hyphen so that
/// `created-at-asc` works. A bare key sorts descending.
impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some((key, dir)) = s.rsplit_once('-') {
            if let Ok(direction) = dir.parse::<SortDirection>() {
                return Ok(SortOrder::new(key.parse()?, direction));
            }
        }
        Ok(SortOrder::new(s.parse()?, SortDirection::default()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListQuery {
    pub search: String,
    pub sort: SortOrder,
}

impl ListQuery {
    pub fn new(search: impl Into<String>, sort: SortOrder) -> Self {
        Self {
            search: search.into(),
            sort,
        }
    }
}

/// Filtered and ordered view over `products`.
pub fn project<'a>(products: &'a [Product], query: &ListQuery) -> Vec<&'a Product> {
    let term = query.search.trim().to_lowercase();
    let mut view: Vec<&Product> = products
        .iter()
        .filter(|p| term.is_empty() || p.name.to_lowercase().contains(&term))
        .collect();

    let mut collator = Collator::default();
    view.sort_by(|a, b| {
        let ord = compare_by(&mut collator, a, b, query.sort.key);
        match query.sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
    view
}

fn compare_by(collator: &mut Collator, a: &Product, b: &Product, key: SortKey) -> Ordering {
    match key {
        SortKey::Code => a.code.cmp(&b.code),
        SortKey::Quantity => a.quantity.cmp(&b.quantity),
        SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
        SortKey::Name => compare_names(collator, &a.name, &b.name),
    }
}

/// Dictionary order for product names. Accents and case only decide between
/// names that are otherwise equal.
pub fn compare_names(collator: &mut Collator, a: &str, b: &str) -> Ordering {
    collator.collate(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};

    fn product(code: u64, name: &str, quantity: u64, minutes: i64) -> Product {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap();
        Product::with_created_at(
            code,
            name.to_string(),
            "some description".to_string(),
            quantity,
            base + Duration::minutes(minutes),
        )
    }

    fn codes(view: &[&Product]) -> Vec<u64> {
        view.iter().map(|p| p.code).collect()
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let products = vec![product(1, "FooBar", 1, 0), product(2, "Baz", 1, 1)];
        let query = ListQuery::new("foo", SortOrder::default());
        assert_eq!(codes(&project(&products, &query)), vec![1]);

        let query = ListQuery::new("OOB", SortOrder::default());
        assert_eq!(codes(&project(&products, &query)), vec![1]);
    }

    #[test]
    fn test_empty_search_matches_everything() {
        let products = vec![product(1, "FooBar", 1, 0), product(2, "Baz", 1, 1)];
        assert_eq!(project(&products, &ListQuery::default()).len(), 2);
        assert_eq!(
            project(&products, &ListQuery::new("   ", SortOrder::default())).len(),
            2
        );
    }

    #[test]
    fn test_sort_quantity_ascending() {
        let products = vec![product(1, "A", 5, 0), product(2, "B", 2, 1)];
        let query = ListQuery::new(
            "",
            SortOrder::new(SortKey::Quantity, SortDirection::Asc),
        );
        assert_eq!(codes(&project(&products, &query)), vec![2, 1]);
    }

    #[test]
    fn test_default_is_most_recent_first() {
        let products = vec![
            product(1, "Old", 1, 0),
            product(2, "Newest", 1, 20),
            product(3, "Middle", 1, 10),
        ];
        assert_eq!(codes(&project(&products, &ListQuery::default())), vec![2, 3, 1]);
    }

    #[test]
    fn test_sort_code_both_directions() {
        let products = vec![
            product(10, "A", 1, 0),
            product(2, "B", 1, 1),
            product(33, "C", 1, 2),
        ];
        let asc = ListQuery::new("", SortOrder::new(SortKey::Code, SortDirection::Asc));
        let desc = ListQuery::new("", SortOrder::new(SortKey::Code, SortDirection::Desc));
        assert_eq!(codes(&project(&products, &asc)), vec![2, 10, 33]);
        assert_eq!(codes(&project(&products, &desc)), vec![33, 10, 2]);
    }

    #[test]
    fn test_sort_name_ignores_case() {
        let products = vec![
            product(1, "banana", 1, 0),
            product(2, "Apple", 1, 1),
            product(3, "cherry", 1, 2),
        ];
        let query = ListQuery::new("", SortOrder::new(SortKey::Name, SortDirection::Asc));
        assert_eq!(codes(&project(&products, &query)), vec![2, 1, 3]);
    }

    #[test]
    fn test_filter_and_sort_combine() {
        let products = vec![
            product(1, "Red chair", 4, 0),
            product(2, "Blue table", 9, 1),
            product(3, "Green chair", 1, 2),
        ];
        let query = ListQuery::new(
            "CHAIR",
            SortOrder::new(SortKey::Quantity, SortDirection::Desc),
        );
        assert_eq!(codes(&project(&products, &query)), vec![1, 3]);
    }

    #[test]
    fn test_sort_name_places_accented_initials_with_their_letter() {
        let products = vec![
            product(1, "Zapato", 1, 0),
            product(2, "Álamo", 1, 1),
            product(3, "Ñandú", 1, 2),
            product(4, "Oso", 1, 3),
        ];
        let query = ListQuery::new("", SortOrder::new(SortKey::Name, SortDirection::Asc));
        let names: Vec<&str> = project(&products, &query)
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        assert_eq!(names, vec!["Álamo", "Ñandú", "Oso", "Zapato"]);
    }

    #[test]
    fn test_compare_names() {
        let mut collator = Collator::default();
        assert_eq!(compare_names(&mut collator, "apple", "Banana"), Ordering::Less);
        assert_eq!(compare_names(&mut collator, "éclair", "Eclipse"), Ordering::Less);
        assert_eq!(compare_names(&mut collator, "cama", "Cámara"), Ordering::Less);
        assert_eq!(compare_names(&mut collator, "same", "same"), Ordering::Equal);
    }

    #[test]
    fn test_sort_order_parsing() {
        assert_eq!(
            "name-asc".parse::<SortOrder>().unwrap(),
            SortOrder::new(SortKey::Name, SortDirection::Asc)
        );
        assert_eq!(
            "created-at-asc".parse::<SortOrder>().unwrap(),
            SortOrder::new(SortKey::CreatedAt, SortDirection::Asc)
        );
        assert_eq!(
            "createdAt-desc".parse::<SortOrder>().unwrap(),
            SortOrder::default()
        );
        assert_eq!(
            "quantity".parse::<SortOrder>().unwrap(),
            SortOrder::new(SortKey::Quantity, SortDirection::Desc)
        );
        assert!("price-asc".parse::<SortOrder>().is_err());
        assert_eq!(SortOrder::default().to_string(), "created-desc");
    }
}
