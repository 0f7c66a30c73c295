//! Tests for the category module

use replate::core::models::Category;

// =============================================================================
// PARSING TESTS
// =============================================================================

#[test]
fn test_category_from_str_canonical() {
    assert_eq!("prepared".parse::<Category>().unwrap(), Category::Prepared);
    assert_eq!("produce".parse::<Category>().unwrap(), Category::Produce);
    assert_eq!("bakery".parse::<Category>().unwrap(), Category::Bakery);
    assert_eq!("dairy".parse::<Category>().unwrap(), Category::Dairy);
    assert_eq!("meat".parse::<Category>().unwrap(), Category::Meat);
    assert_eq!("pantry".parse::<Category>().unwrap(), Category::Pantry);
}

#[test]
fn test_category_from_str_aliases() {
    assert_eq!("cooked".parse::<Category>().unwrap(), Category::Prepared);
    assert_eq!("fresh".parse::<Category>().unwrap(), Category::Produce);
    assert_eq!("bread".parse::<Category>().unwrap(), Category::Bakery);
    assert_eq!("fish".parse::<Category>().unwrap(), Category::Meat);
    assert_eq!("dry".parse::<Category>().unwrap(), Category::Pantry);
}

#[test]
fn test_category_from_str_case_insensitive() {
    assert_eq!("PREPARED".parse::<Category>().unwrap(), Category::Prepared);
    assert_eq!("Dairy".parse::<Category>().unwrap(), Category::Dairy);
}

#[test]
fn test_category_from_str_invalid() {
    let result = "electronics".parse::<Category>();
    assert!(result.is_err());
    assert!(result.unwrap_err().contains("Invalid category"));
}

// =============================================================================
// DISPLAY AND SERDE TESTS
// =============================================================================

#[test]
fn test_category_display_round_trips() {
    for c in [
        Category::Prepared,
        Category::Produce,
        Category::Bakery,
        Category::Dairy,
        Category::Meat,
        Category::Pantry,
    ] {
        assert_eq!(c.to_string().parse::<Category>().unwrap(), c);
    }
}

#[test]
fn test_category_serde_lowercase() {
    let json = serde_json::to_string(&Category::Prepared).unwrap();
    assert_eq!(json, "\"prepared\"");

    let parsed: Category = serde_json::from_str("\"meat\"").unwrap();
    assert_eq!(parsed, Category::Meat);
}
