use super::*;

fn brand(id: &str, sizes: Option<Vec<Size>>, toppings: Option<Vec<&str>>) -> Brand {
    Brand {
        id: id.to_string(),
        name: id.to_uppercase(),
        color: String::new(),
        popular_items: Vec::new(),
        custom_toppings: toppings.map(|t| t.into_iter().map(String::from).collect()),
        custom_sizes: sizes,
    }
}

#[test]
fn effective_sizes_are_never_empty() {
    let catalog = Catalog::builtin();
    for brand in catalog.brands() {
        assert!(
            !brand.effective_sizes().is_empty(),
            "{} offers no sizes",
            brand.id
        );
    }
    let empty_override = brand("odd", Some(Vec::new()), None);
    assert_eq!(empty_override.effective_sizes(), Size::ALL.to_vec());
}

#[test]
fn brand_overrides_replace_default_option_sets() {
    let plain = brand("plain", None, None);
    assert_eq!(plain.effective_sizes(), default_sizes());
    assert_eq!(plain.effective_toppings(), default_toppings());

    let custom = brand("shop", Some(vec![Size::Medium]), Some(vec!["白玉"]));
    assert_eq!(custom.effective_sizes(), vec![Size::Medium]);
    assert_eq!(custom.effective_toppings(), vec!["白玉".to_string()]);

    let no_toppings = brand("bare", None, Some(Vec::new()));
    assert!(no_toppings.effective_toppings().is_empty());
}

#[test]
fn named_stand_in_uses_defaults() {
    let stand_in = BrandRef::Named {
        id: "50lan".to_string(),
        name: "50嵐".to_string(),
    };
    assert_eq!(stand_in.effective_sizes(), default_sizes());
    assert_eq!(stand_in.effective_toppings(), default_toppings());
    assert!(stand_in.popular_items().is_empty());
}

#[test]
fn custom_brand_falls_back_to_placeholder_name() {
    assert_eq!(BrandRef::custom(None).name(), CUSTOM_BRAND_NAME);
    assert_eq!(BrandRef::custom(Some("   ")).name(), CUSTOM_BRAND_NAME);
    let typed = BrandRef::custom(Some(" 巷口茶舖 "));
    assert_eq!(typed.name(), "巷口茶舖");
    assert!(typed.is_custom());
}

#[test]
fn search_is_case_insensitive_and_keeps_catalog_order() {
    let catalog = Catalog::builtin();
    let hits: Vec<&str> = catalog
        .search_brands("coco")
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    assert_eq!(hits, vec!["coco"]);

    let tea: Vec<&str> = catalog
        .search_brands("茶")
        .iter()
        .map(|b| b.id.as_str())
        .collect();
    let positions: Vec<usize> = tea
        .iter()
        .map(|id| {
            catalog
                .brands()
                .iter()
                .position(|b| b.id == *id)
                .expect("hit comes from catalog")
        })
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
    assert!(tea.len() > 3);

    assert_eq!(catalog.search_brands("").len(), catalog.brands().len());
    assert!(catalog.search_brands("no such shop").is_empty());
}

#[test]
fn lookup_and_resolve_find_brands_by_id_or_name() {
    let catalog = Catalog::builtin();
    assert_eq!(
        catalog.lookup_brand("50lan").map(|b| b.name.as_str()),
        Some("50嵐")
    );
    assert!(catalog.lookup_brand("custom").is_none());
    assert_eq!(
        catalog.resolve("comebuy").map(|b| b.id.as_str()),
        Some("comebuy")
    );
    assert_eq!(
        catalog.resolve("CoCo都可").map(|b| b.id.as_str()),
        Some("coco")
    );
}

#[test]
fn extend_replaces_matching_ids_and_appends_new_brands() {
    let mut catalog = Catalog::from_brands(vec![brand("a", None, None), brand("b", None, None)]);
    catalog.extend(vec![
        brand("b", Some(vec![Size::Bottle]), None),
        brand("c", None, None),
    ]);
    let ids: Vec<&str> = catalog.brands().iter().map(|b| b.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);
    assert_eq!(
        catalog.lookup_brand("b").map(|b| b.effective_sizes()),
        Some(vec![Size::Bottle])
    );
}

#[test]
fn option_tokens_parse_from_keys_or_display_strings() {
    assert_eq!("half".parse::<SugarLevel>().ok(), Some(SugarLevel::Half));
    assert_eq!("半糖 (50%)".parse::<SugarLevel>().ok(), Some(SugarLevel::Half));
    assert_eq!("L".parse::<Size>().ok(), Some(Size::Large));
    assert_eq!("total-none".parse::<IceLevel>().ok(), Some(IceLevel::TotalNone));
    assert_eq!("熱".parse::<IceLevel>().ok(), Some(IceLevel::Hot));
    assert!("extra".parse::<Size>().is_err());
}

#[test]
fn option_tokens_serialize_as_display_strings() {
    let json = serde_json::to_string(&SugarLevel::Half).expect("serialize sugar");
    assert_eq!(json, "\"半糖 (50%)\"");
    let size: Size = serde_json::from_str("\"瓶裝 (Bottle)\"").expect("parse size");
    assert_eq!(size, Size::Bottle);
}
