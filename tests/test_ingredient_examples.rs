use recipe_extractors::duration::{format_iso_duration, DurationStyle};
use recipe_extractors::SiteExtractor;
use serde_json::{json, Value};

fn parse(site: &str, line: &str) -> Value {
    let extractor = SiteExtractor::for_site(site).unwrap();
    let ingredient = extractor
        .ingredient_parser()
        .parse(line)
        .unwrap_or_else(|| panic!("{site}: nothing parsed from {line:?}"));
    serde_json::to_value(ingredient).unwrap()
}

#[test]
fn test_lithuanian_amount_unit_name() {
    assert_eq!(
        parse("vmgonline_lt", "500 g lašišos filė"),
        json!({"name": "lašišos filė", "units": "g", "amount": 500})
    );
}

#[test]
fn test_english_amount_unit_name() {
    assert_eq!(
        parse("eatthis_com", "1 cup all-purpose flour"),
        json!({"name": "all-purpose flour", "amount": 1, "units": "cup"})
    );
}

#[test]
fn test_integer_unit_name_lines_across_sites() {
    let cases = [
        ("coop_se", "3 dl vetemjöl", "vetemjöl", "dl"),
        ("kwestiasmaku_com", "1 kg ziemniaków", "ziemniaków", "kg"),
        ("chefkoch_de", "2 EL Olivenöl", "Olivenöl", "EL"),
        ("apetit_bg", "500 г кайма", "кайма", "г"),
        ("misya_info", "200 g farina", "farina", "g"),
        ("afkarjadida_com", "2 كوب أرز", "أرز", "كوب"),
    ];

    for (site, line, name, unit) in cases {
        let value = parse(site, line);
        assert_eq!(value["name"], json!(name), "{site}");
        assert_eq!(value["units"], json!(unit), "{site}");
        assert!(value["amount"].is_u64(), "{site}");
    }
}

#[test]
fn test_unit_without_amount() {
    assert_eq!(
        parse("eatthis_com", "pinch of salt"),
        json!({"name": "salt", "amount": null, "units": "pinch"})
    );
    assert_eq!(
        parse("10dakot_co_il", "כוס סוכר"),
        json!({"name": "סוכר", "amount": null, "units": "cup"})
    );
    assert_eq!(
        parse("apetit_bg", "ч.л. сол"),
        json!({"name": "сол", "amount": null, "units": "ч.л."})
    );
    assert_eq!(
        parse("misya_info", "cucchiaio di olio"),
        json!({"name": "olio", "amount": null, "units": "cucchiaio"})
    );
}

#[test]
fn test_reparsed_names_keep_their_text() {
    for (site, line) in [
        ("vmgonline_lt", "500 g lašišos filė"),
        ("eatthis_com", "1 cup all-purpose flour"),
        ("eatthis_com", "1 cup 2 percent milk"),
        ("ptitchef_com", "250 g de farine"),
        ("kurashiru_com", "砂糖 大さじ1"),
    ] {
        let first = parse(site, line);
        let name = first["name"].as_str().unwrap();
        let second = parse(site, name);
        assert_eq!(second["name"], first["name"], "{site}");
        assert_eq!(second["amount"], Value::Null, "{site}");
    }
}

#[test]
fn test_words_and_vague_quantities() {
    assert_eq!(
        parse("vmgonline_lt", "žiupsnelio druskos"),
        json!({"name": "druskos", "amount": "žiupsnelio", "units": null})
    );
    assert_eq!(
        parse("vmgonline_lt", "Žiupsnelio druskos")["amount"],
        json!("žiupsnelio")
    );
    assert_eq!(
        parse("misya_info", "sale q.b."),
        json!({"name": "sale", "amount": null, "units": "q.b."})
    );
    assert_eq!(
        parse("cooktail_co_kr", "소금 약간"),
        json!({"name": "소금", "amount": null, "units": "약간"})
    );
}

#[test]
fn test_unit_aliases() {
    assert_eq!(parse("coop_se", "2 matskedar smör")["units"], json!("msk"));
    assert_eq!(
        parse("10dakot_co_il", "2 כפות שמן זית"),
        json!({"name": "שמן זית", "amount": 2, "units": "tablespoons"})
    );
}

#[test]
fn test_duration_examples() {
    assert_eq!(
        format_iso_duration("PT1H30M", DurationStyle::Human).as_deref(),
        Some("1 hour 30 minutes")
    );
    assert_eq!(
        format_iso_duration("PT45M", DurationStyle::Human).as_deref(),
        Some("45 minutes")
    );
    assert_eq!(format_iso_duration("", DurationStyle::Human), None);
}

#[test]
fn test_split_fragment_hands_its_amount_on() {
    let extractor = SiteExtractor::for_site("eatthis_com").unwrap();
    let ingredients = extractor.ingredient_parser().parse_lines([
        "1 lb chicken breast",
        "cut into 1-inch pieces 1/2",
        "cup low-sodium chicken broth",
    ]);

    assert_eq!(
        serde_json::to_value(ingredients).unwrap(),
        json!([
            {"name": "chicken breast", "amount": 1, "units": "lb"},
            {"name": "low-sodium chicken broth", "amount": 0.5, "units": "cup"},
        ])
    );
}
