use retroface_theme::{ColorSpec, Dimension, PanelStyle, Theme, ThemeCatalog, ThemeError};

fn marine_theme() -> Theme {
    let panel = |font: &str, size: Option<&str>| PanelStyle {
        background_color: ColorSpec::from("#000080"),
        text_color: ColorSpec::from("#FFFFFF"),
        text_font: font.to_owned(),
        text_size: size.map(Dimension::from),
    };

    Theme {
        name: "Marine".to_owned(),
        background_color: ColorSpec::from("#D2B48C"),
        day: panel("fonts/airstream.ttf", Some("20pt")),
        time: panel("fonts/digital.ttf", Some("48pt")),
        date: panel("fonts/airstream.ttf", None),
    }
}

#[test]
fn theme_round_trips_through_the_document_encoding() {
    let theme = marine_theme();
    let json = serde_json::to_string(&theme).expect("serialize");
    let reparsed: Theme = serde_json::from_str(&json).expect("reparse");
    assert_eq!(theme, reparsed);
}

#[test]
fn serialized_theme_uses_document_field_names() {
    let json = serde_json::to_string(&marine_theme()).expect("serialize");
    assert!(json.contains("backgroundColor"));
    assert!(json.contains("textFont"));
    assert!(json.contains("textSize"));
    // The date panel has no explicit size, so exactly two panels carry one.
    assert_eq!(json.matches("textSize").count(), 2);
}

#[test]
fn selecting_marine_by_index_zero() {
    let doc = serde_json::json!({ "themes": [marine_theme()] });
    let catalog = ThemeCatalog::load(doc.to_string().as_bytes()).expect("load");

    assert_eq!(catalog.select(0).expect("select").name, "Marine");
    assert_eq!(catalog.position("Marine"), Some(0));

    match catalog.select(1) {
        Err(ThemeError::IndexOutOfRange { index: 1, len: 1 }) => {}
        other => panic!("expected IndexOutOfRange, got {other:?}"),
    }
}

#[test]
fn catalog_preserves_document_order() {
    let mut second = marine_theme();
    second.name = "Sunset".to_owned();
    let doc = serde_json::json!({ "themes": [marine_theme(), second] });
    let catalog = ThemeCatalog::load(doc.to_string().as_bytes()).expect("load");

    let names: Vec<&str> = catalog.themes().iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Marine", "Sunset"]);
    assert_eq!(catalog.position("Sunset"), Some(1));
}
