use aino_core::{legal_layouts, ContentType, Layout, Platform};
use strum::IntoEnumIterator;

#[test]
fn instagram_rows_match_rule_table() {
    assert_eq!(
        legal_layouts(Some(Platform::Instagram), Some(ContentType::Story)),
        &[Layout::Portrait],
    );
    assert_eq!(
        legal_layouts(Some(Platform::Instagram), Some(ContentType::Post)),
        &[Layout::Square, Layout::Portrait],
    );
    assert_eq!(
        legal_layouts(Some(Platform::Instagram), None),
        &[Layout::Square, Layout::Portrait],
    );
}

#[test]
fn facebook_rows_match_rule_table() {
    assert_eq!(
        legal_layouts(Some(Platform::Facebook), Some(ContentType::Story)),
        &[Layout::Portrait],
    );
    assert_eq!(
        legal_layouts(Some(Platform::Facebook), Some(ContentType::Post)),
        &[Layout::Square, Layout::Landscape],
    );
    assert_eq!(
        legal_layouts(Some(Platform::Facebook), None),
        &[Layout::Square, Layout::Landscape],
    );
}

#[test]
fn linkedin_only_offers_landscape() {
    for content_type in ContentType::iter().map(Some).chain([None]) {
        assert_eq!(
            legal_layouts(Some(Platform::LinkedIn), content_type),
            &[Layout::Landscape],
        );
    }
}

#[test]
fn no_platform_offers_nothing() {
    for content_type in ContentType::iter().map(Some).chain([None]) {
        assert!(legal_layouts(None, content_type).is_empty());
    }
}

#[test]
fn instagram_story_never_offers_square() {
    let layouts = legal_layouts(Some(Platform::Instagram), Some(ContentType::Story));
    assert!(!layouts.contains(&Layout::Square));
}
