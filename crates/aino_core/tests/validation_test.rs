use aino_core::{
    Attachment, ContentType, Draft, Field, Layout, Newspaper, OutputType, Platform,
};

fn complete_draft() -> Draft {
    let mut draft = Draft::default();
    draft.set_platform(Platform::Facebook);
    draft.set_content_type(ContentType::Post);
    draft.set_layout(Layout::Landscape);
    draft.set_output_type(OutputType::Static);
    draft.set_newspaper(Newspaper::Kaleva);
    draft.set_text("hello");
    draft
}

#[test]
fn complete_draft_validates_clean() {
    let draft = complete_draft();
    let validation = draft.validate();
    assert!(validation.is_valid());
    assert!(validation.missing().is_empty());
    assert!(!validation.flags().any());
}

#[test]
fn empty_draft_reports_every_required_field_in_order() {
    let draft = Draft::default();
    let validation = draft.validate();
    assert_eq!(
        validation.missing(),
        &[
            Field::Platform,
            Field::ContentType,
            Field::Layout,
            Field::OutputType,
            Field::Newspaper,
            Field::Content,
        ],
    );
}

#[test]
fn missing_platform_is_reported_alone_when_rest_is_filled() {
    let mut draft = complete_draft();
    // Toggle the platform off; content type and layout go with it.
    draft.set_platform(Platform::Facebook);
    let validation = draft.validate();
    assert!(validation.missing().contains(&Field::Platform));
    assert!(!validation.missing().contains(&Field::OutputType));
    assert!(!validation.missing().contains(&Field::Newspaper));
    assert!(!validation.missing().contains(&Field::Content));
}

#[test]
fn attachment_satisfies_content_without_text() {
    let mut draft = complete_draft();
    draft.set_text("");
    assert!(!draft.validate().is_valid());

    draft.add_attachment(Attachment::from_path("img/cover.webp").unwrap());
    assert!(draft.validate().is_valid());
}

#[test]
fn blank_text_does_not_satisfy_content() {
    let mut draft = complete_draft();
    draft.set_text("   \n\t ");
    let validation = draft.validate();
    assert_eq!(validation.missing(), &[Field::Content]);
}

#[test]
fn enabled_banner_with_blank_name_is_missing() {
    let mut draft = complete_draft();
    draft.set_banner_enabled(true);
    assert_eq!(draft.validate().missing(), &[Field::Banner]);

    draft.set_banner_name("   ");
    assert_eq!(draft.validate().missing(), &[Field::Banner]);

    draft.set_banner_name("Kulttuuri");
    assert!(draft.validate().is_valid());

    // Disabling also satisfies the check and discards the name.
    draft.set_banner_enabled(true);
    draft.set_banner_name("");
    draft.set_banner_enabled(false);
    assert!(draft.validate().is_valid());
    assert_eq!(draft.banner().name(), "");
}

#[test]
fn failed_submit_raises_flags_and_fix_clears_without_resubmit() {
    let mut draft = complete_draft();
    draft.set_banner_enabled(true);

    let validation = draft.submit().expect_err("banner name is blank");
    assert_eq!(validation.missing(), &[Field::Banner]);
    assert!(draft.errors().is_flagged(Field::Banner));

    // Supplying any non-blank name clears the flag with no second submit.
    draft.set_banner_name("Talous");
    assert!(!draft.errors().is_flagged(Field::Banner));
    assert!(!draft.errors().any());
}

#[test]
fn submit_on_empty_draft_flags_everything_missing() {
    let mut draft = Draft::default();
    let validation = draft.submit().expect_err("nothing selected");
    let flags = validation.flags();
    assert!(flags.is_flagged(Field::Platform));
    assert!(flags.is_flagged(Field::Content));
    assert!(!flags.is_flagged(Field::Banner));
    assert!(draft.errors().is_flagged(Field::Platform));
}

#[test]
fn removing_only_attachment_resurfaces_content_on_next_validate() {
    let mut draft = complete_draft();
    draft.set_text("");
    let attachment = Attachment::from_path("img/cover.jpg").unwrap();
    let id = *attachment.id();
    draft.add_attachment(attachment);
    assert!(draft.validate().is_valid());

    draft.remove_attachment(id);
    assert_eq!(draft.validate().missing(), &[Field::Content]);

    // With non-blank text the removal leaves the draft valid.
    draft.set_text("teksti riittää");
    let attachment = Attachment::from_path("img/cover.jpg").unwrap();
    let id = *attachment.id();
    draft.add_attachment(attachment);
    draft.remove_attachment(id);
    assert!(draft.validate().is_valid());
}

#[test]
fn platform_reselection_clears_stale_selection_flags() {
    let mut draft = Draft::default();
    draft.submit().expect_err("empty draft");
    assert!(draft.errors().is_flagged(Field::Platform));
    assert!(draft.errors().is_flagged(Field::ContentType));

    draft.set_platform(Platform::LinkedIn);
    assert!(!draft.errors().is_flagged(Field::Platform));
    assert!(!draft.errors().is_flagged(Field::ContentType));
    assert!(!draft.errors().is_flagged(Field::Layout));
    // Untouched fields keep their flags until fixed or valid.
    assert!(draft.errors().is_flagged(Field::OutputType));
}
