use aino_core::{
    Attachment, ContentType, Draft, Layout, Newspaper, OutputType, Platform, TextLength,
};

fn filled_facebook_draft() -> Draft {
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
fn selecting_platform_twice_clears_platform_and_dependents() {
    let mut draft = Draft::default();
    draft.set_platform(Platform::Instagram);
    draft.set_content_type(ContentType::Post);
    draft.set_layout(Layout::Square);

    draft.set_platform(Platform::Instagram);

    assert_eq!(draft.platform(), None);
    assert_eq!(draft.content_type(), None);
    assert_eq!(draft.layout(), None);
}

#[test]
fn switching_platform_forces_reselection_of_dependents() {
    let mut draft = Draft::default();
    draft.set_platform(Platform::Instagram);
    draft.set_content_type(ContentType::Post);
    draft.set_layout(Layout::Portrait);

    draft.set_platform(Platform::Facebook);

    assert_eq!(draft.platform(), Some(Platform::Facebook));
    assert_eq!(draft.content_type(), None);
    assert_eq!(draft.layout(), None);
}

#[test]
fn linkedin_forces_post_and_landscape() {
    let mut draft = Draft::default();
    draft.set_platform(Platform::LinkedIn);

    assert_eq!(draft.content_type(), Some(ContentType::Post));
    assert_eq!(draft.layout(), Some(Layout::Landscape));
    assert_eq!(draft.legal_layouts(), &[Layout::Landscape]);
}

#[test]
fn content_type_change_clears_layout_only_when_illegal() {
    let mut draft = Draft::default();
    draft.set_platform(Platform::Instagram);
    draft.set_content_type(ContentType::Post);
    draft.set_layout(Layout::Portrait);

    // Portrait stays legal for Instagram stories.
    draft.set_content_type(ContentType::Story);
    assert_eq!(draft.content_type(), Some(ContentType::Story));
    assert_eq!(draft.layout(), Some(Layout::Portrait));

    // Square is illegal for Instagram stories and is dropped.
    draft.set_content_type(ContentType::Post);
    draft.set_layout(Layout::Square);
    draft.set_content_type(ContentType::Story);
    assert_eq!(draft.layout(), None);
}

#[test]
fn content_type_toggle_off_keeps_still_legal_layout() {
    let mut draft = Draft::default();
    draft.set_platform(Platform::Facebook);
    draft.set_content_type(ContentType::Post);
    draft.set_layout(Layout::Square);

    // Toggling the content type off falls back to the post layout row,
    // where square is still legal.
    draft.set_content_type(ContentType::Post);
    assert_eq!(draft.content_type(), None);
    assert_eq!(draft.layout(), Some(Layout::Square));
}

#[test]
fn layout_and_simple_selections_toggle() {
    let mut draft = Draft::default();
    draft.set_platform(Platform::Facebook);

    draft.set_layout(Layout::Square);
    draft.set_layout(Layout::Square);
    assert_eq!(draft.layout(), None);

    draft.set_output_type(OutputType::Animated);
    draft.set_output_type(OutputType::Animated);
    assert_eq!(draft.output_type(), None);

    draft.set_newspaper(Newspaper::LapinKansa);
    draft.set_newspaper(Newspaper::RaahenSeutu);
    assert_eq!(draft.newspaper(), Some(Newspaper::RaahenSeutu));
}

#[test]
fn valid_draft_submits_to_a_typed_request() {
    let mut draft = filled_facebook_draft();
    let request = draft.submit().expect("draft is complete");

    assert_eq!(*request.platform(), Platform::Facebook);
    assert_eq!(*request.layout(), Layout::Landscape);
    assert_eq!(request.text_content().as_deref(), Some("hello"));
    assert_eq!(*request.text_length(), TextLength::Medium);
    assert_eq!(request.banner_name(), &None);
    assert!(request.image().is_none());
}

#[test]
fn story_requests_are_forced_short() {
    let mut draft = Draft::default();
    draft.set_platform(Platform::Instagram);
    draft.set_content_type(ContentType::Story);
    draft.set_layout(Layout::Portrait);
    draft.set_output_type(OutputType::Animated);
    draft.set_newspaper(Newspaper::Koillissanomat);
    draft.set_text_length(TextLength::Long);
    draft.set_text("iltapäivän tapahtumat");

    let request = draft.submit().expect("draft is complete");
    assert_eq!(*request.text_length(), TextLength::Short);

    let fields = request.form_fields();
    assert!(fields.contains(&("text_length", "short".to_string())));
}

#[test]
fn only_the_first_attachment_is_transmitted() {
    let mut draft = filled_facebook_draft();
    let first = Attachment::from_path("press/front.jpg").unwrap();
    let second = Attachment::from_path("press/back.png").unwrap();
    let first_id = *first.id();
    draft.add_attachment(first);
    draft.add_attachment(second);

    let request = draft.submit().expect("draft is complete");
    let image = request.image().as_ref().expect("image part present");
    assert_eq!(*image.id(), first_id);
    assert_eq!(image.file_name(), "front.jpg");
}

#[test]
fn banner_name_rides_along_only_when_enabled() {
    let mut draft = filled_facebook_draft();
    draft.set_banner_enabled(true);
    draft.set_banner_name("Urheilu");

    let request = draft.submit().expect("draft is complete");
    assert_eq!(request.banner_name().as_deref(), Some("Urheilu"));

    let fields = request.form_fields();
    assert!(fields.contains(&("add_banner", "true".to_string())));
    assert!(fields.contains(&("banner_name", "Urheilu".to_string())));
}

#[test]
fn removing_an_attachment_returns_it() {
    let mut draft = Draft::default();
    let attachment = Attachment::from_path("video/teaser.mp4").unwrap();
    let id = *attachment.id();
    draft.add_attachment(attachment);

    let removed = draft.remove_attachment(id).expect("attachment staged");
    assert_eq!(*removed.id(), id);
    assert!(draft.attachments().is_empty());
    assert!(draft.remove_attachment(id).is_none());
}
