//! UI rendering for TUI.

use crate::app::{App, InputTarget, Section};
use crate::i18n::{label, Label, Language};
use aino_client::ConnectionStatus;
use aino_core::{
    ContentType, Field, JobStatus, Newspaper, OutputType, Platform, TextLength,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};
use strum::IntoEnumIterator;

/// Draw the main UI.
#[tracing::instrument(skip_all)]
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Main content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_header(f, app, chunks[0]);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[1]);

    draw_form(f, app, main[0]);
    draw_results(f, app, main[1]);
    draw_status_bar(f, app, chunks[2]);
}

/// Draw the header with title, subtitle, and connectivity state.
#[tracing::instrument(skip_all)]
fn draw_header(f: &mut Frame, app: &App, area: Rect) {
    let connection = match app.connection {
        ConnectionStatus::Checking => Span::styled(
            label(app.language, Label::CheckingBackend),
            Style::default().fg(Color::Yellow),
        ),
        ConnectionStatus::Connected => Span::styled("●", Style::default().fg(Color::Green)),
        ConnectionStatus::Disconnected => Span::styled(
            label(app.language, Label::BackendUnavailable),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(
                label(app.language, Label::Title),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            connection,
        ]),
        Line::from(label(app.language, Label::Subtitle)),
    ];

    let header = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
    f.render_widget(header, area);
}

/// Draw the form with every section, its options, and error highlighting.
#[tracing::instrument(skip_all)]
fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(section_title(app, Section::Text, Label::TextContent, Some(Field::Content)));
    let text = if app.draft.text().is_empty() {
        "-".to_string()
    } else {
        app.draft.text().to_string()
    };
    lines.push(Line::from(format!("  {}", text)));

    lines.push(section_title(
        app,
        Section::Attachments,
        Label::UploadedFiles,
        Some(Field::Content),
    ));
    if app.draft.attachments().is_empty() {
        lines.push(Line::from("  -"));
    } else {
        for (i, attachment) in app.draft.attachments().iter().enumerate() {
            let marker = if app.section == Section::Attachments && i == app.attachment_index {
                "> "
            } else {
                "  "
            };
            let size = attachment
                .size_bytes()
                .map(|s| format!(" ({:.2} MB)", s as f64 / 1024.0 / 1024.0))
                .unwrap_or_default();
            lines.push(Line::from(format!(
                "{}{} [{}]{}",
                marker,
                attachment.file_name(),
                attachment.kind(),
                size
            )));
        }
    }

    lines.push(section_title(
        app,
        Section::Platform,
        Label::SocialMediaPlatform,
        Some(Field::Platform),
    ));
    lines.push(option_row(
        app,
        Section::Platform,
        &Platform::iter().collect::<Vec<_>>(),
        |p| app.draft.platform() == Some(*p),
    ));

    lines.push(section_title(
        app,
        Section::ContentType,
        Label::ContentType,
        Some(Field::ContentType),
    ));
    lines.push(option_row(
        app,
        Section::ContentType,
        &ContentType::iter().collect::<Vec<_>>(),
        |c| app.draft.content_type() == Some(*c),
    ));

    lines.push(section_title(app, Section::Layout, Label::LayoutOptions, Some(Field::Layout)));
    let legal = app.draft.legal_layouts();
    if legal.is_empty() {
        lines.push(Line::from("  -"));
    } else {
        lines.push(option_row(app, Section::Layout, legal, |l| {
            app.draft.layout() == Some(*l)
        }));
    }

    lines.push(section_title(
        app,
        Section::OutputType,
        Label::OutputType,
        Some(Field::OutputType),
    ));
    lines.push(option_row(
        app,
        Section::OutputType,
        &OutputType::iter().collect::<Vec<_>>(),
        |o| app.draft.output_type() == Some(*o),
    ));

    lines.push(section_title(
        app,
        Section::Newspaper,
        Label::Newspaper,
        Some(Field::Newspaper),
    ));
    lines.push(option_row(
        app,
        Section::Newspaper,
        &Newspaper::iter().collect::<Vec<_>>(),
        |n| app.draft.newspaper() == Some(*n),
    ));

    // Text length only matters for posts; stories are always short.
    if app.draft.content_type() != Some(ContentType::Story) {
        lines.push(section_title(app, Section::TextLength, Label::TextLength, None));
        lines.push(option_row(
            app,
            Section::TextLength,
            &TextLength::iter().collect::<Vec<_>>(),
            |t| app.draft.text_length() == *t,
        ));
    }

    lines.push(section_title(app, Section::Banner, Label::Banner, Some(Field::Banner)));
    let banner = app.draft.banner();
    let banner_text = if banner.enabled() {
        format!(
            "  [x] {}",
            if banner.name().is_empty() { "-" } else { banner.name() }
        )
    } else {
        "  [ ]".to_string()
    };
    lines.push(Line::from(banner_text));

    if let Some(message) = &app.error_message {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
    }

    let form = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(label(app.language, Label::ContentInput)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(form, area);
}

/// Draw the results pane for the current processing status.
#[tracing::instrument(skip_all)]
fn draw_results(f: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = match &app.status {
        JobStatus::Idle => vec![Line::from(label(app.language, Label::ConfigureInputs))],
        JobStatus::Processing => vec![Line::from(Span::styled(
            label(app.language, Label::Processing),
            Style::default().fg(Color::Yellow),
        ))],
        JobStatus::Failed(message) => vec![Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))],
        JobStatus::Completed(output) => {
            let mut lines = vec![Line::from(Span::styled(
                label(app.language, Label::TextOutput),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))];
            for heading in output.all_headings() {
                lines.push(Line::from(format!("  {}", heading)));
            }
            let descriptions = output.all_descriptions();
            if descriptions.is_empty() {
                lines.push(Line::from(format!(
                    "  {}",
                    label(app.language, Label::NoDescription)
                )));
            } else {
                for description in descriptions {
                    lines.push(Line::from(format!("  {}", description)));
                }
            }

            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                label(app.language, Label::GraphicOutput),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            let details: Vec<String> = output
                .file_format()
                .iter()
                .map(|f| f.to_string())
                .chain(output.dimensions().iter().map(|d| d.to_string()))
                .collect();
            if !details.is_empty() {
                lines.push(Line::from(format!("  {}", details.join(" "))));
            }
            for link in &app.download_links {
                lines.push(Line::from(Span::styled(
                    format!("  {}", link),
                    Style::default().fg(Color::Blue),
                )));
            }
            lines
        }
    };

    let results = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(label(app.language, Label::GeneratedOutput)),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(results, area);
}

/// Draw the status bar with the active input session or help text.
#[tracing::instrument(skip_all)]
fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let content = match &app.input {
        Some((target, buffer)) => {
            let prompt = match target {
                InputTarget::Text => label(app.language, Label::TextContent),
                InputTarget::BannerName => label(app.language, Label::Banner),
                InputTarget::AttachmentPath => label(app.language, Label::UploadedFiles),
            };
            format!("{}: {}_", prompt, buffer)
        }
        None => {
            let help = match app.language {
                Language::En => {
                    "Tab: Section | ←→: Option | Enter: Select | N: Banner name | D: Remove file | G: Generate | L: Kieli | Q: Quit"
                }
                Language::Fi => {
                    "Tab: Osio | ←→: Vaihtoehto | Enter: Valitse | N: Bannerin nimi | D: Poista tiedosto | G: Luo | L: Language | Q: Lopeta"
                }
            };
            if app.status_line.is_empty() {
                help.to_string()
            } else {
                format!("{} | {}", app.status_line, help)
            }
        }
    };

    let status = Paragraph::new(content)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}

/// A section heading, highlighted when focused and red when flagged.
fn section_title(app: &App, section: Section, text: Label, field: Option<Field>) -> Line<'static> {
    let flagged = field.is_some_and(|f| app.draft.errors().is_flagged(f));
    let mut style = if flagged {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Yellow)
    };
    if app.section == section {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Line::from(Span::styled(label(app.language, text).to_string(), style))
}

/// One row of selectable options with toggle markers.
fn option_row<T: std::fmt::Display>(
    app: &App,
    section: Section,
    options: &[T],
    is_selected: impl Fn(&T) -> bool,
) -> Line<'static> {
    let mut spans: Vec<Span> = vec![Span::raw("  ")];
    for (i, option) in options.iter().enumerate() {
        let marker = if is_selected(option) { "[x]" } else { "[ ]" };
        let mut style = Style::default();
        if is_selected(option) {
            style = style.fg(Color::Green);
        }
        if app.section == section && i == app.option_index {
            style = style.add_modifier(Modifier::REVERSED);
        }
        spans.push(Span::styled(format!("{} {}  ", marker, option), style));
    }
    Line::from(spans)
}
