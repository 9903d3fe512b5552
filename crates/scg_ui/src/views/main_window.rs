//! Main window view.
//!
//! Layout matches the original client:
//! - Header row (title, Settings button)
//! - Upload form (two video inputs, Analyze button)
//! - Loading notice or results panel, mutually exclusive on in-flight
//! - Log panel

use iced::widget::{
    button, column, container, horizontal_space, row, scrollable, text, text_input,
};
use iced::{Alignment, Element, Length};

use scg_core::models::{AnalysisReport, SwingView, NO_FAULTS_MESSAGE};
use scg_core::session::SessionState;

use crate::app::{App, Message};
use crate::theme::{self, colors, font, spacing};

/// Build the main window view.
pub fn main_window(app: &App) -> Element<'_, Message> {
    let busy = app.session.in_flight;

    let body: Element<'_, Message> = if busy {
        loading_section()
    } else {
        results_section(&app.session)
    };

    let content = column![
        header_row(),
        upload_section(app, busy),
        body,
        log_section(app),
    ]
    .spacing(spacing::MD)
    .padding(spacing::LG);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// Header row with app title and the Settings button.
fn header_row() -> Element<'static, Message> {
    row![
        text("AI Golf Coach").size(font::XL).font(theme::bold()),
        text("Prototype").size(font::SM).color(colors::TEXT_MUTED),
        horizontal_space(),
        button(text("Settings...").size(font::NORMAL)).on_press(Message::OpenSettings),
    ]
    .spacing(spacing::MD)
    .align_y(Alignment::Center)
    .into()
}

/// Upload form with the two video inputs and the submit button.
fn upload_section(app: &App, busy: bool) -> Element<'_, Message> {
    let dtl_row = video_input_row(SwingView::DownTheLine, &app.dtl_path, busy);
    let fo_row = video_input_row(SwingView::FaceOn, &app.fo_path, busy);

    let can_submit = !busy && !app.dtl_path.is_empty() && !app.fo_path.is_empty();
    let submit = button(
        text(if busy { "Analyzing..." } else { "Analyze Swing" }).size(font::NORMAL),
    )
    .style(button::primary)
    .on_press_maybe(can_submit.then_some(Message::AnalyzeSwing))
    .padding([spacing::SM, spacing::XL]);

    let content = column![
        text("Upload Your Swings").size(font::LG),
        dtl_row,
        fo_row,
        row![horizontal_space(), submit],
    ]
    .spacing(spacing::SM);

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(theme::card)
        .into()
}

/// Single video input row with label, path input, and browse button.
fn video_input_row(view: SwingView, path: &str, busy: bool) -> Element<'_, Message> {
    let mut input = text_input("Drop a video here or browse...", path)
        .width(Length::Fill)
        .size(font::NORMAL);
    if !busy {
        input = input.on_input(move |s| Message::VideoPathChanged(view, s));
    }

    row![
        text(view.label()).size(font::NORMAL).width(Length::Fixed(210.0)),
        input,
        button(text("Browse...").size(font::SM))
            .on_press_maybe((!busy).then_some(Message::BrowseVideo(view)))
            .padding([spacing::XS, spacing::SM]),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center)
    .into()
}

/// Shown while the request is in flight, in place of the results panel.
fn loading_section() -> Element<'static, Message> {
    let content = column![
        text("Analyzing... Please wait.").size(font::LG),
        text("Uploading both videos and running the full analysis pipeline.")
            .size(font::SM)
            .color(colors::TEXT_MUTED),
    ]
    .spacing(spacing::SM)
    .align_x(Alignment::Center);

    container(content)
        .padding(spacing::XL)
        .width(Length::Fill)
        .align_x(Alignment::Center)
        .style(theme::card)
        .into()
}

/// Results panel: status line, error block, fault list, and metric table.
fn results_section(session: &SessionState) -> Element<'_, Message> {
    let mut content = column![
        text("Analysis Results").size(font::LG),
        row![
            text("Status:").size(font::NORMAL).font(theme::bold()),
            text(&session.status).size(font::NORMAL),
        ]
        .spacing(spacing::SM),
    ]
    .spacing(spacing::SM);

    if let Some(error) = &session.error {
        content = content.push(error_block(error));
    }

    if let Some(report) = &session.report {
        content = content.push(faults_list(report));
        content = content.push(metrics_table(report));
    }

    container(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(theme::card)
        .into()
}

/// Visually marked block for the error detail.
fn error_block(error: &str) -> Element<'_, Message> {
    container(text(format!("Error: {error}")).size(font::NORMAL))
        .padding(spacing::SM)
        .width(Length::Fill)
        .style(theme::error_block)
        .into()
}

/// Fault list, or the affirmative message when no faults were diagnosed.
fn faults_list(report: &AnalysisReport) -> Element<'_, Message> {
    let header = text("Diagnosed Faults:").size(font::NORMAL).font(theme::bold());

    if !report.has_faults() {
        return column![
            header,
            text(NO_FAULTS_MESSAGE).size(font::NORMAL).color(colors::SUCCESS),
        ]
        .spacing(spacing::XS)
        .into();
    }

    let rows: Vec<Element<'_, Message>> = report
        .diagnosed_faults
        .iter()
        .map(|fault| {
            row![
                text(&fault.name).size(font::NORMAL).font(theme::bold()),
                text(&fault.detail).size(font::NORMAL),
            ]
            .spacing(spacing::SM)
            .into()
        })
        .collect();

    column![header, column(rows).spacing(spacing::XS)]
        .spacing(spacing::XS)
        .into()
}

/// Fixed four-row table of the key metrics.
fn metrics_table(report: &AnalysisReport) -> Element<'_, Message> {
    let header = row![
        text("Metric").size(font::NORMAL).font(theme::bold()).width(Length::Fixed(260.0)),
        text("Value").size(font::NORMAL).font(theme::bold()),
    ]
    .spacing(spacing::SM);

    let rows: Vec<Element<'_, Message>> = report
        .metrics
        .rows()
        .into_iter()
        .map(|metric| {
            row![
                text(metric.label).size(font::NORMAL).width(Length::Fixed(260.0)),
                text(metric.value).size(font::NORMAL),
            ]
            .spacing(spacing::SM)
            .into()
        })
        .collect();

    column![
        text("Key Metrics:").size(font::NORMAL).font(theme::bold()),
        header,
        column(rows).spacing(spacing::XS),
    ]
    .spacing(spacing::XS)
    .into()
}

/// Log panel with the timestamped session log.
fn log_section(app: &App) -> Element<'_, Message> {
    let mut log = scrollable(
        container(text(&app.log_text).size(font::SM))
            .padding(spacing::SM)
            .width(Length::Fill),
    )
    .height(Length::Fill);

    if app.config.settings().logging.autoscroll {
        log = log.anchor_bottom();
    }

    column![
        text("Log").size(font::LG),
        container(log)
            .width(Length::Fill)
            .height(Length::Fill)
            .style(theme::card),
    ]
    .spacing(spacing::XS)
    .height(Length::FillPortion(1))
    .into()
}
