use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use crate::catalog::{MovieDetail, MovieSummary};
use crate::ui::app::{App, Screen};
use crate::ui::browse::BrowseViewState;
use crate::ui::detail::DetailViewState;
use crate::ui::format;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DIM_TEXT, GLOBAL_BORDER, PRIMARY_TEXT, STATUS_ERROR,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());
    frame.render_widget(Clear, body);

    match app.screen() {
        Screen::Browse => draw_browse(frame, app, header, body),
        Screen::Detail => draw_detail(frame, app, header, body),
    }

    frame.render_widget(footer_widget(app, footer), footer);
}

// ============================================================================
// List screen
// ============================================================================

fn draw_browse(
    frame: &mut Frame<'_>,
    app: &App,
    header: ratatui::layout::Rect,
    body: ratatui::layout::Rect,
) {
    let browse = app.browse();

    let query_span = if browse.query.is_empty() {
        Span::styled("Cari: (ketik untuk mencari)", Style::default().fg(DIM_TEXT))
    } else {
        Span::styled(
            format!("Cari: {}_", browse.query),
            Style::default().fg(PRIMARY_TEXT),
        )
    };
    let mut header_spans = vec![
        Span::styled(
            " Film Terpopuler ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(GLOBAL_BORDER)),
        query_span,
    ];
    if matches!(browse.view, BrowseViewState::Searching { .. }) {
        header_spans.push(Span::styled("  Mencari...", Style::default().fg(DIM_TEXT)));
    }
    frame.render_widget(bordered_line(Line::from(header_spans)), header);

    match &browse.view {
        BrowseViewState::Loading => {
            frame.render_widget(centered_message("Memuat...", DIM_TEXT, body), body);
        }
        BrowseViewState::Error { message } => {
            frame.render_widget(error_message(message, body), body);
        }
        BrowseViewState::Loaded { movies } | BrowseViewState::Searching { movies } => {
            if movies.is_empty() {
                frame.render_widget(
                    centered_message("Tidak ada film yang ditemukan.", DIM_TEXT, body),
                    body,
                );
                return;
            }
            let items: Vec<ListItem> = movies
                .iter()
                .map(|movie| movie_item(movie, app.image_base_url()))
                .collect();
            let list = List::new(items)
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(GLOBAL_BORDER)),
                )
                .highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
            let mut list_state = ListState::default().with_selected(Some(browse.selected));
            frame.render_stateful_widget(list, body, &mut list_state);
        }
    }
}

fn movie_item<'a>(movie: &'a MovieSummary, image_base: &str) -> ListItem<'a> {
    let meta = format!(
        "Rating: {}  │  Rilis: {}",
        format::rating_label(movie.vote_average),
        movie.release_date
    );
    let poster = format!(
        "Poster: {}",
        format::poster_url(image_base, movie.poster_path.as_deref())
    );
    let overview: String = movie.overview.chars().take(120).collect();

    ListItem::new(vec![
        Line::from(Span::styled(
            movie.title.as_str(),
            Style::default()
                .fg(PRIMARY_TEXT)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(meta, Style::default().fg(DIM_TEXT))),
        Line::from(Span::styled(poster, Style::default().fg(DIM_TEXT))),
        Line::from(Span::styled(overview, Style::default().fg(PRIMARY_TEXT))),
        Line::from(""),
    ])
}

// ============================================================================
// Detail screen
// ============================================================================

fn draw_detail(
    frame: &mut Frame<'_>,
    app: &App,
    header: ratatui::layout::Rect,
    body: ratatui::layout::Rect,
) {
    let title = app
        .detail()
        .and_then(|detail| detail.movie())
        .map(|movie| movie.title.clone())
        .unwrap_or_default();
    let header_line = Line::from(vec![
        Span::styled(
            " Detail Film ",
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        ),
        Span::styled("│ ", Style::default().fg(GLOBAL_BORDER)),
        Span::styled(title, Style::default().fg(PRIMARY_TEXT)),
    ]);
    frame.render_widget(bordered_line(header_line), header);

    let Some(detail) = app.detail() else {
        return;
    };

    match &detail.view {
        DetailViewState::Loading => {
            frame.render_widget(centered_message("Memuat...", DIM_TEXT, body), body);
        }
        DetailViewState::Error { message } => {
            frame.render_widget(error_message(message, body), body);
        }
        DetailViewState::Loaded { movie } => {
            frame.render_widget(detail_widget(movie, app.image_base_url()), body);
        }
    }
}

fn detail_widget<'a>(movie: &'a MovieDetail, image_base: &str) -> Paragraph<'a> {
    let label_style = Style::default().fg(DIM_TEXT);
    let value_style = Style::default().fg(PRIMARY_TEXT);
    let field = |label: &'static str, value: String| {
        Line::from(vec![
            Span::styled(label, label_style),
            Span::styled(value, value_style),
        ])
    };

    let mut lines = vec![
        Line::from(Span::styled(
            movie.title.as_str(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        field("Rating      : ", format::rating_label(Some(movie.vote_average))),
        field("Rilis       : ", movie.release_date.clone()),
        field("Durasi      : ", format!("{} menit", movie.runtime)),
        field("Genre       : ", format::genre_label(&movie.genres)),
        field("Status      : ", movie.status.clone()),
        field("Popularitas : ", format!("{:.1}", movie.popularity)),
        field("Anggaran    : ", format::currency_label(movie.budget)),
        field("Pendapatan  : ", format::currency_label(movie.revenue)),
    ];

    // No placeholder on this screen; absent paths render nothing.
    if let Some(path) = movie.backdrop_path.as_deref() {
        lines.push(field("Backdrop    : ", format::image_url(image_base, path)));
    }
    if let Some(path) = movie.poster_path.as_deref() {
        lines.push(field("Poster      : ", format::image_url(image_base, path)));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Sinopsis",
        Style::default()
            .fg(PRIMARY_TEXT)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(Span::styled(
        movie.overview.as_str(),
        value_style,
    )));

    Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

// ============================================================================
// Shared pieces
// ============================================================================

fn bordered_line(line: Line<'_>) -> Paragraph<'_> {
    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::TOP | Borders::BOTTOM)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}

fn centered_message(
    text: &str,
    color: ratatui::style::Color,
    area: ratatui::layout::Rect,
) -> Paragraph<'static> {
    let top_padding = area.height.saturating_sub(1) / 2;
    let mut lines = vec![Line::from(""); top_padding as usize];
    lines.push(Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(color),
    )));
    Paragraph::new(lines).alignment(Alignment::Center)
}

fn error_message(message: &str, area: ratatui::layout::Rect) -> Paragraph<'static> {
    let top_padding = area.height.saturating_sub(2) / 2;
    let mut lines = vec![Line::from(""); top_padding as usize];
    lines.push(Line::from(Span::styled(
        message.to_string(),
        Style::default().fg(STATUS_ERROR),
    )));
    lines.push(Line::from(Span::styled(
        "Tekan Enter untuk mencoba lagi",
        Style::default().fg(DIM_TEXT),
    )));
    Paragraph::new(lines).alignment(Alignment::Center)
}

fn footer_widget(app: &App, area: ratatui::layout::Rect) -> Paragraph<'static> {
    let hints = match app.screen() {
        Screen::Browse => " ↑/↓: Pilih │ Enter: Detail │ Esc: Bersihkan │ Ctrl+Q: Keluar",
        Screen::Detail => " Esc: Kembali │ Enter: Coba lagi │ Ctrl+Q: Keluar",
    };
    let version = format!("v{} ", VERSION);

    // Pad by char count, not byte count (for the box-drawing chars).
    let hints_width = hints.chars().count();
    let version_width = version.chars().count();
    let content_width = area.width.saturating_sub(2) as usize;
    let padding = content_width
        .saturating_sub(hints_width)
        .saturating_sub(version_width);

    let text_style = Style::default().fg(PRIMARY_TEXT).add_modifier(Modifier::DIM);
    let line = Line::from(vec![
        Span::styled(hints, text_style),
        Span::styled(" ".repeat(padding), text_style),
        Span::styled(version, text_style),
    ]);

    Paragraph::new(line).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(GLOBAL_BORDER)),
    )
}
