//! Overlay rendering (details modal, help popup)

use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};

use crate::model::{DetailView, ModalBody, ModalState};
use super::theme::Palette;
use super::utils::{centered_rect, modal_area};

pub fn render_details_modal(frame: &mut Frame, modal: &ModalState, palette: &Palette) {
    let area = modal_area(frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title(" Details (Esc to close) ")
        .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(palette.background));

    let lines = match &modal.body {
        ModalBody::Empty => Vec::new(),
        ModalBody::Placeholder(text) => {
            vec![Line::from(Span::styled(text.clone(), Style::default().fg(palette.muted)))]
        }
        ModalBody::Detail(detail) => detail_lines(detail, palette),
    };

    let widget = Paragraph::new(lines).wrap(Wrap { trim: false }).block(block);
    frame.render_widget(widget, area);
}

fn detail_lines(detail: &DetailView, palette: &Palette) -> Vec<Line<'static>> {
    let muted = Style::default().fg(palette.muted);

    let mut lines = vec![
        Line::from(Span::styled(
            detail.heading.clone(),
            Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(detail.tagline.clone(), muted.add_modifier(Modifier::ITALIC))),
        Line::from(""),
        Line::from(Span::styled(detail.overview.clone(), Style::default().fg(palette.text))),
        Line::from(""),
    ];

    let mut facts = vec![
        Span::styled("Rating: ", Style::default().fg(palette.text).add_modifier(Modifier::BOLD)),
        Span::styled(detail.rating.clone(), muted),
    ];
    if let Some(runtime) = &detail.runtime {
        facts.push(Span::styled(format!(" • {}", runtime), muted));
    }
    lines.push(Line::from(facts));

    lines.push(Line::from(vec![
        Span::styled("Poster: ", Style::default().fg(palette.text).add_modifier(Modifier::BOLD)),
        Span::styled(detail.poster.clone(), Style::default().fg(palette.dim)),
    ]));

    if let Some(url) = &detail.trailer_url {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Watch Trailer on YouTube: ", Style::default().fg(palette.text)),
            Span::styled(
                url.clone(),
                Style::default().fg(palette.accent).add_modifier(Modifier::UNDERLINED),
            ),
        ]));
    }

    lines
}

pub fn render_help_popup(frame: &mut Frame, palette: &Palette) {
    let keybindings = [
        ("", "── Navigation ──"),
        ("Tab", "Switch search / grid"),
        ("← ↑ → ↓", "Move selection"),
        ("Enter", "Open details"),
        ("Esc / click outside", "Close details"),
        ("", ""),
        ("", "── Actions ──"),
        ("f", "Favorite / unfavorite"),
        ("v / Ctrl+F", "Show favorites"),
        ("p", "Show popular"),
        ("t / Ctrl+T", "Toggle theme"),
        ("", ""),
        ("", "── General ──"),
        ("h", "Toggle this help"),
        ("q / Ctrl+Q", "Quit"),
    ];

    let area = centered_rect(frame.area(), 56, keybindings.len() as u16 + 2);
    frame.render_widget(Clear, area);

    let lines: Vec<Line> = keybindings
        .iter()
        .map(|(key, desc)| {
            if key.is_empty() {
                Line::from(Span::styled(
                    format!("{:^50}", desc),
                    Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(vec![
                    Span::styled(
                        format!("{:>20}", key),
                        Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
                    ),
                    Span::raw("  "),
                    Span::styled(desc.to_string(), Style::default().fg(palette.text)),
                ])
            }
        })
        .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent))
            .title(" Help (h or Esc to close) ")
            .title_style(Style::default().fg(palette.accent).add_modifier(Modifier::BOLD))
            .style(Style::default().bg(palette.background)),
    );

    frame.render_widget(help, area);
}
