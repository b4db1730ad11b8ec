//! TUI rendering with ratatui

use super::app::{App, InputMode, MessageStyle};
use crate::game::GUESSES_PER_ROUND;
use crate::generator::RandomSource;
use crate::output::formatters::{create_progress_bar, guess_points};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui<R: RandomSource>(f: &mut Frame, app: &App<'_, R>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(1), // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_main_panel(f, app, main_chunks[0]);
    render_info_panel(f, app, main_chunks[1]);
    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);

    if app.show_stats {
        render_stats_overlay(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("SEQUENCE PUZZLE")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_main_panel<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(4)])
        .split(area);

    render_letters(f, app, chunks[0]);
    render_guesses(f, app, chunks[1]);
}

fn render_letters<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let colors = [Color::LightRed, Color::LightBlue, Color::LightGreen];
    let letters = app.session.round().sequence().letters();

    let spans: Vec<Span> = if app.input_mode == InputMode::Ready {
        colors
            .iter()
            .map(|&c| Span::styled("  ?  ", Style::default().fg(c)))
            .collect()
    } else {
        letters
            .iter()
            .zip(colors)
            .map(|(&letter, color)| {
                Span::styled(
                    format!("  {}  ", char::from(letter)),
                    Style::default()
                        .fg(Color::Black)
                        .bg(color)
                        .add_modifier(Modifier::BOLD),
                )
            })
            .collect()
    };

    let content = vec![Line::from(""), Line::from(spans).alignment(Alignment::Center)];
    let paragraph = Paragraph::new(content).block(
        Block::default()
            .title(" Letters ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(paragraph, area);
}

fn render_guesses<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let round = app.session.round();
    let mut items: Vec<ListItem> = round
        .guesses()
        .iter()
        .enumerate()
        .map(|(i, guess)| {
            let style = if guess.valid {
                Style::default().fg(Color::Green)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            ListItem::new(Line::from(vec![
                Span::raw(format!("{}. ", i + 1)),
                Span::styled(format!("{:<16}", guess.text.to_uppercase()), style),
                Span::styled(guess_points(guess), Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();

    for i in round.guesses().len()..GUESSES_PER_ROUND {
        items.push(
            ListItem::new(format!("{}. ", i + 1)).style(Style::default().fg(Color::DarkGray)),
        );
    }

    let title = format!(" Guesses | Score {} ", round.score());
    let list = List::new(items).block(Block::default().title(title).borders(Borders::ALL));
    f.render_widget(list, area);
}

fn render_info_panel<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4)])
        .split(area);

    render_time_bonus(f, app, chunks[0]);
    render_messages(f, app, chunks[1]);
}

fn render_time_bonus<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let remaining = app.bonus_remaining();
    let label = if remaining > 0.0 {
        "Time Bonus +3".to_string()
    } else {
        "No bonus".to_string()
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Time Bonus ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .ratio(remaining)
        .label(label);

    f.render_widget(gauge, area);
}

fn render_messages<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::Ready => (" Press Enter to begin ", "", Color::Cyan),
        InputMode::Guessing => (
            " Type a word | Enter: submit | Esc: end round ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
        InputMode::RoundOver => (" Round over | n: new round | q: quit ", "", Color::Green),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<R: RandomSource>(f: &mut Frame, app: &App<'_, R>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let round = app.session.round();
    let stats = app.session.stats();

    let guesses = Paragraph::new(format!(
        "Guesses: {}/{GUESSES_PER_ROUND}",
        round.remaining()
    ))
    .alignment(Alignment::Center);
    f.render_widget(guesses, chunks[0]);

    let streak = Paragraph::new(format!("Streak: {}", stats.current_streak))
        .alignment(Alignment::Center);
    f.render_widget(streak, chunks[1]);

    let played = Paragraph::new(format!(
        "Played: {} | Win Rate: {:.0}%",
        stats.games_played,
        stats.win_rate() * 100.0
    ))
    .alignment(Alignment::Center);
    f.render_widget(played, chunks[2]);

    let help = Paragraph::new("Tab: Stats | Ctrl-N: New | Ctrl-C: Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let [area] = Layout::horizontal([Constraint::Length(width)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::vertical([Constraint::Length(height)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn render_stats_overlay<R: RandomSource>(f: &mut Frame, app: &App<'_, R>) {
    let state = app.session.state();
    let stats = &state.stats;
    let last = state.last_round.as_ref();
    let highlight = Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD);
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(format!(
            "Played {}   Win rate {:.0}%   Streak {}   Max {}",
            stats.games_played,
            stats.win_rate() * 100.0,
            stats.current_streak,
            stats.max_streak
        )),
        Line::from(""),
        Line::styled("Highest scores", heading),
    ];

    let max_score = stats.highest_scores.first().copied().unwrap_or(1).max(1);
    for (i, &score) in stats.highest_scores.iter().enumerate() {
        let text = format!(
            "{}. {} {score}",
            i + 1,
            create_progress_bar(score as f64, max_score as f64, 20)
        );
        if last.is_some_and(|l| l.score == score) {
            lines.push(Line::styled(text, highlight));
        } else {
            lines.push(Line::from(text));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::styled("Mistakes", heading));
    let max_count = stats.mistakes.iter().copied().max().unwrap_or(1).max(1);
    for (mistakes, &count) in stats.mistakes.iter().enumerate() {
        let text = format!(
            "{mistakes}: {} {count}",
            create_progress_bar(f64::from(count), f64::from(max_count), 20)
        );
        if last.is_some_and(|l| l.mistakes == mistakes) {
            lines.push(Line::styled(text, highlight));
        } else {
            lines.push(Line::from(text));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::styled("Longest words", heading));
    for (i, entry) in stats.longest_words.iter().enumerate() {
        let text = format!("{}. {} ({})", i + 1, entry.word.to_uppercase(), entry.length);
        if last.is_some_and(|l| l.words.contains(&entry.word)) {
            lines.push(Line::styled(text, highlight));
        } else {
            lines.push(Line::from(text));
        }
    }

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered(f.area(), 56, height);
    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .title(" Statistics | Tab to close ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .style(Style::default().fg(Color::White)),
    );

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}
