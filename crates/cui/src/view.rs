use crate::app::{App, Screen};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Modifier, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(10),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);
    match app.screen {
        Screen::Setup => draw_setup(frame, root[1], app),
        Screen::Game => draw_game(frame, root[1], app),
    }
    draw_status(frame, root[2], app);

    if app.show_help {
        draw_help_popup(frame);
    }
    if app.name_prompt.is_some() {
        draw_name_prompt(frame, app);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let screen_label = match app.screen {
        Screen::Setup => "Setup",
        Screen::Game => "Game",
    };
    let lines = vec![
        Line::from("TABLETALK".bold()),
        Line::from(format!(
            "Screen: {screen_label} | Seed: {} | Eligible: {} | ? help",
            app.seed,
            app.eligible_count()
        )),
    ];
    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_setup(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(area);

    draw_card_sets(frame, columns[0], app);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(6)])
        .split(columns[1]);
    draw_players(frame, right[0], app);
    draw_start_hint(frame, right[1], app);
}

fn draw_card_sets(frame: &mut Frame, area: Rect, app: &App) {
    let toggles = app.policy.toggles();
    let items: Vec<ListItem<'_>> = if toggles.is_empty() {
        vec![ListItem::new("no card sets")]
    } else {
        toggles
            .iter()
            .map(|toggle| {
                let mark = if toggle.enabled { "[x]" } else { "[ ]" };
                let label = if toggle.description.is_empty() {
                    format!("{mark} {}", toggle.name)
                } else {
                    format!("{mark} {} - {}", toggle.name, toggle.description)
                };
                ListItem::new(label)
            })
            .collect()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Card Sets (space toggles)");
    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol(">> ");
    let mut state = ListState::default();
    if !toggles.is_empty() {
        state.select(Some(app.setup_cursor.min(toggles.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_players(frame: &mut Frame, area: Rect, app: &App) {
    let items: Vec<ListItem<'_>> = if app.players.is_empty() {
        vec![ListItem::new("no players yet (a to add)")]
    } else {
        app.players
            .iter()
            .map(|name| ListItem::new(name.clone()))
            .collect()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Players (a add, d remove)");
    frame.render_widget(List::new(items).block(block), area);
}

fn draw_start_hint(frame: &mut Frame, area: Rect, app: &App) {
    let lines = if app.can_start() {
        vec![
            Line::from(format!("{} prompts eligible", app.eligible_count())),
            Line::from("press s to start".bold()),
        ]
    } else {
        vec![
            Line::from("nothing to draw"),
            Line::from("enable at least one card set"),
        ]
    };
    let block = Block::default().borders(Borders::ALL).title("Start");
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(3)])
        .split(area);

    draw_card(frame, rows[0], app);
    draw_nav(frame, rows[1], app);
}

fn draw_card(frame: &mut Frame, area: Rect, app: &App) {
    let card_area = centered_rect(70, 80, area);
    match app.deck.current() {
        None => {
            let block = Block::default().borders(Borders::ALL).title("Deck");
            frame.render_widget(
                Paragraph::new("No cards left.\n\nleft to step back, o for setup")
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
                    .block(block),
                card_area,
            );
        }
        Some(prompt) => {
            let title = prompt.category.as_deref().unwrap_or("Card").to_string();
            let block = Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Red));
            let body = if app.deck.revealed() {
                Paragraph::new(prompt.text.clone())
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
            } else {
                Paragraph::new("TABLETALK\n\npress f to reveal")
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: true })
            };
            frame.render_widget(body.block(block), card_area);
        }
    }
}

fn draw_nav(frame: &mut Frame, area: Rect, app: &App) {
    let back = if app.deck.can_retreat() {
        "<- back"
    } else {
        "       "
    };
    let player = app
        .current_player()
        .map(|name| format!(" | up: {name}"))
        .unwrap_or_default();
    let line = format!(
        "{back} | {} left | next ->{player}",
        app.deck.remaining_count()
    );
    let block = Block::default().borders(Borders::ALL);
    frame.render_widget(
        Paragraph::new(line)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}

fn draw_status(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title("Status");
    frame.render_widget(
        Paragraph::new(app.status_line.clone()).block(block),
        area,
    );
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(70, 60, frame.area());
    frame.render_widget(Clear, area);
    let lines = vec![
        Line::from("q quit | ? help"),
        Line::from("setup: arrows/jk move | space toggle set | s start"),
        Line::from("setup: a add player | d remove player"),
        Line::from("game: right/n next card | left/b previous card"),
        Line::from("game: f/space flip card | o back to setup"),
        Line::from("toggling a set mid-session reshuffles the deck"),
    ];
    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn draw_name_prompt(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 24, frame.area());
    frame.render_widget(Clear, area);
    let input = app.name_prompt.as_deref().unwrap_or("");
    let lines = vec![
        Line::from("Enter=add  Esc=cancel"),
        Line::from(""),
        Line::from(format!("> {input}")),
    ];
    let block = Block::default()
        .title("Add Player")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));
    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
