//! The profile card: avatar disc with its badge arc, name, selected
//! achievement text, and the transient status line.

use crate::card::CardState;
use crate::layout::badge_positions;
use crate::profiles::types::{BadgeMap, Profile};
use crate::ui::details_view;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Badge glyphs are emoji, which most terminals render two cells wide.
const BADGE_CELLS: f64 = 2.0;

pub fn draw(frame: &mut Frame, area: Rect, profile: &Profile, card: &CardState, badges: &BadgeMap) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray))
        .title(" Profile ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Avatar disc size in cells: as wide as fits, with one extra row of
    // headroom for badges that sit above the disc's top edge.
    let avatar_cols = (inner.width.saturating_sub(4)).min(24).max(8) as usize;
    let avatar_rows = avatar_cols / 2 + 1;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(avatar_rows as u16 + 1),
            Constraint::Length(1), // name
            Constraint::Min(0),    // achievement info
            Constraint::Length(1), // status message
        ])
        .split(inner);

    let avatar = avatar_lines(profile, badges, avatar_cols, avatar_rows);
    frame.render_widget(
        Paragraph::new(avatar).alignment(Alignment::Center),
        chunks[0],
    );

    let name = Paragraph::new(profile.name.as_str())
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center);
    frame.render_widget(name, chunks[1]);

    if let Some(achievement) = card
        .selected_index()
        .and_then(|i| profile.achievements.get(i))
    {
        let mut lines = vec![
            Line::from(Span::styled(
                match achievement.grade {
                    Some(grade) => format!("{} — grade {}", achievement.name.title(), grade),
                    None => achievement.name.title().to_string(),
                },
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(achievement.description.trim().to_string()),
        ];
        if let Some(details) = achievement.details.as_ref().filter(|d| !d.is_empty()) {
            lines.push(Line::from(""));
            lines.extend(details_view::lines(details));
        }
        let info = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });
        frame.render_widget(info, chunks[2]);
    } else {
        let hint = Paragraph::new("Press 1-9 to inspect a badge")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(hint, chunks[2]);
    }

    if let Some(message) = card.status_message() {
        let status = Paragraph::new(Span::styled(
            message.to_string(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD | Modifier::ITALIC),
        ))
        .alignment(Alignment::Center);
        frame.render_widget(status, chunks[3]);
    }
}

/// Renders the avatar as a shaded disc with the profile's initials, then
/// stamps the badge icons at the positions the layout engine computed.
/// Terminal cells are roughly 2:1, so the vertical radius is halved when
/// mapping layout units to rows.
fn avatar_lines(
    profile: &Profile,
    badges: &BadgeMap,
    avatar_cols: usize,
    avatar_rows: usize,
) -> Vec<Line<'static>> {
    // One blank row of headroom above the disc.
    let total_rows = avatar_rows + 1;
    let mut grid = vec![vec![' '; avatar_cols]; total_rows];

    // Disc outline/fill. Row 0 of the disc starts at grid row 1.
    let rx = (avatar_cols as f64 - 1.0) / 2.0;
    let ry = (avatar_rows as f64 - 1.0) / 2.0;
    for (row, line) in grid.iter_mut().enumerate().skip(1) {
        let dy = (row as f64 - 1.0 - ry) / ry.max(1.0);
        for (col, cell) in line.iter_mut().enumerate() {
            let dx = (col as f64 - rx) / rx.max(1.0);
            if dx * dx + dy * dy <= 1.0 {
                *cell = '░';
            }
        }
    }

    // Initials in the middle of the disc.
    let initials: String = profile
        .name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(|c| c.to_uppercase())
        .take(3)
        .collect();
    let mid_row = 1 + avatar_rows / 2;
    let start = (avatar_cols.saturating_sub(initials.chars().count())) / 2;
    for (i, c) in initials.chars().enumerate() {
        if let Some(cell) = grid.get_mut(mid_row).and_then(|r| r.get_mut(start + i)) {
            *cell = c;
        }
    }

    // Badge icons along the arc. Layout units are square; rows are half as
    // dense as columns.
    let count = profile.achievements.len();
    for (achievement, pos) in profile
        .achievements
        .iter()
        .zip(badge_positions(avatar_cols as f64, BADGE_CELLS, count))
    {
        let col = pos.x.round().clamp(0.0, (avatar_cols - 1) as f64) as usize;
        let row = (pos.y / 2.0 + 1.0).round().clamp(0.0, (total_rows - 1) as f64) as usize;
        let icon = badges
            .badge_for(achievement.name)
            .icon()
            .chars()
            .next()
            .unwrap_or('*');
        grid[row][col] = icon;
        // Emoji render double-width; blank the following cell so the row
        // keeps its visual width.
        if col + 1 < avatar_cols {
            grid[row][col + 1] = '\0';
        }
    }

    grid.into_iter()
        .map(|row| Line::from(row.into_iter().filter(|c| *c != '\0').collect::<String>()))
        .collect()
}
