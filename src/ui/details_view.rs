//! Sectioned rendering of an achievement's detail records.

use crate::profiles::types::AchievementDetails;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

fn section_title(title: &str) -> Line<'static> {
    Line::from(Span::styled(
        title.to_string(),
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

fn entry(text: String) -> Line<'static> {
    Line::from(Span::styled(text, Style::default().fg(Color::Gray)))
}

/// Lines for every non-empty detail section, in a fixed section order.
pub fn lines(details: &AchievementDetails) -> Vec<Line<'static>> {
    let mut out = Vec::new();

    if !details.diplomas.is_empty() {
        out.push(section_title("🎓 Education"));
        for d in &details.diplomas {
            let mut text = format!(
                "{} — {} ({}), {}, GPA {:.1}",
                d.degree, d.institution, d.year, d.major, d.gpa
            );
            if let Some(honors) = &d.honors {
                text.push_str(&format!(", {}", honors));
            }
            if let Some(awards) = &d.awards {
                text.push_str(&format!(", {}", awards));
            }
            out.push(entry(text));
        }
    }

    if !details.publications.is_empty() {
        out.push(section_title("📚 Publications"));
        for p in &details.publications {
            out.push(entry(format!(
                "{} — {} ({}), vol. {} no. {}, pp. {}",
                p.title, p.journal, p.year, p.volume, p.issue, p.pages
            )));
        }
    }

    if !details.channels.is_empty() {
        out.push(section_title("📺 Channels"));
        for c in &details.channels {
            out.push(entry(format!("{}: {}", c.name, c.description)));
        }
    }

    if !details.championships.is_empty() {
        out.push(section_title("🏅 Championships"));
        for c in &details.championships {
            out.push(entry(format!("{} ({}) — {}", c.name, c.year, c.placement)));
        }
    }

    if !details.projects.is_empty() {
        out.push(section_title("🔨 Projects"));
        for p in &details.projects {
            let mut text = format!("{}: {}", p.name, p.description);
            if let Some(year) = p.year {
                text.push_str(&format!(" ({})", year));
            }
            out.push(entry(text));
        }
    }

    if !details.performances.is_empty() {
        out.push(section_title("🎭 Performances"));
        for p in &details.performances {
            let mut text = format!("{} — {}", p.title, p.venue);
            if let Some(year) = p.year {
                text.push_str(&format!(" ({})", year));
            }
            out.push(entry(text));
        }
    }

    out
}
