//! Plain-text rendering of the dashboard: stats cards, message table, pager, details.

use chrono::{DateTime, Utc};
use ombudsman_client::{Dashboard, MessageSource};
use ombudsman_core::{Message, MessageStats, MessageStatus};
use pagination::{Page, PageInfo};

const CONTENT_PREVIEW_LEN: usize = 50;

pub fn stats(stats: &MessageStats) -> String {
    let mut line = format!("Total: {}", stats.total);
    for status in MessageStatus::ALL {
        line.push_str(&format!(" | {}: {}", status.label(), stats.count(status)));
    }
    line
}

pub fn table(page: &Page<'_, Message>) -> String {
    if page.is_empty() {
        return "No messages found.".to_string();
    }

    let mut out = format!(
        "{:<24} {:<16} {:<20} {:<11} {:<15} {}\n",
        "id", "date", "name", "type", "status", "content"
    );
    out.push_str(&"-".repeat(120));
    for message in &page.items {
        out.push('\n');
        out.push_str(&format!(
            "{:<24} {:<16} {:<20} {:<11} {:<15} {}",
            message.id,
            format_date(&message.created_at),
            preview(message.display_name(), 20),
            message.message_type.label(),
            message.status.label(),
            preview(&message.content, CONTENT_PREVIEW_LEN)
        ));
    }
    out
}

/// Summary line plus the page window, current page in brackets.
pub fn pager(info: &PageInfo, numbers: &[usize]) -> String {
    let mut out = info.to_string();
    if info.total_pages > 1 {
        let window: Vec<String> = numbers
            .iter()
            .map(|&n| {
                if n == info.current_page {
                    format!("[{}]", n)
                } else {
                    n.to_string()
                }
            })
            .collect();
        out.push_str(&format!(
            "\nPage {} of {}: {}{}{}",
            info.current_page,
            info.total_pages,
            if info.has_previous_page { "< " } else { "" },
            window.join(" "),
            if info.has_next_page { " >" } else { "" }
        ));
    }
    out
}

pub fn details(message: &Message) -> String {
    let mut out = format!(
        "Message {}\nDate:    {}\nName:    {}\nEmail:   {}\nType:    {}\nStatus:  {}\n\n{}",
        message.id,
        format_date(&message.created_at),
        message.display_name(),
        message.email.as_deref().unwrap_or("-"),
        message.message_type.label(),
        message.status.label(),
        message.content
    );
    if let Some(ref response) = message.admin_response {
        out.push_str(&format!("\n\nAdmin response:\n{}", response));
    }
    out
}

/// Everything the dashboard screen shows for the current engine state.
pub fn dashboard<S: MessageSource>(dashboard: &Dashboard<S>, max_visible: usize) -> String {
    let engine = dashboard.engine();
    let page = engine.page();
    format!(
        "{}\n\n{}\n\n{}",
        stats(&dashboard.stats()),
        table(&page),
        pager(&page.info, &engine.page_numbers(max_visible))
    )
}

fn format_date(at: &DateTime<Utc>) -> String {
    at.format("%Y-%m-%d %H:%M").to_string()
}

fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.replace('\n', " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars.saturating_sub(3)).collect();
    format!("{}...", cut)
}
