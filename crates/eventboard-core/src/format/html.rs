//! HTML rendering for the events page and detail cards.

use std::fmt::Write;

use super::{FormatOptions, PageView, NO_PAST_EVENTS_TEXT, html_escape};
use crate::card::EventCard;
use crate::event::Phase;

const COMING_SOON_ID: &str = "coming-soon";

pub(super) fn render_page(view: &PageView, options: &FormatOptions) -> String {
    let mut body = String::new();

    if !view.ongoing.is_empty() {
        body.push_str("<section class=\"ongoing\">\n");
        push_heading(&mut body, Phase::Ongoing);
        body.push_str("<div class=\"cards\">\n");
        for card in &view.ongoing {
            push_card(&mut body, card);
        }
        body.push_str("</div>\n</section>\n");
    }

    body.push_str("<section class=\"upcoming\">\n");
    push_heading(&mut body, Phase::Upcoming);
    push_filter_bar(&mut body, view);
    let _ = writeln!(
        body,
        "<div class=\"coming-soon\" id=\"{COMING_SOON_ID}\">Coming Soon</div>"
    );
    body.push_str("<div class=\"cards\">\n");
    for card in &view.upcoming {
        push_card(&mut body, card);
    }
    body.push_str("</div>\n</section>\n");

    body.push_str("<section class=\"past\">\n");
    push_heading(&mut body, Phase::Past);
    if view.has_no_past_events() {
        let _ = writeln!(body, "<p class=\"empty\">{NO_PAST_EVENTS_TEXT}</p>");
    } else {
        body.push_str("<div class=\"columns\">\n");
        for column in &view.past_columns {
            body.push_str("<div class=\"column\">\n");
            for card in column {
                push_card(&mut body, card);
            }
            body.push_str("</div>\n");
        }
        body.push_str("</div>\n");
    }
    body.push_str("</section>\n");

    let script = options
        .coming_soon_stream
        .as_deref()
        .map(coming_soon_script)
        .unwrap_or_default();

    document(&options.page_title, &format!("<main class=\"events\">\n{body}</main>\n{script}"))
}

pub(super) fn render_card_page(card: &EventCard, options: &FormatOptions) -> String {
    let mut body = String::from("<main class=\"event-detail\">\n");
    push_card(&mut body, card);
    body.push_str("<a class=\"back\" href=\"/events\">All events</a>\n</main>\n");
    document(&format!("{} - {}", card.title, options.page_title), &body)
}

fn document(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n\
         <title>{}</title>\n</head>\n<body>\n{}</body>\n</html>\n",
        html_escape(title),
        body
    )
}

fn push_heading(out: &mut String, phase: Phase) {
    let _ = writeln!(out, "<h2>{}</h2>", phase.heading());
}

fn push_filter_bar(out: &mut String, view: &PageView) {
    let active = view.filters.active.as_deref();

    out.push_str("<nav class=\"filters\">\n");
    push_chip(out, "/events", "View All", active.is_none());
    for event_type in &view.filters.types {
        let href = format!("/events?type={}", urlencoding::encode(event_type));
        let is_active = active.is_some_and(|a| a.eq_ignore_ascii_case(event_type));
        push_chip(out, &href, event_type, is_active);
    }
    out.push_str("</nav>\n");
}

fn push_chip(out: &mut String, href: &str, label: &str, active: bool) {
    let class = if active { "chip active" } else { "chip" };
    let _ = writeln!(
        out,
        "<a class=\"{class}\" href=\"{}\">{}</a>",
        html_escape(href),
        html_escape(label)
    );
}

fn push_card(out: &mut String, card: &EventCard) {
    let class = if card.on_going {
        "event-card ongoing"
    } else {
        "event-card"
    };
    let _ = writeln!(
        out,
        "<article class=\"{class}\" id=\"event-{}\">",
        html_escape(&card.id)
    );
    if card.on_going {
        out.push_str("<span class=\"pulse\" aria-label=\"happening now\"></span>\n");
    }
    let _ = writeln!(
        out,
        "<div class=\"event-type\">{}</div>",
        html_escape(&card.event_type)
    );
    let _ = writeln!(out, "<h3>{}</h3>", html_escape(&card.title));
    let _ = writeln!(
        out,
        "<div class=\"event-date\">{}</div>",
        html_escape(&card.date_display)
    );
    if !card.description.is_empty() {
        let _ = writeln!(out, "<p>{}</p>", html_escape(&card.description));
    }
    if !card.tags.is_empty() {
        out.push_str("<ul class=\"tags\">");
        for tag in &card.tags {
            let _ = write!(out, "<li>{}</li>", html_escape(tag));
        }
        out.push_str("</ul>\n");
    }

    out.push_str("<div class=\"actions\">\n");
    let _ = writeln!(
        out,
        "<a class=\"learn-more\" href=\"{}\">LEARN MORE</a>",
        html_escape(&card.learn_more_href)
    );
    let open = if card.save_menu.is_open() { " open" } else { "" };
    let _ = writeln!(
        out,
        "<details class=\"save-menu\"{open}>\n<summary>SAVE</summary>\n<ul>"
    );
    for link in card.save_menu.links() {
        let _ = writeln!(
            out,
            "<li><a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\"><img src=\"{}\" alt=\"\" width=\"16\" height=\"16\">{}</a></li>",
            html_escape(&link.href),
            html_escape(&link.icon),
            html_escape(&link.label)
        );
    }
    out.push_str("</ul>\n</details>\n</div>\n</article>\n");
}

fn coming_soon_script(stream: &str) -> String {
    let path = serde_json::to_string(stream).unwrap_or_else(|_| "\"\"".to_string());
    format!(
        "<script>\nnew EventSource({path}).onmessage = (m) => {{\n  \
         document.getElementById(\"{COMING_SOON_ID}\").textContent = JSON.parse(m.data).join(\" \");\n}};\n</script>\n"
    )
}
