use colored::Colorize;
use propsearch::api::{CmdMessage, CmdResult, MessageLevel};
use propsearch::config::SearchConfig;
use propsearch::format::{format_calendar_date, format_currency};
use propsearch::model::Property;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ID_WIDTH: usize = 10;
const TYPE_WIDTH: usize = 10;
const BEDS_WIDTH: usize = 6;
const PRICE_WIDTH: usize = 14;
const POSTCODE_WIDTH: usize = 10;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => eprintln!("{}", message.content.yellow()),
            MessageLevel::Error => eprintln!("{}", message.content.red()),
        }
    }
}

/// Headline plus one row per matching listing.
pub(super) fn render_results(result: &CmdResult) -> String {
    let mut out = String::new();
    out.push_str(&result.headline().bold().to_string());
    out.push('\n');

    if result.listed_properties.is_empty() {
        if result.active_criteria > 0 {
            out.push_str("No properties found matching your criteria.\n");
            out.push_str(&"Try adjusting your search filters.".dimmed().to_string());
            out.push('\n');
        }
        return out;
    }

    out.push('\n');
    for property in &result.listed_properties {
        out.push_str(&render_row(property));
        out.push('\n');
    }
    out
}

fn render_row(p: &Property) -> String {
    let id = pad_to_width(&truncate_to_width(&p.id, ID_WIDTH), ID_WIDTH);
    let kind = pad_to_width(&truncate_to_width(&p.kind, TYPE_WIDTH), TYPE_WIDTH);
    let beds = pad_to_width(&format!("{} bed", p.bedrooms), BEDS_WIDTH);
    let price = format!("{:>width$}", format_currency(p.price), width = PRICE_WIDTH);
    let postcode = pad_to_width(&truncate_to_width(&p.postcode, POSTCODE_WIDTH), POSTCODE_WIDTH);
    let added = format_calendar_date(&p.added);

    format!(
        "  {} {} {} {}  {} {}",
        id.yellow(),
        kind,
        beds,
        price.bold(),
        postcode,
        added.dimmed()
    )
}

/// Full details of one listing.
pub(super) fn render_details(p: &Property) -> String {
    let mut out = String::new();
    let heading = p.location.as_deref().unwrap_or(&p.postcode);
    out.push_str(&format!("{} {}\n", p.id.yellow(), heading.bold()));
    out.push_str("--------------------------------\n");
    out.push_str(&format!("{}\n", format_currency(p.price).bold()));
    out.push_str(&format!("Property Type: {}\n", p.kind));
    out.push_str(&format!("Bedrooms: {}\n", p.bedrooms));
    if let Some(tenure) = &p.tenure {
        out.push_str(&format!("Tenure: {}\n", tenure));
    }
    out.push_str(&format!("Postcode: {}\n", p.postcode));
    out.push_str(&format!("Added: {}\n", format_calendar_date(&p.added)));

    let description = p.long_description.as_ref().or(p.description.as_ref());
    if let Some(description) = description {
        out.push('\n');
        out.push_str(description);
        out.push('\n');
    }
    if let Some(url) = &p.url {
        out.push('\n');
        out.push_str(&url.dimmed().to_string());
        out.push('\n');
    }
    out
}

pub(super) fn render_config(config: &SearchConfig) -> String {
    SearchConfig::KEYS
        .iter()
        .map(|key| format!("{} = {}\n", key, config.get(key).unwrap_or_default()))
        .collect()
}

fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - current))
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}
