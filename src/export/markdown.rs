//! Markdown rendering of journal entries.
//!
//! Output is plain templating: field values are written as-is, so Markdown
//! characters inside titles or content are not escaped.

use crate::constants::DATE_FORMAT_ISO;
use crate::models::Entry;

/// Renders `entries` newest first, one block per entry separated by rules.
///
/// ```
/// use daybook::export::markdown::render;
/// use daybook::models::Entry;
///
/// let mut entry = Entry::default();
/// entry.title = "T".to_string();
/// entry.primary_mood = "Happy".to_string();
/// entry.content = "hi".to_string();
///
/// let text = render(&[entry]);
/// assert!(text.starts_with("# T\n"));
/// assert!(text.contains("*Mood:* Happy\n"));
/// ```
pub fn render(entries: &[Entry]) -> String {
    let mut ordered: Vec<&Entry> = entries.iter().collect();
    ordered.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    let mut out = String::new();
    for entry in ordered {
        render_entry(&mut out, entry);
    }
    out
}

fn render_entry(out: &mut String, entry: &Entry) {
    out.push_str(&format!("# {}\n", entry.title));
    out.push_str(&format!(
        "*Date:* {}\n",
        entry.created_at.format(DATE_FORMAT_ISO)
    ));

    out.push_str(&format!("*Mood:* {}", entry.primary_mood));
    if !entry.secondary_moods.is_empty() {
        out.push_str(&format!(" | Secondary: {}", entry.secondary_moods.join(", ")));
    }
    out.push('\n');

    out.push_str(&format!("*Tags:* {}\n\n", entry.tags.join(", ")));
    out.push_str(&entry.content);
    out.push_str("\n\n---\n\n");
}
