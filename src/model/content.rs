//! Content helpers for the testimonial section

use super::types::Testimonial;

/// Category tabs offered by the testimonial section, in display order.
pub const CATEGORIES: [&str; 4] = ["web", "design", "marketing", "development"];

/// Keep the testimonials in `category`, or all of them for `None`.
pub fn filter_by_category(testimonials: &[Testimonial], category: Option<&str>) -> Vec<Testimonial> {
    match category {
        None => testimonials.to_vec(),
        Some(wanted) => testimonials
            .iter()
            .filter(|t| t.category.as_deref() == Some(wanted))
            .cloned()
            .collect(),
    }
}

/// Next tab after `current`, wrapping through "all" (`None`).
pub fn next_category(current: Option<&str>) -> Option<String> {
    let position = current.and_then(|c| CATEGORIES.iter().position(|known| *known == c));
    match position {
        None => Some(CATEGORIES[0].to_string()),
        Some(i) if i + 1 < CATEGORIES.len() => Some(CATEGORIES[i + 1].to_string()),
        Some(_) => None,
    }
}

/// Shorten quotes for compact cards.
pub fn excerpt(content: &str, max_chars: usize) -> String {
    if content.chars().count() > max_chars {
        let cut: String = content.chars().take(max_chars).collect();
        format!("{}...", cut)
    } else {
        content.to_string()
    }
}
