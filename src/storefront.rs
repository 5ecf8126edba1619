use std::sync::LazyLock;
use regex::Regex;
use tracing::info;

use crate::notification::{NoticeKind, Notifier};

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

// Cart operations are placeholders: nothing is stored, the shopper only sees a notice.

pub fn add_to_cart(notifier: &mut impl Notifier, product_id: u64, quantity: u32) {
    info!(product_id, quantity, "adding product to cart");
    notifier.notify("Product added to cart!", NoticeKind::Success);
}

pub fn remove_from_cart(notifier: &mut impl Notifier, cart_item_id: u64) {
    info!(cart_item_id, "removing cart item");
    notifier.notify("Product removed from cart!", NoticeKind::Success);
}

pub fn update_cart_quantity(notifier: &mut impl Notifier, cart_item_id: u64, quantity: u32) {
    info!(cart_item_id, quantity, "updating cart item");
    notifier.notify("Cart updated!", NoticeKind::Success);
}

/// Returns false when the query is blank.
pub fn search_products(notifier: &mut impl Notifier, query: &str) -> bool {
    info!(query, "searching products");
    if query.trim().is_empty() {
        notifier.notify("Please enter a search term", NoticeKind::Warning);
        return false;
    }
    notifier.notify(&format!("Searching for: {query}"), NoticeKind::Info);
    true
}

pub fn filter_by_category(notifier: &mut impl Notifier, category_slug: &str) {
    info!(category_slug, "filtering by category");
    notifier.notify(&format!("Filtering by: {category_slug}"), NoticeKind::Info);
}

pub fn validate_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

pub fn format_price(price: f64) -> String {
    // Negative zero prints as "-0.00"
    let price = if price == 0.0 { 0.0 } else { price };
    format!("${price:.2}")
}
