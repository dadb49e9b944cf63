//! Pre-Order Cart
//!
//! Session-local selection of menu items with quantities. The cart is
//! owned by exactly one browsing session and explicitly constructed —
//! never a process-wide singleton. Totals are recomputed on every read,
//! and the whole selection exports as a plain-text order summary for
//! the WhatsApp/Viber hand-off.

pub mod links;

use std::time::{Duration, Instant};

use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::db::models::SiteSetting;

/// Toast lifetime; a newer toast replaces the current one immediately
const TOAST_TTL: Duration = Duration::from_millis(2500);

/// Monetary rounding: 2 decimal places, half away from zero
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Fractional rate as a bare percent figure, e.g. 0.10 -> "10"
fn percent_label(rate: Decimal) -> String {
    (rate * dec!(100)).normalize().to_string()
}

/// Surcharge rates applied on top of the cart subtotal
///
/// Defaults match the restaurant's published rates. Use
/// [`CartRates::from_settings`] to source them from the store instead,
/// so the settings rows and the cart cannot silently drift apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartRates {
    pub service_charge: Decimal,
    pub gst: Decimal,
}

impl Default for CartRates {
    fn default() -> Self {
        Self {
            service_charge: dec!(0.10),
            gst: dec!(0.08),
        }
    }
}

impl CartRates {
    /// Read the `service_charge` / `gst` percentage rows; rows that are
    /// missing or unparsable fall back to the defaults.
    pub fn from_settings(settings: &[SiteSetting]) -> Self {
        let defaults = Self::default();
        let percent = |key: &str, fallback: Decimal| {
            settings
                .iter()
                .find(|s| s.key == key)
                .and_then(|s| s.value.parse::<Decimal>().ok())
                .map(|p| p / dec!(100))
                .unwrap_or(fallback)
        };
        Self {
            service_charge: percent("service_charge", defaults.service_charge),
            gst: percent("gst", defaults.gst),
        }
    }
}

/// A menu item as handed to the cart by the menu browser
#[derive(Debug, Clone)]
pub struct CartItem {
    pub item_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub image_url: Option<String>,
    pub is_vegetarian: bool,
}

/// One cart line: an item plus its selected quantity
#[derive(Debug, Clone)]
pub struct CartEntry {
    pub item_id: String,
    pub name: String,
    pub unit_price: Decimal,
    pub image_url: Option<String>,
    pub is_vegetarian: bool,
    pub quantity: u32,
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    shown_at: Instant,
}

/// Session-local pre-order cart
#[derive(Debug, Default)]
pub struct Cart {
    entries: Vec<CartEntry>,
    rates: CartRates,
    toast: Option<Toast>,
    is_open: bool,
}

impl Cart {
    pub fn new() -> Self {
        Self::with_rates(CartRates::default())
    }

    pub fn with_rates(rates: CartRates) -> Self {
        Self {
            entries: Vec::new(),
            rates,
            toast: None,
            is_open: false,
        }
    }

    /// Add one unit of an item. A line already holding the same item id
    /// has its quantity incremented instead of a second line appearing.
    pub fn add_item(&mut self, item: CartItem) {
        match self.entries.iter_mut().find(|e| e.item_id == item.item_id) {
            Some(entry) => entry.quantity += 1,
            None => self.entries.push(CartEntry {
                item_id: item.item_id.clone(),
                name: item.name.clone(),
                unit_price: item.unit_price,
                image_url: item.image_url.clone(),
                is_vegetarian: item.is_vegetarian,
                quantity: 1,
            }),
        }

        self.toast = Some(Toast {
            message: format!("{} added to cart!", display_name(&item.name)),
            shown_at: Instant::now(),
        });
    }

    /// Remove a line unconditionally
    pub fn remove_item(&mut self, item_id: &str) {
        self.entries.retain(|e| e.item_id != item_id);
    }

    /// Overwrite a line's quantity; zero removes the line, an unknown
    /// id is a no-op
    pub fn set_quantity(&mut self, item_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove_item(item_id);
            return;
        }
        if let Some(entry) = self.entries.iter_mut().find(|e| e.item_id == item_id) {
            entry.quantity = quantity;
        }
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[CartEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }

    /// Current toast message, if it has not expired yet
    pub fn toast(&self) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|t| t.shown_at.elapsed() < TOAST_TTL)
            .map(|t| t.message.as_str())
    }

    // Derived values, recomputed on every read

    pub fn item_count(&self) -> u32 {
        self.entries.iter().map(|e| e.quantity).sum()
    }

    pub fn subtotal(&self) -> Decimal {
        self.entries
            .iter()
            .map(|e| e.unit_price * Decimal::from(e.quantity))
            .sum()
    }

    pub fn service_charge(&self) -> Decimal {
        round2(self.subtotal() * self.rates.service_charge)
    }

    pub fn gst(&self) -> Decimal {
        round2(self.subtotal() * self.rates.gst)
    }

    pub fn total(&self) -> Decimal {
        self.subtotal() + self.service_charge() + self.gst()
    }

    /// Deterministic plain-text order summary, used verbatim as the
    /// pre-filled messaging payload
    pub fn order_message(&self) -> String {
        let mut msg = String::from("*Lazeez Gourmet - Pre-Order*\n\n");
        for entry in &self.entries {
            let line_total = entry.unit_price * Decimal::from(entry.quantity);
            let veg = if entry.is_vegetarian { " (Veg)" } else { "" };
            msg.push_str(&format!("\u{2022} {}{}\n", display_name(&entry.name), veg));
            msg.push_str(&format!(
                "  Qty: {} \u{00d7} MVR {:.2} = MVR {:.2}\n",
                entry.quantity, entry.unit_price, line_total
            ));
        }
        msg.push_str(&format!("\nSubtotal: MVR {:.2}", self.subtotal()));
        msg.push_str(&format!(
            "\nService Charge ({}%): MVR {:.2}",
            percent_label(self.rates.service_charge),
            self.service_charge()
        ));
        msg.push_str(&format!(
            "\nGST ({}%): MVR {:.2}",
            percent_label(self.rates.gst),
            self.gst()
        ));
        msg.push_str(&format!("\n*Grand Total: MVR {:.2}*", self.total()));
        msg
    }
}

/// Display name with the "(Veg)" marker stripped; the marker is
/// re-appended uniformly from the vegetarian flag when rendering
///
/// Matches on the original string byte-wise; the marker is ASCII, so a
/// case-insensitive byte match can only start on a char boundary even
/// when the name carries multi-byte characters.
pub fn display_name(name: &str) -> String {
    const MARKER: &[u8] = b"(veg)";
    let bytes = name.as_bytes();
    let mut out = String::with_capacity(name.len());
    let mut cursor = 0;
    let mut i = 0;
    while i + MARKER.len() <= bytes.len() {
        if bytes[i..i + MARKER.len()].eq_ignore_ascii_case(MARKER) {
            out.push_str(name[cursor..i].trim_end());
            i += MARKER.len();
            cursor = i;
        } else {
            i += 1;
        }
    }
    out.push_str(&name[cursor..]);
    out.trim().to_string()
}

#[cfg(test)]
mod tests;
