use super::*;
use std::time::Duration;

fn item(id: &str, name: &str, price: Decimal) -> CartItem {
    CartItem {
        item_id: id.to_string(),
        name: name.to_string(),
        unit_price: price,
        image_url: None,
        is_vegetarian: false,
    }
}

fn veg_item(id: &str, name: &str, price: Decimal) -> CartItem {
    CartItem {
        is_vegetarian: true,
        ..item(id, name, price)
    }
}

#[test]
fn test_add_same_item_increments_quantity() {
    let mut cart = Cart::new();
    cart.add_item(item("a", "Falafel", dec!(35.00)));
    cart.add_item(item("a", "Falafel", dec!(35.00)));

    assert_eq!(cart.entries().len(), 1);
    assert_eq!(cart.entries()[0].quantity, 2);
    assert_eq!(cart.item_count(), 2);
}

#[test]
fn test_add_distinct_items_appends_in_order() {
    let mut cart = Cart::new();
    cart.add_item(item("a", "Falafel", dec!(35.00)));
    cart.add_item(item("b", "Fattoush", dec!(45.00)));

    let ids: Vec<&str> = cart.entries().iter().map(|e| e.item_id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
}

#[test]
fn test_remove_item() {
    let mut cart = Cart::new();
    cart.add_item(item("a", "Falafel", dec!(35.00)));
    cart.remove_item("a");
    assert!(cart.is_empty());
}

#[test]
fn test_set_quantity_zero_removes_entry() {
    let mut cart = Cart::new();
    cart.add_item(item("a", "Falafel", dec!(35.00)));
    cart.set_quantity("a", 0);
    assert!(cart.is_empty());
}

#[test]
fn test_set_quantity_unknown_id_is_noop() {
    let mut cart = Cart::new();
    cart.add_item(item("a", "Falafel", dec!(35.00)));
    cart.set_quantity("zzz", 4);

    assert_eq!(cart.entries().len(), 1);
    assert_eq!(cart.entries()[0].quantity, 1);
}

#[test]
fn test_set_quantity_overwrites() {
    let mut cart = Cart::new();
    cart.add_item(item("a", "Falafel", dec!(35.00)));
    cart.set_quantity("a", 5);
    assert_eq!(cart.entries()[0].quantity, 5);
    assert_eq!(cart.item_count(), 5);
}

#[test]
fn test_clear() {
    let mut cart = Cart::new();
    cart.add_item(item("a", "Falafel", dec!(35.00)));
    cart.add_item(item("b", "Fattoush", dec!(45.00)));
    cart.clear();
    assert!(cart.is_empty());
    assert_eq!(cart.item_count(), 0);
}

#[test]
fn test_totals() {
    // 45.00 x2 + 30.00 + 120.00 = 240.00
    let mut cart = Cart::new();
    cart.add_item(item("a", "Fattoush", dec!(45.00)));
    cart.add_item(item("a", "Fattoush", dec!(45.00)));
    cart.add_item(item("b", "Lentil Soup", dec!(30.00)));
    cart.add_item(item("c", "Lazeez Mixed Grill", dec!(120.00)));

    assert_eq!(cart.subtotal(), dec!(240.00));
    assert_eq!(cart.service_charge(), dec!(24.00));
    assert_eq!(cart.gst(), dec!(19.20));
    assert_eq!(cart.total(), dec!(283.20));
}

#[test]
fn test_totals_rounding() {
    let mut cart = Cart::new();
    cart.add_item(item("a", "Pita Bread", dec!(9.99)));

    // 9.99 * 0.10 = 0.999 -> 1.00; 9.99 * 0.08 = 0.7992 -> 0.80
    assert_eq!(cart.service_charge(), dec!(1.00));
    assert_eq!(cart.gst(), dec!(0.80));
    assert_eq!(cart.total(), dec!(11.79));
}

#[test]
fn test_empty_cart_totals() {
    let cart = Cart::new();
    assert_eq!(cart.subtotal(), Decimal::ZERO);
    assert_eq!(cart.total(), Decimal::ZERO);
    assert_eq!(cart.item_count(), 0);
}

#[test]
fn test_rates_from_settings() {
    let settings = vec![
        SiteSetting {
            id: None,
            key: "service_charge".to_string(),
            value: "12".to_string(),
        },
        SiteSetting {
            id: None,
            key: "gst".to_string(),
            value: "6".to_string(),
        },
    ];
    let rates = CartRates::from_settings(&settings);
    assert_eq!(rates.service_charge, dec!(0.12));
    assert_eq!(rates.gst, dec!(0.06));
}

#[test]
fn test_rates_fall_back_on_missing_or_garbage() {
    let settings = vec![SiteSetting {
        id: None,
        key: "service_charge".to_string(),
        value: "ten percent".to_string(),
    }];
    let rates = CartRates::from_settings(&settings);
    assert_eq!(rates, CartRates::default());
}

#[test]
fn test_display_name_strips_veg_marker() {
    assert_eq!(display_name("The Traditional Hummus (Veg)"), "The Traditional Hummus");
    assert_eq!(display_name("Falafel Wrap (veg)"), "Falafel Wrap");
    assert_eq!(display_name("Lamb Chops"), "Lamb Chops");
}

#[test]
fn test_display_name_handles_multibyte_names() {
    // Names where lowercasing changes the byte length must not slice
    // out of bounds
    assert_eq!(display_name("Ⱥ(Veg)"), "Ⱥ");
    assert_eq!(display_name("İskender (VEG)"), "İskender");
    assert_eq!(display_name("Crème Brûlée (Veg) Tart"), "Crème Brûlée Tart");
}

#[test]
fn test_order_message_format() {
    let mut cart = Cart::new();
    cart.add_item(veg_item("a", "The Traditional Hummus (Veg)", dec!(45.00)));
    cart.add_item(veg_item("a", "The Traditional Hummus (Veg)", dec!(45.00)));
    cart.add_item(item("b", "Lentil Soup", dec!(30.00)));
    cart.add_item(item("c", "Lazeez Mixed Grill", dec!(120.00)));

    let expected = "*Lazeez Gourmet - Pre-Order*\n\n\
        \u{2022} The Traditional Hummus (Veg)\n  \
        Qty: 2 \u{00d7} MVR 45.00 = MVR 90.00\n\
        \u{2022} Lentil Soup\n  \
        Qty: 1 \u{00d7} MVR 30.00 = MVR 30.00\n\
        \u{2022} Lazeez Mixed Grill\n  \
        Qty: 1 \u{00d7} MVR 120.00 = MVR 120.00\n\
        \nSubtotal: MVR 240.00\
        \nService Charge (10%): MVR 24.00\
        \nGST (8%): MVR 19.20\
        \n*Grand Total: MVR 283.20*";
    assert_eq!(cart.order_message(), expected);
}

#[test]
fn test_order_message_labels_follow_injected_rates() {
    let settings = vec![
        SiteSetting {
            id: None,
            key: "service_charge".to_string(),
            value: "12".to_string(),
        },
        SiteSetting {
            id: None,
            key: "gst".to_string(),
            value: "6".to_string(),
        },
    ];
    let mut cart = Cart::with_rates(CartRates::from_settings(&settings));
    cart.add_item(item("a", "Fattoush", dec!(100.00)));

    let msg = cart.order_message();
    assert!(msg.contains("\nService Charge (12%): MVR 12.00"));
    assert!(msg.contains("\nGST (6%): MVR 6.00"));
}

#[test]
fn test_toast_set_and_replaced() {
    let mut cart = Cart::new();
    cart.add_item(item("a", "Falafel (Veg)", dec!(35.00)));
    assert_eq!(cart.toast(), Some("Falafel added to cart!"));

    cart.add_item(item("b", "Fattoush", dec!(45.00)));
    assert_eq!(cart.toast(), Some("Fattoush added to cart!"));
}

#[test]
fn test_toast_expires() {
    let mut cart = Cart::new();
    cart.add_item(item("a", "Falafel", dec!(35.00)));

    // Backdate past the TTL instead of sleeping
    if let Some(toast) = cart.toast.as_mut() {
        toast.shown_at = Instant::now() - (TOAST_TTL + Duration::from_millis(1));
    }
    assert_eq!(cart.toast(), None);
}

#[test]
fn test_open_state() {
    let mut cart = Cart::new();
    assert!(!cart.is_open());
    cart.set_open(true);
    assert!(cart.is_open());
}

mod links {
    use crate::cart::links::*;

    #[test]
    fn test_whatsapp_link_encodes_text() {
        let url = whatsapp_link("9607782460", "Hi there & hello");
        assert_eq!(
            url,
            "https://wa.me/9607782460?text=Hi%20there%20%26%20hello"
        );
    }

    #[test]
    fn test_viber_link() {
        let url = viber_link("order #1");
        assert_eq!(url, "viber://forward?text=order%20%231");
    }

    #[test]
    fn test_dial_link() {
        assert_eq!(dial_link("+9607782460"), "tel:+9607782460");
    }

    #[test]
    fn test_reservation_message() {
        let request = ReservationRequest {
            date: "Saturday, 14 June".to_string(),
            time: "19:30".to_string(),
            guests: 4,
            window_seat: true,
        };
        assert_eq!(
            reservation_message(&request),
            "Hi, I'd like to make a reservation.\n\n\
             Date: Saturday, 14 June\n\
             Time: 19:30\n\
             Guests: 4\n\
             Window seat: Yes, please"
        );

        let no_preference = ReservationRequest {
            window_seat: false,
            ..request
        };
        assert!(reservation_message(&no_preference).ends_with("Window seat: No preference"));
    }
}
