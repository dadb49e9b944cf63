use axum::body::Body;
use axum::http::{Request, StatusCode};
use rust_decimal_macros::dec;
use tower::ServiceExt;

use crate::core::{Config, ServerState, build_app};
use crate::db::models::{CategoryCreate, MenuItem, MenuItemCreate};
use crate::db::repository::{CategoryRepository, MenuItemRepository};

async fn seeded_state() -> ServerState {
    let config = Config::from_env();
    let state = ServerState::in_memory(config).await.unwrap();

    let category = CategoryRepository::new(state.db.clone())
        .create(CategoryCreate {
            slug: "levant_flavours".to_string(),
            label: "Levant Flavours".to_string(),
            sort_order: 1,
        })
        .await
        .unwrap();
    let category_id = category.id.unwrap().to_string();

    let items = MenuItemRepository::new(state.db.clone());
    for name in ["The Traditional Hummus", "Falafel"] {
        items
            .create(MenuItemCreate {
                name: name.to_string(),
                description: None,
                price: dec!(45.00),
                category_id: category_id.clone(),
                subcategory_id: None,
                image_url: None,
                is_vegetarian: false,
                is_spicy: false,
                is_featured: false,
            })
            .await
            .unwrap();
    }

    state
}

async fn get_items(state: &ServerState, uri: &str) -> Vec<MenuItem> {
    let app = build_app().with_state(state.clone());
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_list_without_query_returns_all_available() {
    let state = seeded_state().await;
    let items = get_items(&state, "/api/menu-items").await;
    assert_eq!(items.len(), 2);
}

#[tokio::test]
async fn test_list_blank_query_equals_unfiltered_list() {
    let state = seeded_state().await;

    // Whitespace-only q means "no filter", not an empty search
    let blank = get_items(&state, "/api/menu-items?q=%20%20").await;
    assert_eq!(blank.len(), 2);

    let empty = get_items(&state, "/api/menu-items?q=").await;
    assert_eq!(empty.len(), 2);
}

#[tokio::test]
async fn test_list_query_filters() {
    let state = seeded_state().await;
    let filtered = get_items(&state, "/api/menu-items?q=hummus").await;
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].name, "The Traditional Hummus");
}
