use super::*;
use crate::db::DbService;
use crate::db::models::{
    CategoryCreate, CategoryUpdate, MenuItemCreate, MenuItemUpdate, ReservationCreate,
    ReservationStatus, SubcategoryCreate,
};
use rust_decimal_macros::dec;

async fn test_db() -> Surreal<Db> {
    DbService::memory().await.unwrap().db
}

async fn create_category(db: &Surreal<Db>, slug: &str, sort_order: i32) -> crate::db::models::Category {
    CategoryRepository::new(db.clone())
        .create(CategoryCreate {
            slug: slug.to_string(),
            label: slug.to_string(),
            sort_order,
        })
        .await
        .unwrap()
}

fn item_create(name: &str, category_id: &str) -> MenuItemCreate {
    MenuItemCreate {
        name: name.to_string(),
        description: None,
        price: dec!(45.00),
        category_id: category_id.to_string(),
        subcategory_id: None,
        image_url: None,
        is_vegetarian: false,
        is_spicy: false,
        is_featured: false,
    }
}

#[test]
fn test_record_id_accepts_bare_and_prefixed() {
    assert_eq!(record_id("category", "abc"), record_id("category", "category:abc"));
    assert_eq!(record_id("category", "abc").table(), "category");
    // A foreign table prefix is treated as a bare key, not trusted
    assert_eq!(record_id("category", "menu_item:abc").table(), "category");
}

#[tokio::test]
async fn test_category_duplicate_slug_rejected() {
    let db = test_db().await;
    create_category(&db, "thirsty", 1).await;

    let result = CategoryRepository::new(db.clone())
        .create(CategoryCreate {
            slug: "thirsty".to_string(),
            label: "Thirsty Again".to_string(),
            sort_order: 2,
        })
        .await;
    assert!(matches!(result, Err(RepoError::Duplicate(_))));
}

#[tokio::test]
async fn test_category_listing_respects_is_active() {
    let db = test_db().await;
    let repo = CategoryRepository::new(db.clone());
    let first = create_category(&db, "thirsty", 2).await;
    create_category(&db, "high_tea", 1).await;

    // Public listing is sort_order ascending
    let all = repo.find_all().await.unwrap();
    let slugs: Vec<&str> = all.iter().map(|c| c.slug.as_str()).collect();
    assert_eq!(slugs, vec!["high_tea", "thirsty"]);

    // Soft-disable hides from the public listing only
    repo.update(
        &first.id.unwrap().to_string(),
        CategoryUpdate {
            is_active: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(repo.find_all().await.unwrap().len(), 1);
    assert_eq!(repo.find_all_admin().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_category_update_is_sparse() {
    let db = test_db().await;
    let repo = CategoryRepository::new(db.clone());
    let created = create_category(&db, "sweet_endings", 4).await;

    let updated = repo
        .update(
            &created.id.unwrap().to_string(),
            CategoryUpdate {
                label: Some("Sweet Endings".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.label, "Sweet Endings");
    assert_eq!(updated.slug, "sweet_endings");
    assert_eq!(updated.sort_order, 4);
    assert!(updated.is_active);
}

#[tokio::test]
async fn test_subcategory_requires_existing_category() {
    let db = test_db().await;
    let result = SubcategoryRepository::new(db.clone())
        .create(SubcategoryCreate {
            category_id: "category:missing".to_string(),
            name: "Cold Mezze".to_string(),
            sort_order: 1,
        })
        .await;
    assert!(matches!(result, Err(RepoError::Reference(_))));
}

#[tokio::test]
async fn test_subcategory_find_by_name_is_case_insensitive() {
    let db = test_db().await;
    let category = create_category(&db, "levant_flavours", 1).await;
    let category_id = category.id.unwrap();

    let repo = SubcategoryRepository::new(db.clone());
    repo.create(SubcategoryCreate {
        category_id: category_id.to_string(),
        name: "Cold Mezze".to_string(),
        sort_order: 1,
    })
    .await
    .unwrap();

    let found = repo.find_by_name(&category_id, "cold mezze").await.unwrap();
    assert_eq!(found.unwrap().name, "Cold Mezze");

    let missing = repo.find_by_name(&category_id, "Hot Mezze").await.unwrap();
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_menu_item_requires_existing_category() {
    let db = test_db().await;
    let repo = MenuItemRepository::new(db.clone());

    let result = repo.create(item_create("Hummus", "category:missing")).await;
    assert!(matches!(result, Err(RepoError::Reference(_))));
    // The failed create must not leave a partial record behind
    assert!(repo.find_all_admin().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_menu_item_subcategory_must_match_category() {
    let db = test_db().await;
    let levant = create_category(&db, "levant_flavours", 1).await.id.unwrap();
    let high_tea = create_category(&db, "high_tea", 2).await.id.unwrap();

    let sub = SubcategoryRepository::new(db.clone())
        .create(SubcategoryCreate {
            category_id: levant.to_string(),
            name: "Cold Mezze".to_string(),
            sort_order: 1,
        })
        .await
        .unwrap();

    let mut data = item_create("Hummus", &high_tea.to_string());
    data.subcategory_id = Some(sub.id.unwrap().to_string());
    let result = MenuItemRepository::new(db.clone()).create(data).await;
    assert!(matches!(result, Err(RepoError::Reference(_))));
}

#[tokio::test]
async fn test_menu_item_category_move_drops_stale_subcategory() {
    let db = test_db().await;
    let levant = create_category(&db, "levant_flavours", 1).await.id.unwrap();
    let high_tea = create_category(&db, "high_tea", 2).await.id.unwrap();

    let sub = SubcategoryRepository::new(db.clone())
        .create(SubcategoryCreate {
            category_id: levant.to_string(),
            name: "Cold Mezze".to_string(),
            sort_order: 1,
        })
        .await
        .unwrap();

    let repo = MenuItemRepository::new(db.clone());
    let mut data = item_create("Hummus", &levant.to_string());
    data.subcategory_id = Some(sub.id.unwrap().to_string());
    let created = repo.create(data).await.unwrap();
    let item_id = created.id.unwrap().to_string();

    // Restating the same category keeps the subcategory link
    let unchanged = repo
        .update(
            &item_id,
            MenuItemUpdate {
                category_id: Some(levant.to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert!(unchanged.subcategory.is_some());

    // Moving to another category without a new subcategory clears it
    let moved = repo
        .update(
            &item_id,
            MenuItemUpdate {
                category_id: Some(high_tea.to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(moved.category, high_tea);
    assert!(moved.subcategory.is_none());
}

#[tokio::test]
async fn test_menu_item_create_forces_defaults() {
    let db = test_db().await;
    let category = create_category(&db, "thirsty", 1).await.id.unwrap();

    let created = MenuItemRepository::new(db.clone())
        .create(item_create("Fresh Orange Juice", &category.to_string()))
        .await
        .unwrap();

    assert!(created.is_available);
    assert_eq!(created.sort_order, 0);
    assert_eq!(created.price, dec!(45.00));
}

#[tokio::test]
async fn test_menu_item_search_matches_name_and_description() {
    let db = test_db().await;
    let category = create_category(&db, "levant_flavours", 1).await.id.unwrap();
    let repo = MenuItemRepository::new(db.clone());

    let mut hummus = item_create("The Traditional Hummus", &category.to_string());
    hummus.description = Some("Chickpea dip with tahini".to_string());
    repo.create(hummus).await.unwrap();
    repo.create(item_create("Falafel", &category.to_string()))
        .await
        .unwrap();

    // Case-insensitive over name
    assert_eq!(repo.search("HUMMUS").await.unwrap().len(), 1);
    // Over description too
    assert_eq!(repo.search("tahini").await.unwrap().len(), 1);
    assert!(repo.search("pizza").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_menu_item_availability_filtering() {
    let db = test_db().await;
    let category = create_category(&db, "thirsty", 1).await.id.unwrap();
    let repo = MenuItemRepository::new(db.clone());

    let created = repo
        .create(item_create("Mint Lemonade", &category.to_string()))
        .await
        .unwrap();
    let item_id = created.id.unwrap().to_string();

    repo.update(
        &item_id,
        MenuItemUpdate {
            is_available: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert!(repo.find_all().await.unwrap().is_empty());
    assert!(repo.find_by_category(&category.to_string()).await.unwrap().is_empty());
    assert!(repo.search("lemonade").await.unwrap().is_empty());
    assert_eq!(repo.find_all_admin().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_menu_item_update_is_sparse() {
    let db = test_db().await;
    let category = create_category(&db, "thirsty", 1).await.id.unwrap();
    let repo = MenuItemRepository::new(db.clone());

    let created = repo
        .create(item_create("Karak Tea", &category.to_string()))
        .await
        .unwrap();

    let updated = repo
        .update(
            &created.id.unwrap().to_string(),
            MenuItemUpdate {
                price: Some(dec!(25.00)),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.price, dec!(25.00));
    assert_eq!(updated.name, "Karak Tea");
    assert!(updated.is_available);
}

#[tokio::test]
async fn test_menu_item_delete_missing_is_not_found() {
    let db = test_db().await;
    let result = MenuItemRepository::new(db.clone()).delete("missing").await;
    assert!(matches!(result, Err(RepoError::NotFound(_))));
}

#[tokio::test]
async fn test_setting_upsert_never_duplicates_keys() {
    let db = test_db().await;
    let repo = SiteSettingRepository::new(db.clone());

    repo.upsert("whatsapp", "9607782460").await.unwrap();
    let updated = repo.upsert("whatsapp", "9607999999").await.unwrap();

    assert_eq!(updated.value, "9607999999");
    let all = repo.find_all().await.unwrap();
    assert_eq!(all.len(), 1);
}

#[tokio::test]
async fn test_operating_hours_ordered_by_day() {
    let db = test_db().await;
    let repo = OperatingHoursRepository::new(db.clone());

    for (day_of_week, label) in [(5, "Friday"), (0, "Sunday"), (3, "Wednesday")] {
        repo.create(crate::db::models::OperatingHours {
            id: None,
            day_of_week,
            open_time: "12:00".to_string(),
            close_time: "00:00".to_string(),
            is_closed: false,
            label: label.to_string(),
        })
        .await
        .unwrap();
    }

    let hours = repo.find_all().await.unwrap();
    let days: Vec<i32> = hours.iter().map(|h| h.day_of_week).collect();
    assert_eq!(days, vec![0, 3, 5]);
}

#[test]
fn test_reservation_status_wire_format() {
    assert_eq!(
        serde_json::to_string(&ReservationStatus::NoShow).unwrap(),
        "\"no_show\""
    );
    let parsed: ReservationStatus = serde_json::from_str("\"confirmed\"").unwrap();
    assert_eq!(parsed, ReservationStatus::Confirmed);
}

#[tokio::test]
async fn test_reservation_lifecycle() {
    let db = test_db().await;
    let repo = ReservationRepository::new(db.clone());

    let created = repo
        .create(ReservationCreate {
            customer_name: "Aishath".to_string(),
            customer_phone: "+960 778 2460".to_string(),
            customer_email: None,
            party_size: 4,
            reservation_date: "2025-06-14".to_string(),
            reservation_time: "19:30".to_string(),
            special_requests: Some("Window seat".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(created.status, ReservationStatus::Pending);

    let id = created.id.unwrap().to_string();
    let confirmed = repo
        .update_status(&id, ReservationStatus::Confirmed)
        .await
        .unwrap();
    assert_eq!(confirmed.status, ReservationStatus::Confirmed);

    // Any status is reachable from any status
    let cancelled = repo
        .update_status(&id, ReservationStatus::Cancelled)
        .await
        .unwrap();
    assert_eq!(cancelled.status, ReservationStatus::Cancelled);

    let missing = repo
        .update_status("missing", ReservationStatus::Confirmed)
        .await;
    assert!(matches!(missing, Err(RepoError::NotFound(_))));
}
