//! Database Models

// Catalog
pub mod category;
pub mod menu_item;
pub mod subcategory;

// Restaurant info
pub mod operating_hours;
pub mod site_setting;

// Customer interactions
pub mod reservation;

// Re-exports
pub use category::{Category, CategoryCreate, CategoryUpdate};
pub use menu_item::{MenuItem, MenuItemCreate, MenuItemUpdate};
pub use operating_hours::OperatingHours;
pub use reservation::{Reservation, ReservationCreate, ReservationStatus};
pub use site_setting::SiteSetting;
pub use subcategory::{Subcategory, SubcategoryCreate};
