//! UI Components
//!
//! Screens and the reusable pieces they are built from.

mod add_product;
mod banner;
mod catalog_screen;
mod dashboard;
mod delete_confirm_button;
mod line_item_row;
mod login_screen;
mod movement_screen;
mod nav_bar;
mod stock_lookup;

pub use add_product::AddProduct;
pub use banner::{Banner, FieldMessage};
pub use catalog_screen::CatalogScreen;
pub use dashboard::Dashboard;
pub use delete_confirm_button::DeleteConfirmButton;
pub use line_item_row::LineItemRow;
pub use login_screen::LoginScreen;
pub use movement_screen::MovementScreen;
pub use nav_bar::NavBar;
pub use stock_lookup::StockLookup;
