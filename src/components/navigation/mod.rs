pub mod nav_drawer;
pub mod nav_item;

pub use nav_drawer::NavDrawer;
pub use nav_item::NavItem;
