pub mod content_area;
pub mod portfolio_layout;
pub mod top_bar;

pub use content_area::ContentArea;
pub use portfolio_layout::PortfolioLayout;
pub use top_bar::TopBar;
