pub mod use_active_section;
pub mod use_content_override;
pub mod use_loading_gate;
pub mod use_portfolio_state;

pub use use_active_section::use_active_section;
pub use use_content_override::use_content_override;
pub use use_loading_gate::use_loading_gate;
pub use use_portfolio_state::{use_portfolio_state, PortfolioState};
