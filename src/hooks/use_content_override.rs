use dioxus::prelude::*;

use crate::content::ContentClient;
use crate::hooks::use_portfolio_state::PortfolioState;

/// Replace the bundled content with an external document when one is configured.
/// Failures are logged and the bundled content stays.
pub fn use_content_override(state: PortfolioState) {
    use_hook(move || {
        #[cfg(not(target_arch = "wasm32"))]
        if let Some(path) = crate::config::content_path() {
            let mut state = state;
            spawn(async move {
                match crate::content::Content::from_path(&path).await {
                    Ok(content) => {
                        tracing::info!("loaded content from {}", path.display());
                        state.replace_content(content);
                    }
                    Err(e) => {
                        tracing::warn!("keeping bundled content, {} failed: {}", path.display(), e)
                    }
                }
            });
            return;
        }

        if let Some(client) = ContentClient::from_build_env() {
            let mut state = state;
            spawn(async move {
                match client.fetch().await {
                    Ok(content) => {
                        tracing::info!("loaded content from {}", client.url());
                        state.replace_content(content);
                    }
                    Err(e) => {
                        tracing::warn!("keeping bundled content, {} failed: {}", client.url(), e)
                    }
                }
            });
        }
    });
}
