pub mod forecast_screen;
pub mod node_view;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use forecast_screen::{ERROR_ICON, ForecastScreen, ForecastScreenProps};
pub use node_view::{Density, NodeView, NodeViewProps};
