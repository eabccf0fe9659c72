pub mod plot_view;
pub mod run_view;

pub use plot_view::PlotView;
pub use run_view::{RunActions, RunView};
