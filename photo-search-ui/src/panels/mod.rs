mod top_panel;

pub use top_panel::TopPanel;
