pub mod metric_panel;
