pub mod panel_view_model;
