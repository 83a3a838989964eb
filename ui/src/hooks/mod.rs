pub mod use_view_state;
