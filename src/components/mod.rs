pub mod shift;
pub mod week_view;
