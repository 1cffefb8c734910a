pub mod form_input;
pub mod help_bar;
pub mod loading_indicator;
pub mod toasts;
