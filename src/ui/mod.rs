pub mod app;
pub mod dish_list;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod menu;
pub mod mvi;
pub mod render;
pub mod runtime;
pub mod tabs;
pub mod terminal_guard;
pub mod theme;

pub use runtime::run;
