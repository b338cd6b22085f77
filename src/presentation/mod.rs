pub mod console;
pub mod theme;
