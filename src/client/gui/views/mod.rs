pub mod results;
pub mod style;
pub mod toast;
pub mod upload;
