pub mod catalog;
pub mod form;

pub use catalog::*;
pub use form::*;
