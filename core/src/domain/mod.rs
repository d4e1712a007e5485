pub mod common;
pub mod diagnosis;
pub mod page;
pub mod symptom_form;
