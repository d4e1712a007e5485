pub mod show_form;
pub mod sign_out;
pub mod submit_form;
