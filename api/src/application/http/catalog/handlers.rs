pub mod get_languages;
pub mod get_suggestions;
