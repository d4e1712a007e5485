pub mod create_diagnosis;
