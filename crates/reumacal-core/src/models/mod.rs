pub mod patient;
pub mod score_record;
