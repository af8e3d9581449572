pub mod day_record;
pub mod filter_criteria;
pub mod moon_phase;
pub mod result_set;
