pub mod compare;
pub mod export;
pub mod samples;
