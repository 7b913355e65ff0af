pub mod certification;
pub mod course;
pub mod stats;
pub mod worker;
