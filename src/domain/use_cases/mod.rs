pub mod certifications;
pub mod courses;
pub mod stats;
pub mod workers;
