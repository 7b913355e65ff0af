pub mod certifications;
pub mod courses;
pub mod fallback;
pub mod home;
pub mod stats;
pub mod system;
pub mod workers;
