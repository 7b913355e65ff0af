pub mod dates;
pub mod entities;
pub mod use_cases;
