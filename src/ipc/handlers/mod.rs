pub mod attendance;
pub mod classes;
pub mod core;
pub mod instructors;
pub mod session;
pub mod students;
