use uuid::Uuid;

pub const STUDENT_PREFIX: &str = "stu";
pub const INSTRUCTOR_PREFIX: &str = "instr";
pub const CLASS_PREFIX: &str = "cls";

/// Type-prefixed id, e.g. `stu-3f2a...`. Unique for the life of the process.
pub fn new_id(prefix: &str) -> String {
    format!("{}-{}", prefix, Uuid::new_v4().simple())
}
