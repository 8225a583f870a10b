//! StudentService: the student rules on top of a `Session`.

mod students;
pub use students::{StudentService, ALREADY_EXISTS, DOES_NOT_EXIST, NOT_FOUND};
