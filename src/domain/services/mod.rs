//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

pub mod path_mapper;

pub use path_mapper::{file_task, map_output_path, normalize, relative_to};
