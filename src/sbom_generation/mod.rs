/// Domain layer - pure SPDX generation logic, free of I/O
pub mod domain;
pub mod policies;
pub mod services;
