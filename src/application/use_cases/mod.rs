/// Use cases module containing application business logic orchestration
mod generate_spdx;

pub use generate_spdx::{DependInfoCommand, GenerateSpdxUseCase, GraphFormat};
