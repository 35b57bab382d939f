pub mod field;
pub mod github_repository;

pub use field::Field;
pub use github_repository::{GithubRepository, RepositoryPatch};
