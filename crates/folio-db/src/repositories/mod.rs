//! One repository per table. All functions take the pool explicitly and
//! return `Result<_, sqlx::Error>`; domain-level not-found handling lives
//! with the callers.

mod education_repo;
mod portfolio_repo;
mod skill_repo;
mod user_repo;
mod work_repo;

pub use education_repo::EducationRepo;
pub use portfolio_repo::PortfolioRepo;
pub use skill_repo::SkillRepo;
pub use user_repo::UserRepo;
pub use work_repo::WorkRepo;
