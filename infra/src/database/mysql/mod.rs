//! MySQL repository implementations.

pub mod employee_repository_impl;
pub mod role_repository_impl;
pub mod user_repository_impl;

pub use employee_repository_impl::MySqlEmployeeRepository;
pub use role_repository_impl::MySqlRoleRepository;
pub use user_repository_impl::MySqlUserRepository;
