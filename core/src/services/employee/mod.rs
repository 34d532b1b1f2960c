//! Employee service module for the CRUD resource.

mod service;


pub use service::EmployeeService;
