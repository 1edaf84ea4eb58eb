pub mod employee_repository;
