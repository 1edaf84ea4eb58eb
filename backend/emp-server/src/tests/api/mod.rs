mod employee_dto;
mod error;
