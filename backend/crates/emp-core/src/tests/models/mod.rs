mod employee;
mod new_employee;
