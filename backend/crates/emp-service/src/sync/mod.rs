pub(crate) mod envelope;

pub(crate) use envelope::EmployeeEnvelope;
