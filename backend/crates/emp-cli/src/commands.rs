use clap::Subcommand;

#[derive(Subcommand, Debug, PartialEq)]
pub(crate) enum Commands {
    /// List all stored employees
    List,

    /// Get an employee by ID
    Get {
        /// Employee ID
        id: i64,
    },

    /// Annual salary (monthly salary x 12) of an employee
    Salary {
        /// Employee ID
        id: i64,
    },

    /// Pull every employee from the external API into storage
    Fetch,
}
