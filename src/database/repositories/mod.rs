pub mod companies;
pub mod employees;
pub mod entries;

pub use companies::CompanyRepository;
pub use employees::EmployeeRepository;
pub use entries::{EntryRepository, EntrySort, SortDirection, SortField};
