pub mod company;
pub mod employee;
pub mod entry;

pub use company::{Company, NewCompany};
pub use employee::{Employee, NewEmployee, Role};
pub use entry::{Entry, EntryType, NewEntry};
