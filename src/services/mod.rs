pub mod auth_service;
pub mod entry_service;
pub mod registration_service;

pub use auth_service::AuthService;
pub use entry_service::EntryService;
pub use registration_service::RegistrationService;
