pub mod admin;
pub mod search;

pub use admin::DoctorAdminService;
pub use search::DoctorSearchService;
