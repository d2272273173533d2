pub mod capture;
pub mod doctor;
