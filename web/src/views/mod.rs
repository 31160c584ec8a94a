pub mod booking;
pub mod home;
pub mod not_found;
