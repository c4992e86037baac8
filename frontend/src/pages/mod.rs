pub mod about;
pub mod contact;
pub mod dashboard;
pub mod home;
pub mod login;
pub mod not_found;
pub mod signup;
pub mod upload;
