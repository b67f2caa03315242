//! Routed Pages

mod dashboard;
mod landing;
mod login;
mod not_found;
mod register;
mod task_form;

pub use dashboard::DashboardPage;
pub use landing::LandingPage;
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use register::RegisterPage;
pub use task_form::TaskFormPage;
