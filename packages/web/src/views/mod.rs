mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod home;
pub use home::Home;

mod notifications;
pub use notifications::Notifications;

mod profile;
pub use profile::Profile;
