mod layout;
pub use layout::SiteLayout;

mod home;
pub use home::Home;

mod about;
pub use about::About;

mod events;
pub use events::Events;

mod directory;
pub use directory::Directory;

mod join;
pub use join::Join;

mod login;
pub use login::Login;

mod admin;
pub use admin::Admin;
