//! UI Components
//!
//! Reusable Leptos components for the landing and home views.

pub mod background;
pub mod capsule_card;
pub mod capsule_form;
pub mod date_time_picker;
pub mod hero;
pub mod nav;
pub mod star_button;
pub mod toast;

pub use background::BackgroundBeams;
pub use capsule_card::CapsuleCard;
pub use capsule_form::CapsuleForm;
pub use hero::HeroSection;
pub use nav::Navbar;
pub use star_button::StarButton;
pub use toast::Toast;
