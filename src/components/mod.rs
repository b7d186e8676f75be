//! Reusable UI components

pub mod alert;
pub mod button;
pub mod card;
pub mod header;
pub mod input;
pub mod label;
pub mod loading;

pub use alert::{Alert, NotificationBanner};
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::{Card, CardContent, CardDescription, CardHeader, CardTitle};
pub use header::Header;
pub use input::TextInput;
pub use label::Label;
pub use loading::LoadingSpinner;
