// Recap page sections

/// Event date line shown in the hero and the console greeting.
pub const EVENT_DATES: &str = "April 23-24, 2025";

mod backdrop;
mod console_greeting;
mod feedback;
mod footer;
mod hero;
mod icymi;
mod nav;
mod products;
mod slideshow;
mod social;
mod whats_next;

pub use backdrop::Backdrop;
pub use console_greeting::ConsoleGreeting;
pub use feedback::Feedback;
pub use footer::Footer;
pub use hero::Hero;
pub use icymi::Icymi;
pub use nav::Nav;
pub use products::Products;
pub use social::Social;
pub use whats_next::WhatsNext;
