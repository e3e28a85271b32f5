//! Scheduled presentation effects.
//!
//! Everything in this crate is cosmetic: counters, ripples, parallax,
//! progress rings, typing animations, floating particles, and transient
//! notification banners. The common substrate is the [`Scheduler`], a
//! single-threaded cancellable task list driven by explicit host ticks;
//! every effect is a task with an explicit stop condition rather than
//! an unbounded timer closure.

pub mod counter;
pub mod notify;
pub mod parallax;
pub mod particles;
pub mod progress;
pub mod ripple;
pub mod scheduler;
pub mod typing;

pub use counter::animate_counter;
pub use notify::notify;
pub use parallax::apply_parallax;
pub use particles::spawn_particles;
pub use progress::ProgressRing;
pub use ripple::spawn_ripple;
pub use scheduler::{Scheduler, TaskContext, TaskControl, TaskHandle};
pub use typing::type_text;
