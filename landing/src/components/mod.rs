//! Presentational building blocks shared by the page sections.
//!
//! # Component Hierarchy
//!
//! ```text
//! Section
//! └── Container
//!     ├── Badge / SectionHeading
//!     ├── TestCard, ComparisonCard, PillarCard, UseCaseCard
//!     ├── IconPoint, StepItem, FeatureBullet
//!     ├── TestimonialCard
//!     └── Button
//! ```
//!
//! None of them hold state; they render literal props into fixed markup.

mod button;
mod cards;
mod icons;
mod layout;

pub use button::{button_class, Button, ButtonVariant};
pub use cards::{
    ComparisonCard, FeatureBullet, IconPoint, PillarCard, StepItem, TestCard, TestimonialCard,
    UseCaseCard,
};
pub use icons::*;
pub use layout::{Align, Badge, Container, Section, SectionHeading};
