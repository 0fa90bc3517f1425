// Landing page sections, in page order

mod anamnesis;
mod catalog;
mod comparison;
mod cta;
mod footer;
mod hero;
mod nav;
mod pricing;
mod problem;
mod remote;
mod report;
mod routine;
mod testimonials;

pub use anamnesis::Anamnesis;
pub use catalog::TestCatalog;
pub use comparison::Comparison;
pub use cta::CallToAction;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use pricing::Pricing;
pub use problem::ProblemSolution;
pub use remote::RemoteWorkflow;
pub use report::ReportPreview;
pub use routine::RoutineUse;
pub use testimonials::Testimonials;
