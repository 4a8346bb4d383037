pub mod feedback;
pub mod summaries;

pub use feedback::{FeedbackDao, FeedbackFilter};
pub use summaries::SummariesDao;
