pub mod feedback;
pub mod summaries;

pub use feedback::Entity as Feedback;
pub use feedback::Sentiment;
pub use summaries::Entity as Summaries;

// Type aliases
pub type FeedbackRecord = feedback::Model;
pub type SummaryRecord = summaries::Model;
