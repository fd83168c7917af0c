mod add;
mod service;

pub use add::AddReviewCommand;
pub use service::ReviewCommandService;
