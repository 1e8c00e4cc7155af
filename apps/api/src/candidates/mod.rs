// Candidate intake, storage and search.
// Every read goes through the store; nothing is cached between requests.

pub mod handlers;
pub mod search;
pub mod store;
pub mod tips;
pub mod writer;
