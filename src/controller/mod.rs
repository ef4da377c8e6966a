//! Async controllers that pair an API client with a page's reactive state.

pub mod board;
pub mod dashboard;

#[cfg(test)]
pub(crate) mod test_helpers;
