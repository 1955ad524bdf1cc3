//! Request-scoped helpers: typed session access and the permission evaluator.

pub mod auth;
pub mod session;

#[cfg(test)]
mod test;
