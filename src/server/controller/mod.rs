pub mod academic_year;
pub mod auth;
pub mod business;
pub mod interaction;
pub mod school;
pub mod session;
pub mod user;

#[cfg(test)]
mod test;
