mod academic_year;
mod business;
mod interaction;
mod school;
mod session;
mod user;
