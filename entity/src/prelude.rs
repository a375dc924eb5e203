pub use super::academic_year::Entity as AcademicYear;
pub use super::business::Entity as Business;
pub use super::business_like::Entity as BusinessLike;
pub use super::business_save::Entity as BusinessSave;
pub use super::school::Entity as School;
pub use super::session::Entity as Session;
pub use super::user::Entity as User;
