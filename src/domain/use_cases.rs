pub mod admin_users;
pub mod blog;
pub mod certifications;
pub mod contact;
pub mod projects;
pub mod skills;
