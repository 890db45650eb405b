pub mod blog_posts;
pub mod certifications;
pub mod contact;
pub mod home;
pub mod projects;
pub mod skills;
pub mod system;
