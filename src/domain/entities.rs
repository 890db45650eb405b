pub mod admin_user;
pub mod blog_post;
pub mod certification;
pub mod contact_message;
pub mod project;
pub mod responses;
pub mod skill;
pub mod text_list;
