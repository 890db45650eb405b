use crate::{
    entities::{
        contact_message::{ContactForm, ContactMessageInsert},
        responses::CreatedResponse,
    },
    errors::AppError,
    repositories::contact_message::ContactMessageRepository,
};

pub struct ContactHandler<R>
where
    R: ContactMessageRepository,
{
    pub contact_repo: R,
}

impl<R> ContactHandler<R>
where
    R: ContactMessageRepository,
{
    pub fn new(contact_repo: R) -> Self {
        ContactHandler { contact_repo }
    }

    /// Handles a contact form submission
    pub async fn submit_contact_form(&self, form: ContactForm) -> Result<CreatedResponse, AppError> {
        let new_msg = ContactMessageInsert::try_from(form)?;

        let id = self.contact_repo.create_contact_message(&new_msg).await?;

        Ok(CreatedResponse::new("Message sent successfully", id))
    }
}
