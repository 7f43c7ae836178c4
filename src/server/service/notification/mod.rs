//! Email notifications for user activity.
//!
//! `Notifier` turns domain events into emails and hands them to a `Mailer`. Callers
//! invoke it only after the triggering write has committed. Delivery failures are
//! logged and never propagate to the request that caused them.

pub mod mailer;
pub mod message;

use std::sync::Arc;

use crate::server::{
    config::NotificationMode,
    model::{comment::Comment, post::Post, user::User},
    service::notification::mailer::{Mailer, OutgoingEmail},
};

#[derive(Clone)]
pub struct Notifier {
    mailer: Arc<dyn Mailer>,
    mode: NotificationMode,
}

impl Notifier {
    /// Creates a notifier.
    ///
    /// # Arguments
    /// - `mailer` - Transport used for every message
    /// - `mode` - Whether sends are awaited or run on a detached task
    pub fn new(mailer: Arc<dyn Mailer>, mode: NotificationMode) -> Self {
        Self { mailer, mode }
    }

    pub async fn user_followed(&self, follower: &User, target: &User) {
        self.dispatch(message::user_followed(follower, target).into_iter().collect())
            .await;
    }

    pub async fn user_logged_in(&self, user: &User) {
        self.dispatch(message::user_logged_in(user).into_iter().collect())
            .await;
    }

    pub async fn profile_picture_changed(&self, user: &User) {
        self.dispatch(message::profile_picture_changed(user).into_iter().collect())
            .await;
    }

    pub async fn post_published(&self, author: &User, post: &Post, follower_emails: &[String]) {
        self.dispatch(message::post_published(author, post, follower_emails))
            .await;
    }

    pub async fn post_liked(&self, liker: &User, post: &Post, author: &User) {
        self.dispatch(message::post_liked(liker, post, author).into_iter().collect())
            .await;
    }

    pub async fn comment_created(
        &self,
        commenter: &User,
        comment: &Comment,
        post: &Post,
        author: &User,
    ) {
        self.dispatch(
            message::comment_created(commenter, comment, post, author)
                .into_iter()
                .collect(),
        )
        .await;
    }

    async fn dispatch(&self, emails: Vec<OutgoingEmail>) {
        if emails.is_empty() {
            return;
        }

        match self.mode {
            NotificationMode::Sync => send_all(self.mailer.as_ref(), &emails).await,
            NotificationMode::Background => {
                let mailer = self.mailer.clone();
                tokio::spawn(async move {
                    send_all(mailer.as_ref(), &emails).await;
                });
            }
        }
    }
}

async fn send_all(mailer: &dyn Mailer, emails: &[OutgoingEmail]) {
    for email in emails {
        if let Err(e) = mailer.send(email).await {
            tracing::warn!(
                to = ?email.to,
                subject = %email.subject,
                "Failed to send notification email: {}",
                e
            );
        }
    }
}
