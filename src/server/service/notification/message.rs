//! Email content for each notification event.
//!
//! Builders return `None` when the event has nobody to notify, so the notifier never
//! hands an empty recipient list to a transport.

use crate::server::{
    model::{comment::Comment, post::Post, user::User},
    service::notification::mailer::OutgoingEmail,
};

fn email(to: &str, subject: String, body: String) -> Option<OutgoingEmail> {
    let to = to.trim();
    if to.is_empty() {
        return None;
    }

    Some(OutgoingEmail {
        to: vec![to.to_string()],
        subject,
        body,
    })
}

pub fn user_followed(follower: &User, target: &User) -> Option<OutgoingEmail> {
    let name = follower.display_text();

    email(
        &target.email,
        format!("{} started following you", name),
        format!("{} followed you.", name),
    )
}

pub fn user_logged_in(user: &User) -> Option<OutgoingEmail> {
    email(
        &user.email,
        "New login to your account".to_string(),
        format!("Your account, @{}, was logged in.", user.username),
    )
}

pub fn profile_picture_changed(user: &User) -> Option<OutgoingEmail> {
    let name = user.display_text();

    email(
        &user.email,
        format!("{} updated profile picture", name),
        format!("{} updated profile picture.", name),
    )
}

/// One email per follower address; blank addresses are skipped.
pub fn post_published(
    author: &User,
    post: &Post,
    follower_emails: &[String],
) -> Vec<OutgoingEmail> {
    let name = author.display_text();
    let subject = format!("{} published a new post", name);

    let mut body = format!("{} published a new post: \"{}\".", name, post.name);
    if !post.content.trim().is_empty() {
        body.push_str(&format!("\n\nPost content:\n\"{}\"", post.content));
    }

    follower_emails
        .iter()
        .filter_map(|to| email(to, subject.clone(), body.clone()))
        .collect()
}

/// `None` when the author liked their own post.
pub fn post_liked(liker: &User, post: &Post, author: &User) -> Option<OutgoingEmail> {
    if liker.id == author.id {
        return None;
    }

    let name = liker.display_text();

    email(
        &author.email,
        format!("{} liked your post", name),
        format!("{} liked your post \"{}\".", name, post.name),
    )
}

/// `None` when the author commented on their own post.
pub fn comment_created(
    commenter: &User,
    comment: &Comment,
    post: &Post,
    author: &User,
) -> Option<OutgoingEmail> {
    if commenter.id == author.id {
        return None;
    }

    let name = commenter.display_text();

    let mut body = format!("{} commented on your post \"{}\".", name, post.name);
    if !comment.content.trim().is_empty() {
        body.push_str(&format!("\n\nComment:\n\"{}\"", comment.content));
    }

    email(&author.email, format!("{} commented on your post", name), body)
}
