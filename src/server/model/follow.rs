//! Follow toggle result.

use crate::{
    model::user::FollowToggleDto,
    server::model::{toggle::ToggleOutcome, user::User},
};

/// Outcome of following or unfollowing a user.
#[derive(Debug, Clone)]
pub struct FollowToggle {
    pub outcome: ToggleOutcome,
    pub follower: User,
    pub target: User,
}

impl FollowToggle {
    /// Converts the toggle into its response body.
    ///
    /// # Returns
    /// - `FollowToggleDto` - `"{follower} followed {target}"` or `"... unfollowed ..."`
    pub fn into_dto(self) -> FollowToggleDto {
        let verb = match self.outcome {
            ToggleOutcome::Created => "followed",
            ToggleOutcome::Removed => "unfollowed",
        };

        FollowToggleDto {
            detail: format!(
                "{} {} {}",
                self.follower.username, verb, self.target.username
            ),
            following: self.outcome.is_created(),
        }
    }
}
