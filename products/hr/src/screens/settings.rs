use entity::User;
use platform_api::{ApiResult, ValidationError};

use super::require;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordChange {
    pub current: String,
    pub new: String,
    pub confirm: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    Email,
    InApp,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    Leave,
    Performance,
    Candidates,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TopicSwitches {
    pub leave: bool,
    pub performance: bool,
    pub candidates: bool,
}

impl TopicSwitches {
    fn slot(&mut self, topic: Topic) -> &mut bool {
        match topic {
            Topic::Leave => &mut self.leave,
            Topic::Performance => &mut self.performance,
            Topic::Candidates => &mut self.candidates,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NotificationPreferences {
    pub email: TopicSwitches,
    pub in_app: TopicSwitches,
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email: TopicSwitches {
                leave: true,
                performance: true,
                candidates: false,
            },
            in_app: TopicSwitches {
                leave: true,
                performance: true,
                candidates: true,
            },
        }
    }
}

impl NotificationPreferences {
    /// Flips one switch and returns its new value.
    pub fn toggle(&mut self, channel: Channel, topic: Topic) -> bool {
        let switches = match channel {
            Channel::Email => &mut self.email,
            Channel::InApp => &mut self.in_app,
        };
        let slot = switches.slot(topic);
        *slot = !*slot;
        *slot
    }
}

/// Profile, password and notification settings for the signed-in user.
pub struct SettingsScreen {
    profile: User,
    notifications: NotificationPreferences,
}

impl SettingsScreen {
    pub fn new(profile: User) -> Self {
        Self {
            profile,
            notifications: NotificationPreferences::default(),
        }
    }

    pub fn profile(&self) -> &User {
        &self.profile
    }

    pub fn notifications(&self) -> NotificationPreferences {
        self.notifications
    }

    pub fn save_profile(&mut self, first_name: &str, last_name: &str, email: &str) -> ApiResult<&User> {
        require(first_name, "firstName")?;
        require(last_name, "lastName")?;
        require(email, "email")?;
        self.profile.first_name = first_name.to_string();
        self.profile.last_name = last_name.to_string();
        self.profile.email = email.to_string();
        tracing::info!(user_id = %self.profile.id, "profile updated");
        Ok(&self.profile)
    }

    /// Accepts the change when both new entries agree. Credentials are fixed,
    /// so nothing else is stored.
    pub fn change_password(&self, change: &PasswordChange) -> ApiResult<()> {
        if change.new != change.confirm {
            tracing::debug!(user_id = %self.profile.id, "password confirmation mismatch");
            return Err(ValidationError::PasswordMismatch.into());
        }
        require(&change.new, "newPassword")?;
        tracing::info!(user_id = %self.profile.id, "password updated");
        Ok(())
    }

    pub fn toggle_notification(&mut self, channel: Channel, topic: Topic) -> bool {
        self.notifications.toggle(channel, topic)
    }
}
