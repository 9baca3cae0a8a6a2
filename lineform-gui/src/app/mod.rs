pub mod form;
pub mod message;
pub mod view;

use iced::Task;
use tracing::{info, warn};

use lineform_ui::component::modal;
use lineform_ui::widget::Element;

use crate::app::form::RegistrationForm;
use crate::app::message::{Message, ViewMessage};
use crate::config::Config;
use crate::services::registration::{RegistrationClient, UserRecord};

pub const PROFILE_FETCH_FAILED: &str =
    "ระบบไม่สามารถดึงข้อมูล LINE ของท่านได้ กรุณาลองใหม่อีกครั้ง";
pub const USER_FETCH_FAILED: &str = "ระบบไม่สามารถดึงข้อมูลของท่านได้ กรุณาลองใหม่อีกครั้ง";
pub const PASSWORD_REQUIRED: &str = "กรุณากรอกรหัสผ่าน";
pub const SAVE_SUCCESS: &str = "บันทึกข้อมูลสำเร็จ";
pub const SAVE_FAILED: &str = "ไม่สามารถบันทึกข้อมูลได้";

/// Single-slot notification. Last write wins, no queueing.
#[derive(Debug, Clone)]
pub struct Alert {
    pub message: String,
}

impl Alert {
    fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

pub struct App {
    client: RegistrationClient,
    token: Option<String>,
    display_name: String,
    record: Option<UserRecord>,
    form: RegistrationForm,
    alert: Option<Alert>,
    processing: bool,
}

impl App {
    /// Boots the screen. With a token, the profile and the user record are
    /// fetched in parallel; either may fail without blocking the other.
    pub fn new(config: Config) -> (Self, Task<Message>) {
        let client = RegistrationClient::new(config.api_url);
        let task = match &config.token {
            Some(token) => {
                let profile = {
                    let client = client.clone();
                    let token = token.clone();
                    Task::perform(
                        async move { client.get_profile(&token).await },
                        Message::ProfileFetched,
                    )
                };
                let user = {
                    let client = client.clone();
                    let token = token.clone();
                    Task::perform(
                        async move { client.get_user(&token).await },
                        Message::UserFetched,
                    )
                };
                Task::batch([profile, user])
            }
            None => {
                warn!("no login token provided, the form will not submit");
                Task::none()
            }
        };
        (
            Self {
                client,
                token: config.token,
                display_name: String::new(),
                record: None,
                form: RegistrationForm::default(),
                alert: None,
                processing: false,
            },
            task,
        )
    }

    pub fn title(&self) -> String {
        "ลงทะเบียน".to_string()
    }

    pub fn theme(&self) -> iced::Theme {
        iced::Theme::Light
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ProfileFetched(Ok(profile)) => {
                self.display_name = profile.map(|p| p.display_name).unwrap_or_default();
            }
            Message::ProfileFetched(Err(e)) => {
                warn!("profile fetch failed: {}", e);
                self.alert = Some(Alert::new(PROFILE_FETCH_FAILED));
            }
            Message::UserFetched(Ok(Some(record))) => {
                self.form.prefill(&record);
                self.record = Some(record);
            }
            Message::UserFetched(Ok(None)) => {
                // First visit: nothing to pre-fill.
                self.record = None;
            }
            Message::UserFetched(Err(e)) => {
                warn!("user fetch failed: {}", e);
                self.record = None;
                self.alert = Some(Alert::new(USER_FETCH_FAILED));
            }
            Message::Submitted(Ok(())) => {
                info!("registration saved");
                self.processing = false;
                self.alert = Some(Alert::new(SAVE_SUCCESS));
                // Re-fetch so the form flips into the read-only mode. A late
                // failure of this fetch overwrites the success alert.
                if let Some(token) = self.token.clone() {
                    let client = self.client.clone();
                    return Task::perform(
                        async move { client.get_user(&token).await },
                        Message::UserFetched,
                    );
                }
            }
            Message::Submitted(Err(e)) => {
                warn!("registration submit failed: {}", e);
                self.processing = false;
                self.alert = Some(Alert::new(SAVE_FAILED));
            }
            Message::View(ViewMessage::FieldEdited(field, value)) => {
                self.form.edit(field, value);
            }
            Message::View(ViewMessage::Submit) => {
                if self.processing {
                    return Task::none();
                }
                let token = match &self.token {
                    Some(token) => token.clone(),
                    None => return Task::none(),
                };
                if !self.form.check_all() {
                    return Task::none();
                }
                match self.form.prepare_request(&token, self.record.is_some()) {
                    None => {
                        self.alert = Some(Alert::new(PASSWORD_REQUIRED));
                    }
                    Some(request) => {
                        self.processing = true;
                        let client = self.client.clone();
                        return Task::perform(
                            async move { client.create_user(&request).await },
                            Message::Submitted,
                        );
                    }
                }
            }
            Message::View(ViewMessage::CloseAlert) => {
                self.alert = None;
            }
        }
        Task::none()
    }

    pub fn view(&self) -> Element<Message> {
        let content = view::registration(
            &self.form,
            &self.display_name,
            self.record.is_some(),
            self.processing,
            self.token.is_some(),
        )
        .map(Message::View);
        if let Some(alert) = &self.alert {
            modal::overlay(
                content,
                view::alert(&alert.message).map(Message::View),
                Message::View(ViewMessage::CloseAlert),
            )
        } else {
            content
        }
    }
}
