use scribe_common::CurrentUser;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<CurrentUser>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn user(&self) -> Option<&CurrentUser> {
        self.user.as_ref()
    }

    pub fn set_authenticated(&mut self, user: CurrentUser) {
        self.user = Some(user);
    }

    pub fn clear(&mut self) {
        self.user = None;
    }
}
