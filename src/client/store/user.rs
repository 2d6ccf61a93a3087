use crate::model::account::AccountDto;

/// Session user; `fetched` turns true once the account lookup has completed,
/// whether or not anybody is signed in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserState {
    pub user: Option<AccountDto>,
    pub fetched: bool,
}

impl UserState {
    pub fn signed_in(user: AccountDto) -> Self {
        Self {
            user: Some(user),
            fetched: true,
        }
    }

    pub fn signed_out() -> Self {
        Self {
            user: None,
            fetched: true,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().is_some_and(|u| u.admin)
    }
}
