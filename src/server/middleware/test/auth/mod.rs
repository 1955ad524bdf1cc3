use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{check, may_act, Action, AuthGuard, Permission},
        session::AuthSession,
    },
    model::user::User,
};
use chrono::Utc;
use test_utils::{builder::TestBuilder, factory};


const ALL_ACTIONS: [Action; 6] = [
    Action::List,
    Action::Retrieve,
    Action::Create,
    Action::Update,
    Action::PartialUpdate,
    Action::Destroy,
];

fn user(id: i32) -> User {
    User {
        id,
        username: format!("user_{}", id),
        date_joined: Utc::now(),
    }
}
