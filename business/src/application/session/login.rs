use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::cart::use_cases::reconcile::{ReconcileCartParams, ReconcileCartUseCase};
use crate::domain::logger::Logger;
use crate::domain::notifier::{Notice, Notifier};
use crate::domain::session::errors::SessionError;
use crate::domain::session::model::AuthenticatedUser;
use crate::domain::session::store::SessionStore;
use crate::domain::session::use_cases::login::{LoginOutcome, LoginParams, LoginUseCase};
use crate::domain::shared::value_objects::UserId;

pub struct LoginUseCaseImpl {
    pub session: Arc<SessionStore>,
    pub reconcile: Arc<dyn ReconcileCartUseCase>,
    pub notifier: Arc<dyn Notifier>,
    pub logger: Arc<dyn Logger>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[async_trait]
impl LoginUseCase for LoginUseCaseImpl {
    async fn execute(&self, params: LoginParams) -> Result<LoginOutcome, SessionError> {
        let (Some(token), Some(email)) = (non_blank(params.token), non_blank(params.email)) else {
            self.logger.warn("OAuth callback without token or email");
            self.notifier.notify(Notice::error("Google login failed"));
            return Err(SessionError::CallbackIncomplete);
        };

        let was_authenticated = self.session.is_authenticated().await;
        let user = AuthenticatedUser {
            id: non_blank(params.id).map(UserId::from),
            name: params.name,
            email,
            token,
        };
        self.session.sign_in(user.clone()).await;
        self.logger.info(&format!("User {} signed in", user.email));
        self.notifier.notify(Notice::success("Logged in successfully"));

        let reconciled = match (&user.id, was_authenticated) {
            (Some(user_id), false) => self
                .reconcile
                .execute(ReconcileCartParams {
                    user_id: user_id.clone(),
                })
                .await
                .inspect_err(|e| {
                    self.logger
                        .warn(&format!("Sign-in kept despite cart sync failure: {}", e))
                })
                .ok(),
            (None, _) => {
                self.logger
                    .warn("Signed in without a user id, guest cart stays local");
                None
            }
            (Some(_), true) => None,
        };

        Ok(LoginOutcome { user, reconciled })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::errors::CartError;
    use crate::domain::cart::use_cases::reconcile::ReconcileOutcome;
    use crate::domain::errors::BackendError;
    use crate::domain::notifier::NoticeLevel;
    use crate::test_support::{RecordingNotifier, guest_session, mock_logger, signed_in_session};
    use mockall::mock;

    mock! {
        pub Reconcile {}

        #[async_trait]
        impl ReconcileCartUseCase for Reconcile {
            async fn execute(&self, params: ReconcileCartParams) -> Result<ReconcileOutcome, CartError>;
        }
    }

    fn callback(id: Option<&str>) -> LoginParams {
        LoginParams {
            token: Some("oauth-token".to_string()),
            name: Some("Asha".to_string()),
            email: Some("asha@example.com".to_string()),
            id: id.map(str::to_string),
        }
    }

    fn outcome() -> ReconcileOutcome {
        ReconcileOutcome {
            pushed: 1,
            pulled: 1,
            replaced_local: true,
        }
    }

    #[tokio::test]
    async fn should_sign_in_and_reconcile_on_first_login() {
        let mut reconcile = MockReconcile::new();
        reconcile
            .expect_execute()
            .withf(|params| params.user_id.as_str() == "U1")
            .times(1)
            .returning(|_| Ok(outcome()));
        let session = guest_session().await;
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = LoginUseCaseImpl {
            session: session.clone(),
            reconcile: Arc::new(reconcile),
            notifier: notifier.clone(),
            logger: mock_logger(),
        };

        let result = use_case.execute(callback(Some("U1"))).await.unwrap();

        assert_eq!(result.reconciled, Some(outcome()));
        assert_eq!(session.user_id().await, Some(UserId::new("U1")));
        assert_eq!(notifier.messages(), vec!["Logged in successfully".to_string()]);
    }

    #[tokio::test]
    async fn should_not_reconcile_when_already_authenticated() {
        let mut reconcile = MockReconcile::new();
        reconcile.expect_execute().never();
        let use_case = LoginUseCaseImpl {
            session: signed_in_session(Some("U1")).await,
            reconcile: Arc::new(reconcile),
            notifier: Arc::new(RecordingNotifier::default()),
            logger: mock_logger(),
        };

        let result = use_case.execute(callback(Some("U1"))).await.unwrap();

        assert_eq!(result.reconciled, None);
    }

    #[tokio::test]
    async fn should_skip_reconcile_without_user_id() {
        let mut reconcile = MockReconcile::new();
        reconcile.expect_execute().never();
        let session = guest_session().await;
        let use_case = LoginUseCaseImpl {
            session: session.clone(),
            reconcile: Arc::new(reconcile),
            notifier: Arc::new(RecordingNotifier::default()),
            logger: mock_logger(),
        };

        let result = use_case.execute(callback(None)).await.unwrap();

        assert!(session.is_authenticated().await);
        assert_eq!(result.reconciled, None);
    }

    #[tokio::test]
    async fn should_stay_signed_in_when_reconcile_fails() {
        let mut reconcile = MockReconcile::new();
        reconcile
            .expect_execute()
            .returning(|_| Err(CartError::Backend(BackendError::rejected(500))));
        let session = guest_session().await;
        let use_case = LoginUseCaseImpl {
            session: session.clone(),
            reconcile: Arc::new(reconcile),
            notifier: Arc::new(RecordingNotifier::default()),
            logger: mock_logger(),
        };

        let result = use_case.execute(callback(Some("U1"))).await.unwrap();

        assert_eq!(result.reconciled, None);
        assert!(session.is_authenticated().await);
    }

    #[tokio::test]
    async fn should_reject_callback_without_token() {
        let mut reconcile = MockReconcile::new();
        reconcile.expect_execute().never();
        let session = guest_session().await;
        let notifier = Arc::new(RecordingNotifier::default());
        let use_case = LoginUseCaseImpl {
            session: session.clone(),
            reconcile: Arc::new(reconcile),
            notifier: notifier.clone(),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(LoginParams {
                token: None,
                ..callback(Some("U1"))
            })
            .await;

        assert!(matches!(result, Err(SessionError::CallbackIncomplete)));
        assert!(!session.is_authenticated().await);
        let notices = notifier.notices();
        assert_eq!(notices[0].level, NoticeLevel::Error);
        assert_eq!(notices[0].message, "Google login failed");
    }
}
