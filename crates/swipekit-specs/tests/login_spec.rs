//! Login behavioral specs.
//!
//! Each spec opens a fresh fake device sitting on the login screen and
//! drives it through the page objects, exactly as a suite against a live
//! automation server would.

use std::time::Duration;

use swipekit_core::error::AutomationError;
use swipekit_core::pages::{HomePage, LoginOutcome, LoginPage};
use swipekit_specs::{creds, FakeDevice};

const OUTCOME_TIMEOUT: Duration = Duration::from_secs(5);

#[tokio::test]
async fn test_login_page_displayed_on_launch() {
    let device = FakeDevice::android();
    let login = LoginPage::new(device.session().await);

    assert!(login.is_displayed().await);
    assert!(!login.is_error_displayed().await);
}

#[tokio::test]
async fn test_valid_login_reaches_home() {
    let device = FakeDevice::android();
    let session = device.session().await;
    let login = LoginPage::new(session.clone());

    login
        .login(creds::VALID_USERNAME, creds::VALID_PASSWORD)
        .await
        .unwrap();
    let outcome = login.wait_for_outcome(OUTCOME_TIMEOUT).await.unwrap();
    assert_eq!(outcome, LoginOutcome::HomeDisplayed);

    let home = HomePage::new(session);
    assert!(home.is_displayed().await);
    assert!(device.is_on_home());
}

#[tokio::test]
async fn test_invalid_login_shows_error() {
    let device = FakeDevice::android();
    let session = device.session().await;
    let login = LoginPage::new(session);

    login
        .login(creds::INVALID_USERNAME, creds::INVALID_PASSWORD)
        .await
        .unwrap();
    let outcome = login.wait_for_outcome(OUTCOME_TIMEOUT).await.unwrap();
    assert_eq!(outcome, LoginOutcome::ErrorDisplayed);

    assert!(login.is_displayed().await);
    assert_eq!(
        login.error_text().await.unwrap(),
        creds::INVALID_CREDENTIALS_MESSAGE
    );
    assert!(!device.is_on_home());
}

#[tokio::test]
async fn test_invalid_login_shows_error_on_ios() {
    // Same flow on iOS: exercises the per-platform error-message locator.
    let device = FakeDevice::ios();
    let login = LoginPage::new(device.session().await);

    login
        .login(creds::INVALID_USERNAME, creds::INVALID_PASSWORD)
        .await
        .unwrap();
    let outcome = login.wait_for_outcome(OUTCOME_TIMEOUT).await.unwrap();
    assert_eq!(outcome, LoginOutcome::ErrorDisplayed);
}

#[tokio::test]
async fn test_empty_username_keeps_login_page() {
    let device = FakeDevice::android();
    let login = LoginPage::new(device.session().await);

    login.enter_password(creds::VALID_PASSWORD).await.unwrap();
    login.tap_login().await.unwrap();

    assert!(login.is_displayed().await);
    assert!(!device.is_on_home());
}

#[tokio::test]
async fn test_empty_password_keeps_login_page() {
    let device = FakeDevice::android();
    let login = LoginPage::new(device.session().await);

    login.enter_username(creds::VALID_USERNAME).await.unwrap();
    login.tap_login().await.unwrap();

    assert!(login.is_displayed().await);
    assert!(!device.is_on_home());
}

#[tokio::test]
async fn test_fields_accept_input() {
    let device = FakeDevice::android();
    let login = LoginPage::new(device.session().await);

    login.enter_username(creds::VALID_USERNAME).await.unwrap();
    login.enter_password(creds::VALID_PASSWORD).await.unwrap();

    assert_eq!(
        device.entered_username().as_deref(),
        Some(creds::VALID_USERNAME)
    );
    assert_eq!(
        device.entered_password().as_deref(),
        Some(creds::VALID_PASSWORD)
    );
    assert!(login.is_displayed().await);
}

#[tokio::test]
async fn test_login_dismisses_keyboard_before_submitting() {
    let device = FakeDevice::android();
    let login = LoginPage::new(device.session().await);

    login
        .login(creds::VALID_USERNAME, creds::VALID_PASSWORD)
        .await
        .unwrap();

    assert!(!device.keyboard_visible());
}

#[tokio::test]
async fn test_outcome_wait_times_out_without_submission() {
    let device = FakeDevice::android();
    let login = LoginPage::new(device.session().await);

    // Nothing was submitted, so neither marker can ever appear.
    let err = login
        .wait_for_outcome(Duration::from_millis(300))
        .await
        .unwrap_err();
    assert!(matches!(err, AutomationError::Timeout { .. }));
}

#[tokio::test]
async fn test_login_taps_reach_the_driver_in_order() {
    let device = FakeDevice::android();
    let login = LoginPage::new(device.session().await);

    login
        .login(creds::VALID_USERNAME, creds::VALID_PASSWORD)
        .await
        .unwrap();

    assert_eq!(device.taps(), vec!["login-button"]);
}
