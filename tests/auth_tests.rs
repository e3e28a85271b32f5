mod common;

use common::LandingPage;
use vantage::{AuthTab, BannerPhase, HostEvent, LoginSubmission, RegionId, SignupSubmission};

fn login(email: &str, password: &str) -> HostEvent {
    HostEvent::LoginSubmit(LoginSubmission {
        email: email.into(),
        password: password.into(),
    })
}

#[test]
fn tab_buttons_keep_exactly_one_tab_active() {
    let mut landing = LandingPage::new();
    assert_eq!(landing.page.active_tab(), AuthTab::Login);

    landing.click("signup-tab-btn", 0.0, 0.0);
    assert_eq!(landing.page.active_tab(), AuthTab::Signup);
    {
        let surface = landing.surface.borrow();
        assert!(surface.has_class(&RegionId::new("signup-form"), "active"));
        assert!(!surface.has_class(&RegionId::new("login-form"), "active"));
    }

    landing.click("login-tab-btn", 0.0, 0.0);
    let surface = landing.surface.borrow();
    assert!(surface.has_class(&RegionId::new("login-form"), "active"));
    assert!(!surface.has_class(&RegionId::new("signup-form"), "active"));
}

#[test]
fn successful_login_notifies_then_redirects() {
    let mut landing = LandingPage::new();
    landing.page.handle_event(login("user@example.com", "secret1"));

    assert_eq!(
        landing.notifications.borrow().visible_messages(),
        vec!["Login successful! Redirecting..."]
    );
    assert_eq!(landing.page.take_navigation(), None);

    landing.advance(1999);
    assert_eq!(landing.page.take_navigation(), None);
    landing.advance(1);
    assert_eq!(
        landing.page.take_navigation(),
        Some("http://localhost:8501".to_string())
    );
}

#[test]
fn invalid_login_shows_error_and_stays() {
    let mut landing = LandingPage::new();
    landing.page.handle_event(login("not-an-email", "secret1"));

    assert_eq!(
        landing.notifications.borrow().visible_messages(),
        vec!["Please enter valid credentials"]
    );
    landing.advance(5000);
    assert_eq!(landing.page.take_navigation(), None);
}

#[test]
fn notification_dismisses_after_display_window() {
    let mut landing = LandingPage::new();
    landing.page.handle_event(login("user@example.com", "short"));
    let banner = {
        let sink = landing.notifications.borrow();
        assert_eq!(sink.visible_messages().len(), 1);
        vantage::BannerId(0)
    };

    landing.advance(3000);
    assert_eq!(
        landing.notifications.borrow().phase_of(banner),
        Some(BannerPhase::Dismissing)
    );
    landing.advance(300);
    assert!(landing.notifications.borrow().is_empty());
}

#[test]
fn successful_signup_switches_back_to_login() {
    let mut landing = LandingPage::new();
    landing.click("signup-tab-btn", 0.0, 0.0);

    landing
        .page
        .handle_event(HostEvent::SignupSubmit(SignupSubmission {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            password: "lovelace1".into(),
        }));
    assert_eq!(
        landing.notifications.borrow().visible_messages(),
        vec!["Account created successfully!"]
    );
    assert_eq!(landing.page.active_tab(), AuthTab::Signup);

    landing.advance(1500);
    assert_eq!(landing.page.active_tab(), AuthTab::Login);
}

#[test]
fn incomplete_signup_is_rejected() {
    let mut landing = LandingPage::new();
    landing
        .page
        .handle_event(HostEvent::SignupSubmit(SignupSubmission {
            name: "".into(),
            email: "ada@example.com".into(),
            password: "lovelace1".into(),
        }));

    assert_eq!(
        landing.notifications.borrow().visible_messages(),
        vec!["Please fill in all fields correctly"]
    );
    landing.advance(5000);
    assert_eq!(landing.page.active_tab(), AuthTab::Login);
}

#[test]
fn password_strength_indicator_tracks_input() {
    let mut landing = LandingPage::new();
    let cases = [
        ("abc", 0.0, "Weak"),
        ("abcdef", 20.0, "Weak"),
        ("Abcdef1", 60.0, "Medium"),
        ("Abcdefghij1!", 100.0, "Strong"),
    ];
    for (value, percent, label) in cases {
        landing.page.handle_event(HostEvent::PasswordInput {
            value: value.into(),
        });
        let surface = landing.surface.borrow();
        assert_eq!(
            surface
                .state(&RegionId::new("strength-bar"))
                .unwrap()
                .bar_fill,
            Some(percent),
            "bar for {:?}",
            value
        );
        assert_eq!(
            surface.text_of(&RegionId::new("strength-text")),
            Some(label),
            "label for {:?}",
            value
        );
    }
}
