use super::*;

fn user(id: i64, username: &str) -> UserRecord {
    UserRecord {
        id,
        username: username.to_string(),
    }
}

#[test]
fn default_state_is_empty() {
    let state = SessionState::default();
    assert!(state.username.is_empty());
    assert!(state.password.is_empty());
    assert!(state.token.is_empty());
    assert!(state.users.is_empty());
    assert!(state.message.is_empty());
    assert_eq!(state.last_applied, None);
}

#[test]
fn register_resolution_sets_only_the_message() {
    let state = SessionState::default().apply(SessionEvent::RegisterResolved {
        action: ActionId(1),
        ok: true,
    });
    assert_eq!(state.message, "User registered!");
    assert!(state.token.is_empty());

    let state = state.apply(SessionEvent::RegisterResolved {
        action: ActionId(2),
        ok: false,
    });
    assert_eq!(state.message, "Registration failed.");
    assert_eq!(state.last_applied, Some(ActionId(2)));
}

#[test]
fn successful_login_stores_token_and_message() {
    let state = SessionState::default().apply(SessionEvent::LoginResolved {
        action: ActionId(1),
        token: Some("abc123".to_string()),
    });
    assert_eq!(state.token, "abc123");
    assert_eq!(state.message, "Logged in!");
}

#[test]
fn failed_login_preserves_existing_token() {
    let mut state = SessionState::default();
    state.token = "earlier-token".to_string();

    let state = state.apply(SessionEvent::LoginResolved {
        action: ActionId(5),
        token: None,
    });
    assert_eq!(state.token, "earlier-token");
    assert_eq!(state.message, "Login failed.");
}

#[test]
fn user_listing_is_replaced_wholesale() {
    let state = SessionState::default().apply(SessionEvent::UsersResolved {
        action: ActionId(1),
        users: vec![user(1, "alice"), user(2, "bob")],
    });
    assert_eq!(state.users, vec![user(1, "alice"), user(2, "bob")]);

    let state = state.apply(SessionEvent::UsersResolved {
        action: ActionId(2),
        users: vec![user(3, "carol")],
    });
    assert_eq!(state.users, vec![user(3, "carol")]);
}

#[test]
fn protected_resolution_overwrites_previous_message() {
    let state = SessionState::default()
        .apply(SessionEvent::LoginResolved {
            action: ActionId(1),
            token: Some("abc".to_string()),
        })
        .apply(SessionEvent::ProtectedResolved {
            action: ActionId(2),
            message: "hello".to_string(),
        });
    assert_eq!(state.message, "hello");
}

#[test]
fn last_resolved_wins_regardless_of_dispatch_order() {
    // Action 1 was triggered before action 2, but its resolution arrives
    // last. The reducer applies events in arrival order, so action 1's
    // token ends up in state.
    let slow = SessionEvent::LoginResolved {
        action: ActionId(1),
        token: Some("token-slow".to_string()),
    };
    let fast = SessionEvent::LoginResolved {
        action: ActionId(2),
        token: Some("token-fast".to_string()),
    };

    let state = SessionState::default().apply(fast.clone()).apply(slow.clone());
    assert_eq!(state.token, "token-slow");
    assert_eq!(state.last_applied, Some(ActionId(1)));

    let state = SessionState::default().apply(slow).apply(fast);
    assert_eq!(state.token, "token-fast");
    assert_eq!(state.last_applied, Some(ActionId(2)));
}

#[test]
fn reducer_is_pure() {
    let event = SessionEvent::UsersResolved {
        action: ActionId(9),
        users: vec![user(1, "alice")],
    };

    // Equal inputs must produce equal outputs.
    let state = SessionState::default();
    let once = state.clone().apply(event.clone());
    let twice = state.apply(event);
    assert_eq!(once, twice);
}
